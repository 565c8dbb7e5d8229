pub mod chart;
pub mod scoreboard;
pub mod summary;
pub mod template;
pub mod types;
pub mod utils;

pub use chart::*;
pub use scoreboard::*;
pub use summary::*;
pub use template::*;
pub use types::*;
pub use utils::*;
