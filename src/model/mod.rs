pub mod round;
pub mod tournament;
pub mod types;
pub mod utils;

pub use round::*;
pub use tournament::*;
pub use types::*;
pub use utils::*;
