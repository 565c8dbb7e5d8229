pub mod data_service;
pub mod http_handlers;
pub mod request;
pub mod score_aggregators;

pub use data_service::*;
pub use http_handlers::*;
pub use request::*;
pub use score_aggregators::*;
