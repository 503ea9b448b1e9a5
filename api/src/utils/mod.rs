pub mod config;
pub mod constants;
pub mod extractors;
pub mod logger;
pub mod pagination;
pub mod validator;

mod router_ext;

pub use self::router_ext::*;
