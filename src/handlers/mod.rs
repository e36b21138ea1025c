pub mod health;
pub mod proxy;

pub use health::health_handler;
pub use proxy::{method_not_allowed, missing_path, proxy_handler};
