pub mod app;
pub mod args;
pub mod config;
pub mod logger;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
