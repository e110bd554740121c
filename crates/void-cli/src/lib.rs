pub mod commands;
pub mod config;
pub mod context;
pub mod helpers;
pub mod ui;
pub mod workspace;

pub use context::Context;

pub const APP_NAME: &str = "void";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
