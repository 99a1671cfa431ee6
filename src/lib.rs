pub mod config;
pub mod date_utils;
pub mod error;
pub mod format;
pub mod models;
pub mod serde_utils;
pub mod services;
pub mod store;

/// Crate version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
