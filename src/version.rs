// src/version.rs
//! Defines the version string for the application.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
