// src/logging.rs
//! Diagnostic logging to stderr.
//!
//! Library crates emit records through the `log` facade; the subscriber
//! installed here also forwards those records.

use tracing::Level;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Maps the `-v` count onto a level: warn, info, debug, then trace.
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber. `RUST_LOG`, when set, wins over `-v`.
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            EnvFilter::default().add_directive(LevelFilter::from_level(level_for(verbosity)).into())
        });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
