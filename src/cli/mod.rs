// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliOutputFormat, CliStrategy};

use pascal_shared_kernel::{PresentationError, Result, RowCount};

use crate::config::{Config, ConfigBuilder, Mode};

fn validate_at_least_one(flag: &str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

fn make_mode(args: &Args) -> Result<Mode> {
    if let Some(value) = &args.factorial {
        return Ok(Mode::Factorial(value.clone()));
    }
    match args.entry.as_deref() {
        None => Ok(Mode::Triangle),
        Some(&[n, k]) => Ok(Mode::Entry { n, k }),
        Some(other) => Err(PresentationError::InvalidValue {
            flag: "--entry".to_string(),
            value: format!("{other:?}"),
            reason: "expects exactly two integers N K".to_string(),
        }
        .into()),
    }
}

/// Convert parsed CLI arguments into a configuration.
///
/// # Errors
///
/// Returns `Err` when `ROWS` is zero, when `--entry` is malformed, or when
/// the builder rejects the options.
pub fn build_config(args: &Args) -> Result<Config> {
    let mode = make_mode(args)?;
    if mode == Mode::Triangle {
        validate_at_least_one("ROWS", args.rows)?;
    }

    let config = ConfigBuilder::default()
        .mode(mode)
        .rows(RowCount::new(args.rows))
        .strategy(args.strategy)
        .format(args.format)
        .output(args.output.clone())
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;
    Ok(config)
}
