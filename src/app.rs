// src/app.rs
use std::io::Write;

use pascal_domain::{factorial_of, generate_row};
use pascal_shared_kernel::{ErrorContext, Result};

use crate::config::{Config, Mode};
use crate::output::{self, OutputWriter};

/// Executes one invocation described by `config`.
///
/// # Errors
///
/// Returns domain errors (`InvalidInput`, `NegativeInput`) and any failure to
/// create, write or flush the output.
pub fn run(config: &Config) -> Result<()> {
    let mut out = OutputWriter::create(config)?;
    run_to(&mut out, config)?;
    out.flush().context("flushing output")
}

/// Same as [`run`] but writes into `out`, ignoring `config.output`.
///
/// # Errors
///
/// See [`run`].
pub fn run_to(out: &mut impl Write, config: &Config) -> Result<()> {
    match &config.mode {
        Mode::Triangle => {
            let mut source = config.strategy.source();
            log::info!(
                "rows={} strategy={} format={:?}",
                config.rows,
                source.name(),
                config.format
            );
            output::write_triangle(out, config.format, config.rows, source.as_mut())
        }
        Mode::Factorial(input) => {
            log::info!("factorial of {input:?}");
            let value = factorial_of(input)?;
            output::write_factorial(out, config.format, input, &value)
        }
        Mode::Entry { n, k } => {
            log::info!("entry C({n}, {k})");
            let value = generate_row(*n, *k).with_context(|| format!("C({n}, {k})"))?;
            output::write_entry(out, config.format, (*n, *k), &value)
        }
    }
}
