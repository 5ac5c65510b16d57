// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use pascal_domain::{Strategy, options::OutputFormat};
use pascal_shared_kernel::RowCount;

/// What a single invocation computes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print the first `rows` rows of the triangle.
    #[default]
    Triangle,
    /// Print `n!` for a value given as text.
    Factorial(String),
    /// Print the single coefficient `C(n, k)`.
    Entry { n: i64, k: i64 },
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub mode: Mode,
    #[builder(default)]
    pub rows: RowCount,
    #[builder(default)]
    pub strategy: Strategy,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output: Option<PathBuf>,
}
