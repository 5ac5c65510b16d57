// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod version;

pub use app::run;
pub use config::{Config, ConfigBuilder, Mode};
pub use pascal_domain::options::OutputFormat;
pub use pascal_domain::{
    AdditiveRows, FactorialRows, Row, RowSource, Strategy, factorial, factorial_of,
    factorial_u64, generate_row, print_centered_triangle, render_triangle, triangle_rows,
};
pub use pascal_shared_kernel::{DomainError, PascalError, Result, RowCount, RowIndex};
pub use version::VERSION;
