// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliOutputFormat, CliStrategy};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "pascal_triangle",
    version = crate::VERSION,
    about = "Prints rows of Pascal's Triangle",
    group(
        clap::ArgGroup::new("mode")
            .args(&["factorial", "entry"])
            .multiple(false)
    )
)]
pub struct Args {
    /// Number of rows to print
    #[arg(default_value_t = 5, value_name = "ROWS")]
    pub rows: u64,

    /// How each row is computed
    #[arg(long, value_enum, default_value = "factorial", help_heading = "Computation")]
    pub strategy: CliStrategy,

    /// Print n! for VALUE instead of the triangle
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true, help_heading = "Computation")]
    pub factorial: Option<String>,

    /// Print the single coefficient C(N, K) instead of the triangle
    #[arg(
        long,
        num_args = 2,
        value_names = ["N", "K"],
        allow_negative_numbers = true,
        help_heading = "Computation"
    )]
    pub entry: Option<Vec<i64>>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: CliOutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
