// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use pascal_triangle::cli::{Args, build_config};
use pascal_triangle::logging;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let config = build_config(args)?;
    pascal_triangle::run(&config)?;
    Ok(())
}
