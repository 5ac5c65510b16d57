// src/output.rs
mod formatters;
mod writer;

pub use formatters::{RowRecord, write_entry, write_factorial, write_triangle};
pub use writer::OutputWriter;
