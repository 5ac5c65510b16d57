// crates/shared-kernel/src/value_objects/mod.rs
pub mod rows;

pub use rows::{RowCount, RowIndex};
