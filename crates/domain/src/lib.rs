#![allow(clippy::multiple_crate_versions)]

pub mod binomial;
pub mod factorial;
pub mod options;
pub mod row;
pub mod triangle;

pub use binomial::generate_row;
pub use factorial::{factorial, factorial_of, factorial_u64};
pub use options::Strategy;
pub use row::{AdditiveRows, FactorialRows, RowSource};
pub use triangle::{Row, print_centered_triangle, render_triangle, triangle_rows};
