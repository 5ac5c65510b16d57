// crates/domain/src/triangle.rs
use std::io::Write;

use num_bigint::BigUint;
use pascal_shared_kernel::{DomainResult, ErrorContext, Result, RowCount, RowIndex};

use crate::row::RowSource;

/// A fully computed triangle row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: RowIndex,
    pub entries: Vec<BigUint>,
}

/// Writes `rows` rows of the triangle.
///
/// Row `n` is preceded by `rows - n` spaces and every value is followed by a
/// single space. Entries are written as soon as they are produced, so a
/// failing row leaves whatever was already written in `out`.
///
/// # Errors
///
/// Propagates the first error from the row source or the writer.
pub fn print_centered_triangle<W: Write + ?Sized>(
    out: &mut W,
    rows: RowCount,
    source: &mut dyn RowSource,
) -> Result<()> {
    log::debug!("printing {rows} rows with the {} source", source.name());
    for index in rows.indices() {
        let indent = usize::try_from(rows.indent_for(index)).unwrap_or(usize::MAX);
        write!(out, "{:indent$}", "")?;
        for entry in source.entries(index) {
            let value = entry.with_context(|| format!("row {index}"))?;
            write!(out, "{value} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Text layout of the triangle as a `String`.
///
/// # Errors
///
/// Propagates errors from the row source.
pub fn render_triangle(rows: RowCount, source: &mut dyn RowSource) -> Result<String> {
    let mut buf = Vec::new();
    print_centered_triangle(&mut buf, rows, source)?;
    // Only ASCII digits and spaces are ever written.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Materialises `rows` rows for structured output.
///
/// # Errors
///
/// Returns the first error produced by the row source.
pub fn triangle_rows(rows: RowCount, source: &mut dyn RowSource) -> DomainResult<Vec<Row>> {
    rows.indices()
        .map(|index| Ok(Row { index, entries: source.row(index)? }))
        .collect()
}
