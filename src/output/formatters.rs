// src/output/formatters.rs
use std::io::Write;

use num_bigint::BigUint;
use pascal_domain::{Row, RowSource, options::OutputFormat, print_centered_triangle, triangle_rows};
use pascal_shared_kernel::{Result, RowCount, RowIndex};
use serde::Serialize;

/// One triangle row as serialized. Values are decimal strings so that
/// arbitrarily large coefficients survive every format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowRecord {
    pub row: RowIndex,
    pub values: Vec<String>,
}

impl From<Row> for RowRecord {
    fn from(row: Row) -> Self {
        Self {
            row: row.index,
            values: row.entries.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Serialize)]
struct FactorialRecord<'a> {
    input: &'a str,
    factorial: String,
}

#[derive(Serialize)]
struct EntryRecord {
    n: i64,
    k: i64,
    value: String,
}

/// Writes the triangle in `format`.
///
/// The text layout streams entry by entry; structured formats collect every
/// row first.
///
/// # Errors
///
/// Propagates row source, serializer and writer errors.
pub fn write_triangle(
    out: &mut impl Write,
    format: OutputFormat,
    rows: RowCount,
    source: &mut dyn RowSource,
) -> Result<()> {
    if format == OutputFormat::Text {
        return print_centered_triangle(out, rows, source);
    }

    let records: Vec<RowRecord> =
        triangle_rows(rows, source)?.into_iter().map(RowRecord::from).collect();

    match format {
        OutputFormat::Jsonl => {
            for record in &records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
            Ok(())
        }
        _ => write_structured(out, format, &records),
    }
}

/// # Errors
///
/// Propagates serializer and writer errors.
pub fn write_factorial(
    out: &mut impl Write,
    format: OutputFormat,
    input: &str,
    value: &BigUint,
) -> Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{value}")?;
        return Ok(());
    }
    let record = FactorialRecord { input, factorial: value.to_string() };
    write_structured(out, format, &record)
}

/// # Errors
///
/// Propagates serializer and writer errors.
pub fn write_entry(
    out: &mut impl Write,
    format: OutputFormat,
    (n, k): (i64, i64),
    value: &BigUint,
) -> Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{value}")?;
        return Ok(());
    }
    let record = EntryRecord { n, k, value: value.to_string() };
    write_structured(out, format, &record)
}

fn write_structured<T: Serialize + ?Sized>(
    out: &mut impl Write,
    format: OutputFormat,
    value: &T,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            serde_json::to_writer(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, value)?,
        OutputFormat::Text => unreachable!("text output is written by the callers"),
    }
    Ok(())
}
