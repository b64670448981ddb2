use crate::Comparison;
use anyhow::{Context, Result};
use std::io::Write;

/// Write a comparison as pretty-printed JSON.
///
/// The document holds both labels, the per-kind summary, a
/// `has_differences` flag and the records in display order.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(comparison: &Comparison, writer: &mut dyn Write) -> Result<()> {
    let value = serde_json::json!({
        "left_label": comparison.left_label,
        "right_label": comparison.right_label,
        "has_differences": comparison.has_differences(),
        "summary": comparison.summary,
        "records": comparison.records,
    });
    serde_json::to_writer_pretty(&mut *writer, &value).context("Failed to write JSON output")?;
    writeln!(writer)?;
    Ok(())
}
