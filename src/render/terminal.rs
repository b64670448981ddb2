use crate::Comparison;
use crate::diff::{DiffKind, DiffRecord};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use tracing::{Level, debug, span};
use unicode_width::UnicodeWidthStr;

/// Width used when the terminal size cannot be detected.
pub const FALLBACK_WIDTH: usize = 120;

/// Width of a line number column.
const NUMBER_WIDTH: usize = 5;

/// Columns taken by line numbers, markers and the separator:
/// number, space, marker, space on each side plus " | " between them.
const CHROME: usize = 2 * (NUMBER_WIDTH + 3) + 3;

/// Narrowest total width the side-by-side layout is drawn at. Leaves eight
/// content columns per side.
pub const MIN_WIDTH: usize = CHROME + 2 * 8;

/// Configuration for side-by-side terminal output
pub struct TerminalOptions {
    /// Total line width to lay both columns out in
    pub width: usize,
    /// Whether to colorize the output
    pub colorize: bool,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            colorize: false,
        }
    }
}

/// Fit a line into a fixed-width cell. Tabs expand to four spaces and other
/// control characters are shown escaped; the result is cut or padded to
/// exactly `width` display columns, so double-width characters count twice.
fn fit(content: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in content.chars() {
        let piece: std::borrow::Cow<'_, str> = match ch {
            '\t' => "    ".into(),
            '\r' => "\\r".into(),
            c if c.is_control() => c.escape_default().to_string().into(),
            c => c.to_string().into(),
        };
        let len = piece.width();
        if used + len > width {
            break;
        }
        out.push_str(&piece);
        used += len;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Renders one side of a row: line number, marker and content.
fn side(line: Option<usize>, marker: char, content: &str, width: usize) -> String {
    match line {
        Some(n) => format!("{n:>NUMBER_WIDTH$} {marker} {}", fit(content, width)),
        None => format!("{:>NUMBER_WIDTH$}   {}", "", fit("", width)),
    }
}

/// Formats one record as a side-by-side line.
fn format_row(record: &DiffRecord, column: usize, colorize: bool) -> String {
    let marker = record.kind.marker();
    let left = side(record.left_line, marker, &record.left_content, column);
    let right = side(record.right_line, marker, &record.right_content, column);

    if !colorize {
        return format!("{left} | {right}").trim_end().to_string();
    }

    let separator = "|".dimmed();
    match record.kind {
        DiffKind::Kept => format!("{} {separator} {}", left.normal(), right.trim_end().normal()),
        DiffKind::RemovedOnly => format!("{} {separator} {}", left.red(), right.trim_end()),
        DiffKind::AddedOnly => format!("{left} {separator} {}", right.trim_end().green()),
    }
}

/// Write a comparison as two columns, left document on the left.
///
/// Identical documents print a single "No differences" line instead of the
/// table.
///
/// # Errors
///
/// Returns an error if writing to the output writer fails.
pub fn write_side_by_side(
    comparison: &Comparison,
    options: &TerminalOptions,
    writer: &mut dyn Write,
) -> Result<()> {
    let span = span!(
        Level::DEBUG,
        "render_terminal",
        rows = comparison.records.len(),
        width = options.width
    );
    let _guard = span.enter();

    if !comparison.has_differences() {
        let message = format!(
            "No differences between {} and {}",
            comparison.left_label, comparison.right_label
        );
        if options.colorize {
            writeln!(writer, "{}", message.green())?;
        } else {
            writeln!(writer, "{message}")?;
        }
        return Ok(());
    }

    let column = (options.width.max(MIN_WIDTH) - CHROME) / 2;

    let header = format!(
        "{:>NUMBER_WIDTH$}   {} | {:>NUMBER_WIDTH$}   {}",
        "",
        fit(&comparison.left_label, column),
        "",
        fit(&comparison.right_label, column)
    );
    let header = header.trim_end();
    if options.colorize {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    for record in &comparison.records {
        writeln!(writer, "{}", format_row(record, column, options.colorize))?;
    }

    let summary = comparison.summary.to_string();
    if options.colorize {
        writeln!(writer, "{}", summary.dimmed())?;
    } else {
        writeln!(writer, "{summary}")?;
    }

    debug!(column, "Side-by-side output written");
    Ok(())
}
