//! Line-level comparison of two text documents.
//!
//! The comparison runs in two steps:
//! - [`compute_lcs`] finds the longest common subsequence of lines
//! - [`build_diff`] turns it into an ordered list of [`DiffRecord`]s that
//!   covers every line of both inputs
//!
//! Both steps are pure functions over borrowed line slices.

/// Alignment of both line sequences against the LCS
pub mod align;
/// Longest common subsequence over line sequences
pub mod lcs;
/// Diff record types and summaries
pub mod record;

pub use align::build_diff;
pub use lcs::{DEFAULT_WARN_CELLS, LineMatch, compute_lcs, compute_lcs_with_limit};
pub use record::{DiffKind, DiffRecord, DiffSummary, has_differences};

/// Split a document into lines on `\n`.
///
/// Carriage returns stay part of the line content, and an empty document is
/// a single empty line. A trailing newline yields a trailing empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Diff two documents line by line.
#[must_use]
pub fn diff_texts(left: &str, right: &str) -> Vec<DiffRecord> {
    diff_texts_with_limit(left, right, DEFAULT_WARN_CELLS)
}

/// Diff two documents, warning when the LCS table exceeds `warn_cells`.
#[must_use]
pub fn diff_texts_with_limit(left: &str, right: &str, warn_cells: usize) -> Vec<DiffRecord> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);
    let matches = compute_lcs_with_limit(&left_lines, &right_lines, warn_cells);
    build_diff(&left_lines, &right_lines, &matches)
}
