#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)] // Cursor and counter increments are bounded by input lengths
#![allow(clippy::indexing_slicing)] // Bounds checked by loop conditions

//! # sidediff - side-by-side line diff
//!
//! sidediff compares two text documents line by line and lays the result out
//! as pairs of left/right lines, each tagged as kept, removed or added. The
//! result can be shown in the terminal, written as a standalone HTML page,
//! or exported as JSON.
//!
//! ## Architecture
//!
//! - [`diff`]: LCS engine and alignment of both documents into diff records
//! - [`render`]: HTML, terminal and JSON output of a comparison
//! - [`document`]: loading and decoding input files
//! - [`config`]: TOML configuration
//! - [`commands`]: CLI command implementations
//! - [`output`]: user-facing status messages
//!
//! ## Example Usage
//!
//! ```
//! use sidediff::{CompareRequest, DiffKind, document::Document};
//!
//! let request = CompareRequest::new(
//!     Document::new("old.txt", "a\nb\nc"),
//!     Document::new("new.txt", "a\nc"),
//! );
//! let comparison = request.compare();
//!
//! assert!(comparison.has_differences());
//! assert_eq!(comparison.records[1].kind, DiffKind::RemovedOnly);
//! ```

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Command implementations.
pub mod commands;

/// Configuration parsing and validation.
pub mod config;

/// Line diff engine (LCS and alignment).
pub mod diff;

/// Input documents and file decoding.
pub mod document;

/// Output formatting and status messages.
pub mod output;

/// Rendering of comparisons to HTML, terminal and JSON.
pub mod render;

pub use diff::{DiffKind, DiffRecord, DiffSummary};

use document::Document;
use serde::Serialize;
use tracing::{Level, info, span};

/// Current version of the sidediff binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed to compare two documents.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    /// Left (original) document
    pub left: Document,
    /// Right (changed) document
    pub right: Document,
    /// LCS table size above which a warning is logged
    pub warn_cells: usize,
}

impl CompareRequest {
    /// Creates a request with the default size warning threshold.
    #[must_use]
    pub fn new(left: Document, right: Document) -> Self {
        Self {
            left,
            right,
            warn_cells: diff::DEFAULT_WARN_CELLS,
        }
    }

    /// Sets the LCS table size above which a warning is logged.
    #[must_use]
    pub fn with_warn_cells(mut self, warn_cells: usize) -> Self {
        self.warn_cells = warn_cells;
        self
    }

    /// Runs the comparison.
    #[must_use]
    pub fn compare(&self) -> Comparison {
        let span = span!(
            Level::DEBUG,
            "compare",
            left = %self.left.label,
            right = %self.right.label
        );
        let _guard = span.enter();

        let records =
            diff::diff_texts_with_limit(&self.left.content, &self.right.content, self.warn_cells);
        let summary = DiffSummary::from_records(&records);

        info!(
            kept = summary.kept,
            removed = summary.removed,
            added = summary.added,
            "Comparison complete"
        );

        Comparison {
            left_label: self.left.label.clone(),
            right_label: self.right.label.clone(),
            summary,
            records,
        }
    }
}

/// Result of comparing two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Label of the left document
    pub left_label: String,
    /// Label of the right document
    pub right_label: String,
    /// Record counts per kind
    pub summary: DiffSummary,
    /// Rows in display order
    pub records: Vec<DiffRecord>,
}

impl Comparison {
    /// True when at least one line was removed or added.
    #[must_use]
    pub const fn has_differences(&self) -> bool {
        self.summary.has_differences()
    }
}
