//! Presentation of a [`Comparison`](crate::Comparison).
//!
//! - [`html`]: standalone HTML report with a side-by-side table
//! - [`terminal`]: two-column colored output
//! - [`json`]: machine-readable records

/// HTML escaping of line content and labels
pub mod escape;
/// Standalone HTML document
pub mod html;
/// JSON export
pub mod json;
/// Side-by-side terminal output
pub mod terminal;

pub use escape::escape_html;
pub use html::{HtmlOptions, render_html, write_html};
pub use json::write_json;
pub use terminal::{TerminalOptions, write_side_by_side};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format of the compare command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Side-by-side table on stdout
    #[default]
    Terminal,
    /// Standalone HTML page
    Html,
    /// JSON records
    Json,
}
