use super::escape::escape_html;
use crate::Comparison;
use crate::diff::{DiffKind, DiffRecord};
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::io::Write;
use tracing::{Level, debug, span};

/// Default page title.
pub const DEFAULT_TITLE: &str = "Text File Diff Result";

/// Default chrono format of the generation timestamp.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Message shown when the documents are identical.
pub const NO_DIFFERENCES: &str = "No differences";

/// Inline stylesheet; one background class per record kind.
const STYLE: &str = r"td,th {word-break: break-all; font-size: 12pt;}
tr {vertical-align: top;}
.border {border-radius: 6px; border: 1px #a0a0a0 solid; box-shadow: 1px 1px 2px rgba(0, 0, 0, 0.15); overflow: hidden;}
.ln {text-align: right; word-break: normal; background-color: lightgrey; box-shadow: inset 1px 0px 0px rgba(0, 0, 0, 0.10); min-width: 40px;}
.title {color: white; background-color: blue; vertical-align: top; padding: 4px 4px; background: linear-gradient(mediumblue, darkblue);}
.line-normal {color: #000000; background-color: #ffffff;}
.line-added {color: #000000; background-color: #c8f7c5;}
.line-removed {color: #000000; background-color: #ffb3ba;}
.no-diff {padding: 8px; font-weight: bold; color: #333333; background-color: #f0f0f0;}
.summary {color: #555555;}";

/// Settings for the standalone HTML report.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Page title and heading
    pub title: String,
    /// Time printed as the generation timestamp
    pub generated_at: DateTime<Local>,
    /// chrono format string for `generated_at`
    pub timestamp_format: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            generated_at: Local::now(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// CSS class for a row of the given kind.
const fn row_class(kind: DiffKind) -> &'static str {
    match kind {
        DiffKind::Kept => "line-normal",
        DiffKind::RemovedOnly => "line-removed",
        DiffKind::AddedOnly => "line-added",
    }
}

/// Renders one table row; absent line numbers leave the number cell empty.
fn push_row(html: &mut String, record: &DiffRecord) {
    let class = row_class(record.kind);
    let cell = |content: &str| {
        if content.is_empty() {
            "&nbsp;".to_string()
        } else {
            escape_html(content)
        }
    };
    let number = |line: Option<usize>| line.map(|n| n.to_string()).unwrap_or_default();

    let _ = write!(
        html,
        "\n<tr>\n<td class=\"ln\">{}</td>\n<td class=\"{class}\"><code>{}</code></td>\n<td class=\"ln\">{}</td>\n<td class=\"{class}\"><code>{}</code></td>\n</tr>",
        number(record.left_line),
        cell(&record.left_content),
        number(record.right_line),
        cell(&record.right_content),
    );
}

/// Render a comparison as a self-contained HTML document.
///
/// The page carries the title, the generation timestamp, one column header
/// per document label and one table row per record. When nothing was
/// removed or added a "No differences" banner precedes the table.
#[must_use]
pub fn render_html(comparison: &Comparison, options: &HtmlOptions) -> String {
    let span = span!(Level::DEBUG, "render_html", rows = comparison.records.len());
    let _guard = span.enter();

    let title = escape_html(&options.title);
    let timestamp = escape_html(&format_timestamp(options));

    let mut html = String::with_capacity(2048 + comparison.records.len() * 160);
    let _ = write!(
        html,
        "<!DOCTYPE html>
<html>
<head>
<meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\">
<title>{title}</title>
<style type=\"text/css\">
{STYLE}
</style>
</head>
<body>
<h2>{title}</h2>
<p>Generated: {timestamp}</p>
<p class=\"summary\">{summary}</p>",
        summary = escape_html(&comparison.summary.to_string()),
    );

    if !comparison.has_differences() {
        let _ = write!(html, "\n<div class=\"no-diff\">{NO_DIFFERENCES}</div>");
    }

    let _ = write!(
        html,
        "
<div class=\"border\">
<table cellspacing=\"0\" cellpadding=\"0\" style=\"width: 100%; margin: 0; border: none;\">
<thead>
<tr>
<th class=\"title\" style=\"width:1%\"></th>
<th class=\"title\" style=\"width:49%\">{}</th>
<th class=\"title\" style=\"width:1%\"></th>
<th class=\"title\" style=\"width:49%\">{}</th>
</tr>
</thead>
<tbody>",
        escape_html(&comparison.left_label),
        escape_html(&comparison.right_label),
    );

    for record in &comparison.records {
        push_row(&mut html, record);
    }

    html.push_str("\n</tbody>\n</table>\n</div>\n</body>\n</html>\n");

    debug!(bytes = html.len(), "HTML rendered");
    html
}

/// Render a comparison as HTML into `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_html(
    comparison: &Comparison,
    options: &HtmlOptions,
    writer: &mut dyn Write,
) -> Result<()> {
    writer.write_all(render_html(comparison, options).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Formats the generation time, falling back to the default format when the
/// configured one does not parse.
fn format_timestamp(options: &HtmlOptions) -> String {
    let mut formatted = String::new();
    if write!(
        formatted,
        "{}",
        options.generated_at.format(&options.timestamp_format)
    )
    .is_err()
    {
        formatted.clear();
        let _ = write!(
            formatted,
            "{}",
            options.generated_at.format(DEFAULT_TIMESTAMP_FORMAT)
        );
    }
    formatted
}
