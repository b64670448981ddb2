use crate::cli::CompareArgs;
use crate::config::{ColorChoice, Config};
use crate::document::Document;
use crate::render::terminal::FALLBACK_WIDTH;
use crate::render::{HtmlOptions, OutputFormat, TerminalOptions};
use crate::{CompareRequest, Comparison, output, render};
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, span};

/// Output path meaning "standard output".
const STDOUT_PATH: &str = "-";

/// Build the comparison request for the two files named in `args`.
///
/// # Errors
///
/// Returns an error if either file cannot be read or decoded as UTF-8 text.
pub fn load_request(args: &CompareArgs, config: &Config) -> Result<CompareRequest> {
    let mut left = Document::from_path(&args.left)?;
    let mut right = Document::from_path(&args.right)?;

    if let Some(label) = &args.left_label {
        left.label.clone_from(label);
    }
    if let Some(label) = &args.right_label {
        right.label.clone_from(label);
    }

    Ok(CompareRequest::new(left, right).with_warn_cells(config.limits.warn_cells))
}

/// Execute the compare command
///
/// Returns `true` when the files differ.
///
/// # Errors
///
/// Returns an error if:
/// - Either input cannot be read, is binary, or is not UTF-8
/// - The output file cannot be created or written
pub fn execute(args: &CompareArgs, config: &Config, color: ColorChoice) -> Result<bool> {
    let span = span!(
        Level::DEBUG,
        "compare_command",
        left = %args.left.display(),
        right = %args.right.display(),
        format = ?args.format
    );
    let _guard = span.enter();

    let request = load_request(args, config)?;
    output::verbose(&format!(
        "Comparing {} ({} bytes) with {} ({} bytes)",
        request.left.label,
        request.left.content.len(),
        request.right.label,
        request.right.content.len()
    ));

    let comparison = request.compare();

    match args.format {
        OutputFormat::Terminal => {
            write_terminal(&comparison, args.output.as_deref(), config, color)?;
        }
        OutputFormat::Html => {
            let path = html_output_path(args, config);
            write_html_report(&comparison, &path, args.title.as_deref(), config)?;
        }
        OutputFormat::Json => {
            with_output(args.output.as_deref(), |writer| {
                render::write_json(&comparison, writer)
            })?;
        }
    }

    Ok(comparison.has_differences())
}

fn write_terminal(
    comparison: &Comparison,
    path: Option<&Path>,
    config: &Config,
    color: ColorChoice,
) -> Result<()> {
    let to_stdout = path.is_none_or(|p| p.as_os_str() == STDOUT_PATH);
    let options = TerminalOptions {
        width: resolve_width(config.terminal.width),
        colorize: to_stdout && color.enabled(io::stdout().is_terminal()),
    };
    debug!(width = options.width, colorize = options.colorize, "Terminal options");

    with_output(path, |writer| {
        render::write_side_by_side(comparison, &options, writer)
    })
}

fn write_html_report(
    comparison: &Comparison,
    path: &Path,
    title: Option<&str>,
    config: &Config,
) -> Result<()> {
    let options = HtmlOptions {
        title: title.map_or_else(|| config.render.title.clone(), str::to_string),
        generated_at: Local::now(),
        timestamp_format: config.render.timestamp_format.clone(),
    };

    with_output(Some(path), |writer| {
        render::write_html(comparison, &options, writer)
    })?;

    if !comparison.has_differences() {
        output::info("No differences");
    }
    if path.as_os_str() != STDOUT_PATH {
        output::action("Wrote", &path.display().to_string());
    }
    Ok(())
}

/// Terminal width to lay out in: the configured width, else the detected
/// one, else [`FALLBACK_WIDTH`].
fn resolve_width(configured: usize) -> usize {
    if configured != 0 {
        return configured;
    }
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .ok()
        .filter(|&columns| columns > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Runs `write` against the file at `path`, or stdout when `path` is `None`
/// or `-`.
fn with_output<F>(path: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match path {
        Some(path) if path.as_os_str() != STDOUT_PATH => {
            ensure_parent(path)?;
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {}", path.display()))
        }
        _ => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            lock.flush()?;
            Ok(())
        }
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Path the HTML report is written to for the given arguments.
#[must_use]
pub fn html_output_path(args: &CompareArgs, config: &Config) -> PathBuf {
    args.output
        .clone()
        .unwrap_or_else(|| config.render.output_file.clone())
}
