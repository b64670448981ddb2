use super::Config;
use crate::render::terminal::MIN_WIDTH;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::Path;

/// Read and validate a configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not UTF-8, is not valid
/// TOML for [`Config`], or fails validation.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let content = simdutf8::basic::from_utf8(&bytes)
        .map_err(|e| anyhow::anyhow!("Invalid UTF-8 in config file: {e}"))?;

    parse_config_str(content)
}

/// Parse and validate configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or a value fails validation.
pub fn parse_config_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).context("Failed to parse TOML config")?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.render.title.trim().is_empty() {
        anyhow::bail!("render.title must not be empty");
    }

    let format = &config.render.timestamp_format;
    if format.is_empty() {
        anyhow::bail!("render.timestamp_format must not be empty");
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("render.timestamp_format is not a valid strftime format: {format:?}");
    }

    if config.render.output_file.as_os_str().is_empty() {
        anyhow::bail!("render.output_file must not be empty");
    }

    if config.terminal.width != 0 && config.terminal.width < MIN_WIDTH {
        anyhow::bail!("terminal.width must be 0 (auto) or at least {MIN_WIDTH}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorChoice;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let config = parse_config_str(
            r#"
[terminal]
color = "always"
width = 100
"#,
        )?;

        assert_eq!(config.terminal.color, ColorChoice::Always);
        assert_eq!(config.terminal.width, 100);
        assert_eq!(config.render, Config::default().render);
        Ok(())
    }

    #[test]
    fn test_empty_config() -> Result<()> {
        assert_eq!(parse_config_str("")?, Config::default());
        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config_str("[render]\ncolour = \"red\"\n").is_err());
        assert!(parse_config_str("[pager]\nenabled = true\n").is_err());
    }

    #[test]
    fn test_validation_errors() {
        let err = parse_config_str("[terminal]\nwidth = 5\n").unwrap_err();
        assert!(err.to_string().contains("terminal.width"));

        let err = parse_config_str("[render]\ntitle = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("render.title"));

        let err = parse_config_str("[render]\ntimestamp_format = \"%Q\"\n").unwrap_err();
        assert!(err.to_string().contains("timestamp_format"));
    }

    #[test]
    fn test_parse_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[render]")?;
        writeln!(file, "title = \"Nightly config diff\"")?;
        writeln!(file, "output_file = \"out/report.html\"")?;
        writeln!(file, "[limits]")?;
        writeln!(file, "warn_cells = 1000")?;

        let config = parse_config_file(file.path())?;
        assert_eq!(config.render.title, "Nightly config diff");
        assert_eq!(config.render.output_file, Path::new("out/report.html"));
        assert_eq!(config.limits.warn_cells, 1000);
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"[render]\ntitle = \"\xff\"\n")?;

        let err = parse_config_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
        Ok(())
    }
}
