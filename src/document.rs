use anyhow::{Context, Result};
use content_inspector::{ContentType, inspect};
use std::path::Path;
use tracing::{Level, debug, span};

/// Number of leading bytes inspected for binary detection.
const BINARY_PROBE_LEN: usize = 8192;

/// Byte order mark some editors put at the start of UTF-8 files.
const UTF8_BOM: char = '\u{FEFF}';

/// A decoded text document and the label it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Name displayed in column headers (usually the file name)
    pub label: String,
    /// Full document text
    pub content: String,
}

impl Document {
    /// Creates a document from text already in memory.
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }

    /// Reads a text file, labelling it with its file name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, looks binary, or is not
    /// valid UTF-8.
    pub fn from_path(path: &Path) -> Result<Self> {
        let span = span!(Level::DEBUG, "load_document", path = %path.display());
        let _guard = span.enter();

        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

        let label = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

        Self::from_bytes(label, &bytes).with_context(|| format!("Cannot compare {}", path.display()))
    }

    /// Decodes raw bytes as a UTF-8 text document. A leading byte order mark
    /// is dropped and does not become part of the first line.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes look binary or are not valid UTF-8.
    pub fn from_bytes(label: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        if is_binary(bytes) {
            anyhow::bail!("Binary content is not supported");
        }

        let content = simdutf8::basic::from_utf8(bytes)
            .map_err(|e| anyhow::anyhow!("Content is not valid UTF-8: {e}"))?;
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        debug!(bytes = bytes.len(), "Document decoded");
        Ok(Self::new(label, content))
    }
}

/// Check whether content is binary by inspecting its first 8KB.
///
/// Empty content is text.
#[must_use]
pub fn is_binary(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }
    let probe = &bytes[..bytes.len().min(BINARY_PROBE_LEN)];
    matches!(inspect(probe), ContentType::BINARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_text_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "This is a text file")?;
        writeln!(file, "With multiple lines")?;

        let doc = Document::from_path(file.path())?;
        assert_eq!(doc.content, "This is a text file\nWith multiple lines\n");

        let expected_label = file
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        assert_eq!(Some(doc.label), expected_label);

        Ok(())
    }

    #[test]
    fn test_binary_file_rejected() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&[0xFF, 0x00, 0xAA, 0xBB, 0xCC, 0xDD])?;

        let err = Document::from_path(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Binary content"));

        Ok(())
    }

    #[test]
    fn test_leading_bom_stripped() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"\xEF\xBB\xBFfirst\nsecond\n")?;

        let with_bom = Document::from_path(file.path())?;
        assert_eq!(with_bom.content, "first\nsecond\n");

        let without_bom = Document::from_bytes("plain.txt", b"first\nsecond\n")?;
        let comparison = crate::CompareRequest::new(with_bom, without_bom).compare();
        assert!(!comparison.has_differences());

        Ok(())
    }

    #[test]
    fn test_only_leading_bom_stripped() -> Result<()> {
        let doc = Document::from_bytes("inner.txt", "a\u{FEFF}b".as_bytes())?;
        assert_eq!(doc.content, "a\u{FEFF}b");
        Ok(())
    }

    #[test]
    fn test_empty_file_is_text() -> Result<()> {
        let file = NamedTempFile::new()?;

        let doc = Document::from_path(file.path())?;
        assert_eq!(doc.content, "");

        Ok(())
    }

    #[test]
    fn test_utf8_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "Hello 世界 🌍")?;

        let doc = Document::from_path(file.path())?;
        assert!(doc.content.contains("世界"));

        Ok(())
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        // Latin-1 "café", no NUL bytes so it is not classified as binary
        let err = Document::from_bytes("latin1", b"caf\xe9\n").unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_missing_file() {
        let err = Document::from_path(Path::new("/nonexistent/sidediff/input.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
