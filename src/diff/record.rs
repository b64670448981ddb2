use serde::Serialize;
use std::fmt;

/// How a line pair relates the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Line present on both sides
    Kept,
    /// Line present only in the left document
    RemovedOnly,
    /// Line present only in the right document
    AddedOnly,
}

impl DiffKind {
    /// Returns true for the kinds that represent a change.
    #[must_use]
    pub const fn is_change(self) -> bool {
        matches!(self, Self::RemovedOnly | Self::AddedOnly)
    }

    /// Marker used in plain-text output (`' '`, `'-'` or `'+'`).
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Kept => ' ',
            Self::RemovedOnly => '-',
            Self::AddedOnly => '+',
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Kept => "kept",
            Self::RemovedOnly => "removed",
            Self::AddedOnly => "added",
        };
        f.write_str(name)
    }
}

/// One row of a side-by-side diff.
///
/// Line numbers are 1-based. A side that does not take part in the row has
/// no line number and empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRecord {
    /// Relationship of the row to the two documents
    pub kind: DiffKind,
    /// Line number in the left document (Kept and `RemovedOnly` rows)
    pub left_line: Option<usize>,
    /// Line number in the right document (Kept and `AddedOnly` rows)
    pub right_line: Option<usize>,
    /// Left line text, empty for `AddedOnly` rows
    pub left_content: String,
    /// Right line text, empty for `RemovedOnly` rows
    pub right_content: String,
}

impl DiffRecord {
    /// A line common to both sides.
    #[must_use]
    pub fn kept(left_line: usize, right_line: usize, left: &str, right: &str) -> Self {
        Self {
            kind: DiffKind::Kept,
            left_line: Some(left_line),
            right_line: Some(right_line),
            left_content: left.to_string(),
            right_content: right.to_string(),
        }
    }

    /// A line that only exists on the left.
    #[must_use]
    pub fn removed(left_line: usize, content: &str) -> Self {
        Self {
            kind: DiffKind::RemovedOnly,
            left_line: Some(left_line),
            right_line: None,
            left_content: content.to_string(),
            right_content: String::new(),
        }
    }

    /// A line that only exists on the right.
    #[must_use]
    pub fn added(right_line: usize, content: &str) -> Self {
        Self {
            kind: DiffKind::AddedOnly,
            left_line: None,
            right_line: Some(right_line),
            left_content: String::new(),
            right_content: content.to_string(),
        }
    }
}

/// Per-kind record counts for one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Number of Kept records
    pub kept: usize,
    /// Number of `RemovedOnly` records
    pub removed: usize,
    /// Number of `AddedOnly` records
    pub added: usize,
}

impl DiffSummary {
    /// Tallies a record list.
    #[must_use]
    pub fn from_records(records: &[DiffRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            match record.kind {
                DiffKind::Kept => acc.kept += 1,
                DiffKind::RemovedOnly => acc.removed += 1,
                DiffKind::AddedOnly => acc.added += 1,
            }
            acc
        })
    }

    /// True when at least one line was removed or added.
    #[must_use]
    pub const fn has_differences(&self) -> bool {
        self.removed > 0 || self.added > 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unchanged, {} removed, {} added",
            self.kept, self.removed, self.added
        )
    }
}

/// Returns true if any record is a removal or an addition.
#[must_use]
pub fn has_differences(records: &[DiffRecord]) -> bool {
    records.iter().any(|record| record.kind.is_change())
}
