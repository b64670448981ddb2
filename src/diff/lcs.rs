use serde::Serialize;
use tracing::{Level, debug, span, warn};

/// Default number of DP cells above which a comparison is logged as expensive.
pub const DEFAULT_WARN_CELLS: usize = 25_000_000;

/// A pair of 0-based line indices aligned by the longest common subsequence.
///
/// `left` indexes the left line sequence, `right` the right one, and the two
/// lines are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineMatch {
    /// Index into the left line sequence
    pub left: usize,
    /// Index into the right line sequence
    pub right: usize,
}

impl LineMatch {
    /// Creates a match between `left[left]` and `right[right]`.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }
}

/// Row-major `(m+1) x (n+1)` table of LCS lengths over line prefixes.
struct LcsTable {
    /// Row stride, `n + 1`
    width: usize,
    /// LCS length of `left[..i]` and `right[..j]` at `i * width + j`
    cells: Vec<u32>,
}

impl LcsTable {
    fn build(left: &[&str], right: &[&str]) -> Self {
        let width = right.len() + 1;
        let mut cells = vec![0u32; (left.len() + 1) * width];

        for i in 1..=left.len() {
            for j in 1..=right.len() {
                cells[i * width + j] = if left[i - 1] == right[j - 1] {
                    cells[(i - 1) * width + (j - 1)] + 1
                } else {
                    cells[(i - 1) * width + j].max(cells[i * width + (j - 1)])
                };
            }
        }

        Self { width, cells }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.width + j]
    }
}

/// Compute the longest common subsequence of two line sequences.
///
/// Lines are compared by exact string equality. The returned matches are
/// sorted ascending on both indices.
///
/// When several common subsequences have the maximum length, the left line
/// is treated as unmatched before the right one: walking back from the end
/// of both sequences, a left line is skipped whenever the rest of the
/// alignment can do without it. For `["a", "a"]` against `["a"]` this pairs
/// the first `a` on the left with the right `a`.
///
/// Runs in O(m·n) time and memory; the table is dropped before returning.
#[must_use]
pub fn compute_lcs(left: &[&str], right: &[&str]) -> Vec<LineMatch> {
    compute_lcs_with_limit(left, right, DEFAULT_WARN_CELLS)
}

/// Same as [`compute_lcs`], logging a warning when the DP table has more
/// than `warn_cells` cells.
#[must_use]
pub fn compute_lcs_with_limit(
    left: &[&str],
    right: &[&str],
    warn_cells: usize,
) -> Vec<LineMatch> {
    let span = span!(
        Level::DEBUG,
        "lcs",
        left_lines = left.len(),
        right_lines = right.len()
    );
    let _guard = span.enter();

    let cells = (left.len() + 1).saturating_mul(right.len() + 1);
    if cells > warn_cells {
        warn!(
            cells,
            limit = warn_cells,
            "Large comparison, LCS table grows quadratically with input size"
        );
    }

    let table = LcsTable::build(left, right);

    let mut matches = Vec::with_capacity(table.get(left.len(), right.len()) as usize);
    let (mut i, mut j) = (left.len(), right.len());
    while i > 0 && j > 0 {
        let here = table.get(i, j);
        if table.get(i - 1, j) == here {
            i -= 1;
        } else if left[i - 1] == right[j - 1] {
            matches.push(LineMatch::new(i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else {
            j -= 1;
        }
    }
    matches.reverse();

    debug!(matched = matches.len(), "LCS computed");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(matches: &[LineMatch]) -> Vec<(usize, usize)> {
        matches.iter().map(|m| (m.left, m.right)).collect()
    }

    #[test]
    fn test_identical_sequences_match_diagonally() {
        let lines = ["a", "b", "c"];
        let matches = compute_lcs(&lines, &lines);
        assert_eq!(pairs(&matches), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compute_lcs(&[], &[]).is_empty());
        assert!(compute_lcs(&["a"], &[]).is_empty());
        assert!(compute_lcs(&[], &["a"]).is_empty());
    }

    #[test]
    fn test_deleted_middle_line() {
        let matches = compute_lcs(&["a", "b", "c"], &["a", "c"]);
        assert_eq!(pairs(&matches), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_duplicate_line_prefers_earliest_left() {
        let matches = compute_lcs(&["a", "a"], &["a"]);
        assert_eq!(pairs(&matches), vec![(0, 0)]);
    }

    #[test]
    fn test_crossed_lines_tie_break_drops_left_first() {
        // Both "a" and "b" are maximal; stepping back over the left "b"
        // leaves "a" to be matched.
        let matches = compute_lcs(&["a", "b"], &["b", "a"]);
        assert_eq!(pairs(&matches), vec![(0, 1)]);
    }

    #[test]
    fn test_no_normalization() {
        assert!(compute_lcs(&["a\r"], &["a"]).is_empty());
        assert!(compute_lcs(&["a "], &["a"]).is_empty());
        assert!(compute_lcs(&["A"], &["a"]).is_empty());
    }

    #[test]
    fn test_matches_strictly_increasing() {
        let left = ["x", "a", "b", "x", "c", "a", "b"];
        let right = ["a", "x", "b", "c", "x", "a"];
        let matches = compute_lcs(&left, &right);

        for window in matches.windows(2) {
            assert!(window[0].left < window[1].left);
            assert!(window[0].right < window[1].right);
        }
        for m in &matches {
            assert_eq!(left[m.left], right[m.right]);
        }
    }

    #[test]
    fn test_length_is_maximal() {
        // x a b x c a b  vs  a x b c x a : LCS length is 4 (e.g. a b c a)
        let left = ["x", "a", "b", "x", "c", "a", "b"];
        let right = ["a", "x", "b", "c", "x", "a"];
        assert_eq!(compute_lcs(&left, &right).len(), 4);
    }

    #[test]
    fn test_limit_does_not_change_result() {
        let left = ["a", "b", "c"];
        let right = ["b", "c", "d"];
        assert_eq!(
            compute_lcs_with_limit(&left, &right, 0),
            compute_lcs(&left, &right)
        );
    }
}
