use super::lcs::LineMatch;
use super::record::DiffRecord;
use tracing::{Level, debug, span};

/// Walk both line sequences alongside the LCS and emit one record per line.
///
/// A match at the current cursors produces a Kept record. Otherwise left
/// lines before the next match are emitted as removals, and only once the
/// left cursor has reached the match are the right lines before it emitted
/// as additions. Every gap therefore lists all of its removals before any
/// of its additions.
///
/// `matches` must be sorted ascending on both indices and only pair equal
/// lines, as returned by [`compute_lcs`](super::compute_lcs).
#[must_use]
pub fn build_diff(left: &[&str], right: &[&str], matches: &[LineMatch]) -> Vec<DiffRecord> {
    let span = span!(
        Level::DEBUG,
        "align",
        left_lines = left.len(),
        right_lines = right.len(),
        matches = matches.len()
    );
    let _guard = span.enter();

    let capacity = (left.len() + right.len()).saturating_sub(matches.len());
    let mut records = Vec::with_capacity(capacity);
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() || j < right.len() {
        let next = matches.get(k);

        let at_match = next.is_some_and(|m| m.left == i && m.right == j);

        if at_match && i < left.len() && j < right.len() {
            records.push(DiffRecord::kept(i + 1, j + 1, left[i], right[j]));
            i += 1;
            j += 1;
            k += 1;
        } else if i < left.len() && next.is_none_or(|m| i < m.left) {
            records.push(DiffRecord::removed(i + 1, left[i]));
            i += 1;
        } else if j < right.len() && next.is_none_or(|m| j < m.right) {
            records.push(DiffRecord::added(j + 1, right[j]));
            j += 1;
        } else {
            // Only reachable with a match list that is out of order or out of
            // range; stop rather than spin.
            debug!(i, j, k, "Match list inconsistent with inputs");
            break;
        }
    }

    debug!(records = records.len(), "Alignment complete");
    records
}
