//! Local boundary queries: "is there a cluster boundary at index `i`?"

use crate::breaks::{resolve_lookahead, Breaks};
use crate::machine::{self, LOOKAHEAD_MIN, NO_BREAK, STATE_EOT_NO_BREAK, STATE_SOT};
use crate::tables;
use crate::wtf16::{is_lead_surrogate, is_trail_surrogate};

fn check_range(len: usize, start: usize, end: usize, index: usize) {
    assert!(
        start <= index && index <= end && end <= len,
        "index {index} outside the range {start}..{end} of {len} code units"
    );
}

/// Reports whether a grapheme cluster boundary exists at `index` within
/// `text[start..end]`.
///
/// `start` and `end` are boundaries of any non-empty range; an index inside
/// a surrogate pair never is. Interior indices are decided by feeding the
/// code points on either side to the backward automaton, with a bounded
/// lookahead when they alone cannot decide (an RI pair, or a ZWJ before a
/// pictographic). The query reads a small local window only.
///
/// # Panics
///
/// Panics unless `start <= index <= end <= text.len()`.
pub fn is_grapheme_cluster_boundary(text: &[u16], start: usize, end: usize, index: usize) -> bool {
    check_range(text.len(), start, end, index);
    if index == start || index == end {
        return start != end;
    }
    if is_trail_surrogate(text[index]) && is_lead_surrogate(text[index - 1]) {
        return false;
    }

    let after = text[index];
    let category_after =
        if is_lead_surrogate(after) && index + 1 < end && is_trail_surrogate(text[index + 1]) {
            tables::category_supplementary(after, text[index + 1])
        } else {
            tables::category_bmp(after)
        };

    let before = text[index - 1];
    let (category_before, width_before) =
        if is_trail_surrogate(before) && index >= start + 2 && is_lead_surrogate(text[index - 2]) {
            (tables::category_supplementary(text[index - 2], before), 2)
        } else {
            (tables::category_bmp(before), 1)
        };

    let state = machine::backward_move(STATE_EOT_NO_BREAK, category_after);
    let mut state = machine::backward_move(state, category_before);
    if state >= LOOKAHEAD_MIN {
        state = resolve_lookahead(state, text, start, index - width_before);
    }
    state & NO_BREAK == 0
}

/// Returns the nearest boundary of `text[start..end]` at or after `from`,
/// or `None` if the range is empty.
///
/// Works locally from `from`; the string is never re-scanned from `start`.
///
/// # Panics
///
/// Panics unless `start <= from <= end <= text.len()`.
pub fn next_break(text: &[u16], start: usize, end: usize, from: usize) -> Option<usize> {
    check_range(text.len(), start, end, from);
    (from..=end).find(|&i| is_grapheme_cluster_boundary(text, start, end, i))
}

/// Returns the nearest boundary of `text[start..end]` at or before `from`,
/// or `None` if the range is empty.
///
/// # Panics
///
/// Panics unless `start <= from <= end <= text.len()`.
pub fn previous_break(text: &[u16], start: usize, end: usize, from: usize) -> Option<usize> {
    check_range(text.len(), start, end, from);
    (start..=from)
        .rev()
        .find(|&i| is_grapheme_cluster_boundary(text, start, end, i))
}

/// Returns a lazy iterator over every boundary index of `text[start..end]`
/// in increasing order, including `start` and `end` unless the range is
/// empty.
///
/// # Panics
///
/// Panics unless `start <= end <= text.len()`.
pub fn grapheme_cluster_boundaries(text: &[u16], start: usize, end: usize) -> Breaks<'_> {
    Breaks::new(text, start, end, STATE_SOT)
}
