//! Stateful cursors yielding grapheme cluster boundary indices.

use std::fmt;

use crate::machine::{
    self, LOOKAHEAD_MIN, NO_BREAK, STATE_EOT_NO_BREAK, STATE_EXTEND, STATE_REGIONAL_EVEN,
    STATE_REGIONAL_LOOKAHEAD, STATE_REGIONAL_ODD, STATE_SOT_NO_BREAK, STATE_ZWJ_PICTOGRAPHIC,
    STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD,
};
use crate::tables::{self, Category};
use crate::wtf16::{is_lead_surrogate, is_trail_surrogate};

/// A forward break iterator over a range of UTF-16 code units.
///
/// Repeated [`next_break`](Breaks::next_break) calls yield every boundary in
/// `[cursor, end]` in strictly increasing order, then `None`. Starting from
/// [`STATE_SOT`](crate::STATE_SOT) the boundary at the initial cursor is
/// reported (GB1); starting from [`STATE_SOT_NO_BREAK`](crate::STATE_SOT_NO_BREAK)
/// it is suppressed, which is how a traversal resumes mid-string.
///
/// `clone()` produces an independent cursor with identical state.
#[derive(Clone)]
pub struct Breaks<'a> {
    text: &'a [u16],
    cursor: usize,
    end: usize,
    state: u16,
}

impl<'a> Breaks<'a> {
    /// Creates a forward break iterator over `text[cursor..end]`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor > end` or `end > text.len()`.
    pub fn new(text: &'a [u16], cursor: usize, end: usize, initial_state: u16) -> Self {
        assert!(
            cursor <= end && end <= text.len(),
            "break range {cursor}..{end} out of bounds for {} code units",
            text.len()
        );
        Breaks { text, cursor, end, state: initial_state }
    }

    /// The current code-unit position of the automaton.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current state word.
    #[inline]
    pub fn state(&self) -> u16 {
        self.state
    }

    /// Returns the next boundary index, or `None` when the range is
    /// exhausted.
    pub fn next_break(&mut self) -> Option<usize> {
        while self.cursor < self.end {
            let break_at = self.cursor;
            self.step();
            debug_assert!(self.state < LOOKAHEAD_MIN);
            if self.state & NO_BREAK == 0 {
                return Some(break_at);
            }
        }
        // One terminal transition on EoT; afterwards the state rests at
        // SoTNoBreak, whose EoT column never reports again.
        let state = machine::forward_move(self.state, Category::Eot);
        if state & NO_BREAK == 0 {
            self.state = STATE_SOT_NO_BREAK;
            Some(self.cursor)
        } else {
            None
        }
    }

    fn step(&mut self) {
        let unit = self.text[self.cursor];
        let mut next = self.cursor + 1;
        let category;
        if is_lead_surrogate(unit) && next < self.end && is_trail_surrogate(self.text[next]) {
            category = tables::category_supplementary(unit, self.text[next]);
            next += 1;
        } else {
            // A BMP code point, or an unpaired surrogate (Control).
            category = tables::category_bmp(unit);
        }
        self.state = machine::forward_move(self.state, category);
        self.cursor = next;
    }
}

impl Iterator for Breaks<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.next_break()
    }
}

impl fmt::Debug for Breaks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Breaks")
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .field("state", &self.state)
            .finish()
    }
}

/// A backward break iterator over a range of UTF-16 code units.
///
/// The mirror image of [`Breaks`]: yields every boundary in
/// `[start, cursor]` in strictly decreasing order, then `None`. The
/// backward automaton cannot always decide a boundary from two categories;
/// when it reports a lookahead sentinel, a bounded scan of the regional
/// indicator run or of the pictographic sequence to the left resolves it.
#[derive(Clone)]
pub struct BackBreaks<'a> {
    text: &'a [u16],
    cursor: usize,
    start: usize,
    state: u16,
}

impl<'a> BackBreaks<'a> {
    /// Creates a backward break iterator over `text[start..cursor]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > cursor` or `cursor > text.len()`.
    pub fn new(text: &'a [u16], cursor: usize, start: usize, initial_state: u16) -> Self {
        assert!(
            start <= cursor && cursor <= text.len(),
            "break range {start}..{cursor} out of bounds for {} code units",
            text.len()
        );
        BackBreaks { text, cursor, start, state: initial_state }
    }

    /// The current code-unit position of the automaton.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current state word.
    #[inline]
    pub fn state(&self) -> u16 {
        self.state
    }

    /// Returns the previous boundary index, or `None` when the range is
    /// exhausted.
    pub fn next_break(&mut self) -> Option<usize> {
        while self.cursor > self.start {
            let break_at = self.cursor;
            self.step();
            if self.state >= LOOKAHEAD_MIN {
                self.state = resolve_lookahead(self.state, self.text, self.start, self.cursor);
                debug_assert!(self.state < LOOKAHEAD_MIN);
            }
            if self.state & NO_BREAK == 0 {
                return Some(break_at);
            }
        }
        let state = machine::backward_move(self.state, Category::Eot);
        if state & NO_BREAK == 0 {
            self.state = STATE_EOT_NO_BREAK;
            Some(self.cursor)
        } else {
            None
        }
    }

    fn step(&mut self) {
        let unit = self.text[self.cursor - 1];
        let mut next = self.cursor - 1;
        let category;
        if is_trail_surrogate(unit) && next > self.start && is_lead_surrogate(self.text[next - 1]) {
            next -= 1;
            category = tables::category_supplementary(self.text[next], unit);
        } else {
            category = tables::category_bmp(unit);
        }
        self.state = machine::backward_move(self.state, category);
        self.cursor = next;
    }
}

impl Iterator for BackBreaks<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.next_break()
    }
}

impl fmt::Debug for BackBreaks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackBreaks")
            .field("cursor", &self.cursor)
            .field("start", &self.start)
            .field("state", &self.state)
            .finish()
    }
}

pub(crate) fn resolve_lookahead(state: u16, text: &[u16], start: usize, cursor: usize) -> u16 {
    match state {
        STATE_REGIONAL_LOOKAHEAD => lookahead_regional(text, start, cursor),
        STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD => lookahead_zwj_pictographic(text, start, cursor),
        _ => unreachable!("state {state:#X} in the lookahead band has no lookahead routine"),
    }
}

/// Resolves the pairing of two adjacent Regional Indicators (GB12/GB13).
///
/// `cursor` indexes the first code unit of the earlier RI. Counts the run
/// of Regional Indicators preceding it (all RIs are surrogate pairs, so the
/// scan moves in two-unit strides): an even count means the two observed
/// RIs form a flag.
pub(crate) fn lookahead_regional(text: &[u16], start: usize, cursor: usize) -> u16 {
    let mut i = cursor;
    let mut even = true;
    while i >= start + 2
        && is_lead_surrogate(text[i - 2])
        && is_trail_surrogate(text[i - 1])
        && tables::category_supplementary(text[i - 2], text[i - 1]) == Category::RegionalIndicator
    {
        even = !even;
        i -= 2;
    }
    if even {
        STATE_REGIONAL_EVEN | NO_BREAK
    } else {
        STATE_REGIONAL_ODD
    }
}

/// Resolves a ZWJ directly before a Pictographic (GB11).
///
/// `cursor` indexes the ZWJ. The join holds iff the ZWJ is preceded by a
/// pictographic sequence, `Pictographic (Extend|ZWJ)*`; anything else (or
/// running out of input) leaves the ZWJ an ordinary extending character,
/// with the break before the following Pictographic.
pub(crate) fn lookahead_zwj_pictographic(text: &[u16], start: usize, cursor: usize) -> u16 {
    let mut i = cursor;
    while i > start {
        let unit = text[i - 1];
        let (category, width) =
            if is_trail_surrogate(unit) && i - 1 > start && is_lead_surrogate(text[i - 2]) {
                (tables::category_supplementary(text[i - 2], unit), 2)
            } else {
                (tables::category_bmp(unit), 1)
            };
        match category {
            Category::Pictographic => return STATE_ZWJ_PICTOGRAPHIC | NO_BREAK,
            Category::Extend | Category::Zwj => i -= width,
            _ => break,
        }
    }
    STATE_EXTEND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{STATE_EOT, STATE_SOT};
    use crate::wtf16::push_code_point;

    fn units(code_points: &[u32]) -> Vec<u16> {
        let mut out = Vec::new();
        for &cp in code_points {
            push_code_point(&mut out, cp);
        }
        out
    }

    fn forward_breaks(text: &[u16]) -> Vec<usize> {
        Breaks::new(text, 0, text.len(), STATE_SOT).collect()
    }

    fn backward_breaks(text: &[u16]) -> Vec<usize> {
        let mut all: Vec<usize> =
            BackBreaks::new(text, text.len(), 0, STATE_EOT).collect();
        all.reverse();
        all
    }

    // Conformance-style split vectors: each case lists the code points and
    // the expected boundary set, checked against both automata.
    fn check(code_points: &[u32], expected: &[usize]) {
        let text = units(code_points);
        assert_eq!(forward_breaks(&text), expected, "forward: {code_points:X?}");
        assert_eq!(backward_breaks(&text), expected, "backward: {code_points:X?}");
    }

    #[test]
    fn empty_has_no_breaks() {
        check(&[], &[]);
    }

    #[test]
    fn simple_runs() {
        check(&[0x0041], &[0, 1]);
        check(&[0x0020, 0x0020], &[0, 1, 2]);
        check(&[0x0041, 0x0042, 0x0043], &[0, 1, 2, 3]);
    }

    #[test]
    fn extend_attaches() {
        // A + COMBINING DIAERESIS + B
        check(&[0x0041, 0x0308, 0x0042], &[0, 2, 3]);
        // Multiple marks glue to one base.
        check(&[0x0061, 0x0300, 0x0301, 0x0062], &[0, 3, 4]);
        // A mark with no base is its own cluster.
        check(&[0x0308, 0x0308], &[0, 2]);
    }

    #[test]
    fn controls_break_everywhere() {
        check(&[0x000D, 0x000A, 0x0041], &[0, 2, 3]); // CRLF stays together
        check(&[0x000A, 0x000D], &[0, 1, 2]); // LF CR does not
        check(&[0x0041, 0x0000, 0x0308], &[0, 1, 2, 3]); // no mark attaches to a control
        check(&[0x000D, 0x0308], &[0, 1, 2]);
    }

    #[test]
    fn hangul_syllables() {
        check(&[0x1100, 0x1161, 0x11A8], &[0, 3]); // L V T
        check(&[0xAC00, 0x11A8], &[0, 2]); // LV T
        check(&[0xAC01, 0x11A8], &[0, 2]); // LVT T
        check(&[0x1100, 0x1100], &[0, 2]); // L L
        check(&[0x1100, 0x11A8], &[0, 1, 2]); // L does not join T directly
        check(&[0x11A8, 0x1100], &[0, 1, 2]); // T L breaks
        check(&[0xAC00, 0x1161], &[0, 2]); // LV V joins (GB7)
    }

    #[test]
    fn regional_indicator_pairs() {
        // 🇩🇪🇫🇷: two flags.
        check(&[0x1F1E9, 0x1F1EA, 0x1F1EB, 0x1F1F7], &[0, 4, 8]);
        // Lone RI is one cluster.
        check(&[0x1F1E9], &[0, 2]);
        // Odd run: pair + singleton.
        check(&[0x1F1E6, 0x1F1E6, 0x1F1E6], &[0, 4, 6]);
        // Six in a row: three flags.
        check(
            &[0x1F1E6, 0x1F1E7, 0x1F1E8, 0x1F1E9, 0x1F1EA, 0x1F1EB],
            &[0, 4, 8, 12],
        );
        // A preceding letter does not change the pairing.
        check(&[0x0041, 0x1F1E6, 0x1F1E7], &[0, 1, 5]);
        // An RI pair takes trailing marks.
        check(&[0x1F1E6, 0x1F1E7, 0x0308], &[0, 5]);
    }

    #[test]
    fn zwj_pictographic_sequences() {
        // 👩🏽‍🤝‍👨🏻 (woman + skin tone, ZWJ, handshake, ZWJ, man + skin tone)
        check(
            &[0x1F469, 0x200D, 0x1F3FD, 0x200D, 0x1F91D, 0x200D, 0x1F468, 0x1F3FB],
            &[0, 13],
        );
        // 👩‍🦰
        check(&[0x1F469, 0x200D, 0x1F9B0], &[0, 5]);
        // ZWJ without pictographic context attaches but does not join.
        check(&[0x0061, 0x200D, 0x1F6D1], &[0, 2, 4]);
        // Pictographic + skin tone modifier is one cluster.
        check(&[0x1F44D, 0x1F3FD], &[0, 4]);
        // Two bare pictographics break.
        check(&[0x1F6D1, 0x1F6D1], &[0, 2, 4]);
        // Joiners and extends inside the pictographic sequence keep GB11
        // alive.
        check(&[0x1F6D1, 0x200D, 0x0308, 0x200D, 0x1F6D1], &[0, 7]);
        check(&[0x1F6D1, 0xFE0F, 0x200D, 0x1F6D1], &[0, 6]);
        // A sequence headed by a non-pictographic never joins.
        check(&[0x0061, 0x0308, 0x200D, 0x1F6D1], &[0, 3, 5]);
    }

    #[test]
    fn prepend_and_spacing_marks() {
        check(&[0x0600, 0x0661], &[0, 2]); // Prepend joins forward
        check(&[0x0600], &[0, 1]);
        check(&[0x0600, 0x000D], &[0, 1, 2]); // but not to a control
        check(&[0x0915, 0x093E], &[0, 2]); // SpacingMark attaches
        check(&[0x0E19, 0x0E33], &[0, 2]); // Thai SARA AM
    }

    #[test]
    fn unpaired_surrogates_are_control() {
        let lead_then_letter = [0xD800, 0x0041];
        assert_eq!(forward_breaks(&lead_then_letter), &[0, 1, 2]);
        assert_eq!(backward_breaks(&lead_then_letter), &[0, 1, 2]);

        let letter_then_trail = [0x0041, 0xDC00];
        assert_eq!(forward_breaks(&letter_then_trail), &[0, 1, 2]);
        assert_eq!(backward_breaks(&letter_then_trail), &[0, 1, 2]);

        // Trail before lead never fuses.
        let reversed_pair = [0xDE00, 0xD83D];
        assert_eq!(forward_breaks(&reversed_pair), &[0, 1, 2]);
        assert_eq!(backward_breaks(&reversed_pair), &[0, 1, 2]);

        // A mark cannot attach to an unpaired surrogate.
        let with_mark = [0xD800, 0x0308];
        assert_eq!(forward_breaks(&with_mark), &[0, 1, 2]);
        assert_eq!(backward_breaks(&with_mark), &[0, 1, 2]);
    }

    #[test]
    fn boundaries_never_split_surrogate_pairs() {
        let text = units(&[0x1F600, 0x1F1E6, 0x1F1E7, 0x0041, 0x1F469]);
        for b in forward_breaks(&text) {
            if b < text.len() {
                assert!(
                    !(is_trail_surrogate(text[b]) && b > 0 && is_lead_surrogate(text[b - 1])),
                    "boundary {b} splits a surrogate pair"
                );
            }
        }
    }

    #[test]
    fn sot_no_break_suppresses_leading_boundary() {
        let text = units(&[0x0061, 0x0062]);
        let mut breaks = Breaks::new(&text, 0, text.len(), STATE_SOT_NO_BREAK);
        assert_eq!(breaks.next_break(), Some(1));
        assert_eq!(breaks.next_break(), Some(2));
        assert_eq!(breaks.next_break(), None);
        assert_eq!(breaks.next_break(), None);
    }

    #[test]
    fn eot_no_break_suppresses_trailing_boundary() {
        let text = units(&[0x0061, 0x0062]);
        let mut breaks = BackBreaks::new(&text, text.len(), 0, STATE_EOT_NO_BREAK);
        assert_eq!(breaks.next_break(), Some(1));
        assert_eq!(breaks.next_break(), Some(0));
        assert_eq!(breaks.next_break(), None);
        assert_eq!(breaks.next_break(), None);
    }

    #[test]
    fn clone_is_an_independent_cursor() {
        let text = units(&[0x0041, 0x0308, 0x0042]);
        let mut a = Breaks::new(&text, 0, text.len(), STATE_SOT);
        assert_eq!(a.next_break(), Some(0));
        let mut b = a.clone();
        assert_eq!(a.next_break(), Some(2));
        assert_eq!(b.next_break(), Some(2));
        assert_eq!(a.next_break(), Some(3));
        assert_eq!(b.next_break(), Some(3));
    }

    #[test]
    fn forward_and_backward_agree_on_mixed_text() {
        let samples: &[&[u32]] = &[
            &[0x0041, 0x0308, 0x0042, 0x000D, 0x000A, 0x1F1E9, 0x1F1EA, 0x1F1EB],
            &[0x1F469, 0x200D, 0x1F469, 0x200D, 0x1F467, 0x0041],
            &[0x1100, 0x1161, 0x11A8, 0xAC00, 0x0301, 0x0062],
            &[0x0600, 0x0661, 0x0662, 0x200D, 0x1F6D1],
            &[0x1F1E6, 0x1F1E6, 0x1F1E6, 0x1F1E6, 0x1F1E6],
        ];
        for cps in samples {
            let text = units(cps);
            assert_eq!(
                forward_breaks(&text),
                backward_breaks(&text),
                "mismatch for {cps:X?}"
            );
        }
    }
}
