//! A bidirectional, resumable iterator over grapheme clusters.

use std::fmt;

use crate::breaks::{BackBreaks, Breaks};
use crate::machine::{STATE_EOT_NO_BREAK, STATE_SOT_NO_BREAK};
use crate::wtf16::{self, CodePoints};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Direction {
    Forward,
    Backward,
}

/// A cursor over the grapheme clusters of a UTF-16 string.
///
/// The cursor designates the current cluster as a `[start, end)` code-unit
/// range, empty before the first [`move_next`](Self::move_next). Along with
/// the range it keeps the running automaton state, the direction of the
/// last movement, and the small distance (0–2 code units) between the
/// automaton's cursor and the range edge: the forward automaton discovers a
/// boundary only after consuming one code point of the *next* cluster, and
/// the stored delta lets the next movement resume without re-reading it.
/// Moving in the same direction is therefore O(1) per step; reversing
/// direction restarts the automaton at the range edge.
///
/// `clone()` yields an independent cursor with identical position and
/// state.
#[derive(Clone)]
pub struct ClusterCursor<'a> {
    text: &'a [u16],
    start: usize,
    end: usize,
    state: u16,
    delta: usize,
    direction: Direction,
}

impl<'a> ClusterCursor<'a> {
    /// Creates a cursor collapsed before the first cluster of `text`.
    pub fn new(text: &'a [u16]) -> Self {
        ClusterCursor {
            text,
            start: 0,
            end: 0,
            state: STATE_SOT_NO_BREAK,
            delta: 0,
            direction: Direction::Forward,
        }
    }

    /// The start of the current cluster, in code units.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end of the current cluster, in code units.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The current cluster's code units; empty when the cursor is
    /// collapsed.
    #[inline]
    pub fn cluster(&self) -> &'a [u16] {
        &self.text[self.start..self.end]
    }

    /// The current cluster's code units.
    #[inline]
    pub fn code_units(&self) -> &'a [u16] {
        self.cluster()
    }

    /// The current cluster's code points. Unpaired surrogates appear as
    /// their own code point values.
    pub fn runes(&self) -> CodePoints<'a> {
        CodePoints::new(self.cluster())
    }

    /// Advances to the next cluster. Returns `false` (and collapses the
    /// range at the end of text) when there is none.
    pub fn move_next(&mut self) -> bool {
        let (cursor, state) = if self.direction == Direction::Forward {
            (self.end + self.delta, self.state)
        } else {
            (self.end, STATE_SOT_NO_BREAK)
        };
        let mut breaks = Breaks::new(self.text, cursor, self.text.len(), state);
        self.direction = Direction::Forward;
        match breaks.next_break() {
            Some(next) => {
                self.start = self.end;
                self.end = next;
                self.delta = breaks.cursor() - next;
                self.state = breaks.state();
                true
            }
            None => {
                self.start = self.end;
                self.delta = 0;
                self.state = STATE_SOT_NO_BREAK;
                false
            }
        }
    }

    /// Moves to the previous cluster. Returns `false` (and collapses the
    /// range at the start of text) when there is none.
    pub fn move_prev(&mut self) -> bool {
        let (cursor, state) = if self.direction == Direction::Backward {
            (self.start - self.delta, self.state)
        } else {
            (self.start, STATE_EOT_NO_BREAK)
        };
        let mut breaks = BackBreaks::new(self.text, cursor, 0, state);
        self.direction = Direction::Backward;
        match breaks.next_break() {
            Some(previous) => {
                self.end = self.start;
                self.start = previous;
                self.delta = previous - breaks.cursor();
                self.state = breaks.state();
                true
            }
            None => {
                self.end = self.start;
                self.delta = 0;
                self.state = STATE_EOT_NO_BREAK;
                false
            }
        }
    }

    /// Collapses the range at code-unit index `index`, facing forward.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn reset(&mut self, index: usize) {
        assert!(
            index <= self.text.len(),
            "code-unit index {index} out of bounds for {} units",
            self.text.len()
        );
        self.start = index;
        self.end = index;
        self.state = STATE_SOT_NO_BREAK;
        self.delta = 0;
        self.direction = Direction::Forward;
    }

    /// Collapses the range before the first cluster.
    pub fn reset_start(&mut self) {
        self.reset(0);
    }

    /// Collapses the range after the last cluster, facing backward.
    pub fn reset_end(&mut self) {
        self.start = self.text.len();
        self.end = self.text.len();
        self.state = STATE_EOT_NO_BREAK;
        self.delta = 0;
        self.direction = Direction::Backward;
    }
}

impl fmt::Debug for ClusterCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterCursor")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("cluster", &wtf16::to_string_lossy(self.cluster()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clusters::GraphemeClusters;

    fn collect_forward(cursor: &mut ClusterCursor<'_>) -> Vec<String> {
        let mut out = Vec::new();
        while cursor.move_next() {
            out.push(wtf16::to_string_lossy(cursor.cluster()));
        }
        out
    }

    #[test]
    fn walks_forward_and_collapses_at_end() {
        let text = GraphemeClusters::from_string("a\u{0308}b🇩🇪");
        let mut cursor = text.cursor();
        assert_eq!(cursor.cluster(), &[]);
        assert_eq!(collect_forward(&mut cursor), ["a\u{0308}", "b", "🇩🇪"]);
        assert_eq!(cursor.start(), cursor.end());
        assert_eq!(cursor.end(), text.len_units());
        assert!(!cursor.move_next());
    }

    #[test]
    fn walks_backward_from_the_end() {
        let text = GraphemeClusters::from_string("a\u{0308}b🇩🇪");
        let mut cursor = text.cursor();
        cursor.reset_end();
        let mut out = Vec::new();
        while cursor.move_prev() {
            out.push(wtf16::to_string_lossy(cursor.cluster()));
        }
        out.reverse();
        assert_eq!(out, ["a\u{0308}", "b", "🇩🇪"]);
        assert!(!cursor.move_prev());
        assert_eq!((cursor.start(), cursor.end()), (0, 0));
    }

    #[test]
    fn bidirectionality_property() {
        for s in ["", "abc", "🇩🇪🇫🇷🇯🇵", "a\u{0308}\r\n각 👩‍👩‍👧‍👦x"] {
            let text = GraphemeClusters::from_string(s);
            let mut forward = text.cursor();
            let collected = collect_forward(&mut forward);
            let mut backward = text.cursor();
            backward.reset_end();
            let mut reversed = Vec::new();
            while backward.move_prev() {
                reversed.push(wtf16::to_string_lossy(backward.cluster()));
            }
            reversed.reverse();
            assert_eq!(collected, reversed, "for {s:?}");
        }
    }

    #[test]
    fn resumability_property() {
        // After k+1 forward moves, one backward move lands on cluster k-1
        // with the same range direct iteration produces.
        for s in ["abc", "🇩🇪🇫🇷🇯🇵", "a\u{0308}b\u{0301}c", "👩‍👩‍👧x각"] {
            let text = GraphemeClusters::from_string(s);
            let ranges: Vec<(usize, usize)> = {
                let mut cursor = text.cursor();
                let mut out = Vec::new();
                while cursor.move_next() {
                    out.push((cursor.start(), cursor.end()));
                }
                out
            };
            for k in 1..ranges.len() {
                let mut cursor = text.cursor();
                for _ in 0..=k {
                    assert!(cursor.move_next());
                }
                assert!(cursor.move_prev());
                assert_eq!(
                    (cursor.start(), cursor.end()),
                    ranges[k - 1],
                    "cluster {k} of {s:?}"
                );
            }
        }
    }

    #[test]
    fn direction_flips_both_ways() {
        let text = GraphemeClusters::from_string("a🇩🇪b");
        let mut cursor = text.cursor();
        assert!(cursor.move_next()); // a
        assert!(cursor.move_next()); // 🇩🇪
        assert!(cursor.move_prev()); // a again
        assert_eq!(cursor.cluster(), &[0x0061]);
        assert!(cursor.move_next()); // 🇩🇪 again
        assert_eq!(cursor.cluster(), GraphemeClusters::from_string("🇩🇪").units());
        assert!(cursor.move_next()); // b
        assert_eq!(cursor.cluster(), &[0x0062]);
        assert!(!cursor.move_next());
        // From the collapsed end range, the previous cluster is "b".
        assert!(cursor.move_prev());
        assert_eq!(cursor.cluster(), &[0x0062]);
    }

    #[test]
    fn reset_positions_the_cursor() {
        let text = GraphemeClusters::from_string("a\u{0308}b");
        let mut cursor = text.cursor();
        cursor.reset(2);
        assert!(cursor.move_next());
        assert_eq!(cursor.cluster(), &[0x0062]);
        cursor.reset_start();
        assert!(cursor.move_next());
        assert_eq!(wtf16::to_string_lossy(cursor.cluster()), "a\u{0308}");
    }

    #[test]
    fn clone_is_independent() {
        let text = GraphemeClusters::from_string("abc");
        let mut a = text.cursor();
        assert!(a.move_next());
        let mut b = a.clone();
        assert!(a.move_next());
        assert_eq!(a.cluster(), &[0x0062]);
        assert_eq!(b.cluster(), &[0x0061]);
        assert!(b.move_next());
        assert_eq!(b.cluster(), &[0x0062]);
    }

    #[test]
    fn runes_view_of_the_current_cluster() {
        let text = GraphemeClusters::from_string("🇩🇪x");
        let mut cursor = text.cursor();
        assert!(cursor.move_next());
        let runes: Vec<u32> = cursor.runes().collect();
        assert_eq!(runes, [0x1F1E9, 0x1F1EA]);
        assert_eq!(cursor.code_units(), &[0xD83C, 0xDDE9, 0xD83C, 0xDDEA]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn reset_past_the_end_panics() {
        let text = GraphemeClusters::from_string("ab");
        text.cursor().reset(3);
    }
}
