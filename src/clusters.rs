//! The cluster sequence view: an immutable sequence of grapheme cluster
//! substrings over a UTF-16 string, with boundary-aware search, slicing and
//! substitution.

use std::borrow::Cow;
use std::fmt;
use std::hash;
use std::ops::Add;

use thiserror::Error;

use crate::boundary::{self, is_grapheme_cluster_boundary};
use crate::breaks::{BackBreaks, Breaks};
use crate::cursor::ClusterCursor;
use crate::machine::{STATE_EOT_NO_BREAK, STATE_SOT_NO_BREAK};
use crate::wtf16;

/// Error returned by [`GraphemeClusters::single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SingleClusterError {
    /// The string contains no grapheme cluster.
    #[error("string contains no grapheme cluster")]
    Empty,
    /// The string contains more than one grapheme cluster.
    #[error("string contains more than one grapheme cluster")]
    TooMany,
}

/// The code units of `text[..]` up to the end of its first cluster.
///
/// Precondition: `text` is non-empty.
pub(crate) fn first_cluster_end(text: &[u16]) -> usize {
    Breaks::new(text, 0, text.len(), STATE_SOT_NO_BREAK)
        .next_break()
        .expect("non-empty text ends in a boundary")
}

/// The start of the last cluster of `text[..]`.
///
/// Precondition: `text` is non-empty.
pub(crate) fn last_cluster_start(text: &[u16]) -> usize {
    BackBreaks::new(text, text.len(), 0, STATE_EOT_NO_BREAK)
        .next_break()
        .expect("non-empty text starts with a boundary")
}

/// An iterator over the grapheme clusters of a code-unit slice.
///
/// Yields each cluster as a sub-slice; iterating from the back yields the
/// clusters in reverse order.
#[derive(Clone, Copy)]
pub struct Clusters<'a> {
    rest: &'a [u16],
}

impl<'a> Clusters<'a> {
    pub(crate) fn new(rest: &'a [u16]) -> Self {
        Clusters { rest }
    }
}

impl<'a> Iterator for Clusters<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<&'a [u16]> {
        if self.rest.is_empty() {
            return None;
        }
        let (cluster, rest) = self.rest.split_at(first_cluster_end(self.rest));
        self.rest = rest;
        Some(cluster)
    }
}

impl<'a> DoubleEndedIterator for Clusters<'a> {
    fn next_back(&mut self) -> Option<&'a [u16]> {
        if self.rest.is_empty() {
            return None;
        }
        let (rest, cluster) = self.rest.split_at(last_cluster_start(self.rest));
        self.rest = rest;
        Some(cluster)
    }
}

impl fmt::Debug for Clusters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clusters(")?;
        f.debug_list()
            .entries(self.map(wtf16::to_string_lossy))
            .finish()?;
        write!(f, ")")
    }
}

/// An immutable sequence of grapheme clusters over a UTF-16 string.
///
/// The view borrows or owns its code units; every "modifying" operation
/// returns a new view over a new string, and slicing operations return
/// views borrowing from `self`. Cluster substrings are yielded as
/// `&[u16]` sub-slices and materialized only on demand.
///
/// All indices in this API are UTF-16 code-unit offsets. Unpaired
/// surrogates are permitted in the text; they segment as controls.
///
/// ```
/// use grapheme16::GraphemeClusters;
///
/// let flags = GraphemeClusters::from_string("🇩🇪🇫🇷");
/// assert_eq!(flags.len(), 2);
/// assert_eq!(flags.first(), Some(&GraphemeClusters::from_string("🇩🇪").units()[..]));
/// ```
#[derive(Clone)]
pub struct GraphemeClusters<'a> {
    text: Cow<'a, [u16]>,
}

impl<'a> GraphemeClusters<'a> {
    /// Creates a view borrowing `text`.
    pub fn new(text: &'a [u16]) -> Self {
        GraphemeClusters { text: Cow::Borrowed(text) }
    }

    /// Creates an owning view from a code-unit buffer.
    pub fn from_units(units: Vec<u16>) -> GraphemeClusters<'static> {
        GraphemeClusters { text: Cow::Owned(units) }
    }

    /// Creates an owning view holding the UTF-16 encoding of `s`.
    pub fn from_string(s: &str) -> GraphemeClusters<'static> {
        GraphemeClusters::from_units(wtf16::encode_str(s))
    }

    /// The shared empty view.
    pub const fn empty() -> GraphemeClusters<'static> {
        GraphemeClusters { text: Cow::Borrowed(&[]) }
    }

    /// The underlying code units.
    #[inline]
    pub fn units(&self) -> &[u16] {
        &self.text
    }

    /// The length of the underlying string in code units.
    #[inline]
    pub fn len_units(&self) -> usize {
        self.text.len()
    }

    /// Converts the underlying string to UTF-8, replacing unpaired
    /// surrogates with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        wtf16::to_string_lossy(self.units())
    }

    /// Copies the view into one that owns its code units.
    pub fn into_owned(self) -> GraphemeClusters<'static> {
        GraphemeClusters { text: Cow::Owned(self.text.into_owned()) }
    }

    /// An iterator over the clusters of the string.
    pub fn iter(&self) -> Clusters<'_> {
        Clusters::new(self.units())
    }

    /// A bidirectional, resumable cluster iterator positioned before the
    /// first cluster.
    pub fn cursor(&self) -> ClusterCursor<'_> {
        ClusterCursor::new(self.units())
    }

    /// The lazy stream of boundary indices, including `0` and the string
    /// length unless the string is empty.
    pub fn boundaries(&self) -> Breaks<'_> {
        boundary::grapheme_cluster_boundaries(self.units(), 0, self.len_units())
    }

    /// The number of grapheme clusters, counted by a forward walk.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The first cluster, or `None` for an empty string.
    pub fn first(&self) -> Option<&[u16]> {
        self.iter().next()
    }

    /// The last cluster, or `None` for an empty string.
    pub fn last(&self) -> Option<&[u16]> {
        self.iter().next_back()
    }

    /// The only cluster of the string.
    pub fn single(&self) -> Result<&[u16], SingleClusterError> {
        let mut clusters = self.iter();
        let first = clusters.next().ok_or(SingleClusterError::Empty)?;
        match clusters.next() {
            Some(_) => Err(SingleClusterError::TooMany),
            None => Ok(first),
        }
    }

    /// Whether `cluster` is a single grapheme cluster occurring in this
    /// string at cluster boundaries.
    pub fn contains(&self, cluster: &[u16]) -> bool {
        !cluster.is_empty()
            && first_cluster_end(cluster) == cluster.len()
            && self.find_aligned(cluster, 0).is_some()
    }

    /// Whether `other` occurs in this string at cluster boundaries.
    pub fn contains_all(&self, other: &GraphemeClusters<'_>) -> bool {
        self.index_of(other, 0).is_some()
    }

    /// Whether this string starts with `other` at code-unit index
    /// `start_index`, with the end of the match falling on a cluster
    /// boundary.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds.
    pub fn starts_with(&self, other: &GraphemeClusters<'_>, start_index: usize) -> bool {
        self.check_index(start_index);
        wtf16::starts_with_at(self.units(), other.units(), start_index)
            && is_grapheme_cluster_boundary(
                self.units(),
                0,
                self.len_units(),
                start_index + other.len_units(),
            )
    }

    /// Whether this string ends with `other` at code-unit index
    /// `end_index`, with the start of the match falling on a cluster
    /// boundary.
    ///
    /// # Panics
    ///
    /// Panics if `end_index` is out of bounds.
    pub fn ends_with(&self, other: &GraphemeClusters<'_>, end_index: usize) -> bool {
        self.check_index(end_index);
        let Some(at) = end_index.checked_sub(other.len_units()) else {
            return false;
        };
        wtf16::starts_with_at(self.units(), other.units(), at)
            && is_grapheme_cluster_boundary(self.units(), 0, self.len_units(), at)
    }

    /// The first code-unit index at or after `from` where `other` occurs
    /// with both ends on cluster boundaries, or `None`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn index_of(&self, other: &GraphemeClusters<'_>, from: usize) -> Option<usize> {
        self.check_index(from);
        self.find_aligned(other.units(), from)
    }

    /// The last code-unit index at or before `from` where `other` occurs
    /// with both ends on cluster boundaries, or `None`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn last_index_of(&self, other: &GraphemeClusters<'_>, from: usize) -> Option<usize> {
        self.check_index(from);
        self.rfind_aligned(other.units(), from)
    }

    /// Like [`index_of`](Self::index_of), but returns the index just past
    /// the match.
    pub fn index_after(&self, other: &GraphemeClusters<'_>, from: usize) -> Option<usize> {
        self.index_of(other, from).map(|m| m + other.len_units())
    }

    /// Like [`last_index_of`](Self::last_index_of), but searches for a
    /// match ending at or before `from` and returns the index just past it.
    pub fn last_index_after(&self, other: &GraphemeClusters<'_>, from: usize) -> Option<usize> {
        self.check_index(from);
        let latest_start = from.checked_sub(other.len_units())?;
        self.rfind_aligned(other.units(), latest_start)
            .map(|m| m + other.len_units())
    }

    /// A view without the first `n` clusters.
    pub fn skip(&self, n: usize) -> GraphemeClusters<'_> {
        GraphemeClusters::new(&self.units()[self.unit_offset_of_cluster(n)..])
    }

    /// A view of the first `n` clusters.
    pub fn take(&self, n: usize) -> GraphemeClusters<'_> {
        GraphemeClusters::new(&self.units()[..self.unit_offset_of_cluster(n)])
    }

    /// A view of clusters `a..b`.
    ///
    /// # Panics
    ///
    /// Panics if `a > b`.
    pub fn get_range(&self, a: usize, b: usize) -> GraphemeClusters<'_> {
        assert!(a <= b, "cluster range {a}..{b} is inverted");
        let start = self.unit_offset_of_cluster(a);
        let end = self.unit_offset_of_cluster(b);
        GraphemeClusters::new(&self.units()[start..end])
    }

    /// A view without the last `n` clusters.
    pub fn skip_last(&self, n: usize) -> GraphemeClusters<'_> {
        GraphemeClusters::new(&self.units()[..self.unit_offset_from_end(n)])
    }

    /// A view of the last `n` clusters.
    pub fn take_last(&self, n: usize) -> GraphemeClusters<'_> {
        GraphemeClusters::new(&self.units()[self.unit_offset_from_end(n)..])
    }

    /// A view without the longest prefix of clusters satisfying `pred`.
    pub fn skip_while(&self, mut pred: impl FnMut(&[u16]) -> bool) -> GraphemeClusters<'_> {
        let mut offset = 0;
        for cluster in self.iter() {
            if !pred(cluster) {
                break;
            }
            offset += cluster.len();
        }
        GraphemeClusters::new(&self.units()[offset..])
    }

    /// The longest prefix of clusters satisfying `pred`.
    pub fn take_while(&self, mut pred: impl FnMut(&[u16]) -> bool) -> GraphemeClusters<'_> {
        let mut offset = 0;
        for cluster in self.iter() {
            if !pred(cluster) {
                break;
            }
            offset += cluster.len();
        }
        GraphemeClusters::new(&self.units()[..offset])
    }

    /// A view without the longest suffix of clusters satisfying `pred`.
    pub fn skip_last_while(&self, mut pred: impl FnMut(&[u16]) -> bool) -> GraphemeClusters<'_> {
        GraphemeClusters::new(&self.units()[..self.suffix_start_while(&mut pred)])
    }

    /// The longest suffix of clusters satisfying `pred`.
    pub fn take_last_while(&self, mut pred: impl FnMut(&[u16]) -> bool) -> GraphemeClusters<'_> {
        GraphemeClusters::new(&self.units()[self.suffix_start_while(&mut pred)..])
    }

    /// The clusters satisfying `pred`, concatenated into a new view.
    pub fn filter(&self, mut pred: impl FnMut(&[u16]) -> bool) -> GraphemeClusters<'static> {
        let mut out = Vec::new();
        for cluster in self.iter() {
            if pred(cluster) {
                out.extend_from_slice(cluster);
            }
        }
        GraphemeClusters::from_units(out)
    }

    /// A view over the string with `other`'s string spliced in at code-unit
    /// index `index`. The splice is raw: no boundary snapping.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn insert_at(&self, index: usize, other: &GraphemeClusters<'_>) -> GraphemeClusters<'static> {
        self.check_index(index);
        GraphemeClusters::from_units(wtf16::replace_range(
            self.units(),
            index,
            index,
            other.units(),
        ))
    }

    /// A view over the string with code units `a..b` replaced by `other`'s
    /// string. The replacement is raw: no boundary validation.
    ///
    /// # Panics
    ///
    /// Panics unless `a <= b <= len_units()`.
    pub fn replace_substring(
        &self,
        a: usize,
        b: usize,
        other: &GraphemeClusters<'_>,
    ) -> GraphemeClusters<'static> {
        self.check_range(a, b);
        GraphemeClusters::from_units(wtf16::replace_range(self.units(), a, b, other.units()))
    }

    /// A view over code units `a..b` of the string.
    ///
    /// # Panics
    ///
    /// Panics unless `a <= b <= len_units()`.
    pub fn substring(&self, a: usize, b: usize) -> GraphemeClusters<'_> {
        self.check_range(a, b);
        GraphemeClusters::new(&self.units()[a..b])
    }

    /// Replaces every non-overlapping, boundary-aligned occurrence of `src`
    /// at or after code-unit index `start_index`.
    ///
    /// When `src` is empty this "explode-replaces": `repl` is inserted at
    /// every cluster boundary from `start_index` on, *including both outer
    /// ends* (`"ab"` becomes `"-a-b-"` for `repl` `"-"`). Callers expecting
    /// insertion only between clusters must trim the ends themselves.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds.
    pub fn replace_all(
        &self,
        src: &GraphemeClusters<'_>,
        repl: &GraphemeClusters<'_>,
        start_index: usize,
    ) -> GraphemeClusters<'static> {
        self.check_index(start_index);
        if src.is_empty() {
            return self.explode_replace(repl.units(), start_index);
        }
        let text = self.units();
        let mut out = Vec::new();
        let mut copied = 0;
        let mut from = start_index;
        while let Some(m) = self.find_aligned(src.units(), from) {
            out.extend_from_slice(&text[copied..m]);
            out.extend_from_slice(repl.units());
            copied = m + src.len_units();
            from = copied;
        }
        out.extend_from_slice(&text[copied..]);
        GraphemeClusters::from_units(out)
    }

    /// Replaces the first boundary-aligned occurrence of `src` at or after
    /// `start_index`; with an empty `src`, inserts `repl` at the first
    /// cluster boundary at or after `start_index`.
    ///
    /// # Panics
    ///
    /// Panics if `start_index` is out of bounds.
    pub fn replace_first(
        &self,
        src: &GraphemeClusters<'_>,
        repl: &GraphemeClusters<'_>,
        start_index: usize,
    ) -> GraphemeClusters<'static> {
        self.check_index(start_index);
        let text = self.units();
        if src.is_empty() {
            let at = boundary::next_break(text, 0, text.len(), start_index).unwrap_or(0);
            return GraphemeClusters::from_units(wtf16::replace_range(text, at, at, repl.units()));
        }
        match self.find_aligned(src.units(), start_index) {
            Some(m) => GraphemeClusters::from_units(wtf16::replace_range(
                text,
                m,
                m + src.len_units(),
                repl.units(),
            )),
            None => GraphemeClusters::from_units(text.to_vec()),
        }
    }

    /// A view over the lowercased string.
    pub fn to_lowercase(&self) -> GraphemeClusters<'static> {
        GraphemeClusters::from_units(wtf16::to_lowercase(self.units()))
    }

    /// A view over the uppercased string.
    pub fn to_uppercase(&self) -> GraphemeClusters<'static> {
        GraphemeClusters::from_units(wtf16::to_uppercase(self.units()))
    }

    // Boundary-aware search: validate each raw code-unit match and advance
    // one unit past a rejected candidate.
    fn find_aligned(&self, needle: &[u16], from: usize) -> Option<usize> {
        let text = self.units();
        let mut from = from;
        loop {
            let m = wtf16::index_of(text, needle, from)?;
            if is_grapheme_cluster_boundary(text, 0, text.len(), m)
                && is_grapheme_cluster_boundary(text, 0, text.len(), m + needle.len())
            {
                return Some(m);
            }
            from = m + 1;
        }
    }

    fn rfind_aligned(&self, needle: &[u16], from: usize) -> Option<usize> {
        let text = self.units();
        let mut from = from;
        loop {
            let m = wtf16::last_index_of(text, needle, from)?;
            if is_grapheme_cluster_boundary(text, 0, text.len(), m)
                && is_grapheme_cluster_boundary(text, 0, text.len(), m + needle.len())
            {
                return Some(m);
            }
            from = m.checked_sub(1)?;
        }
    }

    fn unit_offset_of_cluster(&self, n: usize) -> usize {
        let mut offset = 0;
        let mut clusters = self.iter();
        for _ in 0..n {
            match clusters.next() {
                Some(cluster) => offset += cluster.len(),
                None => break,
            }
        }
        offset
    }

    fn unit_offset_from_end(&self, n: usize) -> usize {
        let mut offset = self.len_units();
        let mut clusters = self.iter();
        for _ in 0..n {
            match clusters.next_back() {
                Some(cluster) => offset -= cluster.len(),
                None => break,
            }
        }
        offset
    }

    fn suffix_start_while(&self, pred: &mut impl FnMut(&[u16]) -> bool) -> usize {
        let mut offset = self.len_units();
        let mut clusters = self.iter();
        while let Some(cluster) = clusters.next_back() {
            if !pred(cluster) {
                break;
            }
            offset -= cluster.len();
        }
        offset
    }

    fn explode_replace(&self, repl: &[u16], start_index: usize) -> GraphemeClusters<'static> {
        let text = self.units();
        let mut out = Vec::with_capacity(text.len() + repl.len());
        out.extend_from_slice(&text[..start_index]);
        out.extend_from_slice(repl);
        for cluster in Clusters::new(&text[start_index..]) {
            out.extend_from_slice(cluster);
            out.extend_from_slice(repl);
        }
        GraphemeClusters::from_units(out)
    }

    fn check_index(&self, index: usize) {
        assert!(
            index <= self.len_units(),
            "code-unit index {index} out of bounds for {} units",
            self.len_units()
        );
    }

    fn check_range(&self, a: usize, b: usize) {
        assert!(
            a <= b && b <= self.len_units(),
            "code-unit range {a}..{b} out of bounds for {} units",
            self.len_units()
        );
    }
}

impl<'a, 'b> PartialEq<GraphemeClusters<'b>> for GraphemeClusters<'a> {
    #[inline]
    fn eq(&self, other: &GraphemeClusters<'b>) -> bool {
        self.units() == other.units()
    }
}

impl Eq for GraphemeClusters<'_> {}

impl hash::Hash for GraphemeClusters<'_> {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(self.units(), state)
    }
}

impl Add<&GraphemeClusters<'_>> for &GraphemeClusters<'_> {
    type Output = GraphemeClusters<'static>;

    /// A view over the concatenation; the two strings may or may not keep a
    /// cluster boundary at the join.
    fn add(self, rhs: &GraphemeClusters<'_>) -> GraphemeClusters<'static> {
        let mut out = Vec::with_capacity(self.len_units() + rhs.len_units());
        out.extend_from_slice(self.units());
        out.extend_from_slice(rhs.units());
        GraphemeClusters::from_units(out)
    }
}

impl<'s> IntoIterator for &'s GraphemeClusters<'_> {
    type Item = &'s [u16];
    type IntoIter = Clusters<'s>;

    fn into_iter(self) -> Clusters<'s> {
        self.iter()
    }
}

impl fmt::Display for GraphemeClusters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl fmt::Debug for GraphemeClusters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for ch in self.to_string_lossy().chars() {
            write!(f, "{}", ch.escape_debug())?;
        }
        write!(f, "\"")
    }
}
