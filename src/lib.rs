#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
#![allow(dead_code)]
//! Extended grapheme cluster segmentation over UTF-16 code units.
//!
//! This crate partitions a string of 16-bit code units into the
//! user-perceived characters defined by UAX #29 (extended grapheme
//! clusters, including the emoji ZWJ rule GB11 and the regional-indicator
//! rules GB12/GB13), and layers cluster-boundary-aware search, slicing and
//! substitution on top.
//!
//! The input may be ill-formed UTF-16: an unpaired surrogate segments as a
//! control character and occupies one code unit. All indices in the API are
//! UTF-16 code-unit offsets, and no boundary ever falls inside a surrogate
//! pair.
//!
//! The main entry point is [`GraphemeClusters`], an immutable view of a
//! string as a sequence of clusters:
//!
//! ```
//! use grapheme16::GraphemeClusters;
//!
//! let text = GraphemeClusters::from_string("🇩🇪🇫🇷");
//! let clusters: Vec<String> = text.iter()
//!     .map(|c| String::from_utf16(c).unwrap())
//!     .collect();
//! assert_eq!(clusters, ["🇩🇪", "🇫🇷"]);
//! ```
//!
//! Underneath sit the deterministic break automata: [`Breaks`] and
//! [`BackBreaks`] walk the code units forward and backward yielding
//! boundary indices, [`is_grapheme_cluster_boundary`] answers point
//! queries from a small local window, and [`ClusterCursor`] is a
//! bidirectional iterator that resumes either automaton in O(1) when it
//! keeps moving in the same direction.

pub(crate) mod boundary;

pub(crate) mod breaks;

pub(crate) mod clusters;

pub(crate) mod cursor;

pub(crate) mod machine;

pub(crate) mod tables;

pub(crate) mod wtf16;

pub use boundary::{
    grapheme_cluster_boundaries, is_grapheme_cluster_boundary, next_break, previous_break,
};

pub use breaks::{BackBreaks, Breaks};

pub use clusters::{Clusters, GraphemeClusters, SingleClusterError};

pub use cursor::ClusterCursor;

pub use machine::{
    LOOKAHEAD_MIN, NO_BREAK, STATE_BREAK, STATE_CR, STATE_EOT, STATE_EOT_NO_BREAK, STATE_EXTEND,
    STATE_L, STATE_LF, STATE_LV, STATE_LVT, STATE_MASK, STATE_OTHER, STATE_PICTOGRAPHIC,
    STATE_PICTOGRAPHIC_ZWJ, STATE_PREPEND, STATE_REGIONAL_EVEN, STATE_REGIONAL_LOOKAHEAD,
    STATE_REGIONAL_ODD, STATE_REGIONAL_SINGLE, STATE_SOT, STATE_SOT_NO_BREAK, STATE_T, STATE_V,
    STATE_ZWJ_PICTOGRAPHIC, STATE_ZWJ_PICTOGRAPHIC_LOOKAHEAD,
};

pub use wtf16::CodePoints;
