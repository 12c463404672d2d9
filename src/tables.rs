//! Grapheme cluster break categories for every Unicode code point.
//!
//! The range tables below are generated from `GraphemeBreakProperty.txt` and
//! `emoji-data.txt` (UCD 15.0.0) by `scripts/gen_tables.py`; do not edit them
//! by hand. Hangul syllables and surrogates are classified arithmetically in
//! code and are therefore absent from the data.

/// A grapheme cluster break category.
///
/// The discriminants index the transition-table columns in `machine`, so the
/// order here is load-bearing. `Eot` is synthetic: it is never returned by a
/// table lookup and exists only to drive the terminal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    Other = 0,
    Cr,
    Lf,
    Control,
    Extend,
    Zwj,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    Lv,
    Lvt,
    Pictographic,
    Eot,
}

pub(crate) const CATEGORY_COUNT: usize = 16;

/// Looks up the category of a BMP code point, given as a single code unit.
///
/// Surrogate units (paired or not) map to `Control`; pairs that form a
/// supplementary code point must go through [`category_supplementary`]
/// instead.
pub(crate) fn category_bmp(unit: u16) -> Category {
    match unit {
        // Hangul syllables are algorithmic: LV at every 28th code point.
        0xAC00..=0xD7A3 => {
            if (unit - 0xAC00) % 28 == 0 {
                Category::Lv
            } else {
                Category::Lvt
            }
        }
        0xD800..=0xDFFF => Category::Control,
        _ => search(BMP, unit),
    }
}

/// Looks up the category of the supplementary code point encoded by a
/// surrogate pair.
pub(crate) fn category_supplementary(lead: u16, trail: u16) -> Category {
    search(SUPPLEMENTARY, crate::wtf16::combine_surrogates(lead, trail))
}

fn search<T: Copy + Ord>(table: &[(T, T, Category)], needle: T) -> Category {
    use std::cmp::Ordering;
    table
        .binary_search_by(|&(lo, hi, _)| {
            if hi < needle {
                Ordering::Less
            } else if lo > needle {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .map(|i| table[i].2)
        .unwrap_or(Category::Other)
}

use Category::{
    Control as CT, Extend as EX, Pictographic as PI, Prepend as PP, RegionalIndicator as RI,
    SpacingMark as SM, Zwj as ZW, L, T, V,
};

static BMP: &[(u16, u16, Category)] = &[
    (0x0000, 0x0009, CT),
    (0x000A, 0x000A, Category::Lf),
    (0x000B, 0x000C, CT),
    (0x000D, 0x000D, Category::Cr),
    (0x000E, 0x001F, CT),
    (0x007F, 0x009F, CT),
    (0x00A9, 0x00A9, PI),
    (0x00AD, 0x00AD, CT),
    (0x00AE, 0x00AE, PI),
    (0x0300, 0x036F, EX),
    (0x0483, 0x0489, EX),
    (0x0591, 0x05BD, EX),
    (0x05BF, 0x05BF, EX),
    (0x05C1, 0x05C2, EX),
    (0x05C4, 0x05C5, EX),
    (0x05C7, 0x05C7, EX),
    (0x0600, 0x0605, PP),
    (0x0610, 0x061A, EX),
    (0x061C, 0x061C, CT),
    (0x064B, 0x065F, EX),
    (0x0670, 0x0670, EX),
    (0x06D6, 0x06DC, EX),
    (0x06DD, 0x06DD, PP),
    (0x06DF, 0x06E4, EX),
    (0x06E7, 0x06E8, EX),
    (0x06EA, 0x06ED, EX),
    (0x070F, 0x070F, PP),
    (0x0711, 0x0711, EX),
    (0x0730, 0x074A, EX),
    (0x07A6, 0x07B0, EX),
    (0x07EB, 0x07F3, EX),
    (0x07FD, 0x07FD, EX),
    (0x0816, 0x0819, EX),
    (0x081B, 0x0823, EX),
    (0x0825, 0x0827, EX),
    (0x0829, 0x082D, EX),
    (0x0859, 0x085B, EX),
    (0x0890, 0x0891, PP),
    (0x0898, 0x089F, EX),
    (0x08CA, 0x08E1, EX),
    (0x08E2, 0x08E2, PP),
    (0x08E3, 0x0902, EX),
    (0x0903, 0x0903, SM),
    (0x093A, 0x093A, EX),
    (0x093B, 0x093B, SM),
    (0x093C, 0x093C, EX),
    (0x093E, 0x0940, SM),
    (0x0941, 0x0948, EX),
    (0x0949, 0x094C, SM),
    (0x094D, 0x094D, EX),
    (0x094E, 0x094F, SM),
    (0x0951, 0x0957, EX),
    (0x0962, 0x0963, EX),
    (0x0981, 0x0981, EX),
    (0x0982, 0x0983, SM),
    (0x09BC, 0x09BC, EX),
    (0x09BE, 0x09BE, EX),
    (0x09BF, 0x09C0, SM),
    (0x09C1, 0x09C4, EX),
    (0x09C7, 0x09C8, SM),
    (0x09CB, 0x09CC, SM),
    (0x09CD, 0x09CD, EX),
    (0x09D7, 0x09D7, EX),
    (0x09E2, 0x09E3, EX),
    (0x09FE, 0x09FE, EX),
    (0x0A01, 0x0A02, EX),
    (0x0A03, 0x0A03, SM),
    (0x0A3C, 0x0A3C, EX),
    (0x0A3E, 0x0A40, SM),
    (0x0A41, 0x0A42, EX),
    (0x0A47, 0x0A48, EX),
    (0x0A4B, 0x0A4D, EX),
    (0x0A51, 0x0A51, EX),
    (0x0A70, 0x0A71, EX),
    (0x0A75, 0x0A75, EX),
    (0x0A81, 0x0A82, EX),
    (0x0A83, 0x0A83, SM),
    (0x0ABC, 0x0ABC, EX),
    (0x0ABE, 0x0AC0, SM),
    (0x0AC1, 0x0AC5, EX),
    (0x0AC7, 0x0AC8, EX),
    (0x0AC9, 0x0AC9, SM),
    (0x0ACB, 0x0ACC, SM),
    (0x0ACD, 0x0ACD, EX),
    (0x0AE2, 0x0AE3, EX),
    (0x0AFA, 0x0AFF, EX),
    (0x0B01, 0x0B01, EX),
    (0x0B02, 0x0B03, SM),
    (0x0B3C, 0x0B3C, EX),
    (0x0B3E, 0x0B3F, EX),
    (0x0B40, 0x0B40, SM),
    (0x0B41, 0x0B44, EX),
    (0x0B47, 0x0B48, SM),
    (0x0B4B, 0x0B4C, SM),
    (0x0B4D, 0x0B4D, EX),
    (0x0B55, 0x0B57, EX),
    (0x0B62, 0x0B63, EX),
    (0x0B82, 0x0B82, EX),
    (0x0BBE, 0x0BBE, EX),
    (0x0BBF, 0x0BBF, SM),
    (0x0BC0, 0x0BC0, EX),
    (0x0BC1, 0x0BC2, SM),
    (0x0BC6, 0x0BC8, SM),
    (0x0BCA, 0x0BCC, SM),
    (0x0BCD, 0x0BCD, EX),
    (0x0BD7, 0x0BD7, EX),
    (0x0C00, 0x0C00, EX),
    (0x0C01, 0x0C03, SM),
    (0x0C04, 0x0C04, EX),
    (0x0C3C, 0x0C3C, EX),
    (0x0C3E, 0x0C40, EX),
    (0x0C41, 0x0C44, SM),
    (0x0C46, 0x0C48, EX),
    (0x0C4A, 0x0C4D, EX),
    (0x0C55, 0x0C56, EX),
    (0x0C62, 0x0C63, EX),
    (0x0C81, 0x0C81, EX),
    (0x0C82, 0x0C83, SM),
    (0x0CBC, 0x0CBC, EX),
    (0x0CBE, 0x0CBE, SM),
    (0x0CBF, 0x0CBF, EX),
    (0x0CC0, 0x0CC1, SM),
    (0x0CC2, 0x0CC2, EX),
    (0x0CC3, 0x0CC4, SM),
    (0x0CC6, 0x0CC6, EX),
    (0x0CC7, 0x0CC8, SM),
    (0x0CCA, 0x0CCB, SM),
    (0x0CCC, 0x0CCD, EX),
    (0x0CD5, 0x0CD6, EX),
    (0x0CE2, 0x0CE3, EX),
    (0x0D00, 0x0D01, EX),
    (0x0D02, 0x0D03, SM),
    (0x0D3B, 0x0D3C, EX),
    (0x0D3E, 0x0D3E, EX),
    (0x0D3F, 0x0D40, SM),
    (0x0D41, 0x0D44, EX),
    (0x0D46, 0x0D48, SM),
    (0x0D4A, 0x0D4C, SM),
    (0x0D4D, 0x0D4D, EX),
    (0x0D4E, 0x0D4E, PP),
    (0x0D57, 0x0D57, EX),
    (0x0D62, 0x0D63, EX),
    (0x0D81, 0x0D81, EX),
    (0x0D82, 0x0D83, SM),
    (0x0DCA, 0x0DCA, EX),
    (0x0DCF, 0x0DCF, EX),
    (0x0DD0, 0x0DD1, SM),
    (0x0DD2, 0x0DD4, EX),
    (0x0DD6, 0x0DD6, EX),
    (0x0DD8, 0x0DDE, SM),
    (0x0DDF, 0x0DDF, EX),
    (0x0DF2, 0x0DF3, SM),
    (0x0E31, 0x0E31, EX),
    (0x0E33, 0x0E33, SM),
    (0x0E34, 0x0E3A, EX),
    (0x0E47, 0x0E4E, EX),
    (0x0EB1, 0x0EB1, EX),
    (0x0EB3, 0x0EB3, SM),
    (0x0EB4, 0x0EBC, EX),
    (0x0EC8, 0x0ECE, EX),
    (0x0F18, 0x0F19, EX),
    (0x0F35, 0x0F35, EX),
    (0x0F37, 0x0F37, EX),
    (0x0F39, 0x0F39, EX),
    (0x0F3E, 0x0F3F, SM),
    (0x0F71, 0x0F7E, EX),
    (0x0F7F, 0x0F7F, SM),
    (0x0F80, 0x0F84, EX),
    (0x0F86, 0x0F87, EX),
    (0x0F8D, 0x0F97, EX),
    (0x0F99, 0x0FBC, EX),
    (0x0FC6, 0x0FC6, EX),
    (0x102D, 0x1030, EX),
    (0x1031, 0x1031, SM),
    (0x1032, 0x1037, EX),
    (0x1039, 0x103A, EX),
    (0x103B, 0x103C, SM),
    (0x103D, 0x103E, EX),
    (0x1056, 0x1057, SM),
    (0x1058, 0x1059, EX),
    (0x105E, 0x1060, EX),
    (0x1071, 0x1074, EX),
    (0x1082, 0x1082, EX),
    (0x1084, 0x1084, SM),
    (0x1085, 0x1086, EX),
    (0x108D, 0x108D, EX),
    (0x109D, 0x109D, EX),
    (0x1100, 0x115F, L),
    (0x1160, 0x11A7, V),
    (0x11A8, 0x11FF, T),
    (0x135D, 0x135F, EX),
    (0x1712, 0x1714, EX),
    (0x1732, 0x1734, EX),
    (0x1752, 0x1753, EX),
    (0x1772, 0x1773, EX),
    (0x17B4, 0x17B5, EX),
    (0x17B6, 0x17B6, SM),
    (0x17B7, 0x17BD, EX),
    (0x17BE, 0x17C5, SM),
    (0x17C6, 0x17C6, EX),
    (0x17C7, 0x17C8, SM),
    (0x17C9, 0x17D3, EX),
    (0x17DD, 0x17DD, EX),
    (0x180B, 0x180D, EX),
    (0x180E, 0x180E, CT),
    (0x180F, 0x180F, EX),
    (0x1885, 0x1886, EX),
    (0x18A9, 0x18A9, EX),
    (0x1920, 0x1922, EX),
    (0x1923, 0x1926, SM),
    (0x1927, 0x1928, EX),
    (0x1929, 0x192B, SM),
    (0x1930, 0x1931, SM),
    (0x1932, 0x1932, EX),
    (0x1933, 0x1938, SM),
    (0x1939, 0x193B, EX),
    (0x1A17, 0x1A18, EX),
    (0x1A19, 0x1A1A, SM),
    (0x1A1B, 0x1A1B, EX),
    (0x1A55, 0x1A55, SM),
    (0x1A56, 0x1A56, EX),
    (0x1A57, 0x1A57, SM),
    (0x1A58, 0x1A5E, EX),
    (0x1A60, 0x1A60, EX),
    (0x1A62, 0x1A62, EX),
    (0x1A65, 0x1A6C, EX),
    (0x1A6D, 0x1A72, SM),
    (0x1A73, 0x1A7C, EX),
    (0x1A7F, 0x1A7F, EX),
    (0x1AB0, 0x1ACE, EX),
    (0x1B00, 0x1B03, EX),
    (0x1B04, 0x1B04, SM),
    (0x1B34, 0x1B3A, EX),
    (0x1B3B, 0x1B3B, SM),
    (0x1B3C, 0x1B3C, EX),
    (0x1B3D, 0x1B41, SM),
    (0x1B42, 0x1B42, EX),
    (0x1B43, 0x1B44, SM),
    (0x1B6B, 0x1B73, EX),
    (0x1B80, 0x1B81, EX),
    (0x1B82, 0x1B82, SM),
    (0x1BA1, 0x1BA1, SM),
    (0x1BA2, 0x1BA5, EX),
    (0x1BA6, 0x1BA7, SM),
    (0x1BA8, 0x1BA9, EX),
    (0x1BAA, 0x1BAA, SM),
    (0x1BAB, 0x1BAD, EX),
    (0x1BE6, 0x1BE6, EX),
    (0x1BE7, 0x1BE7, SM),
    (0x1BE8, 0x1BE9, EX),
    (0x1BEA, 0x1BEC, SM),
    (0x1BED, 0x1BED, EX),
    (0x1BEE, 0x1BEE, SM),
    (0x1BEF, 0x1BF1, EX),
    (0x1BF2, 0x1BF3, SM),
    (0x1C24, 0x1C2B, SM),
    (0x1C2C, 0x1C33, EX),
    (0x1C34, 0x1C35, SM),
    (0x1C36, 0x1C37, EX),
    (0x1CD0, 0x1CD2, EX),
    (0x1CD4, 0x1CE0, EX),
    (0x1CE1, 0x1CE1, SM),
    (0x1CE2, 0x1CE8, EX),
    (0x1CED, 0x1CED, EX),
    (0x1CF4, 0x1CF4, EX),
    (0x1CF7, 0x1CF7, SM),
    (0x1CF8, 0x1CF9, EX),
    (0x1DC0, 0x1DFF, EX),
    (0x200B, 0x200B, CT),
    (0x200C, 0x200C, EX),
    (0x200D, 0x200D, ZW),
    (0x200E, 0x200F, CT),
    (0x2028, 0x202E, CT),
    (0x203C, 0x203C, PI),
    (0x2049, 0x2049, PI),
    (0x2060, 0x206F, CT),
    (0x20D0, 0x20F0, EX),
    (0x2122, 0x2122, PI),
    (0x2139, 0x2139, PI),
    (0x2194, 0x2199, PI),
    (0x21A9, 0x21AA, PI),
    (0x231A, 0x231B, PI),
    (0x2328, 0x2328, PI),
    (0x2388, 0x2388, PI),
    (0x23CF, 0x23CF, PI),
    (0x23E9, 0x23F3, PI),
    (0x23F8, 0x23FA, PI),
    (0x24C2, 0x24C2, PI),
    (0x25AA, 0x25AB, PI),
    (0x25B6, 0x25B6, PI),
    (0x25C0, 0x25C0, PI),
    (0x25FB, 0x25FE, PI),
    (0x2600, 0x2605, PI),
    (0x2607, 0x2612, PI),
    (0x2614, 0x2685, PI),
    (0x2690, 0x2705, PI),
    (0x2708, 0x2712, PI),
    (0x2714, 0x2714, PI),
    (0x2716, 0x2716, PI),
    (0x271D, 0x271D, PI),
    (0x2721, 0x2721, PI),
    (0x2728, 0x2728, PI),
    (0x2733, 0x2734, PI),
    (0x2744, 0x2744, PI),
    (0x2747, 0x2747, PI),
    (0x274C, 0x274C, PI),
    (0x274E, 0x274E, PI),
    (0x2753, 0x2755, PI),
    (0x2757, 0x2757, PI),
    (0x2763, 0x2767, PI),
    (0x2795, 0x2797, PI),
    (0x27A1, 0x27A1, PI),
    (0x27B0, 0x27B0, PI),
    (0x27BF, 0x27BF, PI),
    (0x2934, 0x2935, PI),
    (0x2B05, 0x2B07, PI),
    (0x2B1B, 0x2B1C, PI),
    (0x2B50, 0x2B50, PI),
    (0x2B55, 0x2B55, PI),
    (0x2CEF, 0x2CF1, EX),
    (0x2D7F, 0x2D7F, EX),
    (0x2DE0, 0x2DFF, EX),
    (0x302A, 0x302F, EX),
    (0x3030, 0x3030, PI),
    (0x303D, 0x303D, PI),
    (0x3099, 0x309A, EX),
    (0x3297, 0x3297, PI),
    (0x3299, 0x3299, PI),
    (0xA66F, 0xA672, EX),
    (0xA674, 0xA67D, EX),
    (0xA69E, 0xA69F, EX),
    (0xA6F0, 0xA6F1, EX),
    (0xA802, 0xA802, EX),
    (0xA806, 0xA806, EX),
    (0xA80B, 0xA80B, EX),
    (0xA823, 0xA824, SM),
    (0xA825, 0xA826, EX),
    (0xA827, 0xA827, SM),
    (0xA82C, 0xA82C, EX),
    (0xA880, 0xA881, SM),
    (0xA8B4, 0xA8C3, SM),
    (0xA8C4, 0xA8C5, EX),
    (0xA8E0, 0xA8F1, EX),
    (0xA8FF, 0xA8FF, EX),
    (0xA926, 0xA92D, EX),
    (0xA947, 0xA951, EX),
    (0xA952, 0xA953, SM),
    (0xA960, 0xA97C, L),
    (0xA980, 0xA982, EX),
    (0xA983, 0xA983, SM),
    (0xA9B3, 0xA9B3, EX),
    (0xA9B4, 0xA9B5, SM),
    (0xA9B6, 0xA9B9, EX),
    (0xA9BA, 0xA9BB, SM),
    (0xA9BC, 0xA9BD, EX),
    (0xA9BE, 0xA9C0, SM),
    (0xA9E5, 0xA9E5, EX),
    (0xAA29, 0xAA2E, EX),
    (0xAA2F, 0xAA30, SM),
    (0xAA31, 0xAA32, EX),
    (0xAA33, 0xAA34, SM),
    (0xAA35, 0xAA36, EX),
    (0xAA43, 0xAA43, EX),
    (0xAA4C, 0xAA4C, EX),
    (0xAA4D, 0xAA4D, SM),
    (0xAA7B, 0xAA7B, SM),
    (0xAA7C, 0xAA7C, EX),
    (0xAA7D, 0xAA7D, SM),
    (0xAAB0, 0xAAB0, EX),
    (0xAAB2, 0xAAB4, EX),
    (0xAAB7, 0xAAB8, EX),
    (0xAABE, 0xAABF, EX),
    (0xAAC1, 0xAAC1, EX),
    (0xAAEB, 0xAAEB, SM),
    (0xAAEC, 0xAAED, EX),
    (0xAAEE, 0xAAEF, SM),
    (0xAAF5, 0xAAF5, SM),
    (0xAAF6, 0xAAF6, EX),
    (0xABE3, 0xABE4, SM),
    (0xABE5, 0xABE5, EX),
    (0xABE6, 0xABE7, SM),
    (0xABE8, 0xABE8, EX),
    (0xABE9, 0xABEA, SM),
    (0xABEC, 0xABEC, SM),
    (0xABED, 0xABED, EX),
    (0xD7B0, 0xD7C6, V),
    (0xD7CB, 0xD7FB, T),
    (0xFB1E, 0xFB1E, EX),
    (0xFE00, 0xFE0F, EX),
    (0xFE20, 0xFE2F, EX),
    (0xFEFF, 0xFEFF, CT),
    (0xFF9E, 0xFF9F, EX),
    (0xFFF0, 0xFFFB, CT),
];

static SUPPLEMENTARY: &[(u32, u32, Category)] = &[
    (0x101FD, 0x101FD, EX),
    (0x102E0, 0x102E0, EX),
    (0x10376, 0x1037A, EX),
    (0x10A01, 0x10A03, EX),
    (0x10A05, 0x10A06, EX),
    (0x10A0C, 0x10A0F, EX),
    (0x10A38, 0x10A3A, EX),
    (0x10A3F, 0x10A3F, EX),
    (0x10AE5, 0x10AE6, EX),
    (0x10D24, 0x10D27, EX),
    (0x10EAB, 0x10EAC, EX),
    (0x10F46, 0x10F50, EX),
    (0x10F82, 0x10F85, EX),
    (0x11000, 0x11000, SM),
    (0x11001, 0x11001, EX),
    (0x11002, 0x11002, SM),
    (0x11038, 0x11046, EX),
    (0x11070, 0x11070, EX),
    (0x11073, 0x11074, EX),
    (0x1107F, 0x11081, EX),
    (0x11082, 0x11082, SM),
    (0x110B0, 0x110B2, SM),
    (0x110B3, 0x110B6, EX),
    (0x110B7, 0x110B8, SM),
    (0x110B9, 0x110BA, EX),
    (0x110BD, 0x110BD, PP),
    (0x110C2, 0x110C2, EX),
    (0x110CD, 0x110CD, PP),
    (0x11100, 0x11102, EX),
    (0x11127, 0x1112B, EX),
    (0x1112C, 0x1112C, SM),
    (0x1112D, 0x11134, EX),
    (0x11145, 0x11146, SM),
    (0x11173, 0x11173, EX),
    (0x11180, 0x11181, EX),
    (0x11182, 0x11182, SM),
    (0x111B3, 0x111B5, SM),
    (0x111B6, 0x111BE, EX),
    (0x111BF, 0x111C0, SM),
    (0x111C2, 0x111C3, PP),
    (0x111C9, 0x111CC, EX),
    (0x111CE, 0x111CE, SM),
    (0x111CF, 0x111CF, EX),
    (0x1122C, 0x1122E, SM),
    (0x1122F, 0x11231, EX),
    (0x11232, 0x11233, SM),
    (0x11234, 0x11234, EX),
    (0x11235, 0x11235, SM),
    (0x11236, 0x11237, EX),
    (0x1123E, 0x1123E, EX),
    (0x112DF, 0x112DF, EX),
    (0x112E0, 0x112E2, SM),
    (0x112E3, 0x112EA, EX),
    (0x11300, 0x11301, EX),
    (0x11302, 0x11303, SM),
    (0x1133B, 0x1133C, EX),
    (0x1133E, 0x1133E, EX),
    (0x1133F, 0x1133F, SM),
    (0x11340, 0x11340, EX),
    (0x11341, 0x11344, SM),
    (0x11347, 0x11348, SM),
    (0x1134B, 0x1134D, SM),
    (0x11357, 0x11357, EX),
    (0x11362, 0x11363, SM),
    (0x11366, 0x1136C, EX),
    (0x11370, 0x11374, EX),
    (0x11435, 0x11437, SM),
    (0x11438, 0x1143F, EX),
    (0x11440, 0x11441, SM),
    (0x11442, 0x11444, EX),
    (0x11445, 0x11445, SM),
    (0x11446, 0x11446, EX),
    (0x1145E, 0x1145E, EX),
    (0x114B0, 0x114B0, EX),
    (0x114B1, 0x114B2, SM),
    (0x114B3, 0x114B8, EX),
    (0x114B9, 0x114B9, SM),
    (0x114BA, 0x114BA, EX),
    (0x114BB, 0x114BC, SM),
    (0x114BD, 0x114BD, EX),
    (0x114BE, 0x114BE, SM),
    (0x114BF, 0x114C0, EX),
    (0x114C1, 0x114C1, SM),
    (0x114C2, 0x114C3, EX),
    (0x115AF, 0x115AF, EX),
    (0x115B0, 0x115B1, SM),
    (0x115B2, 0x115B5, EX),
    (0x115B8, 0x115BB, SM),
    (0x115BC, 0x115BD, EX),
    (0x115BE, 0x115BE, SM),
    (0x115BF, 0x115C0, EX),
    (0x115DC, 0x115DD, EX),
    (0x11630, 0x11632, SM),
    (0x11633, 0x1163A, EX),
    (0x1163B, 0x1163C, SM),
    (0x1163D, 0x1163D, EX),
    (0x1163E, 0x1163E, SM),
    (0x1163F, 0x11640, EX),
    (0x116AB, 0x116AB, EX),
    (0x116AC, 0x116AC, SM),
    (0x116AD, 0x116AD, EX),
    (0x116AE, 0x116AF, SM),
    (0x116B0, 0x116B5, EX),
    (0x116B6, 0x116B6, SM),
    (0x116B7, 0x116B7, EX),
    (0x1171D, 0x1171F, EX),
    (0x11720, 0x11721, SM),
    (0x11722, 0x11725, EX),
    (0x11726, 0x11726, SM),
    (0x11727, 0x1172B, EX),
    (0x1182C, 0x1182E, SM),
    (0x1182F, 0x11837, EX),
    (0x11838, 0x11838, SM),
    (0x11839, 0x1183A, EX),
    (0x11930, 0x11930, EX),
    (0x11931, 0x11935, SM),
    (0x11937, 0x11938, SM),
    (0x1193B, 0x1193C, EX),
    (0x1193D, 0x1193D, SM),
    (0x1193E, 0x1193E, EX),
    (0x1193F, 0x1193F, PP),
    (0x11940, 0x11940, SM),
    (0x11941, 0x11941, PP),
    (0x11942, 0x11942, SM),
    (0x11943, 0x11943, EX),
    (0x119D1, 0x119D3, SM),
    (0x119D4, 0x119D7, EX),
    (0x119DA, 0x119DB, EX),
    (0x119DC, 0x119DF, SM),
    (0x119E0, 0x119E0, EX),
    (0x119E4, 0x119E4, SM),
    (0x11A01, 0x11A0A, EX),
    (0x11A33, 0x11A38, EX),
    (0x11A39, 0x11A39, SM),
    (0x11A3A, 0x11A3A, PP),
    (0x11A3B, 0x11A3E, EX),
    (0x11A47, 0x11A47, EX),
    (0x11A51, 0x11A56, EX),
    (0x11A57, 0x11A58, SM),
    (0x11A59, 0x11A5B, EX),
    (0x11A84, 0x11A89, PP),
    (0x11A8A, 0x11A96, EX),
    (0x11A97, 0x11A97, SM),
    (0x11A98, 0x11A99, EX),
    (0x11C2F, 0x11C2F, SM),
    (0x11C30, 0x11C36, EX),
    (0x11C38, 0x11C3D, EX),
    (0x11C3E, 0x11C3E, SM),
    (0x11C3F, 0x11C3F, EX),
    (0x11C92, 0x11CA7, EX),
    (0x11CA9, 0x11CA9, SM),
    (0x11CAA, 0x11CB0, EX),
    (0x11CB1, 0x11CB1, SM),
    (0x11CB2, 0x11CB3, EX),
    (0x11CB4, 0x11CB4, SM),
    (0x11CB5, 0x11CB6, EX),
    (0x11D31, 0x11D36, EX),
    (0x11D3A, 0x11D3A, EX),
    (0x11D3C, 0x11D3D, EX),
    (0x11D3F, 0x11D45, EX),
    (0x11D46, 0x11D46, PP),
    (0x11D47, 0x11D47, EX),
    (0x11D8A, 0x11D8E, SM),
    (0x11D90, 0x11D91, EX),
    (0x11D93, 0x11D94, SM),
    (0x11D95, 0x11D95, EX),
    (0x11D96, 0x11D96, SM),
    (0x11D97, 0x11D97, EX),
    (0x11EF3, 0x11EF4, EX),
    (0x11EF5, 0x11EF6, SM),
    (0x13430, 0x13438, CT),
    (0x16AF0, 0x16AF4, EX),
    (0x16B30, 0x16B36, EX),
    (0x16F4F, 0x16F4F, EX),
    (0x16F51, 0x16F87, SM),
    (0x16F8F, 0x16F92, EX),
    (0x16FE4, 0x16FE4, EX),
    (0x16FF0, 0x16FF1, SM),
    (0x1BC9D, 0x1BC9E, EX),
    (0x1BCA0, 0x1BCA3, CT),
    (0x1CF00, 0x1CF2D, EX),
    (0x1CF30, 0x1CF46, EX),
    (0x1D165, 0x1D165, EX),
    (0x1D166, 0x1D166, SM),
    (0x1D167, 0x1D169, EX),
    (0x1D16D, 0x1D16D, SM),
    (0x1D16E, 0x1D172, EX),
    (0x1D173, 0x1D17A, CT),
    (0x1D17B, 0x1D182, EX),
    (0x1D185, 0x1D18B, EX),
    (0x1D1AA, 0x1D1AD, EX),
    (0x1D242, 0x1D244, EX),
    (0x1DA00, 0x1DA36, EX),
    (0x1DA3B, 0x1DA6C, EX),
    (0x1DA75, 0x1DA75, EX),
    (0x1DA84, 0x1DA84, EX),
    (0x1DA9B, 0x1DA9F, EX),
    (0x1DAA1, 0x1DAAF, EX),
    (0x1E000, 0x1E006, EX),
    (0x1E008, 0x1E018, EX),
    (0x1E01B, 0x1E021, EX),
    (0x1E023, 0x1E024, EX),
    (0x1E026, 0x1E02A, EX),
    (0x1E130, 0x1E136, EX),
    (0x1E2AE, 0x1E2AE, EX),
    (0x1E2EC, 0x1E2EF, EX),
    (0x1E8D0, 0x1E8D6, EX),
    (0x1E944, 0x1E94A, EX),
    (0x1F000, 0x1F0FF, PI),
    (0x1F10D, 0x1F10F, PI),
    (0x1F12F, 0x1F12F, PI),
    (0x1F16C, 0x1F171, PI),
    (0x1F17E, 0x1F17F, PI),
    (0x1F18E, 0x1F18E, PI),
    (0x1F191, 0x1F19A, PI),
    (0x1F1AD, 0x1F1E5, PI),
    (0x1F1E6, 0x1F1FF, RI),
    (0x1F201, 0x1F20F, PI),
    (0x1F21A, 0x1F21A, PI),
    (0x1F22F, 0x1F22F, PI),
    (0x1F232, 0x1F23A, PI),
    (0x1F23C, 0x1F23F, PI),
    (0x1F249, 0x1F3FA, PI),
    (0x1F3FB, 0x1F3FF, EX),
    (0x1F400, 0x1F53D, PI),
    (0x1F546, 0x1F64F, PI),
    (0x1F680, 0x1F6FF, PI),
    (0x1F774, 0x1F77F, PI),
    (0x1F7D5, 0x1F7FF, PI),
    (0x1F80C, 0x1F80F, PI),
    (0x1F848, 0x1F84F, PI),
    (0x1F85A, 0x1F85F, PI),
    (0x1F888, 0x1F88F, PI),
    (0x1F8AE, 0x1F8FF, PI),
    (0x1F90C, 0x1F93A, PI),
    (0x1F93C, 0x1F945, PI),
    (0x1F947, 0x1FAFF, PI),
    (0x1FC00, 0x1FFFD, PI),
    (0xE0000, 0xE001F, CT),
    (0xE0020, 0xE007F, EX),
    (0xE0080, 0xE00FF, CT),
    (0xE0100, 0xE01EF, EX),
    (0xE01F0, 0xE0FFF, CT),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmp_spot_checks() {
        assert_eq!(category_bmp(0x000D), Category::Cr);
        assert_eq!(category_bmp(0x000A), Category::Lf);
        assert_eq!(category_bmp(0x0009), Category::Control);
        assert_eq!(category_bmp(0x0041), Category::Other);
        assert_eq!(category_bmp(0x0308), Category::Extend);
        assert_eq!(category_bmp(0x200C), Category::Extend);
        assert_eq!(category_bmp(0x200D), Category::Zwj);
        assert_eq!(category_bmp(0x0600), Category::Prepend);
        assert_eq!(category_bmp(0x0903), Category::SpacingMark);
        assert_eq!(category_bmp(0x0E33), Category::SpacingMark);
        assert_eq!(category_bmp(0x1100), Category::L);
        assert_eq!(category_bmp(0x1160), Category::V);
        assert_eq!(category_bmp(0x11A8), Category::T);
        assert_eq!(category_bmp(0x2764), Category::Pictographic);
        assert_eq!(category_bmp(0xFE0F), Category::Extend);
    }

    #[test]
    fn hangul_syllables_are_computed() {
        assert_eq!(category_bmp(0xAC00), Category::Lv); // 가
        assert_eq!(category_bmp(0xAC01), Category::Lvt); // 각
        assert_eq!(category_bmp(0xAC1C), Category::Lv); // 개
        assert_eq!(category_bmp(0xD7A3), Category::Lvt);
        assert_eq!(category_bmp(0xD7A4), Category::Other);
    }

    #[test]
    fn surrogates_are_control() {
        assert_eq!(category_bmp(0xD800), Category::Control);
        assert_eq!(category_bmp(0xDBFF), Category::Control);
        assert_eq!(category_bmp(0xDC00), Category::Control);
        assert_eq!(category_bmp(0xDFFF), Category::Control);
    }

    #[test]
    fn supplementary_spot_checks() {
        // 🇦 U+1F1E6
        assert_eq!(category_supplementary(0xD83C, 0xDDE6), Category::RegionalIndicator);
        // 👩 U+1F469
        assert_eq!(category_supplementary(0xD83D, 0xDC69), Category::Pictographic);
        // 🏽 U+1F3FD (emoji modifier)
        assert_eq!(category_supplementary(0xD83C, 0xDFFD), Category::Extend);
        // 😀 U+1F600
        assert_eq!(category_supplementary(0xD83D, 0xDE00), Category::Pictographic);
        // 𝄞 U+1D11E musical symbol: no break property
        assert_eq!(category_supplementary(0xD834, 0xDD1E), Category::Other);
    }

    #[test]
    fn tables_are_sorted_and_disjoint() {
        let mut prev_hi = None;
        for &(lo, hi, _) in BMP {
            assert!(lo <= hi);
            if let Some(p) = prev_hi {
                assert!(lo > p, "overlap at {lo:#X}");
            }
            prev_hi = Some(hi);
        }
        let mut prev_hi = None;
        for &(lo, hi, _) in SUPPLEMENTARY {
            assert!(lo <= hi);
            if let Some(p) = prev_hi {
                assert!(lo > p, "overlap at {lo:#X}");
            }
            prev_hi = Some(hi);
        }
    }
}
