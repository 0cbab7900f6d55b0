use std::collections::HashSet;
use std::ops::RangeInclusive;

/// The CJK Unified Ideographs block, U+4E00..=U+9FFF.
pub const CJK_UNIFIED_IDEOGRAPHS: RangeInclusive<char> = '\u{4e00}'..='\u{9fff}';

/// Returns the distinct CJK ideographs of `text` in order of first appearance.
///
/// Everything outside [`CJK_UNIFIED_IDEOGRAPHS`] (punctuation, whitespace,
/// Latin text) is ignored.
#[must_use]
pub fn unique_hanzi(text: &str) -> Vec<char> {
    let mut seen = HashSet::new();
    text.chars()
        .filter(|c| CJK_UNIFIED_IDEOGRAPHS.contains(c) && seen.insert(*c))
        .collect()
}
