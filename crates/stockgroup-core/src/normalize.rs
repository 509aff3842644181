//! Attribute normalization to a small controlled vocabulary.
//!
//! Each normalizer lower-cases its input and checks substring patterns in a
//! fixed order, returning the label of the first match. Order matters: the
//! `"macbook pro"` check must run before `"macbook"`, and `"intel"` maps to
//! `"Intel i7"` before `"i5"` or `"i3"` are considered.
//!
//! All functions are total. Absent or empty input yields [`UNKNOWN`].

/// Label used for absent attributes.
pub const UNKNOWN: &str = "Unknown";

/// Unmatched processor strings are cut to this many characters.
const PROCESSOR_FALLBACK_CHARS: usize = 10;

/// Ordered `(needles, label)` table; any needle matching selects the label.
type PatternTable = &'static [(&'static [&'static str], &'static str)];

const MODEL_PATTERNS: PatternTable = &[
    (&["macbook pro"], "MacBook Pro"),
    (&["macbook air"], "MacBook Air"),
    (&["macbook"], "MacBook"),
    (&["imac"], "iMac"),
    (&["mac mini"], "Mac Mini"),
];

const PROCESSOR_PATTERNS: PatternTable = &[
    (&["m3"], "M3"),
    (&["m2"], "M2"),
    (&["m1"], "M1"),
    (&["intel", "i7"], "Intel i7"),
    (&["i5"], "Intel i5"),
    (&["i3"], "Intel i3"),
];

const STORAGE_PATTERNS: PatternTable = &[
    (&["1tb", "1000gb"], "1TB"),
    (&["512gb"], "512GB"),
    (&["256gb"], "256GB"),
    (&["128gb"], "128GB"),
    (&["2tb"], "2TB"),
];

const MEMORY_PATTERNS: PatternTable = &[
    (&["32gb"], "32GB"),
    (&["16gb"], "16GB"),
    (&["8gb"], "8GB"),
    (&["4gb"], "4GB"),
    (&["64gb"], "64GB"),
];

/// Maps a model description to `MacBook Pro`, `MacBook Air`, `MacBook`,
/// `iMac` or `Mac Mini`. Unmatched values pass through with original casing.
#[must_use]
pub fn normalize_model(raw: Option<&str>) -> String {
    normalize_with(raw, MODEL_PATTERNS, str::to_owned)
}

/// Maps a processor description to an Apple silicon generation or an Intel
/// tier. Unmatched values are cut to their first ten characters.
#[must_use]
pub fn normalize_processor(raw: Option<&str>) -> String {
    normalize_with(raw, PROCESSOR_PATTERNS, |s| {
        s.chars().take(PROCESSOR_FALLBACK_CHARS).collect()
    })
}

/// Maps a storage description to a capacity label. Unmatched values pass
/// through unchanged.
#[must_use]
pub fn normalize_storage(raw: Option<&str>) -> String {
    normalize_with(raw, STORAGE_PATTERNS, str::to_owned)
}

/// Maps a memory description to a capacity label. Unmatched values pass
/// through unchanged.
#[must_use]
pub fn normalize_memory(raw: Option<&str>) -> String {
    normalize_with(raw, MEMORY_PATTERNS, str::to_owned)
}

fn normalize_with(
    raw: Option<&str>,
    patterns: PatternTable,
    fallback: fn(&str) -> String,
) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return UNKNOWN.to_owned();
    };

    let lower = raw.to_lowercase();
    patterns
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| lower.contains(needle)))
        .map_or_else(|| fallback(raw), |(_, label)| (*label).to_owned())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
