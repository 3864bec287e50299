/// Sort-key resolution: map user-typed column names to canonical column indices.
///
/// A query resolves to the shortest canonical name whose normalized form
/// starts with the normalized query. Normalization lower-cases and then drops
/// every non-ASCII character, so `"NORMAL"`, `"normal"` and `"nörmal"` all
/// resolve to "Normal Balance".
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::accounts::COLUMN_NAMES;

/// Lower-case `s` and strip every character outside 0x00–0x7F.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.to_lowercase().chars().filter(char::is_ascii).collect()
}

/// Find the shortest item that the normalized `query` is a prefix of.
///
/// Ties go to the earliest item. `None` means nothing matched.
///
/// An empty query is a prefix of everything and therefore resolves to the
/// shortest item overall.
#[must_use]
pub fn fuzzy_find<'a>(items: &[&'a str], query: &str) -> Option<&'a str> {
    let query = normalize(query);
    items
        .iter()
        .copied()
        .filter(|item| normalize(item).starts_with(&query))
        .min_by_key(|item| item.chars().count())
}

/// Resolve each sort key to an index into [`COLUMN_NAMES`].
///
/// Unresolved keys are dropped. Order and repeats are kept as given.
#[must_use]
pub fn sortby_to_index<S: AsRef<str>>(sortby: &[S]) -> Vec<usize> {
    sortby
        .iter()
        .filter_map(|key| {
            let key = key.as_ref();
            let found = fuzzy_find(&COLUMN_NAMES, key);
            if found.is_none() && tracing::enabled!(tracing::Level::DEBUG) {
                let hint = suggest(&COLUMN_NAMES, key).unwrap_or("-");
                tracing::debug!(key, hint, "ignoring unknown sort key");
            }
            found
        })
        .filter_map(|name| COLUMN_NAMES.iter().position(|c| *c == name))
        .collect()
}

/// Canonical names for a list of resolved indices.
#[must_use]
pub fn index_names(indices: &[usize]) -> Vec<&'static str> {
    indices
        .iter()
        .filter_map(|&i| COLUMN_NAMES.get(i).copied())
        .collect()
}

/// Best fuzzy candidate for a key that failed prefix resolution.
///
/// Only used for diagnostics; it never changes which columns are sorted on.
#[must_use]
pub fn suggest<'a>(items: &[&'a str], query: &str) -> Option<&'a str> {
    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    items
        .iter()
        .copied()
        .filter_map(|item| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(item, &mut buf);
            pattern.score(haystack, &mut matcher).map(|score| (item, score))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.len().cmp(&a.0.len())))
        .map(|(item, _)| item)
}
