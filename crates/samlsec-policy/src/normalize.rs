//! Algorithm identifier normalization.
//!
//! Identifiers are algorithm URIs. Every list held by a configuration goes
//! through [`normalize_identifiers`] so that resolution only ever sees trimmed,
//! non-empty, unique values.

use std::collections::BTreeSet;

/// Normalize a collection of algorithm identifiers.
///
/// Leading and trailing whitespace is stripped, empty entries are dropped and
/// duplicates collapse into one entry.
pub fn normalize_identifiers<I, S>(ids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ids.into_iter()
        .filter_map(|id| normalize_identifier(id.as_ref()))
        .collect()
}

/// Normalize a single identifier, returning `None` if nothing is left.
pub fn normalize_identifier(id: &str) -> Option<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
