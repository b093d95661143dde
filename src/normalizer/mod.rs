//! Event-type normalization.
//!
//! Maps the free-text `EVTYPE` label of a record onto a closed taxonomy of
//! canonical categories. The mapping is a lower-case exact-match lookup in a
//! static table; anything the table does not know resolves to [`CATCH_ALL`].

mod table;

use std::collections::BTreeSet;

use table::EVENT_TYPES;

/// Destination for labels without a specific mapping.
pub const CATCH_ALL: &str = "other";

/// Canonical category for a raw label.
pub fn normalize(raw: &str) -> &'static str {
    lookup(raw).unwrap_or(CATCH_ALL)
}

/// Canonical category for a raw label, `None` if the table has no entry.
///
/// Unlike [`normalize`] this distinguishes labels that are explicitly mapped
/// to the catch-all from labels that simply fell through.
pub fn lookup(raw: &str) -> Option<&'static str> {
    EVENT_TYPES.get(raw.to_lowercase().as_str()).copied()
}

/// Every canonical category the normalizer can produce, catch-all included.
pub fn canonical_categories() -> BTreeSet<&'static str> {
    EVENT_TYPES
        .values()
        .copied()
        .chain(std::iter::once(CATCH_ALL))
        .collect()
}

/// Whether `category` is the catch-all.
pub fn is_catch_all(category: &str) -> bool {
    category == CATCH_ALL
}
