//! Search over inventory records.
//!
//! Pure functions over a record slice; none of them mutate or consume the
//! store's sequence. Results are copied out so the caller can reorder them
//! freely (the view sorts search results by id before display).

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::record::InventoryRecord;

/// Exact id lookup; first hit wins.
pub fn find_by_id<'a>(records: &'a [InventoryRecord], id: &str) -> Option<&'a InventoryRecord> {
    records.iter().find(|r| r.id == id)
}

/// Case-insensitive substring match on the record name.
pub fn search_by_name(records: &[InventoryRecord], query: &str) -> Vec<InventoryRecord> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

/// Case-insensitive exact match on the record category.
pub fn search_by_category(records: &[InventoryRecord], category: &str) -> Vec<InventoryRecord> {
    let q = category.trim().to_lowercase();
    records
        .iter()
        .filter(|r| r.category.to_lowercase() == q)
        .cloned()
        .collect()
}

/// Typo-tolerant name match.
///
/// Ranks every record name with a skim-style fuzzy score and returns the
/// best `limit` hits, score-descending. Non-matching names are dropped
/// entirely, so a query with no plausible match yields an empty result
/// rather than the whole inventory.
pub fn fuzzy_search_name(
    records: &[InventoryRecord],
    query: &str,
    limit: usize,
) -> Vec<InventoryRecord> {
    let query = query.trim();
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default().ignore_case();

    let mut ranked: Vec<(i64, &InventoryRecord)> = records
        .iter()
        .filter_map(|r| matcher.fuzzy_match(&r.name, query).map(|score| (score, r)))
        .collect();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.truncate(limit);

    ranked.into_iter().map(|(_, r)| r.clone()).collect()
}
