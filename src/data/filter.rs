use std::collections::BTreeMap;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Free-text search
// ---------------------------------------------------------------------------

/// Return indices of records matching the search query.
///
/// A record matches when any of its values, stringified and lower-cased,
/// contains the lower-cased query as a substring. An empty or
/// whitespace-only query keeps every record.
pub fn search_indices(dataset: &Dataset, query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..dataset.len()).collect();
    }

    let needle = query.to_lowercase();
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            record
                .values()
                .any(|value| value.to_string().to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Column visibility
// ---------------------------------------------------------------------------

/// Per-column visibility toggles: column_name → shown. Purely a
/// presentation concern; never affects the dataset or the search result.
pub type VisibilityState = BTreeMap<String, bool>;

/// Initialise a [`VisibilityState`] with every schema column visible.
pub fn init_visibility_state(dataset: &Dataset) -> VisibilityState {
    dataset
        .columns()
        .iter()
        .map(|col| (col.clone(), true))
        .collect()
}

/// Flip one column's visibility. A column the state has never seen
/// becomes visible on its first toggle.
pub fn toggle_column(state: &mut VisibilityState, column: &str) {
    let shown = state.entry(column.to_string()).or_insert(false);
    *shown = !*shown;
}

/// The schema columns currently switched on, in schema order.
pub fn visible_columns(dataset: &Dataset, state: &VisibilityState) -> Vec<String> {
    dataset
        .columns()
        .iter()
        .filter(|col| state.get(*col).copied().unwrap_or(false))
        .cloned()
        .collect()
}
