use serde::Serialize;

use crate::data::filter::{VisibilityState, search_indices, visible_columns};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Table view model
// ---------------------------------------------------------------------------

/// One rendered column: the schema name plus its header label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub name: String,
    pub label: String,
}

/// Everything the table renderer needs: visible columns, stringified rows
/// for the records surviving the search, and the shown/total counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub shown: usize,
    pub total: usize,
}

impl TableView {
    /// The record-count footer line.
    pub fn summary(&self) -> String {
        format!("Showing {} of {} records", self.shown, self.total)
    }
}

/// Header label for a column: the `O_` export prefix and underscores come
/// out and each word is title-cased.
pub fn header_label(column: &str) -> String {
    let base = column.strip_prefix("O_").unwrap_or(column).replace('_', " ");

    let mut label = String::with_capacity(base.len());
    let mut at_word_start = true;
    for ch in base.chars() {
        if at_word_start {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        at_word_start = !ch.is_alphanumeric();
    }
    label
}

/// Assemble the table view from the current search query and column
/// visibility. Missing or falsy cells render as empty strings.
pub fn build_table(dataset: &Dataset, query: &str, visibility: &VisibilityState) -> TableView {
    let columns: Vec<TableColumn> = visible_columns(dataset, visibility)
        .into_iter()
        .map(|name| TableColumn {
            label: header_label(&name),
            name,
        })
        .collect();

    let indices = search_indices(dataset, query);
    let rows: Vec<Vec<String>> = indices
        .iter()
        .map(|&i| {
            let record = &dataset.records()[i];
            columns
                .iter()
                .map(|col| {
                    record
                        .get(&col.name)
                        .map(|value| value.display_or_empty())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    TableView {
        shown: rows.len(),
        total: dataset.len(),
        columns,
        rows,
    }
}
