use std::collections::HashMap;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Group-and-sum aggregation
// ---------------------------------------------------------------------------

/// Per-category totals in first-seen order. `categories`, `values` and
/// `counts` are parallel; charts consume the sums, `counts` records how
/// many rows fed each total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Aggregation {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

/// Group records by `category_col` and sum `value_col` per group.
///
/// Missing or falsy category values fall back to `"Unknown"`; missing or
/// falsy measure values contribute 0, so a true zero is indistinguishable
/// from an absent cell. Categories come out in first-seen record order.
/// An empty axis name or an empty dataset produces an empty result.
pub fn group_sums(dataset: &Dataset, category_col: &str, value_col: &str) -> Aggregation {
    if category_col.is_empty() || value_col.is_empty() {
        return Aggregation::default();
    }

    let mut agg = Aggregation::default();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in dataset.records() {
        let category = match record.get(category_col) {
            Some(value) if !value.is_falsy() => value.to_string(),
            _ => "Unknown".to_string(),
        };
        let value = match record.get(value_col) {
            Some(value) if !value.is_falsy() => value.as_number(),
            _ => 0.0,
        };

        let slot = *slots.entry(category.clone()).or_insert_with(|| {
            agg.categories.push(category.clone());
            agg.values.push(0.0);
            agg.counts.push(0);
            agg.categories.len() - 1
        });
        agg.values[slot] += value;
        agg.counts[slot] += 1;
    }

    agg
}
