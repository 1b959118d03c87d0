use crate::data::schema::ColumnClasses;

// ---------------------------------------------------------------------------
// Default axis heuristics
// ---------------------------------------------------------------------------

/// Measure-column names tried first for the value axis, most specific first.
const VALUE_PRIORITY: [&str; 8] = [
    "total sales",
    "sales",
    "amount",
    "total",
    "revenue",
    "value",
    "price",
    "quantity",
];

/// Grouping-column names tried first for the category axis.
const CATEGORY_PRIORITY: [&str; 6] = [
    "name",
    "first name",
    "last name",
    "country",
    "category",
    "type",
];

/// The chart's axis pair: the grouping column and the measure column.
/// Both names empty means no chart is possible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisSelection {
    pub category: String,
    pub value: String,
}

impl AxisSelection {
    /// Whether either axis is unresolved.
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() || self.value.is_empty()
    }
}

/// First column whose lower-cased name contains a priority term, scanning
/// terms in order.
fn priority_match<'a>(columns: &'a [String], priorities: &[&str]) -> Option<&'a String> {
    priorities
        .iter()
        .find_map(|term| columns.iter().find(|col| col.to_lowercase().contains(term)))
}

/// Pick default axes for the given column classes.
///
/// Each axis scans its priority list and falls back to the first column
/// of its class in schema order. A categorical pick whose name contains
/// "id" is swapped for the first non-ID categorical column when one
/// exists. Returns empty selections when either class is missing.
pub fn select_axes(classes: &ColumnClasses) -> AxisSelection {
    if classes.numeric.is_empty() || classes.categorical.is_empty() {
        return AxisSelection::default();
    }

    let value = priority_match(&classes.numeric, &VALUE_PRIORITY)
        .unwrap_or(&classes.numeric[0])
        .clone();

    let mut category = priority_match(&classes.categorical, &CATEGORY_PRIORITY)
        .unwrap_or(&classes.categorical[0])
        .clone();

    if category.to_lowercase().contains("id") {
        if let Some(alt) = classes
            .categorical
            .iter()
            .find(|col| !col.to_lowercase().contains("id"))
        {
            category = alt.clone();
        }
    }

    AxisSelection { category, value }
}

/// Apply user overrides on top of the heuristic defaults. A non-empty
/// override wins for its axis; the two axes resolve independently.
pub fn resolve_axes(
    classes: &ColumnClasses,
    category_override: &str,
    value_override: &str,
) -> AxisSelection {
    let defaults = select_axes(classes);
    AxisSelection {
        category: if category_override.is_empty() {
            defaults.category
        } else {
            category_override.to_string()
        },
        value: if value_override.is_empty() {
            defaults.value
        } else {
            value_override.to_string()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(numeric: &[&str], categorical: &[&str]) -> ColumnClasses {
        ColumnClasses {
            numeric: numeric.iter().map(|s| s.to_string()).collect(),
            categorical: categorical.iter().map(|s| s.to_string()).collect(),
            all: numeric
                .iter()
                .chain(categorical.iter())
                .map(|s| s.to_string())
                .collect(),
        }
    }

    #[test]
    fn test_value_priority_beats_schema_order() {
        let selected = select_axes(&classes(&["Employee ID", "Total Sales"], &["Country"]));
        assert_eq!(selected.value, "Total Sales");
    }

    #[test]
    fn test_category_priority_beats_schema_order() {
        let selected = select_axes(&classes(&["Total Order Quantity"], &["Customer ID", "Country"]));
        assert_eq!(selected.category, "Country");
    }

    #[test]
    fn test_id_column_swapped_for_non_id_fallback() {
        // No priority term matches; the schema-first pick is an ID column
        // and gets replaced.
        let selected = select_axes(&classes(&["Qty"], &["Customer ID", "Region"]));
        assert_eq!(selected.category, "Region");
    }

    #[test]
    fn test_id_column_kept_when_nothing_else_exists() {
        let selected = select_axes(&classes(&["Qty"], &["Customer ID"]));
        assert_eq!(selected.category, "Customer ID");
    }

    #[test]
    fn test_fallback_to_first_of_each_class() {
        let selected = select_axes(&classes(&["Weight", "Height"], &["Region", "Zone"]));
        assert_eq!(selected.value, "Weight");
        assert_eq!(selected.category, "Region");
    }

    #[test]
    fn test_missing_class_disables_both_axes() {
        assert!(select_axes(&classes(&[], &["Country"])).is_empty());
        assert!(select_axes(&classes(&["Qty"], &[])).is_empty());
    }

    #[test]
    fn test_overrides_win_independently() {
        let classes = classes(&["Qty", "Price"], &["Country", "Region"]);

        let resolved = resolve_axes(&classes, "", "Price");
        assert_eq!(resolved.category, "Country");
        assert_eq!(resolved.value, "Price");

        let resolved = resolve_axes(&classes, "Region", "");
        assert_eq!(resolved.category, "Region");
        assert_eq!(resolved.value, "Qty");
    }

    #[test]
    fn test_selection_is_deterministic() {
        let classes = classes(&["Total Sales", "Qty"], &["Customer ID", "Country"]);
        assert_eq!(select_axes(&classes), select_axes(&classes));
    }
}
