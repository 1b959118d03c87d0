use super::model::Dataset;

// ---------------------------------------------------------------------------
// Column classification
// ---------------------------------------------------------------------------

/// Schema partition derived from the first record: a column is numeric
/// when its first value is numeric, categorical otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnClasses {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
    pub all: Vec<String>,
}

/// Classify every column of the dataset by the type of its value in the
/// first record. One-shot inference: later rows never change the
/// classification, so a column whose first value is atypical stays
/// misclassified for all rows. Empty dataset → all partitions empty.
pub fn classify_columns(dataset: &Dataset) -> ColumnClasses {
    let Some(first) = dataset.records().first() else {
        return ColumnClasses::default();
    };

    let mut classes = ColumnClasses::default();
    for (column, value) in first.iter() {
        classes.all.push(column.to_string());
        if value.is_numeric() {
            classes.numeric.push(column.to_string());
        } else {
            classes.categorical.push(column.to_string());
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Record, Value};

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_partitions_by_first_record_type() {
        let dataset = Dataset::from_records(vec![record(&[
            ("Country", Value::String("Germany".into())),
            ("Qty", Value::Integer(3)),
            ("Price", Value::Float(9.5)),
            ("Active", Value::Bool(true)),
            ("Note", Value::Null),
        ])]);

        let classes = classify_columns(&dataset);
        assert_eq!(classes.numeric, vec!["Qty", "Price"]);
        assert_eq!(classes.categorical, vec!["Country", "Active", "Note"]);
        assert_eq!(
            classes.all,
            vec!["Country", "Qty", "Price", "Active", "Note"]
        );
    }

    #[test]
    fn test_empty_dataset_yields_empty_partitions() {
        let classes = classify_columns(&Dataset::from_records(Vec::new()));
        assert_eq!(classes, ColumnClasses::default());
    }

    #[test]
    fn test_first_row_fixes_classification() {
        // Heterogeneous column: string first, numbers after. Stays
        // categorical for the whole dataset.
        let dataset = Dataset::from_records(vec![
            record(&[("code", Value::String("n/a".into()))]),
            record(&[("code", Value::Integer(12))]),
        ]);

        let classes = classify_columns(&dataset);
        assert_eq!(classes.categorical, vec!["code"]);
        assert!(classes.numeric.is_empty());
    }

    #[test]
    fn test_pure_and_idempotent() {
        let dataset = Dataset::from_records(vec![record(&[
            ("a", Value::Integer(1)),
            ("b", Value::String("x".into())),
        ])]);
        assert_eq!(classify_columns(&dataset), classify_columns(&dataset));
    }
}
