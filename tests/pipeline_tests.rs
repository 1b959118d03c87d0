//! End-to-end pipeline tests: ingest → classify → axes → aggregate →
//! chart options, plus the table view alongside.

use datalens::{
    ChartKind, ChartOptions, Dataset, Value, ViewerState, classify_columns, group_sums,
    load_csv_str, load_json_str, select_axes,
};

const ORDERS_JSON: &str = r#"[
    {"Customer ID": "C-1", "Country": "Germany", "Total Sales": 1200, "Units": 3},
    {"Customer ID": "C-2", "Country": "Italy", "Total Sales": 800, "Units": 2},
    {"Customer ID": "C-3", "Country": "Germany", "Total Sales": 450, "Units": 4},
    {"Customer ID": "C-4", "Country": "France", "Total Sales": 675, "Units": 1}
]"#;

fn orders() -> Dataset {
    load_json_str(ORDERS_JSON).unwrap()
}

#[test]
fn test_json_to_chart_pipeline() {
    let dataset = orders();
    let classes = classify_columns(&dataset);
    assert_eq!(classes.categorical, vec!["Customer ID", "Country"]);
    assert_eq!(classes.numeric, vec!["Total Sales", "Units"]);

    // priority picks the sales measure, the anti-ID rule keeps the
    // customer column off the category axis
    let axes = select_axes(&classes);
    assert_eq!(axes.category, "Country");
    assert_eq!(axes.value, "Total Sales");

    let agg = group_sums(&dataset, &axes.category, &axes.value);
    assert_eq!(agg.categories, vec!["Germany", "Italy", "France"]);
    assert_eq!(agg.values, vec![1650.0, 800.0, 675.0]);

    let total: f64 = agg.values.iter().sum();
    assert_eq!(total, 1200.0 + 800.0 + 450.0 + 675.0);
}

#[test]
fn test_viewer_state_end_to_end() {
    let mut viewer = ViewerState::default();
    viewer.set_dataset(orders());

    let table = viewer.table();
    assert_eq!(table.summary(), "Showing 4 of 4 records");
    let labels: Vec<&str> = table.columns.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Customer ID", "Country", "Total Sales", "Units"]);

    viewer.set_search("germany");
    assert_eq!(viewer.table().summary(), "Showing 2 of 4 records");

    let Some(ChartOptions::Bar(bar)) = viewer.chart() else {
        panic!("expected a bar chart");
    };
    assert_eq!(bar.categories, vec!["Germany", "Italy", "France"]);
    assert_eq!(bar.series_name, "total sales");
    assert_eq!(bar.x_name, "country");
}

#[test]
fn test_columnar_frame_matches_records_frame() {
    let columnar = load_json_str(
        r#"{
            "columns": ["Customer ID", "Country", "Total Sales", "Units"],
            "index": [0, 1, 2, 3],
            "data": [
                ["C-1", "Germany", 1200, 3],
                ["C-2", "Italy", 800, 2],
                ["C-3", "Germany", 450, 4],
                ["C-4", "France", 675, 1]
            ]
        }"#,
    )
    .unwrap();
    let records = orders();

    assert_eq!(columnar.columns(), records.columns());
    assert_eq!(
        group_sums(&columnar, "Country", "Total Sales"),
        group_sums(&records, "Country", "Total Sales")
    );
}

#[test]
fn test_csv_ingest_feeds_the_same_pipeline() {
    let dataset = load_csv_str(
        "Country,Total Sales\nGermany,1200\nItaly,800\nGermany,450\n",
    )
    .unwrap();

    assert_eq!(
        dataset.records()[0].get("Total Sales"),
        Some(&Value::Integer(1200))
    );

    let axes = select_axes(&classify_columns(&dataset));
    let agg = group_sums(&dataset, &axes.category, &axes.value);
    assert_eq!(agg.categories, vec!["Germany", "Italy"]);
    assert_eq!(agg.values, vec![1650.0, 800.0]);
}

#[test]
fn test_axis_overrides_reach_the_chart() {
    let mut viewer = ViewerState::default();
    viewer.set_dataset(orders());
    viewer.set_value_axis("Units");
    viewer.set_chart_kind(ChartKind::Pie);

    let Some(ChartOptions::Pie(pie)) = viewer.chart() else {
        panic!("expected a pie chart");
    };
    assert_eq!(pie.series_name, "units");
    let values: Vec<f64> = pie.slices.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![7.0, 2.0, 1.0]);
}

#[test]
fn test_all_categorical_dataset_cannot_chart() {
    let mut viewer = ViewerState::default();
    viewer.set_dataset(load_json_str(r#"[{"a": "x", "b": "y"}]"#).unwrap());

    assert!(viewer.axes().is_empty());
    assert!(viewer.aggregation().is_empty());
    assert!(viewer.chart().is_none());
    // the table still renders
    assert_eq!(viewer.table().summary(), "Showing 1 of 1 records");
}

#[test]
fn test_chart_options_serialize_for_the_renderer() {
    let mut viewer = ViewerState::default();
    viewer.set_dataset(orders());

    let options = viewer.chart().unwrap();
    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json["chart"], "bar");
    assert_eq!(json["categories"][0], "Germany");
    assert_eq!(json["values"][0], 1650.0);
}
