//! View-model engine for an interactive tabular data viewer.
//!
//! Feed in a row-oriented dataset (or a columnar frame, flattened on
//! ingest) and derive everything a rendering layer needs to toggle
//! between a searchable, column-filterable table and a configurable
//! chart: column classification, default axis selection, group-and-sum
//! aggregation, declarative chart options, and a stringified table view.
//!
//! All derivation is synchronous and pure; [`state::ViewerState`] holds
//! the dataset plus the user's transient selections and recomputes the
//! derived views on demand.
//!
//! ```
//! use datalens::{ViewerState, load_json_str};
//!
//! let data = r#"[
//!     {"Country": "Germany", "Qty": 3},
//!     {"Country": "Italy", "Qty": 2}
//! ]"#;
//!
//! let mut viewer = ViewerState::default();
//! viewer.set_dataset(load_json_str(data).unwrap());
//!
//! assert_eq!(viewer.table().summary(), "Showing 2 of 2 records");
//! assert_eq!(viewer.axes().category, "Country");
//! assert!(viewer.chart().is_some());
//! ```

pub mod chart;
pub mod color;
pub mod data;
pub mod state;
pub mod table;

pub use chart::aggregate::{Aggregation, group_sums};
pub use chart::axes::{AxisSelection, resolve_axes, select_axes};
pub use chart::options::{
    ChartKind, ChartOptions, SeriesShape, build_chart, series_label, tick_label,
};
pub use color::Palette;
pub use data::filter::{
    VisibilityState, init_visibility_state, search_indices, toggle_column, visible_columns,
};
pub use data::loader::{load_csv_str, load_json_str};
pub use data::model::{Dataset, Record, Value};
pub use data::schema::{ColumnClasses, classify_columns};
pub use state::{ViewMode, ViewerState};
pub use table::{TableColumn, TableView, build_table, header_label};
