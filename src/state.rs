use crate::chart::aggregate::{Aggregation, group_sums};
use crate::chart::axes::{AxisSelection, resolve_axes};
use crate::chart::options::{ChartKind, ChartOptions, build_chart};
use crate::color::Palette;
use crate::data::filter::{VisibilityState, init_visibility_state, search_indices, toggle_column};
use crate::data::model::Dataset;
use crate::data::schema::{ColumnClasses, classify_columns};
use crate::table::{TableView, build_table};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Which of the two views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Table,
    Chart,
}

/// One viewer instance: the dataset plus the user's transient selections.
///
/// Every derived artifact (column classes, axes, aggregation, chart
/// options, table view) is recomputed on demand from the fields here;
/// nothing is cached across input changes and everything dies with the
/// instance.
pub struct ViewerState {
    /// Loaded dataset (None until data arrives).
    pub dataset: Option<Dataset>,

    /// Active view.
    pub view: ViewMode,

    /// Selected chart variant.
    pub chart_kind: ChartKind,

    /// Free-text table search query.
    pub search: String,

    /// Per-column table visibility toggles.
    pub visibility: VisibilityState,

    /// User override for the category axis; empty means use the heuristic.
    pub category_axis: String,

    /// User override for the value axis; empty means use the heuristic.
    pub value_axis: String,

    /// Colour configuration.
    pub palette: Palette,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            dataset: None,
            view: ViewMode::Table,
            chart_kind: ChartKind::Bar,
            search: String::new(),
            visibility: VisibilityState::default(),
            category_axis: String::new(),
            value_axis: String::new(),
            palette: Palette::default(),
        }
    }
}

impl ViewerState {
    /// Ingest a new dataset and reset the transient selections.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.visibility = init_visibility_state(&dataset);
        self.search.clear();
        self.category_axis.clear();
        self.value_axis.clear();

        log::info!(
            "dataset loaded: {} records, {} columns",
            dataset.len(),
            dataset.columns().len()
        );
        self.dataset = Some(dataset);
    }

    /// Column classification for the current dataset.
    pub fn classes(&self) -> ColumnClasses {
        self.dataset.as_ref().map(classify_columns).unwrap_or_default()
    }

    /// The effective axis pair: heuristic defaults with user overrides
    /// applied per axis.
    pub fn axes(&self) -> AxisSelection {
        resolve_axes(&self.classes(), &self.category_axis, &self.value_axis)
    }

    /// Group-and-sum aggregation over the full dataset for the current
    /// axes. The table search never feeds into this.
    pub fn aggregation(&self) -> Aggregation {
        let axes = self.axes();
        self.dataset
            .as_ref()
            .map(|ds| group_sums(ds, &axes.category, &axes.value))
            .unwrap_or_default()
    }

    /// Declarative chart options for the renderer; `None` when the data
    /// cannot chart.
    pub fn chart(&self) -> Option<ChartOptions> {
        build_chart(self.chart_kind, &self.aggregation(), &self.axes(), &self.palette)
    }

    /// Table view for the renderer.
    pub fn table(&self) -> TableView {
        self.dataset
            .as_ref()
            .map(|ds| build_table(ds, &self.search, &self.visibility))
            .unwrap_or_default()
    }

    /// Indices of records matching the current search.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.dataset
            .as_ref()
            .map(|ds| search_indices(ds, &self.search))
            .unwrap_or_default()
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        log::debug!("search query: {:?}", self.search);
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
        log::debug!("chart kind: {}", kind.label());
    }

    /// Pin the category axis to a column; empty clears back to the heuristic.
    pub fn set_category_axis(&mut self, column: impl Into<String>) {
        self.category_axis = column.into();
    }

    /// Pin the value axis to a column; empty clears back to the heuristic.
    pub fn set_value_axis(&mut self, column: impl Into<String>) {
        self.value_axis = column.into();
    }

    /// Flip one column's table visibility.
    pub fn toggle_column(&mut self, column: &str) {
        toggle_column(&mut self.visibility, column);
    }
}
