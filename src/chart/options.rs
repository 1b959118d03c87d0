use serde::Serialize;

use crate::color::Palette;

use super::aggregate::Aggregation;
use super::axes::AxisSelection;

// ---------------------------------------------------------------------------
// Chart kinds
// ---------------------------------------------------------------------------

/// The chart variants the viewer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Radar,
    Step,
    Pie,
}

impl ChartKind {
    /// All variants, in selector order.
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Area,
        ChartKind::Radar,
        ChartKind::Step,
        ChartKind::Pie,
    ];

    /// Human-readable selector label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Radar => "Radar Chart",
            ChartKind::Step => "Step Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

// ---------------------------------------------------------------------------
// Declarative option structures
// ---------------------------------------------------------------------------

/// Declarative chart description handed to the rendering layer. Rebuilt
/// wholesale on every dataset, axis or variant change, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "lowercase")]
pub enum ChartOptions {
    Bar(CartesianChart),
    Line(CartesianChart),
    Area(CartesianChart),
    Step(CartesianChart),
    Pie(PieChart),
    Radar(RadarChart),
}

/// How a cartesian series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesShape {
    Bars,
    /// Smoothed line (line and area variants).
    Smooth,
    /// Line stepping at the midpoint between categories.
    Step,
}

/// Shared structure for the category-by-value variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartesianChart {
    /// Category labels along the x axis, first-seen order.
    pub categories: Vec<String>,
    /// Summed values, parallel to `categories`.
    pub values: Vec<f64>,
    pub x_name: String,
    pub y_name: String,
    pub series_name: String,
    /// Degrees to rotate crowded category labels by.
    pub label_rotation: u16,
    pub shape: SeriesShape,
    pub color: String,
    /// Gradient under the line (area variant only).
    pub fill: Option<AreaFill>,
}

/// Top-to-bottom gradient for an area fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaFill {
    pub from: String,
    pub to: String,
}

/// One pie slice with its wheel colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub series_name: String,
    pub slices: Vec<PieSlice>,
    /// Legend labels, truncated to 15 characters.
    pub legend: Vec<String>,
    /// Paginate the legend once it no longer fits on one row.
    pub legend_scroll: bool,
}

/// One radar spoke. `min`/`max` bound the normalized scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
    pub min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub series_name: String,
    pub indicators: Vec<RadarIndicator>,
    /// Values min-max scaled to 0–100.
    pub values: Vec<f64>,
    /// Original sums for tooltips, parallel to `values`.
    pub source_values: Vec<f64>,
    /// Untruncated category names, parallel to `indicators`.
    pub categories: Vec<String>,
    pub color: String,
    pub fill: String,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Number of categories a radar chart keeps before it gets unreadable.
const RADAR_CATEGORY_LIMIT: usize = 6;

/// Build the declarative options for one chart variant. Returns `None`
/// when the aggregation is empty, which the renderer shows as the
/// "no suitable data" placeholder rather than an error.
pub fn build_chart(
    kind: ChartKind,
    agg: &Aggregation,
    axes: &AxisSelection,
    palette: &Palette,
) -> Option<ChartOptions> {
    if agg.is_empty() {
        return None;
    }

    Some(match kind {
        ChartKind::Bar => {
            ChartOptions::Bar(cartesian(agg, axes, palette, SeriesShape::Bars, None))
        }
        ChartKind::Line => {
            ChartOptions::Line(cartesian(agg, axes, palette, SeriesShape::Smooth, None))
        }
        ChartKind::Step => {
            ChartOptions::Step(cartesian(agg, axes, palette, SeriesShape::Step, None))
        }
        ChartKind::Area => {
            let fill = AreaFill {
                from: palette.secondary.clone(),
                to: palette.area_fill.clone(),
            };
            ChartOptions::Area(cartesian(agg, axes, palette, SeriesShape::Smooth, Some(fill)))
        }
        ChartKind::Pie => ChartOptions::Pie(pie(agg, axes, palette)),
        ChartKind::Radar => ChartOptions::Radar(radar(agg, axes, palette)),
    })
}

fn cartesian(
    agg: &Aggregation,
    axes: &AxisSelection,
    palette: &Palette,
    shape: SeriesShape,
    fill: Option<AreaFill>,
) -> CartesianChart {
    CartesianChart {
        categories: agg.categories.clone(),
        values: agg.values.clone(),
        x_name: series_label(&axes.category, "category"),
        y_name: series_label(&axes.value, "value"),
        series_name: series_label(&axes.value, "value"),
        label_rotation: label_rotation(agg.categories.len()),
        shape,
        color: palette.primary.clone(),
        fill,
    }
}

fn pie(agg: &Aggregation, axes: &AxisSelection, palette: &Palette) -> PieChart {
    let slices = agg
        .categories
        .iter()
        .zip(&agg.values)
        .enumerate()
        .map(|(i, (name, &value))| PieSlice {
            name: name.clone(),
            value,
            color: palette.slice_color(i).to_string(),
        })
        .collect();

    PieChart {
        series_name: series_label(&axes.value, "value"),
        slices,
        legend: agg
            .categories
            .iter()
            .map(|cat| truncate_label(cat, 15))
            .collect(),
        legend_scroll: agg.categories.len() > 6,
    }
}

fn radar(agg: &Aggregation, axes: &AxisSelection, palette: &Palette) -> RadarChart {
    let n = agg.categories.len().min(RADAR_CATEGORY_LIMIT);
    let categories = agg.categories[..n].to_vec();
    let source_values = agg.values[..n].to_vec();
    let values = normalize_radar(&source_values);

    RadarChart {
        series_name: series_label(&axes.value, "value"),
        indicators: categories
            .iter()
            .map(|cat| RadarIndicator {
                name: truncate_label(cat, 10),
                max: 100.0,
                min: 0.0,
            })
            .collect(),
        values,
        source_values,
        categories,
        color: palette.primary.clone(),
        fill: palette.area_fill.clone(),
    }
}

/// Min-max scale to 0–100. A flat series pins every spoke to 50.
fn normalize_radar(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    values
        .iter()
        .map(|&v| {
            if max == min {
                50.0
            } else {
                (v - min) / (max - min) * 100.0
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Label helpers
// ---------------------------------------------------------------------------

/// Axis/series label derived from a column name: the `O_` export prefix
/// and underscores come out, the rest is lower-cased. An empty result
/// falls back to the given placeholder.
pub fn series_label(column: &str, fallback: &str) -> String {
    let label = column
        .strip_prefix("O_")
        .unwrap_or(column)
        .replace('_', " ")
        .to_lowercase();
    if label.is_empty() {
        fallback.to_string()
    } else {
        label
    }
}

/// Abbreviate a value-axis tick: millions as `1.2M`, thousands as `3k`,
/// zero as `0`, anything else verbatim.
pub fn tick_label(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Rotate crowded category labels so they stay readable.
fn label_rotation(categories: usize) -> u16 {
    if categories > 8 {
        45
    } else if categories > 4 {
        30
    } else {
        0
    }
}

/// Truncate a legend/indicator label, marking the cut with an ellipsis.
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars {
        let kept: String = label.chars().take(max_chars).collect();
        format!("{kept}...")
    } else {
        label.to_string()
    }
}
