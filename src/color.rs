// ---------------------------------------------------------------------------
// Palette configuration
// ---------------------------------------------------------------------------

/// Colour wheel cycled across pie slices by position.
const CHART_WHEEL: [&str; 20] = [
    "#3B82F6", // Blue
    "#EF4444", // Red
    "#10B981", // Emerald
    "#F59E0B", // Amber
    "#8B5CF6", // Violet
    "#EC4899", // Pink
    "#06B6D4", // Cyan
    "#84CC16", // Lime
    "#F97316", // Orange
    "#6366F1", // Indigo
    "#14B8A6", // Teal
    "#F43F5E", // Rose
    "#8B4513", // Saddle Brown
    "#FF69B4", // Hot Pink
    "#32CD32", // Lime Green
    "#FF4500", // Orange Red
    "#9370DB", // Medium Purple
    "#00CED1", // Dark Turquoise
    "#FFD700", // Gold
    "#DC143C", // Crimson
];

/// Static colour configuration consumed by the chart builder and the
/// rendering layer. This is the crate's whole config surface; colours are
/// renderer-ready CSS strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Main series colour.
    pub primary: String,
    /// Gradient top for area fills.
    pub secondary: String,
    /// Gradient bottom and radar fill.
    pub area_fill: String,
    /// Cyclic multi-colour wheel for pie slices.
    pub wheel: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            primary: "#FD6464".to_string(),
            secondary: "rgba(253, 100, 100, 0.7)".to_string(),
            area_fill: "rgba(253, 100, 100, 0.2)".to_string(),
            wheel: CHART_WHEEL.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Palette {
    /// Colour for the slice at `index`, cycling the wheel.
    pub fn slice_color(&self, index: usize) -> &str {
        if self.wheel.is_empty() {
            return &self.primary;
        }
        &self.wheel[index % self.wheel.len()]
    }
}
