//! Plot kinds and appearance settings

/// Rendering style selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Grouped vertical bars
    Bar,
    /// One polyline per series
    Line,
}

impl PlotKind {
    /// Kind name as a string
    pub fn name(&self) -> &'static str {
        match self {
            PlotKind::Bar => "bar",
            PlotKind::Line => "line",
        }
    }

    /// Parse a kind from a string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bar" => Some(PlotKind::Bar),
            "line" => Some(PlotKind::Line),
            _ => None,
        }
    }
}

/// Chart appearance settings
#[derive(Debug, Clone)]
pub struct PlotSettings {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Chart background color
    pub background: (u8, u8, u8),

    /// Caption, tick label, and value label color
    pub foreground: (u8, u8, u8),

    /// Draw the series legend
    pub show_legend: bool,

    /// Label every value on the chart
    pub value_labels: bool,

    /// Open the written image with the system viewer
    pub show: bool,

    /// Caption font size
    pub caption_font_size: u32,

    /// Axis tick label font size
    pub label_font_size: u32,

    /// Value label font size
    pub value_font_size: u32,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            width: 1000,
            height: 600,
            // charts draw on a dark background
            background: (18, 18, 20),
            foreground: (235, 235, 235),
            show_legend: true,
            value_labels: true,
            show: true,
            caption_font_size: 30,
            label_font_size: 12,
            value_font_size: 10,
        }
    }
}
