//! Graph document model
//!
//! A document describes a single labeled chart: a title, a plot type hint,
//! and an ordered list of named series. The document is read once, pivoted
//! once into a [`crate::table::GraphTable`], rendered once, then discarded.

use std::collections::HashMap;

use serde::Serialize;

/// Plot type used when the document omits `"type"`
pub const DEFAULT_KIND: &str = "bar";

/// Series color used when a sequence omits `"color"`
pub const DEFAULT_COLOR: &str = "blue";

/// A single (label, value) point. The wire format calls the label `"title"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// x-axis category label
    #[serde(rename = "title")]
    pub label: String,

    /// y value
    pub value: f64,
}

/// A named, colored sequence of points; one column of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSequence {
    /// Series title, used as the column key (unique across the document)
    pub title: String,

    /// Display color, resolved to [`DEFAULT_COLOR`] at load time when absent
    pub color: String,

    /// Ordered points
    #[serde(rename = "datapoints")]
    pub points: Vec<DataPoint>,
}

impl DataSequence {
    /// Number of points in the sequence
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the sequence has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Top-level chart document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphDocument {
    /// Chart title
    pub title: String,

    /// Plot type hint. Kept as the raw string so that unsupported values
    /// are rejected by the renderer, not the loader.
    #[serde(rename = "type")]
    pub kind: String,

    /// Ordered series
    #[serde(rename = "datasequences")]
    pub sequences: Vec<DataSequence>,
}

impl GraphDocument {
    /// Look up a sequence by title
    pub fn sequence(&self, title: &str) -> Option<&DataSequence> {
        self.sequences.iter().find(|s| s.title == title)
    }

    /// Series titles in document order
    pub fn sequence_titles(&self) -> Vec<&str> {
        self.sequences.iter().map(|s| s.title.as_str()).collect()
    }

    /// Mapping from series title to its resolved display color
    pub fn color_map(&self) -> HashMap<String, String> {
        self.sequences
            .iter()
            .map(|s| (s.title.clone(), s.color.clone()))
            .collect()
    }

    /// Whether the document has no series
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
