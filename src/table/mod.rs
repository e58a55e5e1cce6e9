//! Pivoted table: one row per distinct x-label, one column per series

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::graph::GraphDocument;

/// Policy applied when a table cell receives more than one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// First value wins; later values for the same cell are dropped
    First,
    /// A second value for an occupied cell is an error
    Strict,
}

impl MergePolicy {
    /// Policy name as a string
    pub fn name(&self) -> &'static str {
        match self {
            MergePolicy::First => "first",
            MergePolicy::Strict => "strict",
        }
    }

    /// Parse a policy from a string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "first" => Some(MergePolicy::First),
            "strict" | "error" => Some(MergePolicy::Strict),
            _ => None,
        }
    }
}

/// Pivoted view of a graph document.
///
/// Rows are ordered by first-seen x-label across the scan of all sequences
/// in document order; columns keep the original sequence order. Missing
/// (series, label) combinations stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphTable {
    /// Row labels in first-seen order
    labels: Vec<String>,

    /// Column names (series titles) in document order
    columns: Vec<String>,

    /// Cell values indexed `[column][row]`
    cells: Vec<Vec<Option<f64>>>,

    /// Label -> row position
    label_index: HashMap<String, usize>,
}

impl GraphTable {
    /// Pivot a document into a table under the given merge policy.
    ///
    /// Fails with [`Error::DuplicateColumnName`] when two sequences share a
    /// title, and with [`Error::ValueConflict`] when a cell receives a second
    /// value under [`MergePolicy::Strict`].
    pub fn from_document(doc: &GraphDocument, policy: MergePolicy) -> Result<Self> {
        let mut table = GraphTable {
            labels: Vec::new(),
            columns: Vec::new(),
            cells: Vec::new(),
            label_index: HashMap::new(),
        };

        // Series titles become column keys, so they must be unique
        for seq in &doc.sequences {
            if table.columns.contains(&seq.title) {
                return Err(Error::DuplicateColumnName(seq.title.clone()));
            }
            table.columns.push(seq.title.clone());
            table.cells.push(Vec::new());
        }

        // 全系列を文書順に走査し、初出のラベル順に行を作る
        for (col, seq) in doc.sequences.iter().enumerate() {
            for point in &seq.points {
                let row = table.row_for(&point.label);
                if table.cells[col][row].is_none() {
                    table.cells[col][row] = Some(point.value);
                } else {
                    match policy {
                        MergePolicy::First => {
                            log::warn!(
                                "dropping duplicate value {} for label '{}' in series '{}'",
                                point.value,
                                point.label,
                                seq.title
                            );
                        }
                        MergePolicy::Strict => {
                            return Err(Error::ValueConflict {
                                label: point.label.clone(),
                                column: seq.title.clone(),
                            });
                        }
                    }
                }
            }
        }

        Ok(table)
    }

    // Row position for a label, registering it on first sight
    fn row_for(&mut self, label: &str) -> usize {
        if let Some(&row) = self.label_index.get(label) {
            return row;
        }
        let row = self.labels.len();
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), row);
        for column in &mut self.cells {
            column.push(None);
        }
        row
    }

    /// Number of rows (distinct x-labels)
    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of value columns (series)
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Row labels in table order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Column names in table order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Whether a column exists
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Whether the table has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.columns.is_empty()
    }

    /// Cell value by row and column position
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.cells
            .get(column)
            .and_then(|values| values.get(row))
            .copied()
            .flatten()
    }

    /// Cell value by label and column name
    pub fn value(&self, label: &str, column: &str) -> Option<f64> {
        let row = *self.label_index.get(label)?;
        let col = self.columns.iter().position(|c| c == column)?;
        self.get(row, col)
    }

    /// All values of one column in row order
    pub fn column_values(&self, column: &str) -> Result<Vec<Option<f64>>> {
        let col = self
            .columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
        Ok(self.cells[col].clone())
    }

    /// Largest cell value, if any cell is populated
    pub fn max_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .filter_map(|v| *v)
            .fold(None, |acc, v| match acc {
                None => Some(v),
                Some(m) => Some(m.max(v)),
            })
    }

    /// Smallest cell value, if any cell is populated
    pub fn min_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .filter_map(|v| *v)
            .fold(None, |acc, v| match acc {
                None => Some(v),
                Some(m) => Some(m.min(v)),
            })
    }
}
