pub mod error;
pub mod graph;
pub mod io;
pub mod table;
pub mod vis;

// Re-export commonly used types
pub use error::{Error, Result};
pub use graph::{DataPoint, DataSequence, GraphDocument};
pub use table::{GraphTable, MergePolicy};
pub use vis::{PlotKind, PlotSettings};

use std::path::Path;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Load a graph document, pivot it, and render the chart image.
///
/// This is the whole pipeline in one call: [`io::read_graph`] →
/// [`GraphTable::from_document`] (first-wins merge policy) →
/// [`vis::render_png`]. No state survives the call.
pub fn render_graph_file<P, Q>(input: P, output: Q, settings: &PlotSettings) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let doc = io::read_graph(input)?;
    let table = GraphTable::from_document(&doc, MergePolicy::First)?;
    vis::render_png(&doc, &table, settings, output)
}
