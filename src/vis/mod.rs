//! Chart rendering on top of plotters
//!
//! The renderer consumes a [`crate::graph::GraphDocument`] plus its pivoted
//! [`crate::table::GraphTable`] and draws a single bar or line chart PNG:
//! one colored series per table column, value labels on every point, the
//! original x-labels as ticks, no y tick labels and no axis frame.

// Module structure
pub mod backend;
pub mod color;
pub mod config;

// Re-export public items
pub use self::backend::render_png;
pub use self::color::resolve_color;
pub use self::config::{PlotKind, PlotSettings};
