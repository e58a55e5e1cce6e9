pub mod csv;
pub mod json;

// Re-export commonly used functions
pub use self::csv::write_table_csv;
pub use self::json::{read_graph, write_graph};
