use thiserror::Error;

/// Error type covering loading, pivoting, and rendering
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("JSON error")]
    Json(#[source] serde_json::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("required key not found: {0}")]
    KeyNotFound(String),

    #[error("data format error: {0}")]
    Format(String),

    #[error("duplicate series title: {0}")]
    DuplicateColumnName(String),

    #[error("conflicting values for label '{label}' in column '{column}'")]
    ValueConflict { label: String, column: String },

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("empty data: {0}")]
    Empty(String),

    #[error("unsupported plot type: {0}")]
    UnsupportedPlotType(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("visualization error: {0}")]
    Visualization(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

// Conversion for plotters drawing errors
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("plot drawing error: {}", err))
    }
}
