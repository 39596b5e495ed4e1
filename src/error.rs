use std::path::PathBuf;

use thiserror::Error;

/// Problems with the shape or content of an input document.
///
/// These are recoverable: callers surface the message inline and keep the
/// previous chart state.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data format. Must include \"type\" and \"data\" fields")]
    MissingFields,

    #[error("Unsupported chart type: {0}")]
    UnsupportedKind(String),

    #[error("Invalid data format. \"data\" must be an array")]
    NotSequence,

    #[error("Invalid data element at index {index}: {reason}")]
    InvalidElement { index: usize, reason: &'static str },

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),
}

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Please upload a JSON file (got {})", path.display())]
    NotJson { path: PathBuf },

    #[error("Error reading file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create chart: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ChartError {
    /// True for errors raised while locating or reading an input file.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ChartError::NotJson { .. } | ChartError::FileRead { .. } | ChartError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
