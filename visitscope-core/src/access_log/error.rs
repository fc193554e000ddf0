use std::path::PathBuf;
use thiserror::Error;

/// A line had the access log shape but its timestamp could not be read.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("invalid timestamp '{value}'")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid fractional seconds in timestamp '{value}'")]
    Fraction { value: String },
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to read access log {path}")]
    ReadLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unreadable line at {path}:{line_number}")]
    Line {
        path: PathBuf,
        line_number: usize,
        #[source]
        source: LineError,
    },
}

impl AnalyzeError {
    pub fn read_log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadLog {
            path: path.into(),
            source,
        }
    }

    pub fn line(path: impl Into<PathBuf>, line_number: usize, source: LineError) -> Self {
        Self::Line {
            path: path.into(),
            line_number,
            source,
        }
    }
}
