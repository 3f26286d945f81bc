//! Failures raised by the input adapters and the result sink.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is empty", .path.display())]
    EmptyFile { path: PathBuf },

    #[error("column '{column}' not found in {} (row {row})", .path.display())]
    ColumnNotFound {
        path: PathBuf,
        column: String,
        /// 0 is the header row, data rows start at 1.
        row: usize,
    },

    #[error(
        "column index {index} out of range for {} (row {row} has {width} columns)",
        .path.display()
    )]
    ColumnIndexOutOfRange {
        path: PathBuf,
        index: usize,
        row: usize,
        width: usize,
    },

    #[error("{0}")]
    ColumnSelector(String),

    #[error("{} file must be a .csv or .txt file, got '{extension}'", .path.display())]
    UnsupportedSource { path: PathBuf, extension: String },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("output file must be a .csv or .json file, got '{extension}'")]
    UnsupportedFormat { extension: String },

    #[error("write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("encode csv output")]
    EncodeCsv(#[source] csv::Error),

    #[error("encode json output")]
    EncodeJson(#[source] serde_json::Error),
}
