//! Persist a draw result as CSV or JSON.

use std::fs;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::core::types::DrawResult;
use crate::io::errors::SinkError;
use crate::io::source::extension;

/// Serialization format, chosen from the destination's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self, SinkError> {
        match extension(path).as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(SinkError::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

/// Write `result` to `path` in the format its extension selects.
pub fn persist(result: &DrawResult, path: &Path) -> Result<OutputFormat, SinkError> {
    let format = OutputFormat::from_path(path)?;
    match format {
        OutputFormat::Csv => write_csv(result, path)?,
        OutputFormat::Json => write_json(result, path)?,
    }
    info!(path = %path.display(), ?format, rows = result.len(), "wrote draw result");
    Ok(format)
}

/// `entrant,pick` header followed by one row per pairing, in draw order.
pub fn write_csv(result: &DrawResult, path: &Path) -> Result<(), SinkError> {
    let mut writer = WriterBuilder::new()
        .terminator(line_terminator())
        .from_writer(Vec::new());
    writer
        .write_record(["entrant", "pick"])
        .map_err(SinkError::EncodeCsv)?;
    for pairing in result.iter() {
        writer
            .write_record([pairing.entrant.as_str(), pairing.pick.as_str()])
            .map_err(SinkError::EncodeCsv)?;
    }
    let buf = writer
        .into_inner()
        .map_err(|err| SinkError::Write {
            path: path.to_path_buf(),
            source: err.into_error(),
        })?;
    write_atomic(path, &buf)
}

/// Pretty-printed `{ entrant: pick }` object with trailing newline.
pub fn write_json(result: &DrawResult, path: &Path) -> Result<(), SinkError> {
    let mut buf = serde_json::to_string_pretty(result).map_err(SinkError::EncodeJson)?;
    buf.push('\n');
    write_atomic(path, buf.as_bytes())
}

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Write to a sibling temp file, then rename over `path`.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SinkError> {
    let write_error = |source| SinkError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    debug!(path = %path.display(), tmp = %tmp_path.display(), "writing output");
    fs::write(&tmp_path, contents).map_err(write_error)?;
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_error(source));
    }
    Ok(())
}
