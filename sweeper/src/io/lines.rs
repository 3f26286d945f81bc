//! Plain-text list adapter: one identifier per line.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::io::errors::SourceError;

/// Return every line of `path` with its terminator (`\n` or `\r\n`) stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "read lines");
    Ok(lines)
}
