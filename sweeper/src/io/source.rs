//! Pick the right input adapter for a path.
//!
//! The draw engine only sees flat string lists; this module decides how a
//! file turns into one, based on its extension.

use std::path::Path;

use tracing::debug;

use crate::io::columns::{ColumnSelector, read_column};
use crate::io::errors::SourceError;
use crate::io::lines::read_lines;

/// How a source file is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// `.txt`: one identifier per line.
    Lines,
    /// `.csv`: header row plus data rows, a column must be selected.
    Columns,
}

impl SourceKind {
    pub fn detect(path: &Path) -> Result<Self, SourceError> {
        match extension(path).as_str() {
            "txt" => Ok(Self::Lines),
            "csv" => Ok(Self::Columns),
            other => Err(SourceError::UnsupportedSource {
                path: path.to_path_buf(),
                extension: other.to_string(),
            }),
        }
    }
}

/// Lower-cased extension of `path` without the dot, or an empty string.
pub fn extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Read identifiers from `path`.
///
/// `column` is required for delimited files and ignored for line lists.
pub fn load_source(path: &Path, column: Option<&ColumnSelector>) -> Result<Vec<String>, SourceError> {
    let kind = SourceKind::detect(path)?;
    debug!(path = %path.display(), ?kind, "loading source");
    match (kind, column) {
        (SourceKind::Lines, _) => read_lines(path),
        (SourceKind::Columns, Some(selector)) => read_column(path, selector),
        (SourceKind::Columns, None) => Err(SourceError::ColumnSelector(format!(
            "{} is a .csv file, a column name or index is required",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_fixture;

    #[test]
    fn detect_by_extension() {
        assert_eq!(
            SourceKind::detect(Path::new("a.txt")).expect("txt"),
            SourceKind::Lines
        );
        assert_eq!(
            SourceKind::detect(Path::new("a.CSV")).expect("csv"),
            SourceKind::Columns
        );
        let err = SourceKind::detect(Path::new("a.py")).expect_err("py");
        assert!(err.to_string().contains("file must be a .csv or .txt file"));
    }

    #[test]
    fn text_and_csv_sources_are_interchangeable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let txt = write_fixture(temp.path(), "people.txt", "Harold\nJim\nMargaret");
        let csv = write_fixture(
            temp.path(),
            "people.csv",
            "id,name\n1,Harold\n2,Jim\n3,Margaret",
        );

        let from_txt = load_source(&txt, None).expect("txt");
        let from_csv =
            load_source(&csv, Some(&ColumnSelector::parse("name"))).expect("csv");
        assert_eq!(from_txt, from_csv);
    }

    #[test]
    fn csv_without_column_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let csv = write_fixture(temp.path(), "people.csv", "name\nJim\n");
        let err = load_source(&csv, None).expect_err("column required");
        assert!(matches!(err, SourceError::ColumnSelector(_)));
    }
}
