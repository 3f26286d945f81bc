//! Delimited-file adapter: pull one column out of a CSV with a header row.

use std::fmt;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::io::errors::SourceError;

/// Which column of a delimited file to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Header name, matched exactly.
    Name(String),
    /// Zero-based position.
    Index(usize),
}

impl ColumnSelector {
    /// Interpret a raw command-line value: unsigned integers select by index,
    /// anything else by header name.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<usize>() {
            Ok(index) => Self::Index(index),
            Err(_) => Self::Name(raw.to_string()),
        }
    }

    /// Build a selector from separately supplied name and index.
    ///
    /// Exactly one of the two must be present.
    pub fn from_parts(name: Option<&str>, index: Option<usize>) -> Result<Self, SourceError> {
        match (name, index) {
            (Some(name), None) => Ok(Self::Name(name.to_string())),
            (None, Some(index)) => Ok(Self::Index(index)),
            (Some(_), Some(_)) => Err(SourceError::ColumnSelector(
                "pass either a column name or a column index, not both".to_string(),
            )),
            (None, None) => Err(SourceError::ColumnSelector(
                "a column name or a column index is required".to_string(),
            )),
        }
    }
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "'{name}'"),
            Self::Index(index) => write!(f, "#{index}"),
        }
    }
}

/// Return every data row (header excluded) as a list of fields.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, SourceError> {
    let (_, rows) = read_table(path)?;
    Ok(rows
        .iter()
        .map(|row| row.iter().map(str::to_string).collect())
        .collect())
}

/// Return the values of one column across all data rows, in file order.
pub fn read_column(path: &Path, selector: &ColumnSelector) -> Result<Vec<String>, SourceError> {
    let (headers, rows) = read_table(path)?;

    let position = match selector {
        ColumnSelector::Name(name) => headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| SourceError::ColumnNotFound {
                path: path.to_path_buf(),
                column: name.clone(),
                row: 0,
            })?,
        ColumnSelector::Index(index) => {
            if *index >= headers.len() {
                return Err(SourceError::ColumnIndexOutOfRange {
                    path: path.to_path_buf(),
                    index: *index,
                    row: 0,
                    width: headers.len(),
                });
            }
            *index
        }
    };

    let mut values = Vec::with_capacity(rows.len());
    for (offset, row) in rows.iter().enumerate() {
        let row_number = offset + 1;
        let Some(value) = row.get(position) else {
            return Err(match selector {
                ColumnSelector::Name(name) => SourceError::ColumnNotFound {
                    path: path.to_path_buf(),
                    column: name.clone(),
                    row: row_number,
                },
                ColumnSelector::Index(index) => SourceError::ColumnIndexOutOfRange {
                    path: path.to_path_buf(),
                    index: *index,
                    row: row_number,
                    width: row.len(),
                },
            });
        };
        values.push(value.to_string());
    }
    debug!(path = %path.display(), column = %selector, values = values.len(), "read column");
    Ok(values)
}

fn read_table(path: &Path) -> Result<(StringRecord, Vec<StringRecord>), SourceError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let parse_error = |source: csv::Error| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    };

    // Rows may be ragged; width problems surface as column errors instead.
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers = reader.headers().map_err(parse_error)?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(SourceError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(parse_error)?;
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_fixture;

    const TEAMS: &str = "id,name\n1,Bengals\n2,Bills\n3,Chiefs\n";

    #[test]
    fn parse_prefers_index_for_integers() {
        assert_eq!(ColumnSelector::parse("1"), ColumnSelector::Index(1));
        assert_eq!(
            ColumnSelector::parse("name"),
            ColumnSelector::Name("name".to_string())
        );
        assert_eq!(
            ColumnSelector::parse("-1"),
            ColumnSelector::Name("-1".to_string())
        );
    }

    #[test]
    fn from_parts_requires_exactly_one() {
        assert_eq!(
            ColumnSelector::from_parts(Some("name"), None).expect("name"),
            ColumnSelector::Name("name".to_string())
        );
        assert_eq!(
            ColumnSelector::from_parts(None, Some(2)).expect("index"),
            ColumnSelector::Index(2)
        );
        assert!(matches!(
            ColumnSelector::from_parts(Some("name"), Some(1)),
            Err(SourceError::ColumnSelector(_))
        ));
        assert!(matches!(
            ColumnSelector::from_parts(None, None),
            Err(SourceError::ColumnSelector(_))
        ));
    }

    #[test]
    fn reads_rows_without_header() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), "teams.csv", TEAMS);
        let rows = read_rows(&path).expect("rows");
        assert_eq!(
            rows,
            vec![
                vec!["1", "Bengals"],
                vec!["2", "Bills"],
                vec!["3", "Chiefs"],
            ]
        );
    }

    #[test]
    fn reads_column_by_name_and_index() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), "teams.csv", TEAMS);

        let by_name =
            read_column(&path, &ColumnSelector::Name("name".to_string())).expect("by name");
        let by_index = read_column(&path, &ColumnSelector::Index(1)).expect("by index");
        assert_eq!(by_name, vec!["Bengals", "Bills", "Chiefs"]);
        assert_eq!(by_index, by_name);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(
            temp.path(),
            "people.csv",
            "name\n\"Smith, Jane\"\nJim\n",
        );
        let names = read_column(&path, &ColumnSelector::Index(0)).expect("column");
        assert_eq!(names, vec!["Smith, Jane", "Jim"]);
    }

    #[test]
    fn unknown_column_name_is_reported() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), "teams.csv", TEAMS);
        let err = read_column(&path, &ColumnSelector::Name("team".to_string()))
            .expect_err("missing column");
        assert!(matches!(
            err,
            SourceError::ColumnNotFound { ref column, row: 0, .. } if column == "team"
        ));
    }

    #[test]
    fn short_row_is_reported_for_name_and_index() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), "ragged.csv", "id,name\n1,Bengals\n2\n");

        let err = read_column(&path, &ColumnSelector::Name("name".to_string()))
            .expect_err("short row");
        assert!(matches!(err, SourceError::ColumnNotFound { row: 2, .. }));

        let err = read_column(&path, &ColumnSelector::Index(1)).expect_err("short row");
        assert!(matches!(
            err,
            SourceError::ColumnIndexOutOfRange {
                index: 1,
                row: 2,
                width: 1,
                ..
            }
        ));
    }

    #[test]
    fn index_beyond_header_is_out_of_range() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), "teams.csv", TEAMS);
        let err = read_column(&path, &ColumnSelector::Index(5)).expect_err("out of range");
        assert!(err.to_string().contains("column index 5 out of range"));
    }

    #[test]
    fn empty_file_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = write_fixture(temp.path(), "empty.csv", "");
        let err = read_rows(&path).expect_err("empty");
        assert!(matches!(err, SourceError::EmptyFile { .. }));
        assert!(err.to_string().ends_with("is empty"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_column(
            Path::new("invalid/path/to/file.csv"),
            &ColumnSelector::Index(0),
        )
        .expect_err("missing");
        assert!(matches!(err, SourceError::NotFound { .. }));
    }
}
