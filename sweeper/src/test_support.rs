//! Test-only helpers: sample names, fixture files, seeded randomness.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use crate::core::types::DrawOptions;
use crate::io::columns::ColumnSelector;
use crate::io::narration::Pacer;
use crate::sweep::DrawRequest;

pub const ENTRANTS: [&str; 3] = ["Harold", "Jim", "Margaret"];
pub const PICKS: [&str; 3] = ["Bengals", "Bills", "Chiefs"];

/// Owned copies of `values`.
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Deterministic random source for reproducible draws.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Pacer that records pauses instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Temporary directory pre-populated with entrant and pick sources in both
/// `.txt` and `.csv` layouts.
pub struct SweepFixture {
    dir: TempDir,
}

impl SweepFixture {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let fixture = Self { dir };
        fs::write(fixture.path("entrants.txt"), ENTRANTS.join("\n")).context("write entrants")?;
        fs::write(fixture.path("picks.txt"), PICKS.join("\n")).context("write picks")?;
        fs::write(fixture.path("entrants.csv"), to_csv(&ENTRANTS)).context("write entrants")?;
        fs::write(fixture.path("picks.csv"), to_csv(&PICKS)).context("write picks")?;
        Ok(fixture)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        write_fixture(self.root(), name, contents)
    }

    /// Request over the `.txt` sources with narration delays disabled.
    pub fn text_request(&self) -> DrawRequest {
        DrawRequest {
            entrants: self.path("entrants.txt"),
            entrants_column: None,
            picks: self.path("picks.txt"),
            picks_column: None,
            options: DrawOptions::default(),
            delay: Duration::ZERO,
            quiet: false,
            output_file: None,
            seed: None,
        }
    }

    /// Request over the `.csv` sources, selecting the `name` column.
    pub fn csv_request(&self) -> DrawRequest {
        DrawRequest {
            entrants: self.path("entrants.csv"),
            entrants_column: Some(ColumnSelector::Name("name".to_string())),
            picks: self.path("picks.csv"),
            picks_column: Some(ColumnSelector::Index(1)),
            ..self.text_request()
        }
    }
}

fn to_csv(values: &[&str]) -> String {
    let mut out = String::from("id,name\n");
    for (index, value) in values.iter().enumerate() {
        out.push_str(&format!("{},{}\n", index + 1, value));
    }
    out
}
