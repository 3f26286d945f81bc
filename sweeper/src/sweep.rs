//! Orchestration for `sweeper draw`.
//!
//! Loads both sources, runs the engine (optionally narrating), prints the
//! results table and persists the result when an output file is requested.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::core::draw::draw;
use crate::core::required_if::{Condition, RequiredIf};
use crate::core::types::{DrawOptions, DrawResult};
use crate::io::columns::ColumnSelector;
use crate::io::narration::{Narrator, Pacer};
use crate::io::sink::{OutputFormat, persist};
use crate::io::source::{extension, load_source};
use crate::io::table::render_table;

/// Column options become mandatory when their source is a `.csv` file.
pub const COLUMN_RULES: [RequiredIf; 2] = [
    RequiredIf {
        option: "entrants-column",
        depends_on: "entrants",
        condition: Condition::TransformEquals {
            name: "suffix",
            transform: suffix,
            expected: "csv",
        },
    },
    RequiredIf {
        option: "picks-column",
        depends_on: "picks",
        condition: Condition::TransformEquals {
            name: "suffix",
            transform: suffix,
            expected: "csv",
        },
    },
];

/// Lower-cased file extension of a raw path argument.
pub fn suffix(path: &str) -> String {
    extension(Path::new(path))
}

/// Everything needed for one draw invocation.
#[derive(Debug, Clone)]
pub struct DrawRequest {
    pub entrants: PathBuf,
    pub entrants_column: Option<ColumnSelector>,
    pub picks: PathBuf,
    pub picks_column: Option<ColumnSelector>,
    pub options: DrawOptions,
    pub delay: Duration,
    pub quiet: bool,
    pub output_file: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Result of `sweeper draw`.
#[derive(Debug, Clone)]
pub struct DrawOutcome {
    pub result: DrawResult,
    /// Destination and format, when the result was persisted.
    pub written: Option<(PathBuf, OutputFormat)>,
}

/// Run a full draw, writing narration and the results table to `out`.
///
/// The output format is checked before anything is read or printed, so a bad
/// destination never costs a narrated draw.
pub fn run_draw<W: Write, P: Pacer>(
    request: &DrawRequest,
    out: &mut W,
    pacer: P,
) -> Result<DrawOutcome> {
    debug!(?request, "starting draw");
    if let Some(path) = &request.output_file {
        OutputFormat::from_path(path)?;
    }

    let entrants = load_source(&request.entrants, request.entrants_column.as_ref())
        .context("load entrants")?;
    let picks =
        load_source(&request.picks, request.picks_column.as_ref()).context("load picks")?;

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = if request.quiet {
        draw(&entrants, &picks, &request.options, &mut rng, |_| {})?
    } else {
        let mut narrator = Narrator::new(&mut *out, pacer, request.delay);
        let result = draw(&entrants, &picks, &request.options, &mut rng, |event| {
            narrator.observe(event);
        })?;
        narrator.finish().context("write narration")?;
        result
    };
    info!(
        entrants = entrants.len(),
        picks = picks.len(),
        undrawn = result.undrawn.len(),
        "draw complete"
    );

    write!(out, "\nDraw complete.\n\nResults:\n{}", render_table(&result))
        .context("write results table")?;

    let written = match &request.output_file {
        Some(path) => {
            let format = persist(&result, path)?;
            writeln!(out, "\nResults written to {}", path.display())
                .context("write output summary")?;
            Some((path.clone(), format))
        }
        None => None,
    };

    Ok(DrawOutcome { result, written })
}
