//! Sweepstake draw CLI.
//!
//! Reads entrants and picks from `.txt` (one per line) or `.csv` (one column)
//! files, narrates a random draw round by round, prints the results table and
//! optionally writes them to `.csv` or `.json`.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sweeper::core::errors::DrawError;
use sweeper::core::required_if::{MissingOptionError, OptionValues, check_required};
use sweeper::core::types::{DrawOptions, DrawOrder};
use sweeper::exit_codes;
use sweeper::io::columns::ColumnSelector;
use sweeper::io::config::{DEFAULT_CONFIG_FILE, load_config};
use sweeper::io::narration::SleepPacer;
use sweeper::logging;
use sweeper::sweep::{COLUMN_RULES, DrawRequest, run_draw};

const EXAMPLES: &str = "\
Examples:
  Draw using text file inputs:
    sweeper draw --picks picks.txt --entrants entrants.txt

  Use CSV files, selecting columns by name:
    sweeper draw --picks picks.csv --picks-column name --entrants entrants.csv --entrants-column name

  Or by zero-based column index:
    sweeper draw --picks picks.csv --picks-column 1 --entrants entrants.csv --entrants-column 1

  Write results to a file:
    sweeper draw --picks picks.txt --entrants entrants.txt --output-file results.csv

  Draw in order of picks ('pick 1 goes to...'):
    sweeper draw --picks picks.txt --entrants entrants.txt --draw-order picks";

#[derive(Parser)]
#[command(
    name = "sweeper",
    version,
    about = "Run sweepstake draws",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a sweepstake draw. Allocate one pick per entrant.
    #[command(after_help = EXAMPLES)]
    Draw(DrawArgs),
}

#[derive(Args, Debug)]
struct DrawArgs {
    /// Path to file containing list of entrants (.txt or .csv).
    #[arg(long)]
    entrants: PathBuf,

    /// Column name or index to use from entrants file. Required if it is a .csv file.
    #[arg(long)]
    entrants_column: Option<String>,

    /// Path to file containing list of picks (.txt or .csv).
    #[arg(long)]
    picks: PathBuf,

    /// Column name or index to use from picks file. Required if it is a .csv file.
    #[arg(long)]
    picks_column: Option<String>,

    /// Order to draw in: entrants ('entrant 1 gets...'), picks ('pick 1 goes
    /// to...') or shuffle (shuffled entrants) [default: entrants].
    #[arg(long, value_parser = parse_order)]
    draw_order: Option<DrawOrder>,

    /// Delay between draw steps in seconds [default: 1.0].
    #[arg(long)]
    delay: Option<f64>,

    /// Print only the final result, no round-by-round narration.
    #[arg(short, long)]
    quiet: bool,

    /// File to write results to (.csv or .json). Results are only printed if omitted.
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Seed the draw for a reproducible result.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file with draw defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Pair entrants and picks by position instead of at random.
    #[arg(long, hide = true)]
    deterministic: bool,
}

fn parse_order(raw: &str) -> Result<DrawOrder, DrawError> {
    raw.parse()
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if err.downcast_ref::<MissingOptionError>().is_some() {
                exit_codes::USAGE
            } else {
                exit_codes::INVALID
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Draw(args) => cmd_draw(args),
    }
}

fn cmd_draw(args: DrawArgs) -> Result<()> {
    let mut values = OptionValues::new();
    values
        .set("entrants", Some(args.entrants.to_string_lossy()))
        .set("picks", Some(args.picks.to_string_lossy()))
        .set("entrants-column", args.entrants_column.as_deref())
        .set("picks-column", args.picks_column.as_deref());
    check_required(&COLUMN_RULES, &values)?;

    let mut cfg = load_config(&args.config)?;
    if let Some(delay_secs) = args.delay {
        cfg.delay_secs = delay_secs;
    }
    let delay = cfg.delay()?;

    let request = DrawRequest {
        entrants: args.entrants,
        entrants_column: args.entrants_column.as_deref().map(ColumnSelector::parse),
        picks: args.picks,
        picks_column: args.picks_column.as_deref().map(ColumnSelector::parse),
        options: DrawOptions {
            order: args.draw_order.unwrap_or(cfg.draw_order),
            deterministic: args.deterministic,
        },
        delay,
        quiet: args.quiet || cfg.quiet,
        output_file: args.output_file,
        seed: args.seed.or(cfg.seed),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_draw(&request, &mut out, SleepPacer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_draw_with_defaults() {
        let cli = Cli::parse_from([
            "sweeper",
            "draw",
            "--entrants",
            "entrants.txt",
            "--picks",
            "picks.txt",
        ]);
        let Command::Draw(args) = cli.command;
        assert_eq!(args.entrants, PathBuf::from("entrants.txt"));
        assert!(args.draw_order.is_none());
        assert!(!args.quiet);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_draw_order_ignores_case() {
        let cli = Cli::parse_from([
            "sweeper",
            "draw",
            "--entrants",
            "e.txt",
            "--picks",
            "p.txt",
            "--draw-order",
            "Shuffle",
            "-q",
        ]);
        let Command::Draw(args) = cli.command;
        assert_eq!(args.draw_order, Some(DrawOrder::Shuffle));
        assert!(args.quiet);
    }

    #[test]
    fn parse_rejects_unknown_draw_order() {
        let result = Cli::try_parse_from([
            "sweeper",
            "draw",
            "--entrants",
            "e.txt",
            "--picks",
            "p.txt",
            "--draw-order",
            "random",
        ]);
        assert!(result.is_err());
    }
}
