use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use hanoi_core::prelude::*;
use hanoi_prefs::Preferences;
use serde::Serialize;

/// Tower of Hanoi solver and visualizer
///
/// If no subcommand is specified, then the GUI is opened.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    /// YAML preferences file to layer on top of the defaults.
    #[arg(long, global = true, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Number of disks in the puzzle shown at startup (1-12).
    #[arg(long, value_name = "N")]
    pub disks: Option<DiskCount>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the optimal solution for a number of disks.
    Solve {
        /// Number of disks (1-12).
        disks: DiskCount,

        /// Peg that the disks start on.
        #[arg(long, default_value_t = Peg::A)]
        from: Peg,
        /// Peg that the disks end on.
        #[arg(long, default_value_t = Peg::C)]
        to: Peg,

        /// Print the solution as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective preferences as YAML.
    Prefs,
}

/// Solution printed by `hanoi solve --json`.
#[derive(Serialize, Debug)]
struct SolutionOutput {
    disks: DiskCount,
    from: Peg,
    to: Peg,
    moves: Vec<Move>,
}

pub(crate) fn exec(subcommand: Subcommand, prefs_file: Option<&Path>) -> Result<()> {
    match subcommand {
        Subcommand::Solve {
            disks,
            from,
            to,
            json,
        } => {
            let auxiliary = from
                .third(to)
                .ok_or_else(|| eyre!("source and destination pegs must be different"))?;
            let moves = solve(disks, from, to, auxiliary);
            if json {
                write_json_output(&SolutionOutput {
                    disks,
                    from,
                    to,
                    moves,
                })
            } else {
                print!("{}", solution_text(&moves));
                Ok(())
            }
        }

        Subcommand::Prefs => {
            let prefs = Preferences::try_load(prefs_file)?;
            print!("{}", prefs.to_yaml()?);
            Ok(())
        }
    }
}

/// Formats a list of moves, one per line.
fn solution_text(moves: &[Move]) -> String {
    let width = moves.len().to_string().len();
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("{:>width$}. disk {}: {mv}\n", i + 1, mv.disk))
        .collect()
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
