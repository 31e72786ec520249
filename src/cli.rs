//! Command-line interface
//!
//! Argument model for the `quizzie` binary and the command dispatcher that
//! drives a [`StatisticsStore`]. Output goes to any `Write` so commands can
//! be exercised without a terminal.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use quizzie_core::{StatisticsStore, Storage};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "quizzie", version, about = "Quiz answer statistics per category")]
pub struct Cli {
    /// Directory holding the statistics file (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file path (default: <config_dir>/quizzie/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print every category with its counts
    Show {
        /// Print the stored JSON table
        #[arg(long)]
        json: bool,
    },
    /// Record one answer for a category
    Record(RecordArgs),
    /// Print the categories with the most correct (or incorrect) answers
    Top {
        /// Rank by incorrect answers instead of correct ones
        #[arg(long)]
        incorrect: bool,
        /// Number of categories to print (default: config top_limit)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
        /// Print rankings as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove all statistics
    Clear,
    /// Print the configuration, or update and save it
    Config(ConfigArgs),
}

#[derive(Args, Debug, PartialEq)]
pub struct RecordArgs {
    /// Category name
    pub category: String,
    #[command(flatten)]
    pub outcome: Outcome,
}

#[derive(Args, Debug, PartialEq)]
#[group(required = true, multiple = false)]
pub struct Outcome {
    /// The answer was correct
    #[arg(long)]
    pub correct: bool,
    /// The answer was incorrect
    #[arg(long)]
    pub incorrect: bool,
}

#[derive(Args, Debug, PartialEq)]
pub struct ConfigArgs {
    /// Store statistics in DIR from now on
    #[arg(long, value_name = "DIR")]
    pub set_data_dir: Option<PathBuf>,
    /// Forget the configured data directory and use the platform default
    #[arg(long, conflicts_with = "set_data_dir")]
    pub reset_data_dir: bool,
    /// Default number of categories printed by `top`
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub set_top_limit: Option<u64>,
}

impl ConfigArgs {
    fn changes_anything(&self) -> bool {
        self.set_data_dir.is_some() || self.reset_data_dir || self.set_top_limit.is_some()
    }
}

/// Run one command against `store`, writing human or JSON output to `out`.
///
/// `config_path` is where the `config` command saves changes.
pub fn execute<S: Storage, W: Write>(
    command: &Command,
    store: &mut StatisticsStore<S>,
    config: &AppConfig,
    config_path: &Path,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Show { json } => {
            let table = store.read();
            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?;
            } else if table.is_empty() {
                writeln!(out, "No statistics recorded yet.")?;
            } else {
                for (category, count) in table.iter() {
                    writeln!(
                        out,
                        "{category}: {} correct, {} incorrect ({} total)",
                        count.correct,
                        count.incorrect,
                        count.total()
                    )?;
                }
                writeln!(out, "{} answers in {} categories", table.total_answers(), table.len())?;
            }
        }
        Command::Record(args) => {
            store.record_answer(&args.category, args.outcome.correct);
        }
        Command::Top {
            incorrect,
            limit,
            json,
        } => {
            let limit = (*limit)
                .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
                .unwrap_or_else(|| config.top_limit());

            if *incorrect {
                let rows = store.top_incorrect_categories(limit);
                if *json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
                } else {
                    for (i, row) in rows.iter().enumerate() {
                        writeln!(
                            out,
                            "{}. {}: {} of {} incorrect",
                            i + 1,
                            row.category,
                            row.incorrect,
                            row.total
                        )?;
                    }
                }
            } else {
                let rows = store.top_correct_categories(limit);
                if *json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
                } else {
                    for (i, row) in rows.iter().enumerate() {
                        writeln!(
                            out,
                            "{}. {}: {} of {} correct",
                            i + 1,
                            row.category,
                            row.correct,
                            row.total
                        )?;
                    }
                }
            }
        }
        Command::Clear => {
            store.clear_statistics();
        }
        Command::Config(args) => configure(args, config, config_path, out)?,
    }
    Ok(())
}

fn configure<W: Write>(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &Path,
    out: &mut W,
) -> Result<()> {
    let mut updated = config.clone();
    if let Some(dir) = &args.set_data_dir {
        updated.data_dir = Some(dir.clone());
    }
    if args.reset_data_dir {
        updated.data_dir = None;
    }
    if let Some(limit) = args.set_top_limit {
        updated.top_limit = usize::try_from(limit).unwrap_or(usize::MAX);
    }

    if args.changes_anything() {
        updated.save(config_path)?;
    }

    writeln!(out, "config file: {}", config_path.display())?;
    writeln!(out, "data dir: {}", updated.data_dir().display())?;
    writeln!(out, "top limit: {}", updated.top_limit())?;
    Ok(())
}
