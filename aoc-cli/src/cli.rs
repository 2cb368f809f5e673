//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Only run solvers carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/day{day:02}.txt` inputs
    #[arg(long, default_value = "~/.cache/aoc_solver/inputs")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count and list graph paths that pass through required nodes
    Paths(PathsArgs),
}

/// Options of the `paths` subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct PathsArgs {
    /// Graph file, one `node: target target ...` line per node
    #[arg(short, long)]
    pub input: PathBuf,

    /// Start node
    #[arg(short, long, default_value = "svr")]
    pub start: String,

    /// End node
    #[arg(short, long, default_value = "out")]
    pub end: String,

    /// Nodes every counted path must visit (comma-separated)
    #[arg(short, long, value_delimiter = ',', default_value = "dac,fft")]
    pub required: Vec<String>,

    /// Maximum number of qualifying paths to print
    #[arg(short, long, default_value_t = 1000)]
    pub limit: usize,

    /// Print only the counts
    #[arg(long)]
    pub no_print_paths: bool,
}
