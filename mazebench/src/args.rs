//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use maze_paths::Algorithm;

/// Flags given on the command line. `None` means "not given", leaving the
/// config file or built-in default in place.
#[derive(Parser, Debug, Clone, Default, PartialEq)]
#[command(
    name = "mazebench",
    about = "Benchmark maze search algorithms over a directory of maze files",
    after_help = "Set RUST_LOG=info for progress messages.",
    version
)]
pub struct CliArgs {
    /// Replay every result in the terminal afterwards
    #[arg(short, long)]
    pub visualize: bool,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory of maze files [default: inputs]
    #[arg(short, long, value_name = "DIR")]
    pub inputs: Option<PathBuf>,

    /// Fresh runs per algorithm and maze [default: 100]
    #[arg(short, long, value_name = "N")]
    pub repetitions: Option<usize>,

    /// Comma-separated: BFS,DFS,AS,BestFS [default: all]
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub algorithms: Option<Vec<Algorithm>>,

    /// TOML config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pause between replayed positions [default: 40]
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Also benchmark N generated mazes
    #[arg(short, long, value_name = "N")]
    pub generate: Option<usize>,

    /// Seed for generated mazes
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Write generated mazes as maze files into DIR
    #[arg(long, value_name = "DIR")]
    pub save_generated: Option<PathBuf>,
}
