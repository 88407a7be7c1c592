//! mazebench: time maze search algorithms over a set of mazes.
//!
//! # Usage
//!
//! ```bash
//! # Benchmark all four algorithms on ./inputs, 100 runs each
//! mazebench
//!
//! # Two algorithms, 10 runs, plus 5 generated mazes, then replay the results
//! mazebench --algorithms bfs,as --repetitions 10 --generate 5 --visualize
//! ```

mod args;
mod bench;
mod config;
mod error;
mod report;

use std::collections::HashMap;
use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;
use maze_crossterm::{Animator, AnimatorConfig};

use crate::args::CliArgs;
use crate::bench::{Maze, Section};
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = CliArgs::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &CliArgs) -> Result<()> {
    let config = BenchConfig::resolve(cli)?;
    let mazes = bench::collect_mazes(&config)?;
    log::info!("benchmarking {} mazes", mazes.len());

    let sections = bench::run(&config, &mazes);
    {
        let mut out = io::stdout().lock();
        if config.json {
            report::write_json(&mut out, &sections)?;
        } else {
            report::write_table(&mut out, &sections)?;
        }
    }

    if config.visualize {
        visualize(&config, &mazes, &sections)?;
    }
    Ok(())
}

/// Replay every record over its maze, section by section.
fn visualize(config: &BenchConfig, mazes: &[Maze], sections: &[Section]) -> Result<()> {
    let animator = Animator::new(AnimatorConfig {
        delay: Duration::from_millis(config.delay_ms),
        ..AnimatorConfig::default()
    });
    let by_name: HashMap<&str, &Maze> = mazes.iter().map(|m| (m.name.as_str(), m)).collect();

    for section in sections {
        for record in &section.records {
            let Some(maze) = by_name.get(record.input.as_str()) else {
                continue;
            };
            log::info!("replaying {} on {}", section.algorithm, maze.name);
            animator
                .replay(
                    &maze.board,
                    &record.result.positions,
                    maze.graph.start_pos(),
                    maze.graph.goal_pos(),
                )
                .map_err(BenchError::Output)?;
        }
    }
    Ok(())
}
