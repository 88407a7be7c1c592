//! Timing loop.
//!
//! Every maze is read and turned into a graph once. Each algorithm then
//! runs `repetitions` times on it, a fresh searcher per run, and the
//! wall-clock time of every run is recorded.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use maze_core::{read_from_file, Board};
use maze_gen::{to_maze_text, MazeGen};
use maze_paths::{Algorithm, MazeGraph, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{BenchConfig, GenerateConfig};
use crate::error::{BenchError, Result};

/// A maze ready to be searched.
pub struct Maze {
    pub name: String,
    pub board: Board,
    pub graph: MazeGraph,
}

impl Maze {
    pub fn new(name: String, board: Board) -> Result<Self> {
        match MazeGraph::new(&board) {
            Ok(graph) => Ok(Self { name, board, graph }),
            Err(source) => Err(BenchError::Graph {
                input: name,
                source,
            }),
        }
    }
}

/// Timings and outcome of one algorithm on one maze.
#[derive(Debug, Clone)]
pub struct Record {
    pub algorithm: Algorithm,
    pub input: String,
    pub avg: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Outcome of the first run; later runs are checked against it.
    pub result: SearchResult,
}

/// Records of one algorithm, fastest first.
#[derive(Debug, Clone)]
pub struct Section {
    pub algorithm: Algorithm,
    pub records: Vec<Record>,
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Every file of `dir`, sorted by path, read as a maze.
pub fn load_inputs(dir: &Path) -> Result<Vec<Maze>> {
    let listing_error = |source| BenchError::Inputs {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .into_iter()
        .map(|path: PathBuf| {
            let board = read_from_file(&path)?;
            Maze::new(path.display().to_string(), board)
        })
        .collect()
}

/// Carve `cfg.count` mazes, each from its own seed.
///
/// With `cfg.save_dir` set, each maze is also written there as
/// `generated-<i>.txt` in the maze file format.
pub fn generate(cfg: &GenerateConfig) -> Result<Vec<Maze>> {
    match &cfg.save_dir {
        Some(dir) if cfg.count > 0 => {
            fs::create_dir_all(dir).map_err(|source| BenchError::Save {
                path: dir.clone(),
                source,
            })?;
        }
        _ => {}
    }
    (0..cfg.count)
        .map(|i| {
            let rng = StdRng::seed_from_u64(cfg.seed.wrapping_add(i as u64));
            let board = MazeGen::new(rng)
                .with_loops(cfg.loop_chance)
                .carve(cfg.rows, cfg.cols);
            if let Some(dir) = &cfg.save_dir {
                save(&dir.join(format!("generated-{i}.txt")), &board)?;
            }
            let name = format!("generated-{i} ({})", board.bounds());
            Maze::new(name, board)
        })
        .collect()
}

fn save(path: &Path, board: &Board) -> Result<()> {
    let header = format!("{} {}", board.rows(), board.cols());
    fs::write(path, to_maze_text(board, &header)).map_err(|source| BenchError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saved {}", path.display());
    Ok(())
}

/// Input files plus generated mazes.
///
/// A missing inputs directory is tolerated when mazes are generated.
pub fn collect_mazes(config: &BenchConfig) -> Result<Vec<Maze>> {
    let mut mazes = if config.generate.count > 0 && !config.inputs.exists() {
        log::warn!(
            "inputs directory {} not found, using generated mazes only",
            config.inputs.display()
        );
        Vec::new()
    } else {
        load_inputs(&config.inputs)?
    };
    mazes.extend(generate(&config.generate)?);
    if mazes.is_empty() {
        log::warn!("no mazes to benchmark in {}", config.inputs.display());
    }
    Ok(mazes)
}

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Time `repetitions` fresh runs of `algorithm` on `maze`.
pub fn time_algorithm(algorithm: Algorithm, maze: &Maze, repetitions: usize) -> Record {
    let repetitions = repetitions.max(1);
    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    let mut first: Option<SearchResult> = None;

    for _ in 0..repetitions {
        let t0 = Instant::now();
        let result = algorithm.run(&maze.graph);
        let elapsed = t0.elapsed();

        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
        if !first.as_ref().is_none_or(|f| *f == result) {
            log::warn!("{algorithm} on {}: runs disagree", maze.name);
        }
        if first.is_none() {
            first = Some(result);
        }
    }

    let result = first.unwrap_or_else(|| algorithm.run(&maze.graph));
    let avg = mean(total, repetitions);
    log::debug!(
        "{algorithm} on {}: avg {avg:?}, found {}, {} positions",
        maze.name,
        result.found,
        result.len()
    );
    Record {
        algorithm,
        input: maze.name.clone(),
        avg,
        min,
        max,
        result,
    }
}

/// `total / count`, rounded down to the nanosecond.
fn mean(total: Duration, count: usize) -> Duration {
    let nanos = total.as_nanos() / count.max(1) as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Run every configured algorithm over every maze.
pub fn run(config: &BenchConfig, mazes: &[Maze]) -> Vec<Section> {
    config
        .algorithms
        .iter()
        .map(|&algorithm| {
            log::info!(
                "{} ({}): {} mazes x {} runs",
                algorithm,
                algorithm.name(),
                mazes.len(),
                config.repetitions
            );
            let mut records: Vec<Record> = mazes
                .iter()
                .map(|m| time_algorithm(algorithm, m, config.repetitions))
                .collect();
            records.sort_by_key(|r| r.avg);
            Section { algorithm, records }
        })
        .collect()
}
