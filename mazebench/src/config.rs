//! Benchmark configuration.
//!
//! Settings come from built-in defaults, optionally overridden by a TOML
//! file (`--config`), and finally by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use maze_paths::Algorithm;
use serde::{Deserialize, Deserializer};

use crate::args::CliArgs;
use crate::error::{BenchError, Result};

/// Everything a benchmark run needs to know.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Directory holding the maze files.
    pub inputs: PathBuf,
    /// Fresh runs per algorithm and maze.
    pub repetitions: usize,
    #[serde(deserialize_with = "algorithms_from_labels")]
    pub algorithms: Vec<Algorithm>,
    /// Replay every result in the terminal after benchmarking.
    pub visualize: bool,
    /// Pause between replayed positions, in milliseconds.
    pub delay_ms: u64,
    /// Print records as JSON instead of a table.
    pub json: bool,
    pub generate: GenerateConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            inputs: PathBuf::from("inputs"),
            repetitions: 100,
            algorithms: Algorithm::ALL.to_vec(),
            visualize: false,
            delay_ms: 40,
            json: false,
            generate: GenerateConfig::default(),
        }
    }
}

/// Generated mazes benchmarked alongside the input files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub count: usize,
    pub rows: i32,
    pub cols: i32,
    /// Chance of knocking out an extra wall, making loops.
    pub loop_chance: f64,
    pub seed: u64,
    /// Directory to write every generated maze into, as a maze file.
    pub save_dir: Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 0,
            rows: 41,
            cols: 61,
            loop_chance: 0.05,
            seed: 0x6d617a65,
            save_dir: None,
        }
    }
}

impl BenchConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BenchError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| BenchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the effective config: file (if given) then flag overrides.
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                log::info!("using config {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply(args);
        config.validate()?;
        Ok(config)
    }

    /// Override fields with the flags that were given.
    pub fn apply(&mut self, args: &CliArgs) {
        if let Some(inputs) = &args.inputs {
            self.inputs = inputs.clone();
        }
        if let Some(n) = args.repetitions {
            self.repetitions = n;
        }
        if let Some(algs) = &args.algorithms {
            self.algorithms = algs.clone();
        }
        if let Some(ms) = args.delay_ms {
            self.delay_ms = ms;
        }
        if let Some(n) = args.generate {
            self.generate.count = n;
        }
        if let Some(seed) = args.seed {
            self.generate.seed = seed;
        }
        if let Some(dir) = &args.save_generated {
            self.generate.save_dir = Some(dir.clone());
        }
        self.visualize |= args.visualize;
        self.json |= args.json;
    }

    fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig("repetitions must be at least 1".into()));
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::InvalidConfig("no algorithm selected".into()));
        }
        Ok(())
    }
}

fn algorithms_from_labels<'de, D>(de: D) -> std::result::Result<Vec<Algorithm>, D::Error>
where
    D: Deserializer<'de>,
{
    let labels = Vec::<String>::deserialize(de)?;
    labels
        .iter()
        .map(|l| l.parse().map_err(serde::de::Error::custom))
        .collect()
}
