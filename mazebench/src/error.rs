use std::fmt;
use std::io;
use std::path::PathBuf;

use maze_core::ReadError;
use maze_paths::{GraphError, ParseAlgorithmError};

/// Everything that can stop a benchmark run.
#[derive(Debug)]
pub enum BenchError {
    /// Settings that cannot be run, such as zero repetitions.
    InvalidConfig(String),
    /// Unknown algorithm name.
    Algorithm(ParseAlgorithmError),
    /// The config file could not be read.
    ConfigIo { path: PathBuf, source: io::Error },
    /// The config file is not valid TOML for [`BenchConfig`](crate::config::BenchConfig).
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The inputs directory could not be listed.
    Inputs { path: PathBuf, source: io::Error },
    /// A maze file could not be read.
    Read(ReadError),
    /// A maze could not be turned into a graph.
    Graph { input: String, source: GraphError },
    /// A generated maze could not be saved.
    Save { path: PathBuf, source: io::Error },
    /// Writing the report or the animation failed.
    Output(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Algorithm(e) => write!(f, "{e}"),
            Self::ConfigIo { path, source } => {
                write!(f, "could not read config {}: {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::Inputs { path, source } => {
                write!(f, "could not list inputs in {}: {source}", path.display())
            }
            Self::Read(e) => write!(f, "{e}"),
            Self::Graph { input, source } => write!(f, "{input}: {source}"),
            Self::Save { path, source } => {
                write!(f, "could not save {}: {source}", path.display())
            }
            Self::Output(e) => write!(f, "output error: {e}"),
            Self::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(_) => None,
            Self::Algorithm(e) => Some(e),
            Self::ConfigIo { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::Inputs { source, .. } => Some(source),
            Self::Read(e) => Some(e),
            Self::Graph { source, .. } => Some(source),
            Self::Save { source, .. } => Some(source),
            Self::Output(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl From<ParseAlgorithmError> for BenchError {
    fn from(e: ParseAlgorithmError) -> Self {
        Self::Algorithm(e)
    }
}

impl From<ReadError> for BenchError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl From<io::Error> for BenchError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
