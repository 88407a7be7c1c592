//! Maze file reader.
//!
//! A maze file is plain text. The first line is a header (usually the
//! board dimensions) and is discarded; every following line is one board
//! row. Trailing blank lines are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::board::{Board, BoardError};

/// Read a maze file into a [`Board`], skipping the header line.
pub fn read_from_file(path: impl AsRef<Path>) -> Result<Board, ReadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let board = read_from_str(&text).map_err(|source| ReadError::Board {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "read {}: {}x{} board",
        path.display(),
        board.rows(),
        board.cols()
    );
    Ok(board)
}

/// Parse maze file contents into a [`Board`], skipping the header line.
pub fn read_from_str(text: &str) -> Result<Board, BoardError> {
    let mut rows: Vec<&str> = text.lines().skip(1).collect();
    while rows.last().is_some_and(|l| l.is_empty()) {
        rows.pop();
    }
    Board::from_lines(rows)
}

/// Errors that can occur when reading a maze file.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },
    /// The file contents do not form a rectangular board.
    Board { path: PathBuf, source: BoardError },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not open input file {}: {source}", path.display())
            }
            Self::Board { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Board { source, .. } => Some(source),
        }
    }
}
