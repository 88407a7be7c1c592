//! **maze-core**: core types for the maze search toolkit.
//!
//! This crate provides the foundational types shared by the other crates of
//! the workspace: grid coordinates, a rectangular character board, and the
//! reader that turns a maze file into a board.

pub mod board;
pub mod geom;
pub mod reader;

pub use board::{Board, BoardError};
pub use geom::{Bounds, Pos};
pub use reader::{read_from_file, read_from_str, ReadError};
