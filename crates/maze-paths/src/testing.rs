//! Helpers shared by the unit tests.

use maze_core::{Board, Pos};

use crate::graph::{GraphConfig, MazeGraph};

/// Build a graph from board text with the default configuration.
pub(crate) fn graph(s: &str) -> MazeGraph {
    MazeGraph::new(&Board::parse(s).unwrap()).unwrap()
}

/// Build a graph from a single board row.
pub(crate) fn single_row(row: &str) -> MazeGraph {
    let cfg = GraphConfig {
        min_rows: 1,
        ..GraphConfig::default()
    };
    MazeGraph::with_config(&Board::parse(row).unwrap(), &cfg).unwrap()
}

/// Assert that `path` runs from start to goal over graph edges.
pub(crate) fn assert_valid_path(g: &MazeGraph, path: &[Pos]) {
    assert_eq!(path.first(), Some(&g.start_pos()), "path must begin at start");
    assert_eq!(path.last(), Some(&g.goal_pos()), "path must end at goal");
    for w in path.windows(2) {
        assert!(g.is_adjacent(w[0], w[1]), "{} -> {} is not an edge", w[0], w[1]);
    }
}
