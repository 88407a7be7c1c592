//! Maze graphs and classic search algorithms.
//!
//! A maze board is turned into a [`MazeGraph`] whose vertices are the
//! walkable cells, then explored by one of four searches:
//!
//! - **Breadth-first** ([`BreadthFirst`]): level-order visit record
//! - **Depth-first** ([`DepthFirst`]): north/east/south/west-first visit record
//! - **Best-first** ([`BestFirst`]): greedy on the distance to the goal
//! - **A\*** ([`AStar`]): shortest start-to-goal path
//!
//! Every search implements [`MazeSearch`]: it borrows a graph, keeps its
//! own per-run state, and is consumed by [`MazeSearch::run`]. The graph
//! itself is never modified, so any number of runs can share it.
//!
//! ```
//! use maze_core::Board;
//! use maze_paths::{AStar, MazeGraph, MazeSearch};
//!
//! let board = Board::parse("#..\n-.-\n..$").unwrap();
//! let graph = MazeGraph::new(&board).unwrap();
//! let result = AStar::new(&graph).run();
//! assert_eq!(result.path_len(), Some(4));
//! ```

mod algorithm;
mod astar;
mod best_first;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod graph;
mod result;
mod traits;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod testing;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::AStar;
pub use best_first::BestFirst;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use distance::euclidean_ceil;
pub use graph::{GraphConfig, GraphError, MazeGraph, Vertex, VertexId};
pub use result::{ResultKind, SearchResult};
pub use traits::MazeSearch;
