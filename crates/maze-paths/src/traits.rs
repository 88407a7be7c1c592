use crate::graph::MazeGraph;
use crate::result::SearchResult;

/// A single-use search bound to one maze graph.
///
/// Implementations keep all per-run bookkeeping (frontier, visited marks,
/// heuristic values, predecessors) to themselves; the graph is only read.
/// `run` consumes the searcher, so repeating a search means building a new
/// one.
pub trait MazeSearch<'g>: Sized {
    /// Prepare a search over `graph` from its start to its goal.
    fn new(graph: &'g MazeGraph) -> Self;

    /// Run the search to completion.
    fn run(self) -> SearchResult;
}
