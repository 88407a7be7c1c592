use crate::frontier::{PathRecord, PrioritySearch};
use crate::graph::MazeGraph;
use crate::result::SearchResult;
use crate::traits::MazeSearch;

fn astar_priority(r: &PathRecord) -> u32 {
    r.g + r.h
}

/// A* search with unit move costs.
///
/// Orders the open set by travelled distance plus the ceiling of the
/// Euclidean distance to the goal. The heuristic never overestimates on a
/// 4-connected grid and changes by at most one per move, so the first time
/// the goal is expanded its path is a shortest one.
pub struct AStar<'g> {
    inner: PrioritySearch<'g, fn(&PathRecord) -> u32>,
}

impl<'g> MazeSearch<'g> for AStar<'g> {
    fn new(graph: &'g MazeGraph) -> Self {
        Self {
            inner: PrioritySearch::new(graph, astar_priority as fn(&PathRecord) -> u32),
        }
    }

    fn run(self) -> SearchResult {
        self.inner.run("a*")
    }
}
