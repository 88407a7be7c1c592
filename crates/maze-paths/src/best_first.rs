use crate::frontier::{PathRecord, PrioritySearch};
use crate::graph::MazeGraph;
use crate::result::SearchResult;
use crate::traits::MazeSearch;

fn greedy_priority(r: &PathRecord) -> u32 {
    r.h
}

/// Greedy best-first search.
///
/// Always expands the open vertex that looks closest to the goal (ceiling
/// of the Euclidean distance), ignoring the distance already travelled.
/// Ties go to the lower vertex id. Finds a path whenever one exists, but
/// not necessarily the shortest.
pub struct BestFirst<'g> {
    inner: PrioritySearch<'g, fn(&PathRecord) -> u32>,
}

impl<'g> MazeSearch<'g> for BestFirst<'g> {
    fn new(graph: &'g MazeGraph) -> Self {
        Self {
            inner: PrioritySearch::new(graph, greedy_priority as fn(&PathRecord) -> u32),
        }
    }

    fn run(self) -> SearchResult {
        self.inner.run("best-first")
    }
}
