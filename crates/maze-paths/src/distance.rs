use maze_core::Pos;

use crate::graph::MazeGraph;

/// Euclidean distance rounded up to the next integer.
///
/// Never exceeds the number of 4-way unit moves between the two positions.
#[inline]
pub fn euclidean_ceil(a: Pos, b: Pos) -> u32 {
    let sq = a.distance_sq(b);
    let root = sq.isqrt();
    let root = if root * root < sq { root + 1 } else { root };
    root as u32
}

/// Heuristic value of every vertex, indexed by vertex id.
pub(crate) fn heuristic_table(graph: &MazeGraph) -> Vec<u32> {
    let goal = graph.goal_pos();
    graph
        .vertices()
        .iter()
        .map(|v| euclidean_ceil(v.pos(), goal))
        .collect()
}
