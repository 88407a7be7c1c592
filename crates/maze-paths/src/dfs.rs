use maze_core::Pos;

use crate::graph::{MazeGraph, VertexId};
use crate::result::SearchResult;
use crate::traits::MazeSearch;

/// Result of one unit of depth-first work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Found,
    Exhausted,
}

/// A vertex on the explicit call stack and the next neighbour to try.
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Depth-first traversal from the start vertex.
///
/// Follows the first unvisited neighbour (north, east, south, west) before
/// backtracking. A position is recorded on entry, before the goal check, and
/// the whole traversal stops as soon as the goal is entered. Uses an
/// explicit stack, so maze size is not limited by thread stack depth.
pub struct DepthFirst<'g> {
    graph: &'g MazeGraph,
    visited: Vec<bool>,
    order: Vec<Pos>,
    stack: Vec<Frame>,
}

impl<'g> DepthFirst<'g> {
    fn enter(&mut self, v: VertexId) -> Step {
        self.visited[v] = true;
        self.order.push(self.graph.pos(v));
        if v == self.graph.goal() {
            return Step::Found;
        }
        self.stack.push(Frame { vertex: v, cursor: 0 });
        Step::Continue
    }

    fn step(&mut self) -> Step {
        let graph = self.graph;
        let Some(frame) = self.stack.last_mut() else {
            return Step::Exhausted;
        };
        let neighbors = graph.neighbors(frame.vertex);
        let visited = &self.visited;
        match neighbors[frame.cursor..].iter().position(|&n| !visited[n]) {
            Some(offset) => {
                let next = neighbors[frame.cursor + offset];
                frame.cursor += offset + 1;
                self.enter(next)
            }
            None => {
                self.stack.pop();
                Step::Continue
            }
        }
    }
}

impl<'g> MazeSearch<'g> for DepthFirst<'g> {
    fn new(graph: &'g MazeGraph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            order: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn run(mut self) -> SearchResult {
        let mut step = self.enter(self.graph.start());
        while step == Step::Continue {
            step = self.step();
        }
        let found = step == Step::Found;
        let expanded = self.order.len();
        log::trace!("dfs: found={found} visited={expanded}");
        SearchResult::visit_order(self.order, found, expanded)
    }
}
