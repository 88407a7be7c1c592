use std::collections::VecDeque;

use crate::graph::{MazeGraph, VertexId};
use crate::result::SearchResult;
use crate::traits::MazeSearch;

/// Breadth-first traversal from the start vertex.
///
/// Reports positions in dequeue order, which is level order but not a path.
/// Vertices are marked when enqueued, so none is queued twice. Once the goal
/// shows up among the neighbours of the vertex being expanded, the rest of
/// that neighbour list is still processed and the traversal stops before the
/// next dequeue; the goal is appended as the final visited position.
pub struct BreadthFirst<'g> {
    graph: &'g MazeGraph,
    visited: Vec<bool>,
    queue: VecDeque<VertexId>,
    found: bool,
}

impl<'g> MazeSearch<'g> for BreadthFirst<'g> {
    fn new(graph: &'g MazeGraph) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            queue: VecDeque::new(),
            found: false,
        }
    }

    fn run(mut self) -> SearchResult {
        let graph = self.graph;
        let (start, goal) = (graph.start(), graph.goal());

        self.queue.push_back(start);
        self.visited[start] = true;
        let mut order = Vec::new();

        while !self.found {
            let Some(v) = self.queue.pop_front() else {
                break;
            };
            order.push(graph.pos(v));

            for &n in graph.neighbors(v) {
                if n == goal {
                    self.found = true;
                }
                if !self.visited[n] {
                    self.visited[n] = true;
                    self.queue.push_back(n);
                }
            }
        }

        let expanded = order.len();
        if self.found {
            order.push(graph.goal_pos());
        }
        log::trace!(
            "bfs: found={} expanded={} queued-left={}",
            self.found,
            expanded,
            self.queue.len()
        );
        SearchResult::visit_order(order, self.found, expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{graph, single_row};
    use maze_core::Pos;

    fn bfs(g: &MazeGraph) -> SearchResult {
        BreadthFirst::new(g).run()
    }

    #[test]
    fn level_order_with_goal_last() {
        let g = graph(
            "\
#..
...
..$",
        );
        let r = bfs(&g);
        assert!(r.found);
        assert_eq!(
            r.positions,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(0, 2),
                Pos::new(1, 1),
                Pos::new(2, 0),
                Pos::new(1, 2),
                Pos::new(2, 2),
            ]
        );
        // The goal is discovered from (1,2) and never dequeued.
        assert_eq!(r.expanded, 7);
    }

    #[test]
    fn neighbours_of_goal_finder_are_queued_but_not_visited() {
        // Expanding (1,1) sees the goal to the east and (2,1) to the south.
        let g = graph(
            "\
-#-
-.$
-.-",
        );
        let r = bfs(&g);
        assert!(r.found);
        assert_eq!(
            r.positions,
            vec![Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 2)]
        );
        assert!(!r.positions.contains(&Pos::new(2, 1)));
    }

    #[test]
    fn exhausts_when_goal_is_walled_off() {
        let g = graph(
            "\
#.-$
..--",
        );
        let r = bfs(&g);
        assert!(!r.found);
        assert_eq!(r.len(), 4);
        assert_eq!(r.expanded, 4);
        assert_eq!(r.path(), None);
    }

    #[test]
    fn single_row_scenarios() {
        let r = bfs(&single_row("#$"));
        assert!(r.found);
        assert_eq!(r.positions, vec![Pos::new(0, 0), Pos::new(0, 1)]);

        let r = bfs(&single_row("#-$"));
        assert!(!r.found);
        assert_eq!(r.positions, vec![Pos::new(0, 0)]);
    }

    #[test]
    fn two_by_one() {
        let r = bfs(&graph("#\n$"));
        assert!(r.found);
        assert_eq!(r.len(), 2);
    }
}
