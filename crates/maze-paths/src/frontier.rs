//! Shared machinery for the priority-ordered searches (best-first and A*).

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use maze_core::Pos;

use crate::distance::heuristic_table;
use crate::graph::{MazeGraph, VertexId};
use crate::result::SearchResult;

/// A vertex as reached along one particular path.
///
/// Records live in a per-run arena and point to the record they were
/// generated from, so the same vertex may appear several times with
/// different predecessors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PathRecord {
    pub(crate) vertex: VertexId,
    pub(crate) g: u32,
    pub(crate) h: u32,
    pub(crate) parent: Option<usize>,
}

/// Reference into the record arena, ordered for use in `BinaryHeap`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: u32,
    pub(crate) vertex: VertexId,
    pub(crate) record: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, vertex) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.vertex.cmp(&self.vertex))
            .then_with(|| other.record.cmp(&self.record))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set plus record arena for one run.
///
/// `keys` mirrors the `(f, vertex)` pairs currently in `heap`. An offer
/// whose pair is already queued is dropped; offers for the same vertex with
/// a different `f` are kept.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    keys: HashSet<(u32, VertexId)>,
    records: Vec<PathRecord>,
}

impl Frontier {
    /// Queue `record` with priority `f`. Returns `false` if an entry with
    /// the same `(f, vertex)` key is already open.
    pub(crate) fn offer(&mut self, record: PathRecord, f: u32) -> bool {
        if !self.keys.insert((f, record.vertex)) {
            return false;
        }
        let idx = self.records.len();
        self.records.push(record);
        self.heap.push(OpenEntry {
            f,
            vertex: record.vertex,
            record: idx,
        });
        true
    }

    /// Take the lowest-priority entry.
    pub(crate) fn pop(&mut self) -> Option<(usize, PathRecord)> {
        let entry = self.heap.pop()?;
        self.keys.remove(&(entry.f, entry.vertex));
        Some((entry.record, self.records[entry.record]))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Walk predecessors from `record` back to the root and return the
    /// positions in root-to-`record` order.
    pub(crate) fn trace(&self, graph: &MazeGraph, record: usize) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut cur = Some(record);
        while let Some(i) = cur {
            let r = &self.records[i];
            path.push(graph.pos(r.vertex));
            cur = r.parent;
        }
        path.reverse();
        path
    }
}

/// State for a priority-ordered search run.
///
/// `priority` maps a record to its open-set key; everything else (closed
/// set, dedup, path reconstruction) is common to best-first and A*.
pub(crate) struct PrioritySearch<'g, F> {
    graph: &'g MazeGraph,
    heuristics: Vec<u32>,
    closed: Vec<bool>,
    frontier: Frontier,
    priority: F,
}

impl<'g, F> PrioritySearch<'g, F>
where
    F: Fn(&PathRecord) -> u32,
{
    pub(crate) fn new(graph: &'g MazeGraph, priority: F) -> Self {
        Self {
            graph,
            heuristics: heuristic_table(graph),
            closed: vec![false; graph.len()],
            frontier: Frontier::default(),
            priority,
        }
    }

    pub(crate) fn run(mut self, name: &str) -> SearchResult {
        let graph = self.graph;
        let start = graph.start();
        let root = PathRecord {
            vertex: start,
            g: 0,
            h: self.heuristics[start],
            parent: None,
        };
        let f = (self.priority)(&root);
        self.frontier.offer(root, f);

        let mut expanded = 0;
        while let Some((idx, current)) = self.frontier.pop() {
            // A second route to a vertex that has already been expanded.
            if self.closed[current.vertex] {
                continue;
            }
            self.closed[current.vertex] = true;
            expanded += 1;

            if current.vertex == graph.goal() {
                let path = self.frontier.trace(graph, idx);
                log::trace!(
                    "{name}: path of {} steps, expanded {expanded}",
                    path.len() - 1
                );
                return SearchResult::path_found(path, expanded);
            }

            for &n in graph.neighbors(current.vertex) {
                if self.closed[n] {
                    continue;
                }
                let candidate = PathRecord {
                    vertex: n,
                    g: current.g + 1,
                    h: self.heuristics[n],
                    parent: Some(idx),
                };
                let f = (self.priority)(&candidate);
                self.frontier.offer(candidate, f);
            }
        }

        log::trace!("{name}: no path, expanded {expanded}");
        SearchResult::no_path(expanded)
    }
}
