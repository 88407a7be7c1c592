use maze_core::Pos;

/// What the positions of a [`SearchResult`] describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResultKind {
    /// Every position in the order the search visited it.
    VisitOrder,
    /// The reconstructed route from start to goal.
    Path,
}

/// Outcome of a single search run.
///
/// Not finding the goal is a regular outcome: `found` is `false` and
/// `positions` holds whatever the search could report (the full visit
/// order for traversals, nothing for path searches).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub kind: ResultKind,
    pub positions: Vec<Pos>,
    pub found: bool,
    /// Number of vertices taken off the frontier and expanded.
    pub expanded: usize,
}

impl SearchResult {
    /// A traversal record (BFS / DFS).
    pub fn visit_order(positions: Vec<Pos>, found: bool, expanded: usize) -> Self {
        Self {
            kind: ResultKind::VisitOrder,
            positions,
            found,
            expanded,
        }
    }

    /// A successful path search.
    pub fn path_found(path: Vec<Pos>, expanded: usize) -> Self {
        Self {
            kind: ResultKind::Path,
            positions: path,
            found: true,
            expanded,
        }
    }

    /// A path search that exhausted its frontier.
    pub fn no_path(expanded: usize) -> Self {
        Self {
            kind: ResultKind::Path,
            positions: Vec::new(),
            found: false,
            expanded,
        }
    }

    /// The start-to-goal path, if this is a successful path search.
    pub fn path(&self) -> Option<&[Pos]> {
        match (self.kind, self.found) {
            (ResultKind::Path, true) => Some(&self.positions),
            _ => None,
        }
    }

    /// Number of edges on the path (`None` unless [`path`](Self::path) is).
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }

    /// Number of reported positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_only_for_successful_path_searches() {
        let p = vec![Pos::new(0, 0), Pos::new(0, 1)];
        let ok = SearchResult::path_found(p.clone(), 2);
        assert_eq!(ok.path(), Some(&p[..]));
        assert_eq!(ok.path_len(), Some(1));

        let none = SearchResult::no_path(5);
        assert_eq!(none.path(), None);
        assert!(none.is_empty());

        let visits = SearchResult::visit_order(p, true, 1);
        assert_eq!(visits.path(), None);
        assert_eq!(visits.len(), 2);
    }
}
