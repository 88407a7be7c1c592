//! Maze graph construction.
//!
//! [`MazeGraph::new`] scans a [`Board`] row by row and turns every walkable
//! cell into a [`Vertex`]. Vertex ids are dense, 0-based, and assigned in
//! scan order, so they double as indices into per-run search arrays.

use std::fmt;

use maze_core::{Board, Bounds, Pos};

/// Dense vertex identifier.
pub type VertexId = usize;

/// Characters that give a board its meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Impassable cell; never becomes a vertex.
    pub wall: char,
    /// The single start cell.
    pub start: char,
    /// The single goal cell.
    pub goal: char,
    /// Smallest accepted number of board rows.
    pub min_rows: i32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            wall: '-',
            start: '#',
            goal: '$',
            min_rows: 2,
        }
    }
}

/// One walkable cell and its orthogonal connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    pos: Pos,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Adjacent vertex ids in north, east, south, west order.
    #[inline]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// A maze as an undirected, unweighted graph of walkable cells.
///
/// Read-only once built. Searches keep their own bookkeeping and only
/// borrow the graph.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    vertices: Vec<Vertex>,
    // Cell index -> vertex id; `None` for walls.
    cells: Vec<Option<VertexId>>,
    bounds: Bounds,
    start: VertexId,
    goal: VertexId,
}

impl MazeGraph {
    /// Build a graph using the default characters (`-` wall, `#` start,
    /// `$` goal) and a minimum of two rows.
    pub fn new(board: &Board) -> Result<Self, GraphError> {
        Self::with_config(board, &GraphConfig::default())
    }

    /// Build a graph with custom board characters.
    pub fn with_config(board: &Board, config: &GraphConfig) -> Result<Self, GraphError> {
        let bounds = board.bounds();
        if bounds.rows < config.min_rows {
            return Err(GraphError::InvalidDimensions {
                rows: bounds.rows,
                cols: bounds.cols,
                min_rows: config.min_rows,
            });
        }

        let mut vertices: Vec<Vertex> = Vec::new();
        let mut cells: Vec<Option<VertexId>> = vec![None; bounds.len()];
        let mut start: Option<VertexId> = None;
        let mut goal: Option<VertexId> = None;

        for (i, (pos, ch)) in board.iter().enumerate() {
            if ch == config.wall {
                continue;
            }
            let id = vertices.len();
            if ch == config.start {
                if let Some(first) = start {
                    return Err(GraphError::MultipleStarts {
                        first: vertices[first].pos,
                        second: pos,
                    });
                }
                start = Some(id);
            } else if ch == config.goal {
                if let Some(first) = goal {
                    return Err(GraphError::MultipleGoals {
                        first: vertices[first].pos,
                        second: pos,
                    });
                }
                goal = Some(id);
            }
            cells[i] = Some(id);
            vertices.push(Vertex {
                id,
                pos,
                neighbors: Vec::with_capacity(4),
            });
        }

        let start = start.ok_or(GraphError::NoStart)?;
        let goal = goal.ok_or(GraphError::NoGoal)?;

        let mut edges = 0;
        for v in vertices.iter_mut() {
            for np in v.pos.neighbors_4() {
                if let Some(nid) = bounds.index(np).and_then(|ni| cells[ni]) {
                    v.neighbors.push(nid);
                    edges += 1;
                }
            }
        }

        log::debug!(
            "built maze graph: {} board, {} vertices, {} edges, start {} goal {}",
            bounds,
            vertices.len(),
            edges / 2,
            vertices[start].pos,
            vertices[goal].pos
        );

        Ok(Self {
            vertices,
            cells,
            bounds,
            start,
            goal,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a successfully built graph (start and goal exist).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id >= self.len()`.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    /// All vertices in id order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Neighbors of vertex `id`.
    #[inline]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.vertices[id].neighbors
    }

    /// Neighbors of the vertex at `pos`, or `None` if `pos` is not walkable.
    pub fn neighbors_at(&self, pos: Pos) -> Option<&[VertexId]> {
        self.id_at(pos).map(|id| self.neighbors(id))
    }

    /// The vertex id at `pos`, or `None` for walls and off-board positions.
    #[inline]
    pub fn id_at(&self, pos: Pos) -> Option<VertexId> {
        self.bounds.index(pos).and_then(|i| self.cells[i])
    }

    /// Position of vertex `id`.
    #[inline]
    pub fn pos(&self, id: VertexId) -> Pos {
        self.vertices[id].pos
    }

    #[inline]
    pub fn start(&self) -> VertexId {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> VertexId {
        self.goal
    }

    #[inline]
    pub fn start_pos(&self) -> Pos {
        self.vertices[self.start].pos
    }

    #[inline]
    pub fn goal_pos(&self) -> Pos {
        self.vertices[self.goal].pos
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `a` and `b` are walkable and joined by an edge.
    pub fn is_adjacent(&self, a: Pos, b: Pos) -> bool {
        match (self.id_at(a), self.id_at(b)) {
            (Some(ia), Some(ib)) => self.vertices[ia].neighbors.contains(&ib),
            _ => false,
        }
    }
}

/// Errors that make a board unusable as a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The board has fewer rows than required.
    InvalidDimensions { rows: i32, cols: i32, min_rows: i32 },
    /// No start character on the board.
    NoStart,
    /// No goal character on the board.
    NoGoal,
    /// More than one start character.
    MultipleStarts { first: Pos, second: Pos },
    /// More than one goal character.
    MultipleGoals { first: Pos, second: Pos },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                rows,
                cols,
                min_rows,
            } => write!(
                f,
                "invalid board dimension {rows}x{cols}: must have at least {min_rows} rows"
            ),
            Self::NoStart => f.write_str("maze has no starting point"),
            Self::NoGoal => f.write_str("maze has no ending point"),
            Self::MultipleStarts { first, second } => {
                write!(f, "maze has more than one starting point: {first} and {second}")
            }
            Self::MultipleGoals { first, second } => {
                write!(f, "maze has more than one ending point: {first} and {second}")
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
#..-
-.-.
...$";

    fn graph(s: &str) -> MazeGraph {
        MazeGraph::new(&Board::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn ids_are_row_major_over_walkable_cells() {
        let g = graph(MAZE);
        // 12 cells, 3 walls.
        assert_eq!(g.len(), 9);
        let positions: Vec<_> = g.vertices().iter().map(Vertex::pos).collect();
        assert_eq!(
            positions,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(1, 1),
                Pos::new(1, 3),
                Pos::new(2, 0),
                Pos::new(2, 1),
                Pos::new(2, 2),
                Pos::new(2, 3),
            ]
        );
        for (i, v) in g.vertices().iter().enumerate() {
            assert_eq!(v.id(), i);
        }
    }

    #[test]
    fn start_and_goal() {
        let g = graph(MAZE);
        assert_eq!(g.start(), 0);
        assert_eq!(g.goal(), 8);
        assert_eq!(g.start_pos(), Pos::new(0, 0));
        assert_eq!(g.goal_pos(), Pos::new(2, 3));
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
    }

    #[test]
    fn neighbors_follow_nesw_order() {
        let g = graph(MAZE);
        // (2,1): north (1,1)=3, east (2,2)=7, south off-board, west (2,0)=5.
        assert_eq!(g.neighbors_at(Pos::new(2, 1)), Some(&[3, 7, 5][..]));
        // (2,3): north (1,3)=4, west (2,2)=7.
        assert_eq!(g.neighbors(8), &[4, 7]);
        // Start has only an eastern neighbour.
        assert_eq!(g.neighbors(0), &[1]);
    }

    #[test]
    fn walls_have_no_id() {
        let g = graph(MAZE);
        assert_eq!(g.id_at(Pos::new(0, 3)), None);
        assert_eq!(g.id_at(Pos::new(1, 0)), None);
        assert_eq!(g.id_at(Pos::new(5, 5)), None);
        assert_eq!(g.neighbors_at(Pos::new(1, 2)), None);
        assert_eq!(g.id_at(Pos::new(1, 1)), Some(3));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let g = graph(MAZE);
        for v in g.vertices() {
            for &n in v.neighbors() {
                assert!(g.neighbors(n).contains(&v.id()));
                assert!(g.is_adjacent(v.pos(), g.pos(n)));
            }
        }
        assert!(!g.is_adjacent(Pos::new(0, 2), Pos::new(1, 2)));
    }

    #[test]
    fn too_few_rows() {
        let b = Board::parse("#.$").unwrap();
        let err = MazeGraph::new(&b).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidDimensions {
                rows: 1,
                cols: 3,
                min_rows: 2
            }
        );
        let cfg = GraphConfig {
            min_rows: 1,
            ..GraphConfig::default()
        };
        assert!(MazeGraph::with_config(&b, &cfg).is_ok());
    }

    #[test]
    fn missing_start_or_goal() {
        let b = Board::parse("..$\n...").unwrap();
        assert_eq!(MazeGraph::new(&b).unwrap_err(), GraphError::NoStart);
        let b = Board::parse("#..\n...").unwrap();
        assert_eq!(MazeGraph::new(&b).unwrap_err(), GraphError::NoGoal);
        assert_eq!(GraphError::NoGoal.to_string(), "maze has no ending point");
    }

    #[test]
    fn duplicate_start_or_goal() {
        let b = Board::parse("#.#\n..$").unwrap();
        assert_eq!(
            MazeGraph::new(&b).unwrap_err(),
            GraphError::MultipleStarts {
                first: Pos::new(0, 0),
                second: Pos::new(0, 2)
            }
        );
        let b = Board::parse("#.$\n$..").unwrap();
        assert_eq!(
            MazeGraph::new(&b).unwrap_err(),
            GraphError::MultipleGoals {
                first: Pos::new(0, 2),
                second: Pos::new(1, 0)
            }
        );
    }

    #[test]
    fn custom_characters() {
        let cfg = GraphConfig {
            wall: 'X',
            start: 'S',
            goal: 'G',
            min_rows: 2,
        };
        let b = Board::parse("S-X\n.XG\n...").unwrap();
        let g = MazeGraph::with_config(&b, &cfg).unwrap();
        // '-' is walkable under this config.
        assert_eq!(g.id_at(Pos::new(0, 1)), Some(1));
        assert_eq!(g.id_at(Pos::new(0, 2)), None);
        assert_eq!(g.goal_pos(), Pos::new(1, 2));
    }

    #[test]
    fn single_column() {
        let g = graph("#\n$");
        assert_eq!(g.len(), 2);
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(1), &[0]);
    }
}
