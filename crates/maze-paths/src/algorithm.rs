use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::best_first::BestFirst;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::graph::MazeGraph;
use crate::result::SearchResult;
use crate::traits::MazeSearch;

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    BestFirst,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in benchmarking order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::AStar,
        Algorithm::BestFirst,
    ];

    /// Short label used in reports and on the command line.
    pub fn label(self) -> &'static str {
        match self {
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::BestFirst => "BestFS",
            Self::AStar => "AS",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::BestFirst => "best-first",
            Self::AStar => "a-star",
        }
    }

    /// Whether a successful run yields a start-to-goal path rather than a
    /// visit order.
    pub fn yields_path(self) -> bool {
        matches!(self, Self::BestFirst | Self::AStar)
    }

    /// Run a fresh instance of this algorithm on `graph`.
    pub fn run(self, graph: &MazeGraph) -> SearchResult {
        match self {
            Self::BreadthFirst => run_fresh::<BreadthFirst>(graph),
            Self::DepthFirst => run_fresh::<DepthFirst>(graph),
            Self::BestFirst => run_fresh::<BestFirst>(graph),
            Self::AStar => run_fresh::<AStar>(graph),
        }
    }
}

fn run_fresh<'g, S: MazeSearch<'g>>(graph: &'g MazeGraph) -> SearchResult {
    S::new(graph).run()
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts labels and names, case-insensitively (`bfs`, `AS`,
    /// `best-first`, `astar`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" | "depthfirst" => Ok(Self::DepthFirst),
            "bestfs" | "best-first" | "bestfirst" | "greedy" => Ok(Self::BestFirst),
            "as" | "a*" | "astar" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \"{}\" (expected BFS, DFS, BestFS or AS)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
