//! Random maze generation.
//!
//! Provides two generators writing the maze file alphabet (`-` wall,
//! `.` floor, `#` start, `$` goal):
//! - **Carved mazes**: a randomized depth-first backtracker over the even
//!   lattice, optionally with extra openings so that several routes exist.
//! - **Scattered walls**: independent random walls; the goal may end up
//!   cut off from the start.

use maze_core::{Board, Pos};
use rand::Rng;

pub const WALL: char = '-';
pub const FLOOR: char = '.';
pub const START: char = '#';
pub const GOAL: char = '$';

/// Maze generator driven by a random number source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    /// Chance that a wall between two carved lattice cells is removed
    /// after carving.
    pub loop_chance: f64,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator producing perfect mazes (no loops).
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            loop_chance: 0.0,
        }
    }

    /// Set the chance of opening extra passages.
    pub fn with_loops(mut self, chance: f64) -> Self {
        self.loop_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Carve a maze of `rows` x `cols` cells.
    ///
    /// Passages run between cells with even coordinates. The start is the
    /// top-left cell and the goal the bottom-right lattice cell, so the goal
    /// is always reachable. Sizes below 2x1 are raised to 2x1.
    pub fn carve(&mut self, rows: i32, cols: i32) -> Board {
        let rows = rows.max(2);
        let cols = cols.max(1);
        let mut board = Board::filled(rows, cols, WALL);

        // Iterative backtracker.
        let mut stack = vec![Pos::ZERO];
        board.set(Pos::ZERO, FLOOR);
        let mut options = Vec::with_capacity(4);
        while let Some(&cur) = stack.last() {
            options.clear();
            for d in Pos::CARDINALS {
                let next = cur + d + d;
                if board.at(next) == Some(WALL) {
                    options.push(d);
                }
            }
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let d = options[self.rng.random_range(0..options.len())];
            board.set(cur + d, FLOOR);
            board.set(cur + d + d, FLOOR);
            stack.push(cur + d + d);
        }

        if self.loop_chance > 0.0 {
            self.open_loops(&mut board);
        }

        let goal = Pos::new((rows - 1) / 2 * 2, (cols - 1) / 2 * 2);
        let goal = if goal == Pos::ZERO { Pos::new(1, 0) } else { goal };
        board.set(goal, GOAL);
        board.set(Pos::ZERO, START);
        board
    }

    /// Fill a `rows` x `cols` board with walls at `wall_density`, then place
    /// start and goal on two distinct random cells.
    ///
    /// Needs at least two cells; smaller sizes are raised to 2x1.
    pub fn scatter(&mut self, rows: i32, cols: i32, wall_density: f64) -> Board {
        let rows = rows.max(2);
        let cols = cols.max(1);
        let density = wall_density.clamp(0.0, 1.0);
        let mut board = Board::filled(rows, cols, FLOOR);
        for p in board.bounds().iter() {
            if self.rng.random_bool(density) {
                board.set(p, WALL);
            }
        }

        let start = self.random_pos(rows, cols);
        let mut goal = self.random_pos(rows, cols);
        while goal == start {
            goal = self.random_pos(rows, cols);
        }
        board.set(start, START);
        board.set(goal, GOAL);
        board
    }

    fn random_pos(&mut self, rows: i32, cols: i32) -> Pos {
        Pos::new(self.rng.random_range(0..rows), self.rng.random_range(0..cols))
    }

    /// Knock out walls that separate two open lattice cells.
    fn open_loops(&mut self, board: &mut Board) {
        for p in board.bounds().iter() {
            if board.at(p) != Some(WALL) || (p.row % 2 == 1) == (p.col % 2 == 1) {
                continue;
            }
            // Exactly one odd coordinate: the wall sits between two lattice
            // cells, either vertically or horizontally.
            let (a, b) = if p.row % 2 == 1 {
                (p.shift(-1, 0), p.shift(1, 0))
            } else {
                (p.shift(0, -1), p.shift(0, 1))
            };
            if board.at(a) == Some(FLOOR)
                && board.at(b) == Some(FLOOR)
                && self.rng.random_bool(self.loop_chance)
            {
                board.set(p, FLOOR);
            }
        }
    }
}

/// Render a board as maze file text: the header line, then one line per
/// row, newline-terminated.
pub fn to_maze_text(board: &Board, header: &str) -> String {
    format!("{header}\n{board}\n")
}
