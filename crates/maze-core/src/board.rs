//! The [`Board`] type, a rectangular matrix of maze characters.
//!
//! A board is the raw, uninterpreted form of a maze: one `char` per cell,
//! stored row-major. Giving meaning to the characters (walls, start, goal)
//! is left to the graph builder.

use std::fmt;

use crate::geom::{Bounds, Pos};

/// A rectangular grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<char>,
    bounds: Bounds,
}

impl Board {
    /// Build a board from rows of characters.
    ///
    /// Every row must have the same length as the first one.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * rows.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::InconsistentWidth {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            bounds: Bounds::new(rows.len() as i32, width as i32),
        })
    }

    /// A `rows` x `cols` board with every cell set to `ch`.
    pub fn filled(rows: i32, cols: i32, ch: char) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![ch; bounds.len()],
            bounds,
        }
    }

    /// Parse a board from text, one row per line.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped; no other trimming is
    /// done, so leading spaces are walkable cells.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        Self::from_lines(s.lines())
    }

    /// Build a board from an iterator of text rows.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::new(lines.into_iter().map(|l| l.chars().collect()).collect())
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// The board extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `p` is on the board.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The character at `p`, or `None` if `p` is off the board.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<char> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the character at `p`. No-op if `p` is off the board.
    pub fn set(&mut self, p: Pos, ch: char) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = ch;
        }
    }

    /// One row as a slice, or `None` if `row` is out of range.
    pub fn row(&self, row: i32) -> Option<&[char]> {
        if row < 0 || row >= self.bounds.rows {
            return None;
        }
        let w = self.bounds.cols as usize;
        let start = row as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// First position holding `ch`, scanning row-major.
    pub fn find(&self, ch: char) -> Option<Pos> {
        self.iter().find(|&(_, c)| c == ch).map(|(p, _)| p)
    }

    /// Row-major iterator over `(Pos, char)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, char)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Board {
    /// Renders the board back to text, one line per row, without a trailing
    /// newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.bounds.rows {
            if r > 0 {
                f.write_str("\n")?;
            }
            if let Some(row) = self.row(r) {
                for &ch in row {
                    write!(f, "{ch}")?;
                }
            }
        }
        Ok(())
    }
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A row does not have the same length as the first row.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {row} has {found} columns, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
#..-
-.-.
...$";

    #[test]
    fn parse_and_size() {
        let b = Board::parse(MAZE).unwrap();
        assert_eq!(b.rows(), 3);
        assert_eq!(b.cols(), 4);
        assert_eq!(b.at(Pos::new(0, 0)), Some('#'));
        assert_eq!(b.at(Pos::new(2, 3)), Some('$'));
        assert_eq!(b.at(Pos::new(3, 0)), None);
        assert_eq!(b.at(Pos::new(0, -1)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let b = Board::parse("ab\ncd").unwrap();
        let cells: Vec<_> = b.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Pos::new(0, 0), 'a'),
                (Pos::new(0, 1), 'b'),
                (Pos::new(1, 0), 'c'),
                (Pos::new(1, 1), 'd'),
            ]
        );
    }

    #[test]
    fn find_first_occurrence() {
        let b = Board::parse(MAZE).unwrap();
        assert_eq!(b.find('$'), Some(Pos::new(2, 3)));
        assert_eq!(b.find('-'), Some(Pos::new(0, 3)));
        assert_eq!(b.find('x'), None);
    }

    #[test]
    fn jagged_rows_rejected() {
        let err = Board::parse("abc\nde").unwrap_err();
        assert_eq!(
            err,
            BoardError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn crlf_lines() {
        let b = Board::parse("#.\r\n.$\r\n").unwrap();
        assert_eq!(b.rows(), 2);
        assert_eq!(b.cols(), 2);
        assert_eq!(b.at(Pos::new(1, 1)), Some('$'));
    }

    #[test]
    fn empty_board() {
        let b = Board::new(Vec::new()).unwrap();
        assert_eq!(b.rows(), 0);
        assert_eq!(b.cols(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn filled_board() {
        let b = Board::filled(2, 3, '-');
        assert_eq!(b.to_string(), "---\n---");
        assert_eq!(b, Board::parse("---\n---").unwrap());
    }

    #[test]
    fn set_and_display() {
        let mut b = Board::parse("ab\ncd").unwrap();
        b.set(Pos::new(1, 0), 'x');
        b.set(Pos::new(9, 9), 'y');
        assert_eq!(b.to_string(), "ab\nxd");
        assert_eq!(b.row(1), Some(&['x', 'd'][..]));
        assert_eq!(b.row(2), None);
    }
}
