//! Styled cell buffer and frame diffing.

use maze_core::{Board, Bounds, Pos};

use crate::style::{Cell, Style};

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A rectangular buffer of styled cells, indexed by maze position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    bounds: Bounds,
}

impl Canvas {
    /// Paint every board character with the style chosen by `style_of`.
    pub fn from_board<F>(board: &Board, mut style_of: F) -> Self
    where
        F: FnMut(Pos, char) -> Style,
    {
        let cells = board
            .iter()
            .map(|(p, ch)| Cell::new(ch, style_of(p, ch)))
            .collect();
        Self {
            cells,
            bounds: board.bounds(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The cell at `p`, or `None` when off the canvas.
    #[inline]
    pub fn at(&self, p: Pos) -> Option<Cell> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `p`. Returns `false` when `p` is off the canvas.
    pub fn set(&mut self, p: Pos, cell: Cell) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// A frame that redraws every cell.
    pub fn full_frame(&self) -> Frame {
        Frame {
            cells: self
                .bounds
                .iter()
                .zip(self.cells.iter().copied())
                .map(|(pos, cell)| FrameCell { pos, cell })
                .collect(),
        }
    }

    /// The cells of `next` that differ from `self`.
    ///
    /// Canvases of different sizes share nothing, so every cell of `next` is
    /// returned.
    pub fn diff(&self, next: &Canvas) -> Frame {
        if self.bounds != next.bounds {
            return next.full_frame();
        }
        let cells = self
            .bounds
            .iter()
            .zip(self.cells.iter().zip(&next.cells))
            .filter(|(_, (a, b))| a != b)
            .map(|(pos, (_, &cell))| FrameCell { pos, cell })
            .collect();
        Frame { cells }
    }
}

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A cell that changed between two canvases.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub pos: Pos,
    pub cell: Cell,
}

/// The set of changed cells to draw for one animation step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
}

impl Frame {
    /// Set `cell` at `p` on `canvas`, recording it when it changed.
    pub fn paint(&mut self, canvas: &mut Canvas, p: Pos, cell: Cell) {
        if canvas.at(p).is_some_and(|old| old != cell) {
            canvas.set(p, cell);
            self.cells.push(FrameCell { pos: p, cell });
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
