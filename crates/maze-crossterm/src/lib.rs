//! Terminal replay of maze search results.
//!
//! An [`Animator`] draws a maze board in the terminal and then paints a
//! sequence of positions over it one step at a time, the way a search
//! visited them or the path it found. Drawing goes through crossterm on the
//! alternate screen; the terminal is restored when the replay ends, whether
//! or not it succeeded.
//!
//! The frames themselves are computed by [`replay_frames`], which needs no
//! terminal.

pub mod canvas;
pub mod style;

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{
        Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{self, ClearType},
};

use maze_core::{Board, Pos};

pub use canvas::{Canvas, Frame, FrameCell};
pub use style::{Cell, Color, Palette, Style};

/// Maps a [`Color`] to a crossterm colour.
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

// ---------------------------------------------------------------------------
// AnimatorConfig
// ---------------------------------------------------------------------------

/// Rendering settings for an [`Animator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimatorConfig {
    /// Pause between two painted positions.
    pub delay: Duration,
    /// Pause after the last position before the terminal is restored.
    pub final_pause: Duration,
    /// Board character drawn as a wall.
    pub wall: char,
    /// Glyph painted over replayed floor cells. Start and goal keep theirs.
    pub trail_glyph: char,
    pub palette: Palette,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(40),
            final_pause: Duration::from_millis(1500),
            wall: '-',
            trail_glyph: '*',
            palette: Palette::default(),
        }
    }
}

impl AnimatorConfig {
    fn base_style(&self, p: Pos, ch: char, start: Pos, goal: Pos) -> Style {
        if p == start {
            self.palette.start
        } else if p == goal {
            self.palette.goal
        } else if ch == self.wall {
            self.palette.wall
        } else {
            self.palette.floor
        }
    }
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// Compute the frames of a replay.
///
/// The first frame draws the whole board; frame `i + 1` paints
/// `positions[i]` as the head and turns the previous head into trail. The
/// result always holds `positions.len() + 1` frames. Positions off the board
/// produce empty frames.
pub fn replay_frames(
    board: &Board,
    positions: &[Pos],
    start: Pos,
    goal: Pos,
    config: &AnimatorConfig,
) -> Vec<Frame> {
    let mut canvas =
        Canvas::from_board(board, |p, ch| config.base_style(p, ch, start, goal));
    let mut frames = Vec::with_capacity(positions.len() + 1);
    frames.push(canvas.full_frame());

    let glyph_at = |p: Pos, ch: char| {
        if p == start || p == goal {
            ch
        } else {
            config.trail_glyph
        }
    };

    let mut head: Option<Pos> = None;
    for &p in positions {
        let mut frame = Frame::default();
        let Some(ch) = board.at(p) else {
            log::warn!("replay position {p} is off the board");
            frames.push(frame);
            continue;
        };
        if let Some(prev) = head.filter(|&h| h != p) {
            if let Some(cell) = canvas.at(prev) {
                frame.paint(&mut canvas, prev, Cell::new(cell.ch, config.palette.trail));
            }
        }
        frame.paint(&mut canvas, p, Cell::new(glyph_at(p, ch), config.palette.head));
        head = Some(p);
        frames.push(frame);
    }
    frames
}

// ---------------------------------------------------------------------------
// Animator
// ---------------------------------------------------------------------------

/// Replays position sequences in the terminal.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    config: AnimatorConfig,
}

impl Animator {
    pub fn new(config: AnimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Replay `positions` over `board` on standard output.
    pub fn replay(
        &self,
        board: &Board,
        positions: &[Pos],
        start: Pos,
        goal: Pos,
    ) -> io::Result<()> {
        let mut stdout = io::stdout();
        self.replay_to(&mut stdout, board, positions, start, goal)
    }

    /// Replay `positions` over `board` on `out`.
    ///
    /// The alternate screen is entered and the cursor hidden for the
    /// duration; both are restored before returning, even when drawing
    /// fails.
    pub fn replay_to<W: Write>(
        &self,
        out: &mut W,
        board: &Board,
        positions: &[Pos],
        start: Pos,
        goal: Pos,
    ) -> io::Result<()> {
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        let drawn = self.draw(out, board, positions, start, goal);
        let restored = execute!(
            out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        drawn.and(restored)
    }

    fn draw<W: Write>(
        &self,
        out: &mut W,
        board: &Board,
        positions: &[Pos],
        start: Pos,
        goal: Pos,
    ) -> io::Result<()> {
        let frames = replay_frames(board, positions, start, goal, &self.config);
        let status_row = to_u16(board.rows().saturating_add(1));
        let steps = frames.len() - 1;
        log::debug!("replaying {steps} positions over a {} board", board.bounds());

        for (i, frame) in frames.iter().enumerate() {
            flush_frame(out, frame)?;
            queue!(
                out,
                ResetColor,
                cursor::MoveTo(0, status_row),
                terminal::Clear(ClearType::CurrentLine),
                Print(format!("step {i}/{steps}"))
            )?;
            out.flush()?;
            if i > 0 && !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }
        if !self.config.final_pause.is_zero() {
            thread::sleep(self.config.final_pause);
        }
        Ok(())
    }
}

fn to_u16(v: i32) -> u16 {
    u16::try_from(v.max(0)).unwrap_or(u16::MAX)
}

/// Queue the draw commands for every cell of `frame`.
fn flush_frame<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    for fc in &frame.cells {
        let style = fc.cell.style;
        queue!(
            out,
            cursor::MoveTo(to_u16(fc.pos.col), to_u16(fc.pos.row)),
            SetForegroundColor(to_ct_color(style.fg)),
            SetBackgroundColor(to_ct_color(style.bg))
        )?;
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        queue!(out, Print(fc.cell.ch))?;
        if style.bold {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "#.-\n..$";

    fn quiet() -> AnimatorConfig {
        AnimatorConfig {
            delay: Duration::ZERO,
            final_pause: Duration::ZERO,
            ..AnimatorConfig::default()
        }
    }

    fn path() -> Vec<Pos> {
        vec![
            Pos::new(0, 0),
            Pos::new(1, 0),
            Pos::new(1, 1),
            Pos::new(1, 2),
        ]
    }

    #[test]
    fn default_color_maps_to_reset() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn first_frame_draws_styled_board() {
        let board = Board::parse(MAZE).unwrap();
        let cfg = quiet();
        let frames = replay_frames(&board, &path(), Pos::new(0, 0), Pos::new(1, 2), &cfg);
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].len(), 6);
        let style_at = |p: Pos| {
            frames[0]
                .cells
                .iter()
                .find(|fc| fc.pos == p)
                .map(|fc| fc.cell.style)
        };
        assert_eq!(style_at(Pos::new(0, 0)), Some(cfg.palette.start));
        assert_eq!(style_at(Pos::new(0, 1)), Some(cfg.palette.floor));
        assert_eq!(style_at(Pos::new(0, 2)), Some(cfg.palette.wall));
        assert_eq!(style_at(Pos::new(1, 2)), Some(cfg.palette.goal));
    }

    #[test]
    fn steps_move_the_head_and_leave_a_trail() {
        let board = Board::parse(MAZE).unwrap();
        let cfg = quiet();
        let frames = replay_frames(&board, &path(), Pos::new(0, 0), Pos::new(1, 2), &cfg);

        // Only the start becomes the head.
        assert_eq!(frames[1].len(), 1);
        assert_eq!(frames[1].cells[0].cell, Cell::new('#', cfg.palette.head));

        // Previous head becomes trail, new head is painted with the glyph.
        let f = &frames[2];
        assert_eq!(f.len(), 2);
        assert!(f.cells.contains(&FrameCell {
            pos: Pos::new(0, 0),
            cell: Cell::new('#', cfg.palette.trail),
        }));
        assert!(f.cells.contains(&FrameCell {
            pos: Pos::new(1, 0),
            cell: Cell::new('*', cfg.palette.head),
        }));

        // The goal keeps its own character.
        let last = frames[4].cells.iter().find(|fc| fc.pos == Pos::new(1, 2));
        assert_eq!(last.map(|fc| fc.cell.ch), Some('$'));
    }

    #[test]
    fn every_step_touches_at_most_two_cells() {
        let board = Board::filled(40, 60, '.');
        let all: Vec<Pos> = board.bounds().iter().collect();
        let start = Pos::ZERO;
        let goal = Pos::new(39, 59);
        let frames = replay_frames(&board, &all, start, goal, &quiet());
        assert_eq!(frames.len(), all.len() + 1);
        assert_eq!(frames[0].len(), all.len());
        assert!(frames[1..].iter().all(|f| f.len() <= 2));

        // Replaying the frames in order leaves every cell but the last as trail.
        let mut screen = Canvas::from_board(&board, |_, _| Style::default());
        for f in &frames {
            for fc in &f.cells {
                screen.set(fc.pos, fc.cell);
            }
        }
        let cfg = quiet();
        assert_eq!(screen.at(Pos::new(0, 1)), Some(Cell::new('*', cfg.palette.trail)));
        assert_eq!(screen.at(goal), Some(Cell::new('.', cfg.palette.head)));
    }

    #[test]
    fn off_board_positions_give_empty_frames() {
        let board = Board::parse(MAZE).unwrap();
        let frames = replay_frames(
            &board,
            &[Pos::new(9, 9)],
            Pos::new(0, 0),
            Pos::new(1, 2),
            &quiet(),
        );
        assert_eq!(frames.len(), 2);
        assert!(frames[1].is_empty());
    }

    #[test]
    fn empty_sequence_only_draws_board() {
        let board = Board::parse(MAZE).unwrap();
        let frames = replay_frames(&board, &[], Pos::new(0, 0), Pos::new(1, 2), &quiet());
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn replay_writes_cells_and_status() {
        let board = Board::parse(MAZE).unwrap();
        let anim = Animator::new(quiet());
        let mut out = Vec::new();
        anim.replay_to(&mut out, &board, &path(), Pos::new(0, 0), Pos::new(1, 2))
            .unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('*'));
        assert!(text.contains("step 4/4"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let board = Board::parse(MAZE).unwrap();
        let anim = Animator::new(quiet());
        let err = anim
            .replay_to(&mut Broken, &board, &path(), Pos::new(0, 0), Pos::new(1, 2))
            .unwrap_err();
        assert_eq!(err.to_string(), "closed");
    }
}
