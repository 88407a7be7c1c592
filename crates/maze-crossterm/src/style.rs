//! Visual styling: [`Color`], [`Style`], [`Cell`], and the maze [`Palette`].

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own default colour.
    pub const DEFAULT: Self = Self(0);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Foreground, background and weight of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Style {
    #[inline]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[inline]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    #[inline]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// Styles for each kind of maze cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub wall: Style,
    pub floor: Style,
    pub start: Style,
    pub goal: Style,
    /// Cells already covered by the replay.
    pub trail: Style,
    /// The most recently replayed cell.
    pub head: Style,
}

impl Default for Palette {
    fn default() -> Self {
        let bg = Color::from_rgb(20, 20, 30);
        Self {
            wall: Style::default()
                .with_fg(Color::from_rgb(100, 100, 130))
                .with_bg(Color::from_rgb(35, 35, 50)),
            floor: Style::default()
                .with_fg(Color::from_rgb(60, 55, 50))
                .with_bg(bg),
            start: Style::default()
                .with_fg(Color::from_rgb(80, 200, 80))
                .with_bg(bg)
                .with_bold(true),
            goal: Style::default()
                .with_fg(Color::from_rgb(220, 50, 50))
                .with_bg(bg)
                .with_bold(true),
            trail: Style::default()
                .with_fg(Color::from_rgb(50, 180, 255))
                .with_bg(bg),
            head: Style::default()
                .with_fg(Color::from_rgb(255, 220, 80))
                .with_bg(Color::from_rgb(50, 180, 255))
                .with_bold(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trip() {
        let c = Color::from_rgb(0xAB, 0xCD, 0xEF);
        assert_eq!(c.r(), 0xAB);
        assert_eq!(c.g(), 0xCD);
        assert_eq!(c.b(), 0xEF);
    }

    #[test]
    fn palette_styles_are_distinct() {
        let p = Palette::default();
        let all = [p.wall, p.floor, p.start, p.goal, p.trail, p.head];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
