//! Theme palettes and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Color set for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary foreground color.
    pub fg: Color,
    /// Secondary foreground color (metadata, done tasks).
    pub fg_dim: Color,
    /// Focused-panel border and selection color.
    pub highlight: Color,
    /// Running-timer indicator color.
    pub running: Color,
    /// Completed-countdown indicator color.
    pub done: Color,
    /// Minute-progress gauge color.
    pub gauge: Color,
    /// Status bar background.
    pub status_bg: Color,
}

/// Dark palette (default).
pub const DARK: Palette = Palette {
    fg: Color::White,
    fg_dim: Color::DarkGray,
    highlight: Color::Cyan,
    running: Color::Green,
    done: Color::Yellow,
    gauge: Color::Cyan,
    status_bg: Color::Rgb(30, 30, 50),
};

/// Light palette.
pub const LIGHT: Palette = Palette {
    fg: Color::Black,
    fg_dim: Color::Gray,
    highlight: Color::Blue,
    running: Color::Green,
    done: Color::Rgb(180, 120, 0),
    gauge: Color::Blue,
    status_bg: Color::Rgb(210, 210, 225),
};

/// Palette for the given theme flag.
#[must_use]
pub const fn palette(dark_mode: bool) -> Palette {
    if dark_mode { DARK } else { LIGHT }
}

/// Normal text style.
#[must_use]
pub fn normal(p: &Palette) -> Style {
    Style::default().fg(p.fg)
}

/// Dimmed text style (done tasks, hints).
#[must_use]
pub fn dimmed(p: &Palette) -> Style {
    Style::default().fg(p.fg_dim)
}

/// Bold text style.
#[must_use]
pub fn bold(p: &Palette) -> Style {
    Style::default().fg(p.fg).add_modifier(Modifier::BOLD)
}

/// Focused-panel border style.
#[must_use]
pub fn focused_border(p: &Palette) -> Style {
    Style::default().fg(p.highlight).add_modifier(Modifier::BOLD)
}

/// Selected list row style.
#[must_use]
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(p.highlight)
        .add_modifier(Modifier::BOLD)
}

/// Running-timer clock style.
#[must_use]
pub fn running(p: &Palette) -> Style {
    Style::default().fg(p.running).add_modifier(Modifier::BOLD)
}

/// Completed-countdown style.
#[must_use]
pub fn done(p: &Palette) -> Style {
    Style::default().fg(p.done).add_modifier(Modifier::BOLD)
}

/// Status bar style.
#[must_use]
pub fn status_bar(p: &Palette) -> Style {
    Style::default().fg(p.fg).bg(p.status_bg)
}
