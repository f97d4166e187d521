//! Terminal UI rendering.

pub mod status_bar;
pub mod stopwatch_panel;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = theme::palette(app.dark_mode);

    // Status bar pinned to the bottom row.
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Routine checklist
            Constraint::Percentage(40), // Stopwatch
        ])
        .split(main_chunks[0]);

    task_panel::render(frame, content_chunks[0], app, &palette);
    stopwatch_panel::render(frame, content_chunks[1], app, &palette);
    status_bar::render(frame, main_chunks[1], app, &palette);
}
