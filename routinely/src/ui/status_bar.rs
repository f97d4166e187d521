//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::{self, Palette};
use crate::app::{App, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let help_text = if app.edit_buffer.is_some() {
        "Enter: apply | Esc: cancel | digits and ':' only"
    } else {
        match app.focus {
            PanelFocus::Tasks => {
                "\u{2191}\u{2193}/jk: navigate | Space: done | s: start/pause | r: reset | Tab: stopwatch | d: theme | q: quit"
            }
            PanelFocus::Stopwatch => {
                "s: start/pause | r: reset | e: set time (paused) | Tab: tasks | d: theme | q: quit"
            }
        }
    };

    let wall_clock = chrono::Local::now().format("%H:%M:%S").to_string();

    let status_line = Line::from(vec![
        Span::styled("Routinely v0.1.0", theme::bold(palette)),
        Span::raw(" | "),
        Span::raw(wall_clock),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed(palette)),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar(palette));
    frame.render_widget(paragraph, area);
}
