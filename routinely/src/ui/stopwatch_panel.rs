//! Freestanding stopwatch rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use routinely_core::format::{format_stopwatch_display, minute_progress};

use super::theme::{self, Palette};
use crate::app::{App, PanelFocus};

/// Render the stopwatch: main clock with hundredths, a cyclical
/// minute-progress gauge, and the set-time edit box when open.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == PanelFocus::Stopwatch;
    let block = Block::default()
        .title("Stopwatch")
        .borders(Borders::ALL)
        .border_style(if focused {
            theme::focused_border(palette)
        } else {
            theme::dimmed(palette)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let elapsed_ms = app.stopwatch.elapsed_ms();
    let display = format_stopwatch_display(elapsed_ms, false);
    let clock_style = if app.stopwatch.is_running() {
        theme::running(palette)
    } else {
        theme::bold(palette)
    };

    let clock_line = Line::from(vec![
        Span::styled(display.main, clock_style),
        Span::styled(format!(".{}", display.hundredths), theme::dimmed(palette)),
    ]);
    frame.render_widget(Paragraph::new(clock_line).centered(), rows[0]);

    // Cyclical indicator: wraps every minute, by design not overall
    // progress.
    let gauge = Gauge::default()
        .ratio(minute_progress(elapsed_ms) / 100.0)
        .gauge_style(theme::normal(palette).fg(palette.gauge))
        .label("");
    frame.render_widget(gauge, rows[2]);

    if let Some(buffer) = &app.edit_buffer {
        edit_box(frame, rows[3], buffer, palette);
    }
}

fn edit_box(frame: &mut Frame, area: Rect, buffer: &str, palette: &Palette) {
    let line = Line::from(vec![
        Span::styled("Set time: ", theme::dimmed(palette)),
        Span::styled(buffer.to_string(), theme::bold(palette)),
        Span::styled("\u{2588}", theme::bold(palette)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
