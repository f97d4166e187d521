//! Routine task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use routinely_core::format::format_clock;

use super::theme::{self, Palette};
use crate::app::{App, PanelFocus, TaskSlot};

/// Render the routine checklist with per-task countdown readouts.
pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let items: Vec<ListItem> = app
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| task_line(app, slot, index, palette))
        .collect();

    let focused = app.focus == PanelFocus::Tasks;
    let block = Block::default()
        .title("Routine")
        .borders(Borders::ALL)
        .border_style(if focused {
            theme::focused_border(palette)
        } else {
            theme::dimmed(palette)
        });

    frame.render_widget(List::new(items).block(block), area);
}

fn task_line<'a>(app: &App, slot: &'a TaskSlot, index: usize, palette: &Palette) -> ListItem<'a> {
    let checked = app.checked.contains(&slot.task.id);
    let checkbox = if checked { "[\u{2713}]" } else { "[ ]" };

    let label_style = if app.focus == PanelFocus::Tasks && index == app.selected {
        theme::selected(palette)
    } else if checked {
        theme::dimmed(palette)
    } else {
        theme::normal(palette)
    };

    let mut spans = vec![
        Span::styled(checkbox, label_style),
        Span::raw(" "),
        Span::styled(slot.task.label.as_str(), label_style),
    ];

    if let Some(timer) = &slot.timer {
        let clock = format_clock(timer.remaining_ms(), false);
        let (glyph, clock_style) = if timer.is_running() {
            ("\u{25b6}", theme::running(palette))
        } else if timer.is_completed() {
            ("\u{2713}", theme::done(palette))
        } else {
            ("\u{23f8}", theme::dimmed(palette))
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{glyph} {clock}"), clock_style));
    }

    ListItem::new(Line::from(spans))
}
