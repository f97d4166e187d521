//! Application state and event handling.
//!
//! Everything presentational lives here — the checked-task set, panel
//! focus, theme flag, and the stopwatch edit buffer — outside the
//! time-keeping core. Engines are consulted only through their handles and
//! re-read on every draw; completions arrive over the timer event channel
//! and are drained once per loop iteration.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use routinely_core::format::parse_clock;
use routinely_core::task::RoutineTask;

use crate::config::AppConfig;
use crate::timer::{Countdown, Stopwatch, TimerEvent};

/// Maximum characters accepted into the set-time edit box ("HH:MM:SS").
const MAX_EDIT_LEN: usize = 8;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Routine task list (default).
    Tasks,
    /// Freestanding stopwatch.
    Stopwatch,
}

/// One routine task plus its countdown handle, when the task is timed.
pub struct TaskSlot {
    /// The task descriptor from configuration.
    pub task: RoutineTask,
    /// Countdown driver for timed tasks; `None` for plain checklist items.
    pub timer: Option<Countdown>,
}

/// Main application state.
pub struct App {
    /// Routine tasks in display order.
    pub slots: Vec<TaskSlot>,
    /// Ids of tasks currently marked done.
    pub checked: HashSet<String>,
    /// Selected row in the task list.
    pub selected: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Whether the dark palette is active.
    pub dark_mode: bool,
    /// The freestanding stopwatch.
    pub stopwatch: Stopwatch,
    /// In-progress set-time input, `Some` while editing.
    pub edit_buffer: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Completion notifications from countdown tickers.
    events: mpsc::UnboundedReceiver<TimerEvent>,
}

impl App {
    /// Builds the application from resolved configuration, wiring each
    /// timed task to a countdown whose completion callback posts a
    /// [`TimerEvent`] back to this app's channel.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();

        let slots = config
            .tasks
            .iter()
            .map(|task| {
                let timer = task.duration_seconds.map(|seconds| {
                    let tx = event_tx.clone();
                    let task_id = task.id.clone();
                    Countdown::new(seconds, config.tick_period, move || {
                        // Fire-and-forget: a closed channel just means the
                        // app is shutting down.
                        let _ = tx.send(TimerEvent::CountdownCompleted {
                            task_id: task_id.clone(),
                        });
                    })
                });
                TaskSlot {
                    task: task.clone(),
                    timer,
                }
            })
            .collect();

        Self {
            slots,
            checked: HashSet::new(),
            selected: 0,
            focus: PanelFocus::Tasks,
            dark_mode: config.dark_mode,
            stopwatch: Stopwatch::new(config.tick_period),
            edit_buffer: None,
            should_quit: false,
            events,
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // An active set-time edit captures all input first.
        if self.edit_buffer.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Esc | KeyCode::Char('q'), _) => {
                self.should_quit = true;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => self.toggle_focus(),
            (KeyCode::Char('d'), _) => self.dark_mode = !self.dark_mode,
            _ => match self.focus {
                PanelFocus::Tasks => self.handle_tasks_key(key),
                PanelFocus::Stopwatch => self.handle_stopwatch_key(key),
            },
        }
    }

    /// Drains pending timer events, marking completed tasks as done.
    /// Returns the number of completions so the caller can chime per
    /// completion.
    pub fn drain_timer_events(&mut self) -> usize {
        let mut completions = 0;
        while let Ok(event) = self.events.try_recv() {
            match event {
                TimerEvent::CountdownCompleted { task_id } => {
                    tracing::info!(task_id = %task_id, "countdown completed");
                    self.checked.insert(task_id);
                    completions += 1;
                }
            }
        }
        completions
    }

    /// Key event in the task list.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ') => self.toggle_checked(),
            KeyCode::Enter | KeyCode::Char('s') => self.start_pause_selected(),
            KeyCode::Char('r') => self.reset_selected(),
            _ => {}
        }
    }

    /// Key event in the stopwatch panel.
    fn handle_stopwatch_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('s') => {
                if self.stopwatch.is_running() {
                    self.stopwatch.pause();
                } else {
                    self.stopwatch.start();
                }
            }
            KeyCode::Char('r') => self.stopwatch.reset(),
            // Editing is only offered while paused; the engine itself only
            // sanitizes, so the gate lives here.
            KeyCode::Char('e') if !self.stopwatch.is_running() => {
                self.edit_buffer = Some(String::new());
            }
            _ => {}
        }
    }

    /// Key event while the set-time edit box is open.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.edit_buffer.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.edit_buffer = None,
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c) if (c.is_ascii_digit() || c == ':') && buffer.len() < MAX_EDIT_LEN => {
                buffer.push(c);
            }
            KeyCode::Enter => {
                // Commit only on a well-formed clock string; otherwise the
                // box stays open for correction.
                if let Some(ms) = parse_clock(buffer) {
                    #[allow(clippy::cast_precision_loss)]
                    self.stopwatch.set_time_ms(ms as f64);
                    self.edit_buffer = None;
                }
            }
            _ => {}
        }
    }

    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Tasks => PanelFocus::Stopwatch,
            PanelFocus::Stopwatch => PanelFocus::Tasks,
        };
    }

    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn select_next(&mut self) {
        if self.selected < self.slots.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Flips the done mark on the selected task.
    fn toggle_checked(&mut self) {
        let Some(slot) = self.slots.get(self.selected) else {
            return;
        };
        let id = slot.task.id.clone();
        if !self.checked.insert(id.clone()) {
            self.checked.remove(&id);
        }
    }

    /// Starts or pauses the selected task's countdown, if it has one.
    fn start_pause_selected(&mut self) {
        if let Some(slot) = self.slots.get_mut(self.selected)
            && let Some(timer) = slot.timer.as_mut()
        {
            if timer.is_running() {
                timer.pause();
            } else {
                timer.start();
            }
        }
    }

    /// Resets the selected task's countdown to its full duration.
    fn reset_selected(&mut self) {
        if let Some(slot) = self.slots.get_mut(self.selected)
            && let Some(timer) = slot.timer.as_mut()
        {
            timer.reset();
        }
    }
}
