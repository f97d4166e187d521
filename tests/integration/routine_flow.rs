//! End-to-end flow through the application layer: key events start a
//! task's countdown, completion is drained from the timer event channel,
//! and the task ends up checked.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use routinely::app::App;
use routinely::config::AppConfig;
use routinely_core::task::RoutineTask;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn short_routine_config() -> AppConfig {
    AppConfig {
        tasks: vec![
            RoutineTask::timed("breathe", "Box breathing", 2),
            RoutineTask::untimed("journal", "Write journal"),
        ],
        ..AppConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn completed_countdown_checks_its_task() {
    let mut app = App::new(&short_routine_config());
    assert!(!app.checked.contains("breathe"));

    // Start the selected task's countdown.
    app.handle_key_event(key(KeyCode::Char('s')));
    assert!(app.slots[0].timer.as_ref().unwrap().is_running());

    tokio::time::sleep(Duration::from_millis(2600)).await;

    let completions = app.drain_timer_events();
    assert_eq!(completions, 1);
    assert!(app.checked.contains("breathe"));

    // Draining again delivers nothing new.
    assert_eq!(app.drain_timer_events(), 0);
}

#[tokio::test(start_paused = true)]
async fn pause_key_freezes_the_selected_countdown() {
    let mut app = App::new(&short_routine_config());
    app.handle_key_event(key(KeyCode::Char('s')));
    tokio::time::sleep(Duration::from_millis(600)).await;

    // Second press pauses.
    app.handle_key_event(key(KeyCode::Char('s')));
    let timer = app.slots[0].timer.as_ref().unwrap();
    let frozen = timer.remaining_ms();
    assert!(!timer.is_running());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(app.slots[0].timer.as_ref().unwrap().remaining_ms(), frozen);
    assert_eq!(app.drain_timer_events(), 0);
}

#[tokio::test(start_paused = true)]
async fn untimed_tasks_ignore_timer_keys() {
    let mut app = App::new(&short_routine_config());
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Char('s')));
    app.handle_key_event(key(KeyCode::Char('r')));
    assert!(app.slots[1].timer.is_none());

    // Space still toggles the plain checklist item.
    app.handle_key_event(key(KeyCode::Char(' ')));
    assert!(app.checked.contains("journal"));
}

#[tokio::test(start_paused = true)]
async fn restart_after_completion_runs_a_fresh_epoch() {
    let mut app = App::new(&short_routine_config());
    app.handle_key_event(key(KeyCode::Char('s')));
    tokio::time::sleep(Duration::from_millis(2600)).await;
    assert_eq!(app.drain_timer_events(), 1);

    // Un-check and re-run the same task.
    app.handle_key_event(key(KeyCode::Char(' ')));
    assert!(!app.checked.contains("breathe"));

    app.handle_key_event(key(KeyCode::Char('s')));
    assert_eq!(app.slots[0].timer.as_ref().unwrap().remaining_ms(), 2_000);
    tokio::time::sleep(Duration::from_millis(2600)).await;

    assert_eq!(app.drain_timer_events(), 1);
    assert!(app.checked.contains("breathe"));
}
