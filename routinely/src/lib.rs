//! `Routinely` — terminal daily-routine tracker library.

pub mod app;
pub mod chime;
pub mod config;
pub mod timer;
pub mod ui;
