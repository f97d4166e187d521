//! Configuration system for `Routinely`.
//!
//! Layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/routinely/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error. The routine task list
//! comes from `[[tasks]]` entries, falling back to the built-in routine.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use routinely_core::task::{self, RoutineTask, validate_routine};

use crate::timer::DEFAULT_TICK_PERIOD;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// The configured task list is malformed.
    #[error("invalid task list: {0}")]
    InvalidTasks(#[from] task::TaskError),
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "routinely", version, about)]
pub struct CliArgs {
    /// Path to the config file (default: ~/.config/routinely/config.toml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. "info", "routinely=debug").
    #[arg(long, env = "ROUTINELY_LOG", default_value = "info")]
    pub log_level: String,

    /// Log file path (default: temp dir).
    #[arg(long, env = "ROUTINELY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Engine tick period in milliseconds.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Start with the light palette.
    #[arg(long)]
    pub light: bool,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
    timer: TimerFileConfig,
    chime: ChimeFileConfig,
    tasks: Option<Vec<RoutineTask>>,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    dark_mode: Option<bool>,
}

/// `[timer]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TimerFileConfig {
    tick_period_ms: Option<u64>,
}

/// `[chime]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ChimeFileConfig {
    count: Option<u32>,
    gap_ms: Option<u64>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Input poll timeout — also the UI re-render cadence.
    pub poll_timeout: Duration,
    /// Engine tick period.
    pub tick_period: Duration,
    /// Whether the dark palette starts active.
    pub dark_mode: bool,
    /// Bells per completion chime.
    pub chime_count: u32,
    /// Gap between bells.
    pub chime_gap: Duration,
    /// The routine task list.
    pub tasks: Vec<RoutineTask>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(100),
            tick_period: DEFAULT_TICK_PERIOD,
            dark_mode: true,
            chime_count: 3,
            chime_gap: Duration::from_millis(250),
            tasks: task::default_routine(),
        }
    }
}

impl AppConfig {
    /// Loads and resolves configuration from the config file and CLI args.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`] when an explicitly given config
    /// path cannot be read, [`ConfigError::ParseToml`] for malformed TOML,
    /// and [`ConfigError::InvalidTasks`] when the task list fails
    /// validation.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(file) = read_config_file(cli.config.as_ref())? {
            config.apply_file(file)?;
        }

        // CLI args override the file.
        if let Some(tick_ms) = cli.tick_ms {
            config.tick_period = Duration::from_millis(tick_ms.max(1));
        }
        if cli.light {
            config.dark_mode = false;
        }

        Ok(config)
    }

    fn apply_file(&mut self, file: ConfigFile) -> Result<(), ConfigError> {
        if let Some(ms) = file.ui.poll_timeout_ms {
            self.poll_timeout = Duration::from_millis(ms.max(1));
        }
        if let Some(dark) = file.ui.dark_mode {
            self.dark_mode = dark;
        }
        if let Some(ms) = file.timer.tick_period_ms {
            self.tick_period = Duration::from_millis(ms.max(1));
        }
        if let Some(count) = file.chime.count {
            self.chime_count = count;
        }
        if let Some(ms) = file.chime.gap_ms {
            self.chime_gap = Duration::from_millis(ms);
        }
        if let Some(tasks) = file.tasks {
            validate_routine(&tasks)?;
            self.tasks = tasks;
        }
        Ok(())
    }
}

/// Reads and parses the config file, if one exists.
///
/// An explicit path must exist; the default path is optional.
fn read_config_file(explicit: Option<&PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path.clone(), true),
        None => {
            let Some(dir) = dirs::config_dir() else {
                return Ok(None);
            };
            (dir.join("routinely").join("config.toml"), false)
        }
    };

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) if required => return Err(ConfigError::ReadFile { path, source }),
        Err(_) => return Ok(None),
    };

    let file = toml::from_str(&raw)?;
    Ok(Some(file))
}
