use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::locale::Locale;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Language of every label, tip and error message.
    #[serde(default)]
    pub locale: Locale,
    /// Redraw/animation tick in milliseconds (default: 50).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Ease the scale marker into place instead of jumping (default: true).
    #[serde(default = "default_animate_marker")]
    pub animate_marker: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive mode.
    /// Defaults to `<data_local_dir>/bmi-tui/bmi-tui.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_animate_marker() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("bmi-tui")
                .join("bmi-tui.log")
        })
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            tick_rate_ms: default_tick_rate_ms(),
            animate_marker: default_animate_marker(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
