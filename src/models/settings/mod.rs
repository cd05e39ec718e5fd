// Settings module
// User-editable preferences for the countdown window

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_WINDOW_TITLE: &str = "Year of Synchronicity";
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_WINDOW_WIDTH: f32 = 360.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 110.0;
pub const MIN_WINDOW_WIDTH: f32 = 200.0;
pub const MIN_WINDOW_HEIGHT: f32 = 80.0;

/// Which color theme the window should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Navy,
    Light,
    Dark,
    /// Follow the operating system's light/dark mode
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub refresh_interval_secs: u64,
    pub theme: ThemePreference,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub always_on_top: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            theme: ThemePreference::default(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            always_on_top: false,
        }
    }
}

impl Settings {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Validate settings values
    pub fn validate(&self) -> Result<(), String> {
        if self.refresh_interval_secs == 0 {
            return Err("Refresh interval must be at least 1 second".to_string());
        }

        if self.window_title.trim().is_empty() {
            return Err("Window title cannot be empty".to_string());
        }

        if !self.window_width.is_finite() || self.window_width < MIN_WINDOW_WIDTH {
            return Err(format!(
                "Window width must be at least {}",
                MIN_WINDOW_WIDTH
            ));
        }

        if !self.window_height.is_finite() || self.window_height < MIN_WINDOW_HEIGHT {
            return Err(format!(
                "Window height must be at least {}",
                MIN_WINDOW_HEIGHT
            ));
        }

        Ok(())
    }
}
