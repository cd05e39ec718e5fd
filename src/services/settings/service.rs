use crate::models::settings::Settings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("unable to resolve a configuration directory")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Loads and saves [`Settings`] as a TOML file
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `settings.toml` in the platform config directory
    pub fn from_default_location() -> Result<Self, SettingsError> {
        let dirs = ProjectDirs::from("com", "YearCountdown", "YearCountdown")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings from disk. A missing file is created with defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}; writing defaults",
                self.path.display()
            );
            let settings = Settings::default();
            self.save(&settings)?;
            return Ok(settings);
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings: Settings = toml::from_str(&data).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;

        settings.validate().map_err(SettingsError::Invalid)?;
        Ok(settings)
    }

    /// Validate and write settings to disk
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
