//! Application settings persisted as JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// File name looked up in the working directory.
pub const SETTINGS_FILE: &str = "scanimate.json";

/// Application-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// Initial window width in logical pixels
    pub window_width: f64,
    /// Initial window height in logical pixels
    pub window_height: f64,
    /// Number of frames delivered per capture batch
    #[serde(default = "default_capture_batch_size")]
    pub capture_batch_size: u32,
}

fn default_capture_batch_size() -> u32 {
    6
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 720.0,
            capture_batch_size: default_capture_batch_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// unreadable. A missing file is the normal first-run case.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no settings file at {:?}, using defaults", path);
                Self::default()
            }
            Err(err) => {
                warn!("failed to load settings from {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Save settings to a file.
    #[allow(dead_code)]
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = AppSettings::load_or_default(Path::new("does-not-exist.json"));
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_batch_size_defaults_when_absent() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"window_width": 800.0, "window_height": 600.0}"#).unwrap();
        assert_eq!(settings.capture_batch_size, 6);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("scanimate-settings-test.json");
        let settings = AppSettings {
            window_width: 900.0,
            window_height: 650.0,
            capture_batch_size: 12,
        };
        settings.save(&path).unwrap();
        let loaded = AppSettings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }
}
