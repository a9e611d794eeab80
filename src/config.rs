//! Runtime configuration loaded from `video-creator.json`.
//!
//! Every field has a default, so a partial file only overrides what it names
//! and a missing file means "all defaults".

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::paths;
use crate::error::AppResult;
use crate::state::PlaybackTiming;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub timing: PlaybackTiming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Video Creator".to_string(),
            width: 420.0,
            height: 820.0,
        }
    }
}

/// Asset paths, relative to the resource roots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub intro_video: String,
    pub background_video: String,
    pub button_image: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            intro_video: "assets/1.mp4".to_string(),
            background_video: "assets/2.mp4".to_string(),
            button_image: "assets/placeholder.svg".to_string(),
        }
    }
}

impl AppConfig {
    /// Read a config file. `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(Some(config))
    }

    /// Configured asset paths that do not resolve to an existing file.
    pub fn missing_assets(&self) -> Vec<&str> {
        [
            self.assets.intro_video.as_str(),
            self.assets.background_video.as_str(),
            self.assets.button_image.as_str(),
        ]
        .into_iter()
        .filter(|asset| !paths::resolve_resource_path(Path::new(asset)).is_file())
        .collect()
    }

    /// Load from the configured location, falling back to defaults.
    pub fn load() -> Self {
        let config = Self::load_or_default();
        for asset in config.missing_assets() {
            warn!("config: asset {} not found; supply it under a resource root", asset);
        }
        config
    }

    fn load_or_default() -> Self {
        let path = paths::config_path();
        match Self::load_from(&path) {
            Ok(Some(config)) => {
                debug!("config: loaded {}", path.display());
                config
            }
            Ok(None) => {
                debug!("config: {} not found, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("config: failed to load {}: {}; using defaults", path.display(), err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("video-creator-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_none() {
        let path = std::env::temp_dir().join("video-creator-definitely-missing.json");
        assert!(AppConfig::load_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file(
            "partial.json",
            r#"{ "assets": { "intro_video": "media/intro.mp4" }, "timing": { "intro_return_delay_ms": 500 } }"#,
        );
        let config = AppConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.assets.intro_video, "media/intro.mp4");
        assert_eq!(config.assets.background_video, "assets/2.mp4");
        assert_eq!(config.timing.intro_return_delay_ms, 500);
        assert_eq!(config.timing.audio_playback_ms, 6000);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let path = temp_file("broken.json", "{ not json");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_assets_are_reported() {
        let intro = temp_file("intro.mp4", "");
        let mut config = AppConfig::default();
        config.assets.intro_video = intro.to_string_lossy().into_owned();
        config.assets.background_video = "assets/does-not-exist.mp4".to_string();
        assert_eq!(config.missing_assets(), vec!["assets/does-not-exist.mp4"]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
