// Settings for the badge viewer, read from an optional JSON file.
// Every field has a default so a partial file is enough.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Edge length of a rendered badge in pixels
    pub logo_size: f32,
    /// Platform shown when the viewer opens
    pub initial_platform: String,
    /// Platform names offered as one-click buttons
    pub presets: Vec<String>,
    pub window_size: (f32, f32),
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            logo_size: 128.0,
            initial_platform: "looker".to_string(),
            presets: ["looker", "superset", "airflow", "kafka"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            window_size: (520.0, 420.0),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: ViewerConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        info!("Loaded viewer config from {:?}", path);
        Ok(config)
    }

    /// Sizes must be positive and finite; iced cannot lay out zero-sized text
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.logo_size.is_finite() && self.logo_size > 0.0,
            "logo_size must be a positive number, got {}",
            self.logo_size
        );
        let (width, height) = self.window_size;
        ensure!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "window_size must be positive, got ({}, {})",
            width,
            height
        );
        Ok(())
    }

    /// Loads `path` when given, falling back to defaults if it is missing or unreadable
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Using default viewer config: {:#}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("platform_logos_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_file("partial.json", r#"{ "logo_size": 64.0 }"#);
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.logo_size, 64.0);
        assert_eq!(config.initial_platform, "looker");
        assert_eq!(config.presets, ViewerConfig::default().presets);
    }

    #[test]
    fn test_full_file() {
        let path = temp_file(
            "full.json",
            r#"{ "logo_size": 96.0, "initial_platform": "Airflow",
                 "presets": ["airflow", "snowflake"], "window_size": [640.0, 480.0] }"#,
        );
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.initial_platform, "Airflow");
        assert_eq!(config.presets, vec!["airflow", "snowflake"]);
        assert_eq!(config.window_size, (640.0, 480.0));
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let path = temp_file("broken.json", "{ not json");
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }

    #[test]
    fn test_zero_logo_size_is_rejected() {
        let path = temp_file("zero_logo.json", r#"{ "logo_size": 0 }"#);
        let err = ViewerConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("logo_size"));
        assert_eq!(ViewerConfig::load_or_default(Some(&path)), ViewerConfig::default());
    }

    #[test]
    fn test_bad_sizes_are_rejected() {
        let negative = temp_file("negative_logo.json", r#"{ "logo_size": -32.0 }"#);
        assert!(ViewerConfig::load(&negative).is_err());

        let window = temp_file("zero_window.json", r#"{ "window_size": [0.0, 480.0] }"#);
        let err = ViewerConfig::load(&window).unwrap_err();
        assert!(format!("{:#}", err).contains("window_size"));

        assert!(ViewerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("platform_logos_does_not_exist.json");
        assert!(ViewerConfig::load(&path).is_err());
        assert_eq!(ViewerConfig::load_or_default(Some(&path)), ViewerConfig::default());
        assert_eq!(ViewerConfig::load_or_default(None), ViewerConfig::default());
    }
}
