//! Application configuration.
//!
//! Values come from a TOML file (every field optional) and are then
//! overridden by `MATCH4_*` environment variables.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// File read when `MATCH4_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "match4.toml";
pub const DEFAULT_SCORES_PATH: &str = "scores.json";
pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MAX_CELL_WIDTH: u16 = 4;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Color source seed. Unset means one is taken from the clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub scores_path: PathBuf,
    /// Log file. Unset disables logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
    /// Terminal columns per board cell
    pub cell_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            seed: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// File, then environment, then validation.
    ///
    /// Logging is not installed yet when this runs, so the caller reports
    /// where the configuration came from via [`AppConfig::log_source`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var("MATCH4_CONFIG")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config = Self::load_or_default(Path::new(&path))?;
        config.apply_env_with(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `MATCH4_*` overrides from `lookup`. Unparsable values are ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(seed) = var("MATCH4_SEED").and_then(|s| s.parse().ok()) {
            self.seed = Some(seed);
        }
        if let Some(path) = var("MATCH4_SCORES_PATH") {
            self.scores_path = PathBuf::from(path);
        }
        if let Some(path) = var("MATCH4_LOG_PATH") {
            self.log_path = Some(PathBuf::from(path));
        }
        if let Some(width) = var("MATCH4_CELL_WIDTH").and_then(|s| s.parse().ok()) {
            self.cell_width = width;
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            return Err(ConfigError::Validation(format!(
                "cell_width must be in [1, {}]",
                MAX_CELL_WIDTH
            )));
        }
        if self.scores_path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "scores_path must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Configured seed, or one derived from the clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn log_source(&self) {
        info!(
            "config: scores at {}, cell width {}, seed {}",
            self.scores_path.display(),
            self.cell_width,
            self.seed
                .map_or_else(|| "from clock".to_string(), |s| s.to_string())
        );
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_else(|e| {
            warn!("default config did not serialize: {}", e);
            String::new()
        })
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    // Fold the high bits in so consecutive launches differ.
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.scores_path, PathBuf::from("scores.json"));
        assert_eq!(config.cell_width, 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("seed = 7\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scores_path = \"/tmp/m4.json\"\ncell_width = 3").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.scores_path, PathBuf::from("/tmp/m4.json"));
        assert_eq!(config.cell_width, 3);
    }

    #[test]
    fn test_load_rejects_bad_width() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cell_width = 9").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cell_width = [").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[
            ("MATCH4_SEED", "99"),
            ("MATCH4_SCORES_PATH", "s.json"),
            ("MATCH4_LOG_PATH", " /tmp/m4.log "),
            ("MATCH4_CELL_WIDTH", "1"),
        ]));

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.scores_path, PathBuf::from("s.json"));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/m4.log")));
        assert_eq!(config.cell_width, 1);
    }

    #[test]
    fn test_env_ignores_blank_and_garbage() {
        let mut config = AppConfig::default();
        config.apply_env_with(env(&[
            ("MATCH4_SEED", "not-a-number"),
            ("MATCH4_LOG_PATH", "   "),
        ]));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolved_seed_prefers_configured() {
        let config = AppConfig {
            seed: Some(12345),
            ..AppConfig::default()
        };
        assert_eq!(config.resolved_seed(), 12345);
    }

    #[test]
    fn test_default_toml_round_trips() {
        let parsed: AppConfig = toml::from_str(&AppConfig::default_toml()).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
