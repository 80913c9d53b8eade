use std::io::Write;
use std::path::PathBuf;

use tui_match4::{AppConfig, ConfigError};

#[test]
fn config_file_then_env_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 11\ncell_width = 3\nscores_path = \"a.json\"").unwrap();

    let mut config = AppConfig::load_or_default(file.path()).unwrap();
    config.apply_env_with(|key| match key {
        "MATCH4_SCORES_PATH" => Some("b.json".to_string()),
        _ => None,
    });
    config.validate().unwrap();

    assert_eq!(config.seed, Some(11));
    assert_eq!(config.cell_width, 3);
    assert_eq!(config.scores_path, PathBuf::from("b.json"));
    assert_eq!(config.resolved_seed(), 11);
}

#[test]
fn config_rejects_zero_cell_width_from_env() {
    let mut config = AppConfig::default();
    config.apply_env_with(|key| (key == "MATCH4_CELL_WIDTH").then(|| "0".to_string()));

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn config_unreadable_path_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    let err = AppConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}
