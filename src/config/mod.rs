pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig, ThemeMode};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stopwatch")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

/// Write `config` to `path`, creating parent directories as needed.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

/// Write the defaults on first run. A failed write is logged and otherwise
/// ignored; the app keeps running on in-memory defaults.
pub fn write_default_config(config: &AppConfig, path: &Path) -> bool {
    match save_config(config, path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "wrote default config");
            true
        }
        Err(e) => {
            tracing::warn!(
                error = format!("{:#}", e),
                path = %path.display(),
                "could not write default config"
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::format::TimeFormat;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg.timer.tick_interval_ms, 100);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.display.format = TimeFormat::Centiseconds;

        save_config(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.display.format, TimeFormat::Centiseconds);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[timer]\ntick_interval_ms = 1\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Invalid config"));
        assert!(chain.contains("tick_interval_ms"));
    }

    #[test]
    fn test_write_default_config_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwatch").join("config.toml");

        assert!(write_default_config(&AppConfig::default(), &path));
        assert!(path.exists());
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.timer.tick_interval_ms, 100);
    }

    #[test]
    fn test_write_default_config_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the config directory should be
        let blocker = dir.path().join("stopwatch");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");

        assert!(!write_default_config(&AppConfig::default(), &path));
        assert!(!path.exists());
    }
}
