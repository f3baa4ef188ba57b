//! Application configuration management utilities.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::Path;

/// Application-wide configuration stored in config.toml.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the hero data directory.
    pub data_path: Option<Utf8PathBuf>,
    /// Default tracing filter, e.g. `warn` or `draft_core=debug`. `RUST_LOG` wins.
    pub log_level: Option<String>,
    /// Maximum lines shown per result panel. Unset keeps each panel's own default.
    pub max_bullets: Option<usize>,
}

impl AppConfig {
    /// Data directory to use: the flag, then the config, then `./data`.
    pub fn resolve_data_path(&self, flag: Option<Utf8PathBuf>) -> Utf8PathBuf {
        flag.or_else(|| self.data_path.clone())
            .unwrap_or_else(|| Utf8PathBuf::from("data"))
    }
}

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Returns the default configuration file path (config.toml next to the executable).
pub fn default_config_path() -> Option<Utf8PathBuf> {
    install_dir().map(|dir| dir.join("config.toml"))
}

/// Loads the application configuration from config.toml.
/// Returns default configuration if file doesn't exist or cannot be parsed.
pub fn load_config() -> AppConfig {
    default_config_path()
        .map(|path| load_config_from(path.as_std_path()))
        .unwrap_or_default()
}

/// Loads configuration from a specific file, falling back to defaults.
pub fn load_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

/// Saves the application configuration to config.toml.
pub fn save_config(cfg: &AppConfig) -> io::Result<()> {
    let path = default_config_path().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine config path")
    })?;
    save_config_to(path.as_std_path(), cfg)
}

/// Saves configuration to a specific file.
pub fn save_config_to(path: &Path, cfg: &AppConfig) -> io::Result<()> {
    let content = toml::to_string_pretty(cfg).map_err(io::Error::other)?;
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.max_bullets, None);
        assert_eq!(cfg.resolve_data_path(None), Utf8PathBuf::from("data"));
    }

    #[test]
    fn test_flag_overrides_config() {
        let cfg = AppConfig {
            data_path: Some(Utf8PathBuf::from("/opt/dota/data")),
            ..Default::default()
        };
        assert_eq!(
            cfg.resolve_data_path(None),
            Utf8PathBuf::from("/opt/dota/data")
        );
        assert_eq!(
            cfg.resolve_data_path(Some(Utf8PathBuf::from("other"))),
            Utf8PathBuf::from("other")
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = AppConfig {
            data_path: Some(Utf8PathBuf::from("data")),
            log_level: Some("draft_core=debug".to_string()),
            max_bullets: Some(3),
        };
        save_config_to(&path, &cfg).unwrap();

        assert_eq!(load_config_from(&path), cfg);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_bullets = \"many\"").unwrap();

        assert_eq!(load_config_from(&path), AppConfig::default());
        assert_eq!(load_config_from(&dir.path().join("absent.toml")), AppConfig::default());
    }
}
