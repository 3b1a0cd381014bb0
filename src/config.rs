use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the preference file location
pub const PREFS_FILE_ENV: &str = "PREFS_FILE";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Preference file; defaults to `prefs.toml` in the config directory
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Ask before removing a key or clearing the store
    #[serde(default = "default_confirm_destructive")]
    pub confirm_destructive: bool,
}

fn default_confirm_destructive() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            confirm_destructive: default_confirm_destructive(),
        }
    }
}

impl Config {
    pub fn get_config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("prefs-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".prefs-cli")
        };

        // Ensure the directory exists
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        Ok(Self::get_config_dir()?.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Pick the preference file: explicit flag, then `PREFS_FILE`, then the
    /// config file, then the default location
    pub fn resolve_store_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path);
        }
        if let Some(path) = std::env::var_os(PREFS_FILE_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.store_path {
            return Ok(path.clone());
        }
        Ok(Self::get_config_dir()?.join("prefs.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert!(config.store_path.is_none());
        assert!(config.confirm_destructive);
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "store_path = \"/tmp/game-prefs.toml\"\nconfirm_destructive = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/game-prefs.toml")));
        assert!(!config.confirm_destructive);
    }

    #[test]
    fn test_flag_takes_precedence() {
        let config = Config {
            store_path: Some(PathBuf::from("from-config.toml")),
            ..Config::default()
        };
        let path = config
            .resolve_store_path(Some(PathBuf::from("from-flag.toml")))
            .unwrap();
        assert_eq!(path, PathBuf::from("from-flag.toml"));
    }
}
