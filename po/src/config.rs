//! Configuration for promptopt

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::cli::Tone;

/// Name of the project-local config file
pub const LOCAL_CONFIG: &str = "promptopt.yml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Tone used when `--tone` is not given
    #[serde(default)]
    pub tone: Option<Tone>,

    /// Profile document used when `--profile` is not given
    #[serde(default)]
    pub profile: Option<PathBuf>,

    /// Log level used when `--log-level` is not given
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load config from an explicit path, or the first default location that exists
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Candidate config locations, most specific first
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("promptopt").join(LOCAL_CONFIG));
        }
        paths
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        // An empty file is a valid, empty config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_explicit_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("promptopt.yml");
        fs::write(&path, "tone: creative\nprofile: /tmp/profile.json\nlog-level: debug\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.tone, Some(Tone::Creative));
        assert_eq!(config.profile, Some(PathBuf::from("/tmp/profile.json")));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("partial.yml");
        fs::write(&path, "tone: informal\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.tone, Some(Tone::Informal));
        assert!(config.profile.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.yml");
        fs::write(&path, "\n").unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.yml"));
    }

    #[test]
    fn test_load_rejects_unknown_tone() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "tone: sarcastic\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_default_paths_prefers_local() {
        let paths = Config::default_paths();
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG));
    }
}
