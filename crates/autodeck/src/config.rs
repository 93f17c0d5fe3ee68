use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::transport::BASE_VOLUME;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "autodeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// 1-indexed slide to open on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,

    /// Narration file to play.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<PathBuf>,

    /// Narration volume, 0.0 to 0.8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windowed: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `autodeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Autodeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.start_slide" => {
                let n: usize = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid start_slide: {value}. Must be a slide number.")
                })?;
                if !(1..=crate::deck::SLIDE_COUNT).contains(&n) {
                    anyhow::bail!(
                        "Invalid start_slide: {value}. Must be 1 to {}.",
                        crate::deck::SLIDE_COUNT
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(n);
            }
            "defaults.audio" => {
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .audio = Some(PathBuf::from(value));
            }
            "defaults.volume" => {
                let v: f32 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid volume: {value}. Must be a number.")
                })?;
                if !(0.0..=BASE_VOLUME).contains(&v) {
                    anyhow::bail!("Invalid volume: {value}. Must be 0.0 to {BASE_VOLUME}.");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .volume = Some(v);
            }
            "defaults.windowed" => {
                let b = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => anyhow::bail!("Invalid windowed: {value}. Must be 'true' or 'false'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .windowed = Some(b);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.start_slide, defaults.audio, defaults.volume, defaults.windowed"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_start_slide() {
        let mut config = Config::default();
        assert!(config.set("defaults.start_slide", "5").is_ok());
        assert_eq!(config.defaults.unwrap().start_slide, Some(5));

        let mut config = Config::default();
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("defaults.start_slide", "10").is_err());
        assert!(config.set("defaults.start_slide", "x").is_err());
    }

    #[test]
    fn set_validates_volume() {
        let mut config = Config::default();
        assert!(config.set("defaults.volume", "0.5").is_ok());
        assert!(config.set("defaults.volume", "0.9").is_err());
        assert!(config.set("defaults.volume", "-0.1").is_err());
    }

    #[test]
    fn set_rejects_unknown_keys() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_err());
    }

    #[test]
    fn round_trips_through_yaml() {
        let mut config = Config::default();
        config.set("defaults.start_slide", "3").unwrap();
        config.set("defaults.windowed", "true").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        let defaults = back.defaults.unwrap();
        assert_eq!(defaults.start_slide, Some(3));
        assert_eq!(defaults.windowed, Some(true));
    }
}
