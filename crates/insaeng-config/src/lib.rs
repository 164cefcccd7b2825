//! Configuration loading for the insaeng binaries.

use std::path::PathBuf;

use directories::ProjectDirs;
use insaeng_core::{FontScale, Language};
use serde::{Deserialize, Serialize};

/// User configuration, read from `config.toml` in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Startup language: "chinese" or "english".
    pub language: String,
    /// Startup text emphasis: "small", "medium", or "large".
    pub font_scale: String,
    /// Seconds between automatic reminder rotations.
    pub reminder_secs: u64,
    /// Listen address for the web form variant.
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "chinese".to_string(),
            font_scale: "medium".to_string(),
            reminder_secs: 15,
            listen_addr: "127.0.0.1:8808".to_string(),
        }
    }
}

impl Config {
    /// Startup language; unknown values fall back to the default.
    pub fn language(&self) -> Language {
        match self.language.as_str() {
            "english" => Language::English,
            _ => Language::Chinese,
        }
    }

    /// Startup text emphasis; unknown values fall back to the default.
    pub fn font_scale(&self) -> FontScale {
        match self.font_scale.as_str() {
            "small" => FontScale::Small,
            "large" => FontScale::Large,
            _ => FontScale::Medium,
        }
    }
}

/// Platform config directory for insaeng.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "insaeng").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    Some(config_dir()?.join("config.toml"))
}

/// Load config from disk, returning defaults if the file is missing or
/// does not parse.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => {
            // Create a commented default config file on first run
            let config = Config::default();
            let _ = write_default(&path, &config);
            config
        }
    }
}

/// Write a default config file with comments.
fn write_default(path: &PathBuf, config: &Config) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = format!(
        "# insaeng configuration\n\
         \n\
         # Startup language: \"chinese\" or \"english\"\n\
         language = \"{}\"\n\
         \n\
         # Startup text emphasis: \"small\", \"medium\", or \"large\"\n\
         font_scale = \"{}\"\n\
         \n\
         # Seconds between automatic reminder rotations\n\
         reminder_secs = {}\n\
         \n\
         # Listen address for the web form variant\n\
         listen_addr = \"{}\"\n",
        config.language, config.font_scale, config.reminder_secs, config.listen_addr,
    );
    std::fs::write(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_enums() {
        let config = Config::default();
        assert_eq!(config.language(), Language::Chinese);
        assert_eq!(config.font_scale(), FontScale::Medium);
        assert_eq!(config.reminder_secs, 15);
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = Config {
            language: "klingon".to_string(),
            font_scale: "huge".to_string(),
            ..Config::default()
        };
        assert_eq!(config.language(), Language::Chinese);
        assert_eq!(config.font_scale(), FontScale::Medium);
    }

    #[test]
    fn partial_files_keep_defaults_for_the_rest() {
        let config: Config = toml::from_str("language = \"english\"").unwrap();
        assert_eq!(config.language(), Language::English);
        assert_eq!(config.reminder_secs, 15);
        assert_eq!(config.listen_addr, "127.0.0.1:8808");
    }

    #[test]
    fn garbage_parses_to_defaults() {
        let config: Config = toml::from_str("reminder_secs = \"soon\"").unwrap_or_default();
        assert_eq!(config.reminder_secs, 15);
    }
}
