//! Configuration settings for ytlens.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the YouTube Data API key.
///
/// Takes precedence over the `youtube.api_key` config file value.
pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Upstream YouTube Data API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API key. The YOUTUBE_API_KEY environment variable wins
    /// over this value when both are set.
    pub api_key: Option<String>,
    /// Base URL of the YouTube Data API.
    pub api_base_url: String,
    /// Request timeout in seconds. No retries are performed.
    pub timeout_seconds: u64,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::YtLensError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ytlens")
            .join("config.toml")
    }

    /// Resolve the API key: environment variable first, then the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Resolution with an injected environment value, so tests don't have to
    /// mutate process environment.
    fn resolve_api_key_with(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|k| !k.is_empty())
            .or_else(|| self.youtube.api_key.clone().filter(|k| !k.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = PathBuf::from("/nonexistent/ytlens-config.toml");
        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(
            settings.youtube.api_base_url,
            "https://www.googleapis.com/youtube/v3"
        );
        assert_eq!(settings.youtube.timeout_seconds, 30);
        assert!(settings.youtube.api_key.is_none());
    }

    #[test]
    fn test_env_var_wins_over_file_value() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("file-key".to_string());

        assert_eq!(
            settings.resolve_api_key_with(Some("env-key".to_string())),
            Some("env-key".to_string())
        );
        assert_eq!(
            settings.resolve_api_key_with(None),
            Some("file-key".to_string())
        );
    }

    #[test]
    fn test_empty_values_treated_as_absent() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some(String::new());

        assert_eq!(settings.resolve_api_key_with(Some(String::new())), None);
        assert_eq!(settings.resolve_api_key_with(None), None);
    }

    #[test]
    fn test_parse_partial_config() {
        let settings: Settings = toml::from_str(
            r#"
            [youtube]
            api_key = "abc123"
            "#,
        )
        .unwrap();

        assert_eq!(settings.youtube.api_key.as_deref(), Some("abc123"));
        assert_eq!(settings.general.log_level, "info");
    }
}
