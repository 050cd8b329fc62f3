use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
///
/// Board dimensions are fixed at the standard 6×7 and are not configurable;
/// only presentation preferences live here.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
}

/// Terminal UI preferences.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the move-history side panel
    pub show_history: bool,
    /// How many recent moves the history panel lists
    pub history_limit: usize,
    /// Highlight the four winning cells when a game is won
    pub highlight_win: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_history: true,
            history_limit: 10,
            highlight_win: true,
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.show_history && self.ui.history_limit == 0 {
            return Err(ConfigError::Validation(
                "ui.history_limit must be > 0 when ui.show_history is enabled".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.ui.show_history);
        assert_eq!(config.ui.history_limit, 10);
        assert!(config.ui.highlight_win);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            show_history = false
            "#,
        )
        .unwrap();
        assert!(!config.ui.show_history);
        // Unspecified fields fall back to defaults
        assert_eq!(config.ui.history_limit, 10);
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            show_history = true
            history_limit = 0
            "#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = AppConfig::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.ui.history_limit, AppConfig::default().ui.history_limit);
    }
}
