use crate::error::{Result, TimelineError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure loaded from reasoning_timeline.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub presenter: PresenterConfig,
}

/// Timeline presentation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PresenterConfig {
    /// Steps shown before the "show more" collapse
    pub initial_visible_steps: usize,
    /// Step bodies longer than this many characters are truncated until expanded
    pub truncate_chars: usize,
    /// Wrap indicators and numeric signals in emphasis markers when rendering
    pub highlight: bool,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            initial_visible_steps: 3,
            truncate_chars: 200,
            highlight: true,
        }
    }
}

impl PresenterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.initial_visible_steps == 0 {
            return Err(TimelineError::Validation {
                message: "initial_visible_steps must be at least 1".to_string(),
            });
        }
        if self.truncate_chars == 0 {
            return Err(TimelineError::Validation {
                message: "truncate_chars must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup("RT_LOG_LEVEL")
            && !level.trim().is_empty()
        {
            config.log_level = level.trim().to_string();
        }
        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "reasoning_timeline=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses REASONING_TIMELINE_CONFIG environment variable or defaults to "reasoning_timeline.toml"
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Same as [`Config::load`], with an explicit config path taking precedence over the env.
    /// An explicit path must be readable; only the implicit path falls back to defaults.
    /// `.env` is expected to be loaded already (see [`crate::load_env`]).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p).map_err(|e| TimelineError::Io {
                    message: format!("failed to read config {}: {}", p.display(), e),
                })?;
                Self::from_toml_str(&content)?
            }
            None => {
                let config_path = std::env::var("REASONING_TIMELINE_CONFIG")
                    .unwrap_or_else(|_| "reasoning_timeline.toml".to_string());
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    Self::from_toml_str(&content)?
                } else {
                    tracing::warn!("Config file {} not found, using defaults", config_path);
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.presenter.validate()?;

        Ok(config)
    }

    /// Parse a TOML document; missing sections fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply env-style overrides through `lookup`, so callers can feed something other than the process env
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("RT_INITIAL_VISIBLE_STEPS") {
            match raw.trim().parse::<usize>() {
                Ok(n) => {
                    self.presenter.initial_visible_steps = n;
                    tracing::debug!("RT_INITIAL_VISIBLE_STEPS env override applied");
                }
                Err(_) => tracing::debug!("Ignoring unparseable RT_INITIAL_VISIBLE_STEPS={raw}"),
            }
        }

        if let Some(raw) = lookup("RT_TRUNCATE_CHARS") {
            match raw.trim().parse::<usize>() {
                Ok(n) => {
                    self.presenter.truncate_chars = n;
                    tracing::debug!("RT_TRUNCATE_CHARS env override applied");
                }
                Err(_) => tracing::debug!("Ignoring unparseable RT_TRUNCATE_CHARS={raw}"),
            }
        }

        if let Some(raw) = lookup("RT_HIGHLIGHT") {
            let raw = raw.trim();
            if raw == "1" || raw.eq_ignore_ascii_case("true") {
                self.presenter.highlight = true;
            } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
                self.presenter.highlight = false;
            } else {
                tracing::debug!("Ignoring unparseable RT_HIGHLIGHT={raw}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.presenter.initial_visible_steps, 3);
        assert_eq!(config.presenter.truncate_chars, 200);
        assert!(config.presenter.highlight);
        assert_eq!(RuntimeConfig::default().log_level, "reasoning_timeline=info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[presenter]\ninitial_visible_steps = 5\n").unwrap();
        assert_eq!(config.presenter.initial_visible_steps, 5);
        assert_eq!(config.presenter.truncate_chars, 200);
        assert!(config.presenter.highlight);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.presenter.initial_visible_steps, 3);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("RT_INITIAL_VISIBLE_STEPS", "7"),
            ("RT_TRUNCATE_CHARS", " 80 "),
            ("RT_HIGHLIGHT", "false"),
        ]));
        assert_eq!(config.presenter.initial_visible_steps, 7);
        assert_eq!(config.presenter.truncate_chars, 80);
        assert!(!config.presenter.highlight);
    }

    #[test]
    fn test_runtime_log_level_override() {
        let runtime =
            RuntimeConfig::from_lookup(lookup_from(&[("RT_LOG_LEVEL", " reasoning_timeline=debug ")]));
        assert_eq!(runtime.log_level, "reasoning_timeline=debug");

        let runtime = RuntimeConfig::from_lookup(lookup_from(&[("RT_LOG_LEVEL", "  ")]));
        assert_eq!(runtime.log_level, "reasoning_timeline=info");
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup_from(&[
            ("RT_INITIAL_VISIBLE_STEPS", "many"),
            ("RT_HIGHLIGHT", "maybe"),
        ]));
        assert_eq!(config.presenter.initial_visible_steps, 3);
        assert!(config.presenter.highlight);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let presenter = PresenterConfig {
            initial_visible_steps: 0,
            ..Default::default()
        };
        assert!(presenter.validate().is_err());

        let presenter = PresenterConfig {
            truncate_chars: 0,
            ..Default::default()
        };
        assert!(presenter.validate().is_err());
        assert!(PresenterConfig::default().validate().is_ok());
    }
}
