//! Session configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

fn default_step_delay_ms() -> u64 {
    500
}

/// Tunables for a session.
///
/// Loaded from YAML or JSON; every field has a default so an empty document
/// is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Time between path reveal steps, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

impl SessionConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    pub fn with_step_delay_ms(mut self, ms: u64) -> Self {
        self.step_delay_ms = ms;
        self
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.step_delay_ms == 0 {
            return Err(AppError::Config(
                "step_delay_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a YAML document (JSON is valid YAML too).
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: SessionConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`/`.yml`/`.json` file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: SessionConfig = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded session config");
        Ok(config)
    }
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delay_is_half_a_second() {
        let config = SessionConfig::default();
        assert_eq!(config.step_delay(), Duration::from_millis(500));
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = SessionConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn parses_delay() {
        let config = SessionConfig::from_yaml_str("step_delay_ms: 120\n").unwrap();
        assert_eq!(config.step_delay_ms, 120);
    }

    #[test]
    fn rejects_zero_delay_and_unknown_fields() {
        assert!(matches!(
            SessionConfig::from_yaml_str("step_delay_ms: 0"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            SessionConfig::from_yaml_str("delay: 3"),
            Err(AppError::Yaml(_))
        ));
    }

    #[test]
    fn json_extension_detection() {
        assert!(is_json(Path::new("a/b.JSON")));
        assert!(!is_json(Path::new("a/b.yaml")));
        assert!(!is_json(Path::new("noext")));
    }
}
