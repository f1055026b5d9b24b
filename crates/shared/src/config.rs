//! Configuration types for the scrum board

use scrum_domain::SchedulingPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Scheduling rule as written in the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchedulingPolicyConfig {
    /// Schedule whenever the backlog exists
    #[default]
    Unrestricted,
    /// At most one unconfirmed sprint per backlog
    SingleOpenSprint,
}

impl From<SchedulingPolicyConfig> for SchedulingPolicy {
    fn from(value: SchedulingPolicyConfig) -> Self {
        match value {
            SchedulingPolicyConfig::Unrestricted => SchedulingPolicy::Unrestricted,
            SchedulingPolicyConfig::SingleOpenSprint => SchedulingPolicy::SingleOpenSprint,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Board configuration (scrum.json / scrum.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrumConfig {
    /// Rule applied when scheduling a sprint
    #[serde(default)]
    pub scheduling_policy: SchedulingPolicyConfig,

    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ScrumConfig {
    fn default() -> Self {
        Self {
            scheduling_policy: SchedulingPolicyConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl ScrumConfig {
    /// Load configuration from a JSON or YAML file, picked by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = std::fs::read_to_string(path)?;
        let config: ScrumConfig = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat { extension }),
        };
        Ok(config)
    }

    /// The domain policy this config asks for
    pub fn scheduling_policy(&self) -> SchedulingPolicy {
        self.scheduling_policy.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "schedulingPolicy": "singleOpenSprint",
            "logLevel": "debug"
        }"#;

        let config: ScrumConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scheduling_policy(), SchedulingPolicy::SingleOpenSprint);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ScrumConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ScrumConfig::default());
        assert_eq!(config.scheduling_policy(), SchedulingPolicy::Unrestricted);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_json_file() {
        let file = write_config(".json", r#"{"schedulingPolicy": "unrestricted"}"#);

        let config = ScrumConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scheduling_policy, SchedulingPolicyConfig::Unrestricted);
    }

    #[test]
    fn test_from_yaml_file() {
        let file = write_config(".yaml", "schedulingPolicy: singleOpenSprint\nlogLevel: warn\n");

        let config = ScrumConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scheduling_policy, SchedulingPolicyConfig::SingleOpenSprint);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_config(".toml", "logLevel = 'info'");

        let err = ScrumConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat { extension } if extension == "toml"));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let file = write_config(".json", r#"{"schedulingPolicy": "sometimes"}"#);

        let err = ScrumConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ScrumConfig::from_file(Path::new("/nonexistent/scrum.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
