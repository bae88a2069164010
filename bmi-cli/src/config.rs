use std::{env, path::PathBuf, str::FromStr};

use bmi_engine::ValidationPolicy;
use bmi_model::Theme;
use dotenv::dotenv;

const DEFAULT_PREFERENCES_PATH: &str = "preferences.ron";

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive number, got \"{value}\"")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be either light or dark, got \"{value}\"")]
    InvalidTheme { key: &'static str, value: String },
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub preferences_path: PathBuf,
    pub system_theme: Option<Theme>,
    pub policy: ValidationPolicy,
}

impl Config {
    /// Reads settings from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let preferences_path = lookup("BMI_PREFERENCES_PATH")
            .unwrap_or_else(|| DEFAULT_PREFERENCES_PATH.to_owned())
            .into();

        let system_theme = match lookup("BMI_SYSTEM_THEME") {
            Some(value) => Some(Theme::from_str(&value).map_err(|_| ConfigError::InvalidTheme {
                key: "BMI_SYSTEM_THEME",
                value,
            })?),
            None => None,
        };

        let mut policy = ValidationPolicy::default();
        if let Some(max) = positive_number(&lookup, "BMI_HEIGHT_MAX_CM")? {
            policy = policy.with_height_max_cm(max);
        }
        if let Some(max) = positive_number(&lookup, "BMI_WEIGHT_MAX_KG")? {
            policy = policy.with_weight_max_kg(max);
        }

        Ok(Self {
            preferences_path,
            system_theme,
            policy,
        })
    }
}

fn positive_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<f64>, ConfigError> {
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite() && *x > 0.0)
                .ok_or(ConfigError::InvalidNumber { key, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.preferences_path, PathBuf::from("preferences.ron"));
        assert_eq!(config.system_theme, None);
        assert_eq!(config.policy, ValidationPolicy::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("BMI_PREFERENCES_PATH", "/tmp/bmi.ron"),
            ("BMI_SYSTEM_THEME", "light"),
            ("BMI_HEIGHT_MAX_CM", "1000"),
            ("BMI_WEIGHT_MAX_KG", " 1000 "),
        ])
        .unwrap();

        assert_eq!(config.preferences_path, PathBuf::from("/tmp/bmi.ron"));
        assert_eq!(config.system_theme, Some(Theme::Light));
        assert_eq!(config.policy.height_cm.1, 1000.0);
        assert_eq!(config.policy.weight_kg.1, 1000.0);
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            config_from(&[("BMI_SYSTEM_THEME", "blue")]),
            Err(ConfigError::InvalidTheme {
                key: "BMI_SYSTEM_THEME",
                value: "blue".to_owned()
            })
        );
        assert_eq!(
            config_from(&[("BMI_WEIGHT_MAX_KG", "-5")]),
            Err(ConfigError::InvalidNumber {
                key: "BMI_WEIGHT_MAX_KG",
                value: "-5".to_owned()
            })
        );
    }
}
