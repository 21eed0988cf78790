use secrecy::{ExposeSecret, Secret};
use service_core::config::{self as core_config, get_env_from};
use service_core::error::AppError;
use std::env;

/// Default model used for answering questions.
pub const DEFAULT_MODEL: &str = "models/gemini-2.0-flash-001";

/// Public Gemini REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ChatbotConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    /// Model resource name, e.g. `models/gemini-2.0-flash-001`.
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl ChatbotConfig {
    /// Load the full service configuration.
    ///
    /// Fails with `AppError::ConfigError` when `GEMINI_API_KEY` is missing,
    /// which aborts startup before any listener is bound.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let gemini = GeminiSettings::from_env()?;
        let observability = ObservabilityConfig::from_lookup(|k| env::var(k).ok())?;

        Ok(ChatbotConfig {
            common,
            gemini,
            observability,
        })
    }
}

impl GeminiSettings {
    /// Read Gemini settings from `.env` and the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get_env_from(&lookup, "GEMINI_API_KEY", None)?;
        let model = get_env_from(&lookup, "GEMINI_MODEL", Some(DEFAULT_MODEL))?;
        let api_base = get_env_from(&lookup, "GEMINI_API_BASE", Some(DEFAULT_API_BASE))?;
        let timeout_secs = get_env_from(
            &lookup,
            "GEMINI_TIMEOUT_SECS",
            Some(&DEFAULT_TIMEOUT_SECS.to_string()),
        )?
        .parse::<u64>()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("GEMINI_TIMEOUT_SECS is invalid: {}", e))
        })?;

        Ok(GeminiSettings {
            api_key: Secret::new(api_key),
            model: normalize_model_name(&model),
            api_base: api_base.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// Redacted form of the key for diagnostics: first 10 and last 5 characters.
    pub fn key_preview(&self) -> String {
        key_preview(self.api_key.expose_secret())
    }
}

impl ObservabilityConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(ObservabilityConfig {
            log_level: get_env_from(&lookup, "LOG_LEVEL", Some("info"))?,
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|v| !v.is_empty()),
        })
    }
}

/// Gemini addresses models as `models/<id>`; accept the bare id too.
fn normalize_model_name(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

pub fn key_preview(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(10).collect();
    let tail: String = chars[chars.len().saturating_sub(5)..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = GeminiSettings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let settings = GeminiSettings::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.timeout_secs, 120);
        assert_eq!(settings.api_key.expose_secret(), "k");
    }

    #[test]
    fn bare_model_id_is_prefixed() {
        let settings = GeminiSettings::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_API_BASE", "http://localhost:9000/v1beta/"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "models/gemini-1.5-pro");
        assert_eq!(settings.api_base, "http://localhost:9000/v1beta");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = GeminiSettings::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_does_not_leak_key() {
        let settings =
            GeminiSettings::from_lookup(lookup(&[("GEMINI_API_KEY", "super-secret-value")]))
                .unwrap();
        assert!(!format!("{:?}", settings).contains("super-secret-value"));
    }

    #[test]
    fn key_preview_shows_head_and_tail() {
        assert_eq!(key_preview("AIzaSyA1234567890abcdeXYZ12"), "AIzaSyA123...XYZ12");
    }

    #[test]
    fn key_preview_handles_short_keys() {
        assert_eq!(key_preview("abc"), "abc...abc");
    }

    #[test]
    fn otlp_endpoint_is_optional() {
        let obs = ObservabilityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(obs.log_level, "info");
        assert!(obs.otlp_endpoint.is_none());
    }
}
