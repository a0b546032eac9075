// src/config.rs
use crate::errors::WingmanError;
use std::collections::HashMap;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub bind_addr: String,
    pub max_body_bytes: usize,
}

impl Config {
    /// Reads configuration from the process environment. Fails when the
    /// provider key is missing so the server never starts half-configured.
    pub fn from_env() -> Result<Self, WingmanError> {
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, WingmanError> {
        let non_empty = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_empty("OPENAI_API_KEY")
            .ok_or_else(|| WingmanError::Config("OPENAI_API_KEY must be set".to_string()))?;

        let max_body_bytes = match non_empty("MAX_BODY_BYTES") {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                WingmanError::Config(format!("MAX_BODY_BYTES is not a valid size: {}", e))
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            api_key,
            model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_empty("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            max_body_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_api_key_fails_fast() {
        let err = Config::from_vars(vars(&[("OPENAI_MODEL", "gpt-4o-mini")])).unwrap_err();
        assert!(matches!(err, WingmanError::Config(_)));

        let err = Config::from_vars(vars(&[("OPENAI_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, WingmanError::Config(_)));
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_vars(vars(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_vars(vars(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_BASE_URL", "http://localhost:9000/v1/"),
            ("MAX_BODY_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn bad_body_limit_is_rejected() {
        let err = Config::from_vars(vars(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("MAX_BODY_BYTES", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, WingmanError::Config(_)));
    }
}
