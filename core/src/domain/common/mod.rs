use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::{Rng, distributions::Alphanumeric};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATA_DIR: &str = ".mealmate";

#[derive(Clone, Debug)]
pub struct MealmateConfig {
    pub llm: LLMConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    /// Keep the current plan across restarts
    pub persist_plan: bool,
}

impl MealmateConfig {
    /// Reads the configuration from the process environment, after loading
    /// a `.env` file when one is present.
    pub fn from_env() -> Result<Self, CoreError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CoreError::InvalidConfig("GEMINI_API_KEY is not set".to_string()))?;

        let request_timeout_secs = match lookup("MEALMATE_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    CoreError::InvalidConfig(format!(
                        "MEALMATE_REQUEST_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let persist_plan = match lookup("MEALMATE_PERSIST_PLAN") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                CoreError::InvalidConfig(format!(
                    "MEALMATE_PERSIST_PLAN must be true or false, got {raw:?}"
                ))
            })?,
            None => false,
        };

        Ok(Self {
            llm: LLMConfig {
                gemini_api_key,
                gemini_model: lookup("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                gemini_base_url: lookup("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
            storage: StorageConfig {
                data_dir: lookup("MEALMATE_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
                persist_plan,
            },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = MealmateConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.llm.gemini_api_key, "k");
        assert_eq!(config.llm.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.llm.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.llm.request_timeout, Duration::from_secs(30));
        assert_eq!(config.storage.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert!(!config.storage.persist_plan);
    }

    #[test]
    fn test_config_api_key_fallback() {
        let config = MealmateConfig::from_lookup(lookup_from(&[("API_KEY", "legacy")])).unwrap();
        assert_eq!(config.llm.gemini_api_key, "legacy");
    }

    #[test]
    fn test_config_missing_api_key() {
        let err = MealmateConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_overrides() {
        let config = MealmateConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("GEMINI_MODEL", "gemini-2.5-flash"),
            ("MEALMATE_REQUEST_TIMEOUT_SECS", "5"),
            ("MEALMATE_DATA_DIR", "/tmp/mm"),
            ("MEALMATE_PERSIST_PLAN", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.llm.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.llm.request_timeout, Duration::from_secs(5));
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/mm"));
        assert!(config.storage.persist_plan);
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let err = MealmateConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "k"),
            ("MEALMATE_REQUEST_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_random_string_length() {
        assert_eq!(generate_random_string(9).len(), 9);
    }
}
