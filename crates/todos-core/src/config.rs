//! API Configuration
//!
//! Base URL and user identifier, baked in at build time.

use reqwest::Url;
use thiserror::Error;

use crate::domain::UserId;

/// Collection host used when `TODO_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";

/// Configuration problems detected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no user id configured (set TODO_USER_ID at build time)")]
    MissingUserId,
    #[error("invalid base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Where the todo collection lives and whose todos to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_id: Option<UserId>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            base_url: base_url.into(),
            user_id,
        }
    }

    /// Read `TODO_API_BASE_URL` and `TODO_USER_ID` captured by the compiler
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE_URL"), option_env!("TODO_USER_ID"))
    }

    /// Build from optional raw values; blank or non-numeric user ids count as missing
    pub fn from_values(base_url: Option<&str>, user_id: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        let user_id = user_id
            .and_then(|raw| raw.trim().parse::<UserId>().ok())
            .filter(|id| *id != 0);
        Self::new(base_url, user_id)
    }

    /// Check the base URL parses and return the configured user id
    pub fn validate(&self) -> Result<UserId, ConfigError> {
        self.parsed_base_url()?;
        self.user_id.ok_or(ConfigError::MissingUserId)
    }

    pub(crate) fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_id, None);
        assert_eq!(config.validate(), Err(ConfigError::MissingUserId));
    }

    #[test]
    fn test_user_id_parsing() {
        assert_eq!(ApiConfig::from_values(None, Some("  42 ")).user_id, Some(42));
        assert_eq!(ApiConfig::from_values(None, Some("abc")).user_id, None);
        assert_eq!(ApiConfig::from_values(None, Some("0")).user_id, None);
    }

    #[test]
    fn test_blank_base_url_falls_back() {
        let config = ApiConfig::from_values(Some("   "), Some("1"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.validate(), Ok(1));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::new("not a url", Some(1));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
