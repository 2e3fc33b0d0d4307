//! Adapter settings and configuration
//!
//! This module provides configuration management for the adapter,
//! loading settings from environment variables with sensible defaults.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Default Bedrock model used when `BEDROCK_API_MODEL` is not set
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

/// Region used for explicit credentials when `AWS_DEFAULT_REGION` is not set
pub const DEFAULT_REGION: &str = "us-east-1";

/// Language of the user-facing messages returned by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Locale {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::ZhCn => write!(f, "zh-CN"),
            Locale::EnUs => write!(f, "en-US"),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ZhCn
    }
}

impl std::str::FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => anyhow::bail!("Invalid locale: {}. Expected: zh-CN or en-US", s),
        }
    }
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct InferenceParams {
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for InferenceParams {
    fn default() -> Self {
        Self {
            max_tokens: 4000,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Adapter settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub log_level: String,

    /// Model used when a call does not name one
    pub bedrock_model: String,

    // AWS settings
    /// Region override; unset leaves ambient clients to the SDK region chain
    pub aws_region: Option<String>,
    #[serde(skip_serializing)]
    pub aws_access_key_id: Option<String>,
    #[serde(skip_serializing)]
    pub aws_secret_access_key: Option<String>,
    #[serde(skip_serializing)]
    pub aws_session_token: Option<String>,
    pub bedrock_endpoint_url: Option<String>,

    pub locale: Locale,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let locale = match get("BEDROCK_LOCALE") {
            Some(raw) => raw.parse()?,
            None => Locale::default(),
        };

        let settings = Self {
            log_level: get_or("LOG_LEVEL", "info"),
            bedrock_model: get_or("BEDROCK_API_MODEL", DEFAULT_MODEL_ID),
            aws_region: get("AWS_DEFAULT_REGION"),
            aws_access_key_id: get("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: get("AWS_SECRET_ACCESS_KEY"),
            aws_session_token: get("AWS_SESSION_TOKEN"),
            bedrock_endpoint_url: get("BEDROCK_ENDPOINT_URL"),
            locale,
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        if self.bedrock_model.trim().is_empty() {
            anyhow::bail!("Default model id cannot be empty");
        }
        if let Some(url) = &self.bedrock_endpoint_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("Invalid BEDROCK_ENDPOINT_URL: {}", url);
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            bedrock_model: DEFAULT_MODEL_ID.to_string(),
            aws_region: None,
            aws_access_key_id: None,
            aws_secret_access_key: None,
            aws_session_token: None,
            bedrock_endpoint_url: None,
            locale: Locale::default(),
        }
    }
}
