//! Configuration management module
//!
//! This module handles loading and validating adapter configuration
//! from environment variables and .env files, and building the AWS client.

pub mod aws;
pub mod settings;

pub use aws::{
    create_bedrock_client, explicit_credentials, resolve_credentials, AmbientCredentials,
    AwsConfigBuilder, CredentialResolution,
};
pub use settings::{InferenceParams, Locale, Settings, DEFAULT_MODEL_ID, DEFAULT_REGION};
