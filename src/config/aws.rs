//! AWS SDK configuration
//!
//! Builds the Bedrock Runtime client in two stages: the SDK's ambient
//! credential chain first (environment, profile, instance role), then the
//! explicit key pair from [`Settings`] when the chain has nothing to offer.

use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::{error::CredentialsError, ProvideCredentials};
use aws_credential_types::Credentials;
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;

use crate::config::{Settings, DEFAULT_REGION};
use crate::error::ConfigurationError;

const EXPLICIT_PROVIDER_NAME: &str = "AdapterSettings";

/// Outcome of probing the ambient credential chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbientCredentials {
    /// The chain produced credentials
    Available,
    /// No provider in the chain had credentials
    NotLoaded,
    /// A provider failed for a reason other than missing credentials
    Failed(String),
}

/// Which credentials the client ends up signing with
#[derive(Debug, Clone)]
pub enum CredentialResolution {
    Ambient,
    Explicit(Credentials),
}

impl CredentialResolution {
    pub fn source_name(&self) -> &'static str {
        match self {
            CredentialResolution::Ambient => "ambient",
            CredentialResolution::Explicit(_) => "explicit",
        }
    }
}

/// Decide between ambient and explicit credentials.
///
/// Falls back to the explicit key pair only when the ambient chain reports
/// that no credentials were loaded. Partial key pairs are rejected.
pub fn resolve_credentials(
    ambient: AmbientCredentials,
    settings: &Settings,
) -> Result<CredentialResolution, ConfigurationError> {
    match ambient {
        AmbientCredentials::Available => Ok(CredentialResolution::Ambient),
        AmbientCredentials::Failed(reason) => Err(ConfigurationError::CredentialProvider(reason)),
        AmbientCredentials::NotLoaded => {
            explicit_credentials(settings).map(CredentialResolution::Explicit)
        }
    }
}

/// Static credentials from the configured key pair
pub fn explicit_credentials(settings: &Settings) -> Result<Credentials, ConfigurationError> {
    match (&settings.aws_access_key_id, &settings.aws_secret_access_key) {
        (Some(access_key), Some(secret_key)) => Ok(Credentials::new(
            access_key.clone(),
            secret_key.clone(),
            settings.aws_session_token.clone(),
            None,
            EXPLICIT_PROVIDER_NAME,
        )),
        _ => Err(ConfigurationError::MissingCredentials),
    }
}

/// Region chain for the ambient path: the configured override, then the
/// SDK default chain (`AWS_REGION`, profile, IMDS), then [`DEFAULT_REGION`]
pub fn ambient_region_provider(settings: &Settings) -> RegionProviderChain {
    RegionProviderChain::first_try(settings.aws_region.clone().map(Region::new))
        .or_default_provider()
        .or_else(Region::new(DEFAULT_REGION))
}

/// Region for the explicit-key path
pub fn explicit_region(settings: &Settings) -> Region {
    Region::new(
        settings
            .aws_region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    )
}

/// Ask the config's credential provider for credentials once
pub async fn probe_ambient_credentials(sdk_config: &SdkConfig) -> AmbientCredentials {
    let Some(provider) = sdk_config.credentials_provider() else {
        return AmbientCredentials::NotLoaded;
    };

    match provider.provide_credentials().await {
        Ok(_) => AmbientCredentials::Available,
        Err(CredentialsError::CredentialsNotLoaded(_)) => AmbientCredentials::NotLoaded,
        Err(err) => AmbientCredentials::Failed(err.to_string()),
    }
}

/// AWS configuration builder
///
/// Creates AWS SDK configuration with support for:
/// - Custom regions
/// - Ambient credential chain with explicit key fallback
/// - Custom endpoint URLs for local testing
pub struct AwsConfigBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> AwsConfigBuilder<'a> {
    /// Create a new AWS configuration builder
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the base AWS SDK configuration
    pub async fn build_sdk_config(&self) -> Result<SdkConfig, ConfigurationError> {
        let ambient_config = aws_config::defaults(BehaviorVersion::latest())
            .region(ambient_region_provider(self.settings))
            .load()
            .await;

        let ambient = probe_ambient_credentials(&ambient_config).await;
        let resolution = resolve_credentials(ambient, self.settings)?;

        let sdk_config = match resolution {
            CredentialResolution::Ambient => ambient_config,
            CredentialResolution::Explicit(ref credentials) => {
                aws_config::defaults(BehaviorVersion::latest())
                    .region(explicit_region(self.settings))
                    .credentials_provider(credentials.clone())
                    .load()
                    .await
            }
        };

        tracing::info!(
            source = resolution.source_name(),
            region = ?sdk_config.region(),
            "Resolved AWS credentials"
        );

        Ok(sdk_config)
    }

    /// Create a Bedrock Runtime client with optional custom endpoint
    ///
    /// If `BEDROCK_ENDPOINT_URL` is set in settings, the client will use
    /// that endpoint (useful for testing with mocks).
    pub async fn build_bedrock_client(&self) -> Result<BedrockRuntimeClient, ConfigurationError> {
        let sdk_config = self.build_sdk_config().await?;

        if let Some(endpoint_url) = &self.settings.bedrock_endpoint_url {
            tracing::info!(endpoint = %endpoint_url, "Using custom Bedrock endpoint");

            let bedrock_config = aws_sdk_bedrockruntime::config::Builder::from(&sdk_config)
                .endpoint_url(endpoint_url)
                .build();

            Ok(BedrockRuntimeClient::from_conf(bedrock_config))
        } else {
            Ok(BedrockRuntimeClient::new(&sdk_config))
        }
    }
}

/// Create a Bedrock Runtime client from settings (convenience function)
pub async fn create_bedrock_client(
    settings: &Settings,
) -> Result<BedrockRuntimeClient, ConfigurationError> {
    AwsConfigBuilder::new(settings).build_bedrock_client().await
}
