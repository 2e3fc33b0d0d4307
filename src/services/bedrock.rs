//! Bedrock service for AWS Bedrock API interactions
//!
//! This module sends chat completions to Anthropic models on AWS Bedrock
//! through the `InvokeModel` operation and turns the outcome into text.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    operation::invoke_model::InvokeModelError,
    primitives::Blob,
    Client as BedrockRuntimeClient,
};
use aws_smithy_runtime_api::client::result::SdkError;

use crate::config::{create_bedrock_client, InferenceParams, Locale, Settings};
use crate::converters::convert_messages;
use crate::error::{CompletionError, ConfigurationError};
use crate::schemas::anthropic::{ConvertedRequest, InvokeModelBody, InvokeModelResponse};
use crate::schemas::chat::ChatMessage;

/// Value of both the `accept` and `content-type` markers on every request
pub const JSON_CONTENT_TYPE: &str = "application/json";

const UNAUTHORIZED_CODE: &str = "UnauthorizedOperation";
const VALIDATION_CODE: &str = "ValidationException";

// ============================================================================
// Invoker
// ============================================================================

/// Errors returned by a [`ModelInvoker`]
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// The service answered with an error
    #[error("{detail}")]
    Service {
        code: Option<String>,
        detail: String,
    },

    /// The request never got a service answer
    #[error("{0}")]
    Transport(String),
}

impl InvokeError {
    /// Create InvokeError from InvokeModel API error
    pub fn from_invoke_model_error<R>(err: SdkError<InvokeModelError, R>) -> Self
    where
        R: std::fmt::Debug,
    {
        let detail = DisplayErrorContext(&err).to_string();
        match err.as_service_error() {
            Some(service_err) => InvokeError::Service {
                code: service_err.code().map(str::to_string),
                detail,
            },
            None => InvokeError::Transport(detail),
        }
    }
}

impl From<InvokeError> for CompletionError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Service { code, detail } => match code.as_deref() {
                Some(UNAUTHORIZED_CODE) => CompletionError::Authentication(detail),
                Some(VALIDATION_CODE) => CompletionError::Validation(detail),
                Some(other) => CompletionError::UnknownRemote {
                    code: other.to_string(),
                    detail,
                },
                None => CompletionError::UnknownRemote {
                    code: "Unknown".to_string(),
                    detail,
                },
            },
            InvokeError::Transport(detail) => CompletionError::Transport(detail),
        }
    }
}

/// Sends a serialized request body to a model and returns the raw response body.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, InvokeError>;
}

#[async_trait]
impl ModelInvoker for BedrockRuntimeClient {
    async fn invoke(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, InvokeError> {
        let output = self
            .invoke_model()
            .model_id(model_id)
            .accept(JSON_CONTENT_TYPE)
            .content_type(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(InvokeError::from_invoke_model_error)?;

        Ok(output.body.into_inner())
    }
}

// ============================================================================
// Adapter
// ============================================================================

/// Remote client handle plus the model used when a call names none
#[derive(Debug, Clone)]
pub struct ClientConfig<I> {
    pub client: I,
    pub default_model: String,
}

/// Chat completion adapter for Anthropic models on Bedrock.
///
/// Holds one long-lived client for its whole lifetime. Every call is a
/// single `InvokeModel` request; there are no retries and no adapter-level
/// timeouts.
#[derive(Debug, Clone)]
pub struct BedrockAdapter<I = BedrockRuntimeClient> {
    config: ClientConfig<I>,
    locale: Locale,
    params: InferenceParams,
}

impl BedrockAdapter<BedrockRuntimeClient> {
    /// Create an adapter backed by the AWS SDK client.
    ///
    /// Fails when neither the ambient credential chain nor the configured
    /// key pair provides credentials.
    pub async fn new(settings: Settings) -> Result<Self, ConfigurationError> {
        let client = create_bedrock_client(&settings).await?;
        Ok(Self::with_invoker(client, &settings))
    }

    /// Create an adapter from environment variables (and `.env`).
    pub async fn from_env() -> Result<Self, ConfigurationError> {
        let settings = Settings::load()?;
        Self::new(settings).await
    }
}

impl<I: ModelInvoker> BedrockAdapter<I> {
    /// Create an adapter over any invoker, taking the default model and locale from settings
    pub fn with_invoker(invoker: I, settings: &Settings) -> Self {
        Self {
            config: ClientConfig {
                client: invoker,
                default_model: settings.bedrock_model.clone(),
            },
            locale: settings.locale,
            params: InferenceParams::default(),
        }
    }

    /// Replace the sampling parameters sent with each request
    pub fn with_inference_params(mut self, params: InferenceParams) -> Self {
        self.params = params;
        self
    }

    /// Model used when a call does not name one
    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    /// Language of rendered error messages
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Sampling parameters sent with each request
    pub fn inference_params(&self) -> InferenceParams {
        self.params
    }

    /// Get a reference to the underlying invoker
    pub fn client(&self) -> &I {
        &self.config.client
    }

    /// Convert chat messages into the Anthropic request shape
    pub fn convert(&self, messages: &[ChatMessage]) -> ConvertedRequest {
        convert_messages(messages)
    }

    /// The explicit model if given and non-empty, otherwise the default
    pub fn resolve_model<'a>(&'a self, model: Option<&'a str>) -> &'a str {
        model
            .filter(|m| !m.is_empty())
            .unwrap_or(self.config.default_model.as_str())
    }

    /// Run a completion and return the typed outcome.
    pub async fn try_completions(
        &self,
        messages: &[ChatMessage],
        model: Option<&str>,
    ) -> Result<String, CompletionError> {
        let model_id = self.resolve_model(model);

        match self.invoke_and_parse(messages, model_id).await {
            Ok(text) => Ok(text),
            Err(err) => {
                tracing::error!(
                    model_id = %model_id,
                    kind = ?err.kind(),
                    error = %err,
                    "Bedrock API error"
                );
                Err(err)
            }
        }
    }

    /// Run a completion and always return a string.
    ///
    /// Failures come back as a user-facing message in the configured locale.
    pub async fn completions(&self, messages: &[ChatMessage], model: Option<&str>) -> String {
        match self.try_completions(messages, model).await {
            Ok(text) => text,
            Err(err) => err.render(self.locale),
        }
    }

    async fn invoke_and_parse(
        &self,
        messages: &[ChatMessage],
        model_id: &str,
    ) -> Result<String, CompletionError> {
        tracing::debug!(
            model_id = %model_id,
            message_count = messages.len(),
            "Sending request to Bedrock API"
        );

        let body = InvokeModelBody::new(convert_messages(messages), self.params);
        let payload =
            serde_json::to_vec(&body).map_err(|e| CompletionError::Serialization(e.to_string()))?;

        let raw = self.config.client.invoke(model_id, payload).await?;

        let response: InvokeModelResponse = serde_json::from_slice(&raw)
            .map_err(|e| CompletionError::Serialization(e.to_string()))?;

        tracing::debug!(
            stop_reason = ?response.stop_reason,
            input_tokens = response.usage.map(|u| u.input_tokens),
            output_tokens = response.usage.map(|u| u.output_tokens),
            "Bedrock API call completed"
        );

        response
            .first_text()
            .map(|text| text.trim().to_string())
            .ok_or(CompletionError::UnexpectedResponseShape)
    }
}
