//! Adapter error types

use crate::config::Locale;
use thiserror::Error;

/// Errors raised while constructing an adapter.
///
/// These are the only errors that reach callers as values; an adapter
/// without a usable client is never handed out.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("AWS credentials are required. Please set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY environment variables or configure IAM role.")]
    MissingCredentials,

    #[error("Credential provider error: {0}")]
    CredentialProvider(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl From<anyhow::Error> for ConfigurationError {
    fn from(err: anyhow::Error) -> Self {
        ConfigurationError::InvalidSettings(err.to_string())
    }
}

/// Tag identifying a completion failure without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    Authentication,
    Validation,
    UnknownRemote,
    UnexpectedResponseShape,
    Transport,
    Serialization,
}

/// Failures of a single completion call
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Remote service rejected the credentials (`UnauthorizedOperation`)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Remote service rejected the request (`ValidationException`)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Remote service error with any other code
    #[error("Bedrock API error ({code}): {detail}")]
    UnknownRemote { code: String, detail: String },

    /// Response body parsed but lacks `content[0].text`
    #[error("Unexpected response format")]
    UnexpectedResponseShape,

    /// Dispatch, timeout or other non-service failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request body could not be encoded or response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CompletionError {
    pub fn kind(&self) -> CompletionErrorKind {
        match self {
            CompletionError::Authentication(_) => CompletionErrorKind::Authentication,
            CompletionError::Validation(_) => CompletionErrorKind::Validation,
            CompletionError::UnknownRemote { .. } => CompletionErrorKind::UnknownRemote,
            CompletionError::UnexpectedResponseShape => {
                CompletionErrorKind::UnexpectedResponseShape
            }
            CompletionError::Transport(_) => CompletionErrorKind::Transport,
            CompletionError::Serialization(_) => CompletionErrorKind::Serialization,
        }
    }

    /// Raw error text embedded in templated messages
    pub fn detail(&self) -> Option<&str> {
        match self {
            CompletionError::Authentication(detail)
            | CompletionError::Validation(detail)
            | CompletionError::UnknownRemote { detail, .. }
            | CompletionError::Transport(detail)
            | CompletionError::Serialization(detail) => Some(detail),
            CompletionError::UnexpectedResponseShape => None,
        }
    }

    /// Render the user-facing message for this failure
    pub fn render(&self, locale: Locale) -> String {
        match (self, locale) {
            (CompletionError::Authentication(_), Locale::ZhCn) => {
                "Bedrock API认证失败，请检查AWS凭证是否正确".to_string()
            }
            (CompletionError::Authentication(_), Locale::EnUs) => {
                "Bedrock API authentication failed, please check your AWS credentials".to_string()
            }
            (CompletionError::Validation(_), Locale::ZhCn) => {
                "Bedrock API请求参数错误，请检查模型ID是否正确".to_string()
            }
            (CompletionError::Validation(_), Locale::EnUs) => {
                "Bedrock API request parameters are invalid, please check the model ID".to_string()
            }
            (CompletionError::UnexpectedResponseShape, Locale::ZhCn) => {
                "AI服务返回格式异常，请稍后重试".to_string()
            }
            (CompletionError::UnexpectedResponseShape, Locale::EnUs) => {
                "The AI service returned an unexpected response format, please try again later"
                    .to_string()
            }
            (other, Locale::ZhCn) => {
                format!("调用Bedrock API时出错: {}", other.detail().unwrap_or_default())
            }
            (other, Locale::EnUs) => {
                format!("Error calling Bedrock API: {}", other.detail().unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_messages_ignore_detail() {
        let err = CompletionError::Authentication("token expired".to_string());
        assert_eq!(err.render(Locale::ZhCn), "Bedrock API认证失败，请检查AWS凭证是否正确");
        assert!(!err.render(Locale::EnUs).contains("token expired"));
    }

    #[test]
    fn test_templated_messages_embed_detail() {
        let err = CompletionError::UnknownRemote {
            code: "ThrottlingException".to_string(),
            detail: "Too many requests".to_string(),
        };
        assert_eq!(err.render(Locale::ZhCn), "调用Bedrock API时出错: Too many requests");
        assert_eq!(
            err.render(Locale::EnUs),
            "Error calling Bedrock API: Too many requests"
        );

        let err = CompletionError::Transport("dispatch failure".to_string());
        assert_eq!(err.render(Locale::ZhCn), "调用Bedrock API时出错: dispatch failure");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(
            CompletionError::Validation(String::new()).kind(),
            CompletionErrorKind::Validation
        );
        assert_eq!(
            CompletionError::UnexpectedResponseShape.kind(),
            CompletionErrorKind::UnexpectedResponseShape
        );
        assert_eq!(
            CompletionError::Serialization(String::new()).kind(),
            CompletionErrorKind::Serialization
        );
    }

    #[test]
    fn test_configuration_error_from_anyhow() {
        let err: ConfigurationError = anyhow::anyhow!("bad locale").into();
        assert!(matches!(err, ConfigurationError::InvalidSettings(ref msg) if msg == "bad locale"));
    }
}
