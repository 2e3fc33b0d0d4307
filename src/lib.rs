//! Chat completion adapter for Anthropic models on AWS Bedrock
//!
//! Converts generic `{role, content}` chat messages into Bedrock's Anthropic
//! Messages API format, calls `InvokeModel`, and returns the reply as text.
//! Runtime failures never escape [`BedrockAdapter::completions`]; they are
//! logged and rendered as user-facing messages. Use
//! [`BedrockAdapter::try_completions`] for the typed [`CompletionError`].

// Public modules
pub mod config;
pub mod converters;
pub mod error;
pub mod logging;
pub mod schemas;
pub mod services;

// Re-export commonly used types
pub use config::{Locale, Settings};
pub use converters::convert_messages;
pub use error::{CompletionError, CompletionErrorKind, ConfigurationError};
pub use schemas::{ChatMessage, ConvertedRequest, Role};
pub use services::{BedrockAdapter, ChatClient, ModelInvoker};
