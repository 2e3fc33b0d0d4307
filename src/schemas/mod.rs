//! Schema module
//!
//! Request/response types for the chat input format and the Anthropic
//! Messages API on Bedrock.

pub mod anthropic;
pub mod chat;

pub use anthropic::{
    AnthropicMessage, AnthropicRole, ContentBlock, ConvertedRequest, InvokeModelBody,
    InvokeModelResponse, ANTHROPIC_VERSION,
};
pub use chat::{ChatMessage, Role};
