//! Generic chat client contract

use async_trait::async_trait;

use crate::schemas::chat::ChatMessage;
use crate::services::bedrock::{BedrockAdapter, ModelInvoker};

/// A backend that turns a conversation into a single text completion.
///
/// Implementations never fail past this boundary: errors come back as
/// human-readable text.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn completions(&self, messages: &[ChatMessage], model: Option<&str>) -> String;
}

#[async_trait]
impl<I: ModelInvoker> ChatClient for BedrockAdapter<I> {
    async fn completions(&self, messages: &[ChatMessage], model: Option<&str>) -> String {
        BedrockAdapter::completions(self, messages, model).await
    }
}
