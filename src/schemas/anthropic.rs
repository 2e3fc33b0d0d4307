//! Anthropic Messages API schema definitions (Bedrock flavour)
//!
//! Request and response bodies exchanged with Bedrock's `InvokeModel`
//! operation for Anthropic models.

use crate::config::InferenceParams;
use serde::{Deserialize, Serialize};

/// Protocol version Bedrock expects in every Anthropic request body
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

// ============================================================================
// Request Types
// ============================================================================

/// Role of a message in the Anthropic conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnthropicRole {
    User,
    Assistant,
}

/// Content block of a request message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }
}

/// Conversation message in Anthropic format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicMessage {
    pub role: AnthropicRole,
    pub content: Vec<ContentBlock>,
}

impl AnthropicMessage {
    /// Message whose content is a single text block.
    pub fn text(role: AnthropicRole, text: impl Into<String>) -> Self {
        Self {
            role,
            content: vec![ContentBlock::text(text)],
        }
    }
}

/// Chat messages split into the conversation and the system prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertedRequest {
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// JSON body sent to `InvokeModel`.
///
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvokeModelBody {
    pub messages: Vec<AnthropicMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub anthropic_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

impl InvokeModelBody {
    pub fn new(request: ConvertedRequest, params: InferenceParams) -> Self {
        Self {
            messages: request.messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            system: request.system,
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Content block of a model response. Only text is read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseContent {
    #[serde(rename = "type", default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Token usage reported by the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

/// The parts of an `InvokeModel` response body the adapter reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InvokeModelResponse {
    #[serde(default)]
    pub content: Option<Vec<ResponseContent>>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl InvokeModelResponse {
    /// Text of the first content block, if the response has one.
    pub fn first_text(&self) -> Option<&str> {
        self.content.as_ref()?.first()?.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_wire_format_with_system() {
        let request = ConvertedRequest {
            messages: vec![AnthropicMessage::text(AnthropicRole::User, "Hi")],
            system: Some("You are terse.".to_string()),
        };
        let body = InvokeModelBody::new(request, InferenceParams::default());

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "messages": [{"role": "user", "content": [{"type": "text", "text": "Hi"}]}],
                "max_tokens": 4000,
                "temperature": 0.7,
                "top_p": 0.9,
                "anthropic_version": "bedrock-2023-05-31",
                "system": "You are terse."
            })
        );
    }

    #[test]
    fn test_body_omits_absent_system() {
        let body = InvokeModelBody::new(ConvertedRequest::default(), InferenceParams::default());
        let encoded = serde_json::to_string(&body).unwrap();

        assert!(!encoded.contains("system"));
        assert!(encoded.starts_with(r#"{"messages":[],"max_tokens":4000,"temperature":0.7,"top_p":0.9,"anthropic_version":"bedrock-2023-05-31"}"#));
    }

    #[test]
    fn test_response_first_text() {
        let response: InvokeModelResponse = serde_json::from_value(json!({
            "id": "msg_01",
            "type": "message",
            "content": [{"type": "text", "text": " Hello there "}],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 12, "output_tokens": 4}
        }))
        .unwrap();

        assert_eq!(response.first_text(), Some(" Hello there "));
        assert_eq!(response.stop_reason.as_deref(), Some("end_turn"));
        assert_eq!(response.usage.unwrap().output_tokens, 4);
    }

    #[test]
    fn test_response_without_content() {
        let missing: InvokeModelResponse = serde_json::from_value(json!({"type": "message"})).unwrap();
        assert_eq!(missing.first_text(), None);

        let null: InvokeModelResponse = serde_json::from_value(json!({"content": null})).unwrap();
        assert_eq!(null.first_text(), None);

        let empty: InvokeModelResponse = serde_json::from_value(json!({"content": []})).unwrap();
        assert_eq!(empty.first_text(), None);
    }
}
