//! Chat to Anthropic format converter
//!
//! Converts generic `{role, content}` chat messages into the Anthropic
//! Messages API shape Bedrock expects.

use crate::schemas::anthropic::{AnthropicMessage, AnthropicRole, ConvertedRequest};
use crate::schemas::chat::{ChatMessage, Role};

/// Convert chat messages into Anthropic messages plus a system prompt.
///
/// - `system` messages are lifted out; if several are present the last one wins.
/// - `user` and `assistant` messages keep their order and role, with their
///   content wrapped in a single text block.
/// - Messages with any other role are dropped.
pub fn convert_messages(messages: &[ChatMessage]) -> ConvertedRequest {
    let mut converted = Vec::with_capacity(messages.len());
    let mut system = None;

    for message in messages {
        match &message.role {
            Role::System => system = Some(message.content.clone()),
            Role::User => converted.push(AnthropicMessage::text(
                AnthropicRole::User,
                message.content.clone(),
            )),
            Role::Assistant => converted.push(AnthropicMessage::text(
                AnthropicRole::Assistant,
                message.content.clone(),
            )),
            Role::Other(role) => {
                tracing::trace!(role = %role, "Dropping message with unsupported role");
            }
        }
    }

    ConvertedRequest {
        messages: converted,
        system,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::anthropic::ContentBlock;

    #[test]
    fn test_system_and_user() {
        let messages = vec![
            ChatMessage::system("You are terse."),
            ChatMessage::user("Hi"),
        ];

        let converted = convert_messages(&messages);

        assert_eq!(converted.system.as_deref(), Some("You are terse."));
        assert_eq!(
            converted.messages,
            vec![AnthropicMessage {
                role: AnthropicRole::User,
                content: vec![ContentBlock::Text {
                    text: "Hi".to_string()
                }],
            }]
        );
    }

    #[test]
    fn test_order_and_roles_preserved() {
        let messages = vec![
            ChatMessage::user("one"),
            ChatMessage::assistant("two"),
            ChatMessage::system("rules"),
            ChatMessage::user("three"),
        ];

        let converted = convert_messages(&messages);

        let roles: Vec<AnthropicRole> = converted.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![AnthropicRole::User, AnthropicRole::Assistant, AnthropicRole::User]
        );
        let texts: Vec<&str> = converted
            .messages
            .iter()
            .map(|m| match &m.content[..] {
                [ContentBlock::Text { text }] => text.as_str(),
                other => panic!("expected a single text block, got {:?}", other),
            })
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert_eq!(converted.system.as_deref(), Some("rules"));
    }

    #[test]
    fn test_no_system_message() {
        let converted = convert_messages(&[ChatMessage::user("Hi")]);
        assert!(converted.system.is_none());

        let converted = convert_messages(&[]);
        assert!(converted.system.is_none());
        assert!(converted.messages.is_empty());
    }

    #[test]
    fn test_last_system_message_wins() {
        let messages = vec![
            ChatMessage::system("first"),
            ChatMessage::user("Hi"),
            ChatMessage::system("second"),
        ];

        let converted = convert_messages(&messages);
        assert_eq!(converted.system.as_deref(), Some("second"));
        assert_eq!(converted.messages.len(), 1);
    }

    #[test]
    fn test_unknown_roles_dropped() {
        let messages = vec![
            ChatMessage::new("tool", "result"),
            ChatMessage::user("Hi"),
            ChatMessage::new("", "orphan"),
            ChatMessage::new("System", "not a system message"),
        ];

        let converted = convert_messages(&messages);

        assert_eq!(converted.messages.len(), 1);
        assert_eq!(converted.messages[0].role, AnthropicRole::User);
        assert!(converted.system.is_none());
    }

    #[test]
    fn test_conversion_is_repeatable() {
        let messages = vec![
            ChatMessage::system("You are terse."),
            ChatMessage::user("Hi"),
            ChatMessage::assistant("Hello"),
        ];

        assert_eq!(convert_messages(&messages), convert_messages(&messages));
    }
}
