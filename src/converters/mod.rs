//! Converters module
//!
//! Contains logic for converting generic chat messages into the
//! Anthropic-on-Bedrock request format.
//!
//! # Usage
//!
//! ```rust
//! use bedrock_chat_adapter::converters::convert_messages;
//! use bedrock_chat_adapter::schemas::ChatMessage;
//!
//! let converted = convert_messages(&[
//!     ChatMessage::system("You are terse."),
//!     ChatMessage::user("Hi"),
//! ]);
//! assert_eq!(converted.system.as_deref(), Some("You are terse."));
//! assert_eq!(converted.messages.len(), 1);
//! ```

pub mod chat_to_anthropic;

pub use chat_to_anthropic::convert_messages;
