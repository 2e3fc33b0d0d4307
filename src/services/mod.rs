//! Services module
//!
//! Contains the Bedrock adapter and the client contract it implements.

pub mod bedrock;
pub mod client;

pub use bedrock::{BedrockAdapter, ClientConfig, InvokeError, ModelInvoker, JSON_CONTENT_TYPE};
pub use client::ChatClient;
