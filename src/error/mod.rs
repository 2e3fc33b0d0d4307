//! Error types for adapter construction and completion calls

pub mod types;

pub use types::{CompletionError, CompletionErrorKind, ConfigurationError};
