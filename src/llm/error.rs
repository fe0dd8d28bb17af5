//! Backend error types

use thiserror::Error;

/// Backend error with classification.
///
/// The message is written to be shown in the diagnostic trace verbatim,
/// so constructors format it up front.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The backend rejected the model name
    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidModel, message)
    }

    /// The backend returned a non-success HTTP status
    pub fn api(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Api, message)
    }

    /// The request exceeded its deadline
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Timeout, message)
    }

    /// The request failed before any HTTP status was received
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Transport, message)
    }

    /// The response arrived but did not have the expected shape
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Malformed, message)
    }
}

/// Classification of backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    /// The backend did not recognize the model name
    InvalidModel,
    /// The backend returned an HTTP error status
    Api,
    /// The request exceeded its deadline
    Timeout,
    /// Connection or I/O failure before a status was received
    Transport,
    /// The response body did not match the expected shape
    Malformed,
}

impl ChatErrorKind {
    /// Whether the fallback loop should move on to the next candidate
    /// instead of stopping
    pub fn skips_to_next_candidate(self) -> bool {
        matches!(self, ChatErrorKind::InvalidModel)
    }
}
