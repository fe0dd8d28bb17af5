//! Common types for backend interactions

use crate::chat::Message;
use serde::Serialize;

/// One completion request.
///
/// Serializes directly as the chat-completions POST body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
}

/// A successful completion, reduced to the reply text
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
}
