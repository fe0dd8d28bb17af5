//! Chat-completion backend abstraction
//!
//! Provides a common interface for chat-completion providers. The
//! resolver talks to backends only through `ChatBackend`, so tests can
//! substitute a scripted mock for the real HTTP client.

mod error;
mod perplexity;
mod types;


pub use error::{ChatError, ChatErrorKind};
pub use perplexity::PerplexityClient;
pub use types::{ChatRequest, ChatResponse};

use async_trait::async_trait;
use std::sync::Arc;

/// Client for one chat-completion provider
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Request a completion for the model and message list in `request`
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

#[async_trait]
impl<T: ChatBackend + ?Sized> ChatBackend for Arc<T> {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        (**self).complete(request).await
    }
}
