//! Fallback reply resolver
//!
//! Tries a fixed list of candidate models in priority order until one
//! produces a reply. Every attempt is recorded in the diagnostic log in
//! the order it happened, so the user can see which candidates were
//! tried and how the resolution ended.

use crate::chat::{DiagnosticLog, Message};
use crate::llm::{ChatBackend, ChatRequest};
use crate::system_prompt;
use std::time::Instant;

/// Candidate models, tried in this order on every resolution
pub const MODEL_CANDIDATES: &[&str] = &[
    "pplx-7b-online",
    "sonar-pro",
    "sonar-reasoning-pro",
    "llama2-70b-chat",
    "gpt-3.5-turbo-1106",
];

/// Token budget for a single reply
pub const MAX_REPLY_TOKENS: u32 = 350;

/// Detail used when the list is exhausted without a recorded error
const UNKNOWN_ERROR: &str = "unknown error.";

/// Resolve a reply for `user_text` against the prior `history`.
///
/// Always returns displayable text: either the first successful reply
/// or a failure message naming the last error. The diagnostic log is
/// reset at the start of every call.
pub async fn resolve<B: ChatBackend>(
    backend: &B,
    history: &[Message],
    user_text: &str,
    log: &mut DiagnosticLog,
) -> String {
    log.clear();

    let messages = build_messages(history, user_text);
    let mut last_error: Option<String> = None;

    for candidate in MODEL_CANDIDATES {
        log.record(format!("Trying model: {candidate}"));

        let request = ChatRequest {
            model: (*candidate).to_string(),
            messages: messages.clone(),
            max_tokens: MAX_REPLY_TOKENS,
        };

        let started = Instant::now();
        match backend.complete(&request).await {
            Ok(response) => {
                log.record("Successfully received response.");
                tracing::info!(
                    model = %candidate,
                    duration_ms = %started.elapsed().as_millis(),
                    "candidate produced a reply"
                );
                return response.content;
            }
            Err(err) if err.kind.skips_to_next_candidate() => {
                log.record(format!("Model {candidate} not valid, trying next model..."));
                tracing::warn!(
                    model = %candidate,
                    error = %err,
                    "candidate rejected, trying next"
                );
            }
            Err(err) => {
                let detail = err.to_string();
                log.record(detail.clone());
                tracing::error!(
                    model = %candidate,
                    duration_ms = %started.elapsed().as_millis(),
                    error = %detail,
                    "resolution stopped"
                );
                last_error = Some(detail);
                break;
            }
        }
    }

    let detail = last_error.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    format!("No model succeeded. Last error: {detail}")
}

/// Assemble the request message list: system prompt, then prior
/// history, then the new question last.
fn build_messages(history: &[Message], user_text: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(system_prompt::POLICY_EXPLAINER));
    messages.extend_from_slice(history);
    messages.push(Message::user(user_text));
    messages
}
