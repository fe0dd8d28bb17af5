//! Session controller
//!
//! Owns one session's conversation, diagnostic trace, and state, and
//! drives transitions and the resolver. `submit` runs the whole
//! submit, resolve, replace cycle before returning, so at most one
//! resolution is ever in flight.

use super::effect::Effect;
use super::event::Event;
use super::state::SessionState;
use super::transition::{transition, TransitionError, TransitionResult};
use crate::chat::{Conversation, DiagnosticLog, Message};
use crate::llm::ChatBackend;
use crate::resolver;
use tracing::Instrument;
use uuid::Uuid;

/// Transient reply shown while a resolution is in flight
const PLACEHOLDER_REPLY: &str = "Thinking...";

pub struct SessionController<B: ChatBackend> {
    session_id: Uuid,
    state: SessionState,
    conversation: Conversation,
    diagnostics: DiagnosticLog,
    backend: B,
}

impl<B: ChatBackend> SessionController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            state: SessionState::Idle,
            conversation: Conversation::new(),
            diagnostics: DiagnosticLog::new(),
            backend,
        }
    }

    /// Submit prompt text and resolve its reply.
    ///
    /// On success the returned text is already recorded in the
    /// conversation in place of the placeholder. Resolver failure
    /// messages count as replies; `Err` means the submission itself
    /// was rejected and nothing changed.
    pub async fn submit(&mut self, text: &str) -> Result<String, TransitionError> {
        let outcome = transition(
            &self.state,
            Event::Submit {
                text: text.to_string(),
            },
        )?;

        if let Some(prompt) = self.apply(outcome) {
            let reply = {
                let messages = self.conversation.messages();
                // History excludes the user message and placeholder just appended
                let history = &messages[..messages.len().saturating_sub(2)];
                resolver::resolve(&self.backend, history, &prompt, &mut self.diagnostics)
                    .instrument(tracing::info_span!("resolve", session_id = %self.session_id))
                    .await
            };
            let outcome = transition(&self.state, Event::Resolved { reply })?;
            self.apply(outcome);
        }

        let reply = self
            .conversation
            .messages()
            .last()
            .map_or_else(String::new, |message| message.content.clone());
        Ok(reply)
    }

    /// Wipe the conversation and diagnostic trace
    pub fn clear(&mut self) {
        // Clear is legal from any state, so the transition cannot fail
        if let Ok(outcome) = transition(&self.state, Event::Clear) {
            self.apply(outcome);
        }
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    #[allow(dead_code)] // Useful for tests
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    #[allow(dead_code)] // Useful for tests
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Adopt the new state and run every effect. Returns the prompt
    /// when a resolution should begin.
    fn apply(&mut self, outcome: TransitionResult) -> Option<String> {
        self.state = outcome.new_state;
        let mut pending = None;
        for effect in outcome.effects {
            match effect {
                Effect::AppendUserMessage { text } => {
                    self.conversation.push(Message::user(text));
                }
                Effect::AppendPlaceholder => {
                    self.conversation.push(Message::assistant(PLACEHOLDER_REPLY));
                }
                Effect::BeginResolution { prompt } => pending = Some(prompt),
                Effect::ReplacePlaceholder { reply } => {
                    self.conversation.replace_last(Message::assistant(reply));
                }
                Effect::Reset => {
                    self.conversation.clear();
                    self.diagnostics.clear();
                }
            }
        }
        pending
    }
}
