//! Pure state transition logic
//!
//! `transition` inspects the current state and an event and returns the
//! next state plus effects. It performs no I/O, so every rule here can
//! be tested directly.

use super::effect::Effect;
use super::event::Event;
use super::state::SessionState;
use thiserror::Error;

/// Result of a successful transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: SessionState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(new_state: SessionState) -> Self {
        Self {
            new_state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Rejected events
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("nothing to submit, the prompt is empty")]
    EmptyInput,
    #[error("a reply is already being resolved")]
    Busy,
    #[error("no resolution is pending")]
    UnexpectedResolution,
}

pub fn transition(
    state: &SessionState,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ====================================================================
        // Submit: accepted only when idle and only with real content
        // ====================================================================
        (SessionState::Idle, Event::Submit { text }) => {
            let prompt = text.trim();
            if prompt.is_empty() {
                return Err(TransitionError::EmptyInput);
            }
            let prompt = prompt.to_string();
            Ok(TransitionResult::new(SessionState::Awaiting {
                prompt: prompt.clone(),
            })
            .with_effect(Effect::AppendUserMessage {
                text: prompt.clone(),
            })
            .with_effect(Effect::AppendPlaceholder)
            .with_effect(Effect::BeginResolution { prompt }))
        }

        (SessionState::Awaiting { .. }, Event::Submit { .. }) => Err(TransitionError::Busy),

        // ====================================================================
        // Clear: legal from any state, wipes everything
        // ====================================================================
        (_, Event::Clear) => {
            Ok(TransitionResult::new(SessionState::Idle).with_effect(Effect::Reset))
        }

        // ====================================================================
        // Resolution: overwrites the placeholder and returns to idle
        // ====================================================================
        (SessionState::Awaiting { .. }, Event::Resolved { reply }) => {
            Ok(TransitionResult::new(SessionState::Idle)
                .with_effect(Effect::ReplacePlaceholder { reply }))
        }

        (SessionState::Idle, Event::Resolved { .. }) => Err(TransitionError::UnexpectedResolution),
    }
}
