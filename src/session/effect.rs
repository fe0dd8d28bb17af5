//! Effects produced by state transitions
//!
//! Effects describe work for the caller to perform; the transition
//! function itself never touches the conversation.

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append the submitted text to the conversation as a user message
    AppendUserMessage { text: String },
    /// Append the transient placeholder reply
    AppendPlaceholder,
    /// Start resolving a reply for the prompt
    BeginResolution { prompt: String },
    /// Overwrite the placeholder with the final reply text
    ReplacePlaceholder { reply: String },
    /// Empty the conversation and the diagnostic trace
    Reset,
}
