//! Session state types

/// State of one chat session.
///
/// `Awaiting` means the submitted prompt has a placeholder reply in the
/// conversation and exactly one resolution is in flight for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Ready for input
    #[default]
    Idle,
    /// A reply is being resolved for the submitted prompt
    Awaiting { prompt: String },
}
