//! Events that drive a session

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    // User events
    /// The user submitted prompt text
    Submit { text: String },
    /// The user asked to wipe the conversation
    Clear,

    // Resolver events
    /// Resolution finished; `reply` is the final text for the placeholder
    Resolved { reply: String },
}
