//! Session state machine and controller
//!
//! Implements the Elm Architecture pattern: `transition` is a pure
//! function of state and event, and the controller applies the
//! returned effects to the conversation and drives the resolver.

mod controller;
mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use controller::SessionController;
pub use effect::Effect;
pub use event::Event;
pub use state::SessionState;
pub use transition::{transition, TransitionError};
