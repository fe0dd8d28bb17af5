//! Property-based tests for session transitions
//!
//! These tests verify the transition rules hold across all possible
//! inputs.

use super::effect::Effect;
use super::event::Event;
use super::state::SessionState;
use super::transition::{transition, TransitionError};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_state() -> impl Strategy<Value = SessionState> {
    prop_oneof![
        Just(SessionState::Idle),
        "[a-zA-Z0-9 ?.,]{1,40}".prop_map(|prompt| SessionState::Awaiting { prompt }),
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        "[a-zA-Z \t]{0,40}".prop_map(|text| Event::Submit { text }),
        Just(Event::Clear),
        "[a-zA-Z0-9 .,*]{0,60}".prop_map(|reply| Event::Resolved { reply }),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Invariant 1: every state and event pair is handled without panicking
    #[test]
    fn prop_transition_is_total(state in arb_state(), event in arb_event()) {
        let _ = transition(&state, event);
    }

    // Invariant 2: Clear lands in Idle with a reset effect from any state
    #[test]
    fn prop_clear_always_resets(state in arb_state()) {
        let result = transition(&state, Event::Clear);
        prop_assert!(result.is_ok());
        let result = result.unwrap();
        prop_assert_eq!(result.new_state, SessionState::Idle);
        prop_assert_eq!(result.effects, vec![Effect::Reset]);
    }

    // Invariant 3: submission from idle produces the append, placeholder,
    // resolve sequence carrying the trimmed prompt
    #[test]
    fn prop_submit_from_idle_starts_resolution(
        pad_left in "[ \t]{0,4}",
        body in "[a-zA-Z0-9][a-zA-Z0-9 ?.]{0,38}",
        pad_right in "[ \t]{0,4}",
    ) {
        let text = format!("{pad_left}{body}{pad_right}");
        let trimmed = text.trim().to_string();

        let result = transition(&SessionState::Idle, Event::Submit { text });
        prop_assert!(result.is_ok());
        let result = result.unwrap();

        prop_assert_eq!(
            &result.new_state,
            &SessionState::Awaiting { prompt: trimmed.clone() }
        );
        prop_assert_eq!(
            result.effects,
            vec![
                Effect::AppendUserMessage { text: trimmed.clone() },
                Effect::AppendPlaceholder,
                Effect::BeginResolution { prompt: trimmed },
            ]
        );
    }

    // Invariant 4: whitespace-only input is rejected and is not a state change
    #[test]
    fn prop_blank_submit_is_rejected(text in "[ \t\r\n]{0,8}") {
        let result = transition(&SessionState::Idle, Event::Submit { text });
        prop_assert_eq!(result.unwrap_err(), TransitionError::EmptyInput);
    }

    // Invariant 5: a pending resolution rejects further submissions outright
    #[test]
    fn prop_busy_session_rejects_submissions(
        prompt in "[a-z]{1,20}",
        text in "[a-zA-Z ]{0,30}",
    ) {
        let state = SessionState::Awaiting { prompt };
        let result = transition(&state, Event::Submit { text });
        prop_assert_eq!(result.unwrap_err(), TransitionError::Busy);
    }

    // Invariant 6: resolution always returns to idle and rewrites the
    // placeholder with the reply, whatever its content
    #[test]
    fn prop_resolution_overwrites_placeholder_and_idles(
        prompt in "[a-z]{1,20}",
        reply in "[a-zA-Z0-9 .,*]{0,60}",
    ) {
        let state = SessionState::Awaiting { prompt };
        let result = transition(&state, Event::Resolved { reply: reply.clone() });
        prop_assert!(result.is_ok());
        let result = result.unwrap();
        prop_assert_eq!(result.new_state, SessionState::Idle);
        prop_assert_eq!(result.effects, vec![Effect::ReplacePlaceholder { reply }]);
    }

    // Invariant 7: a resolution with nothing pending is rejected
    #[test]
    fn prop_unexpected_resolution_is_rejected(reply in "[a-z ]{0,30}") {
        let result = transition(&SessionState::Idle, Event::Resolved { reply });
        prop_assert_eq!(result.unwrap_err(), TransitionError::UnexpectedResolution);
    }
}

// ============================================================================
// Sequence Tests
// ============================================================================

#[test]
fn full_exchange_cycle_returns_to_idle() {
    let submit = transition(
        &SessionState::Idle,
        Event::Submit {
            text: "What is coinsurance?".to_string(),
        },
    )
    .unwrap();
    assert!(matches!(submit.new_state, SessionState::Awaiting { .. }));

    let resolved = transition(
        &submit.new_state,
        Event::Resolved {
            reply: "You split costs with the insurer.".to_string(),
        },
    )
    .unwrap();
    assert_eq!(resolved.new_state, SessionState::Idle);

    let cleared = transition(&resolved.new_state, Event::Clear).unwrap();
    assert_eq!(cleared.new_state, SessionState::Idle);
    assert_eq!(cleared.effects, vec![Effect::Reset]);
}

#[test]
fn clear_while_awaiting_discards_the_pending_prompt() {
    let state = SessionState::Awaiting {
        prompt: "lost".to_string(),
    };
    let result = transition(&state, Event::Clear).unwrap();
    assert_eq!(result.new_state, SessionState::Idle);
    assert_eq!(result.effects, vec![Effect::Reset]);
}
