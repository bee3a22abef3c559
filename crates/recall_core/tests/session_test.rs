//! Tests for the game session state machine.

use recall_core::{Cue, GameSession, GameSettings, Phase, TransitionError, Verdict};
use strum::IntoEnumIterator;

/// Drives a fresh session into the given phase.
fn session_in(phase: Phase) -> GameSession {
    let mut session = GameSession::new(GameSettings::new("4", "2"));
    if phase == Phase::Setup {
        return session;
    }
    session.start().expect("Start failed");
    if phase == Phase::Display {
        return session;
    }
    session.tick().expect("Tick failed");
    session.tick().expect("Tick failed");
    if phase == Phase::Answer {
        return session;
    }
    session.submit().expect("Submit failed");
    session
}

#[test]
fn test_new_session_defaults() {
    let session = GameSession::default();
    assert_eq!(session.phase(), Phase::Setup);
    assert_eq!(session.settings().digits(), "5");
    assert_eq!(session.settings().seconds(), "3");
    assert_eq!(session.user_answer(), "");
    assert_eq!(session.verdict(), None);
}

#[test]
fn test_start_generates_target_and_arms_countdown() {
    let mut session = session_in(Phase::Setup);
    let transition = session.start().expect("Start failed");

    assert_eq!(transition.from, Phase::Setup);
    assert_eq!(transition.to, Phase::Display);
    assert_eq!(transition.cue, Some(Cue::Start));
    assert!(transition.arms_countdown());
    assert_eq!(session.phase(), Phase::Display);
    assert_eq!(session.target_number().len(), 4);
    assert!(session.target_number().chars().all(|c| c.is_ascii_digit()));
    assert_eq!(session.remaining_seconds(), 2);
}

#[test]
fn test_start_guard_leaves_session_unchanged() {
    for (digits, seconds) in [("", "3"), ("0", "3"), ("abc", "3"), ("5", ""), ("5", "0")] {
        let mut session = GameSession::new(GameSettings::new(digits, seconds));
        let before = session.clone();
        let result = session.start();
        assert!(
            matches!(
                result,
                Err(TransitionError::InvalidDigitCount(_, _) | TransitionError::InvalidDuration(_, _))
            ),
            "settings ({digits:?}, {seconds:?}) should be refused"
        );
        assert_eq!(session, before);
    }
}

#[test]
fn test_countdown_reaches_answer_after_exactly_duration_ticks() {
    let mut session = GameSession::new(GameSettings::new("3", "3"));
    session.start().expect("Start failed");

    let first = session.tick().expect("Tick failed");
    assert!(!first.changed_phase());
    assert_eq!(session.remaining_seconds(), 2);

    session.tick().expect("Tick failed");
    assert_eq!(session.phase(), Phase::Display);
    assert_eq!(session.remaining_seconds(), 1);

    let last = session.tick().expect("Tick failed");
    assert_eq!(session.phase(), Phase::Answer);
    assert_eq!(session.remaining_seconds(), 0);
    assert!(last.cancels_countdown());
    assert!(last.focuses_answer());
    assert_eq!(last.cue, None);
}

#[test]
fn test_no_tick_once_answer_entered() {
    let mut session = session_in(Phase::Answer);
    let before = session.clone();
    let result = session.tick();
    assert_eq!(
        result,
        Err(TransitionError::WrongPhase {
            expected: Phase::Display,
            actual: Phase::Answer,
        })
    );
    assert_eq!(session, before);
}

#[test]
fn test_submit_exact_match_is_correct() {
    let mut session = session_in(Phase::Answer);
    let target = session.target_number().to_string();
    session.set_user_answer(target.clone());

    let transition = session.submit().expect("Submit failed");
    assert_eq!(transition.cue, Some(Cue::Correct));
    assert_eq!(session.phase(), Phase::Result);
    assert_eq!(session.verdict(), Some(Verdict::Correct));
    assert_eq!(session.is_correct(), Some(true));
    assert_eq!(session.user_answer(), target);
}

#[test]
fn test_submit_with_leading_space_is_incorrect() {
    let mut session = session_in(Phase::Answer);
    let padded = format!(" {}", session.target_number());
    session.set_user_answer(padded);

    let transition = session.submit().expect("Submit failed");
    assert_eq!(transition.cue, Some(Cue::Incorrect));
    assert_eq!(session.verdict().map(Verdict::label), Some("Incorrect!"));
}

#[test]
fn test_reset_clears_answer_and_keeps_settings() {
    let mut session = session_in(Phase::Result);
    session.set_user_answer("1234");

    let transition = session.reset().expect("Reset failed");
    assert_eq!(transition.to, Phase::Setup);
    assert_eq!(session.phase(), Phase::Setup);
    assert_eq!(session.user_answer(), "");
    assert_eq!(session.verdict(), None);
    assert_eq!(session.settings().digits(), "4");
    assert_eq!(session.settings().seconds(), "2");
}

#[test]
fn test_confirm_matches_transition_table() {
    for phase in Phase::iter() {
        let mut session = session_in(phase);
        let before = session.clone();
        let outcome = session.confirm();

        match phase {
            Phase::Setup => {
                let transition = outcome.expect("Setup confirm").expect("Start failed");
                assert_eq!(transition.to, Phase::Display);
            }
            Phase::Display => {
                assert!(outcome.is_none());
                assert_eq!(session, before);
            }
            Phase::Answer => {
                let transition = outcome.expect("Answer confirm").expect("Submit failed");
                assert_eq!(transition.to, Phase::Result);
            }
            Phase::Result => {
                let transition = outcome.expect("Result confirm").expect("Reset failed");
                assert_eq!(transition.to, Phase::Setup);
            }
        }
    }
}

#[test]
fn test_operations_refused_out_of_phase() {
    let mut setup = session_in(Phase::Setup);
    assert!(matches!(setup.submit(), Err(TransitionError::WrongPhase { .. })));
    assert!(matches!(setup.reset(), Err(TransitionError::WrongPhase { .. })));
    assert!(matches!(setup.tick(), Err(TransitionError::WrongPhase { .. })));

    let mut display = session_in(Phase::Display);
    assert!(matches!(display.start(), Err(TransitionError::WrongPhase { .. })));
    assert!(matches!(display.submit(), Err(TransitionError::WrongPhase { .. })));

    let mut result = session_in(Phase::Result);
    assert!(matches!(result.start(), Err(TransitionError::WrongPhase { .. })));
    assert!(matches!(result.tick(), Err(TransitionError::WrongPhase { .. })));
}

#[test]
fn test_next_round_overwrites_target() {
    let mut session = session_in(Phase::Result);
    session.reset().expect("Reset failed");
    *session.settings_mut().digits_mut() = "7".to_string();
    session.start().expect("Start failed");
    assert_eq!(session.target_number().len(), 7);
    assert_eq!(session.remaining_seconds(), 2);
}
