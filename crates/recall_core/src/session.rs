//! The game session and its transition functions.
//!
//! Every operation checks the current phase first and refuses with
//! [`TransitionError::WrongPhase`] when called out of turn. A refused
//! operation changes nothing.

use tracing::{debug, info, instrument};

use super::digits;
use super::{Cue, GameSettings, Phase, TransitionError, Verdict};

/// Side effects the caller must perform after a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Phase before the operation.
    pub from: Phase,
    /// Phase after the operation.
    pub to: Phase,
    /// Cue to play, if any.
    pub cue: Option<Cue>,
}

impl Transition {
    fn new(from: Phase, to: Phase, cue: Option<Cue>) -> Self {
        Self { from, to, cue }
    }

    /// True when the countdown must be armed.
    pub fn arms_countdown(&self) -> bool {
        self.from != Phase::Display && self.to == Phase::Display
    }

    /// True when any running countdown must be cancelled.
    pub fn cancels_countdown(&self) -> bool {
        self.from == Phase::Display && self.to != Phase::Display
    }

    /// True when the answer field should take focus.
    pub fn focuses_answer(&self) -> bool {
        self.from != Phase::Answer && self.to == Phase::Answer
    }

    /// True when the phase changed.
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Authoritative state of one page's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    phase: Phase,
    settings: GameSettings,
    target_number: String,
    user_answer: String,
    remaining_seconds: u32,
    verdict: Option<Verdict>,
}

impl GameSession {
    /// Creates a session in [`Phase::Setup`].
    #[instrument(skip(settings))]
    pub fn new(settings: GameSettings) -> Self {
        Self {
            phase: Phase::Setup,
            settings,
            target_number: String::new(),
            user_answer: String::new(),
            remaining_seconds: 0,
            verdict: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round settings as typed.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Mutable settings, for the setup input fields.
    pub fn settings_mut(&mut self) -> &mut GameSettings {
        &mut self.settings
    }

    /// Number generated for the current or most recent round.
    pub fn target_number(&self) -> &str {
        &self.target_number
    }

    /// Answer typed so far.
    pub fn user_answer(&self) -> &str {
        &self.user_answer
    }

    /// Replaces the typed answer.
    pub fn set_user_answer(&mut self, answer: impl Into<String>) {
        self.user_answer = answer.into();
    }

    /// Seconds left on the display countdown.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Verdict of the submitted answer, present only in [`Phase::Result`].
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Whether the submitted answer matched. `None` before submission.
    pub fn is_correct(&self) -> Option<bool> {
        self.verdict.map(Verdict::is_correct)
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), TransitionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Setup -> Display: generates the target and arms the countdown.
    ///
    /// Refused when the settings are not positive whole numbers within limits.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn start(&mut self) -> Result<Transition, TransitionError> {
        self.expect_phase(Phase::Setup)?;
        let (digit_count, duration) = self.settings.validate()?;

        self.target_number = digits::generate(digit_count);
        self.remaining_seconds = duration;
        self.verdict = None;
        self.phase = Phase::Display;

        info!(digit_count, duration, "Round started");
        Ok(Transition::new(Phase::Setup, Phase::Display, Some(Cue::Start)))
    }

    /// One countdown second.
    ///
    /// Decrements the remaining time, and moves to Answer in the same step
    /// once it reaches zero.
    #[instrument(skip(self), fields(remaining = self.remaining_seconds))]
    pub fn tick(&mut self) -> Result<Transition, TransitionError> {
        self.expect_phase(Phase::Display)?;

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        debug!(remaining = self.remaining_seconds, "Countdown tick");

        if self.remaining_seconds == 0 {
            self.phase = Phase::Answer;
            info!("Countdown elapsed, awaiting answer");
            return Ok(Transition::new(Phase::Display, Phase::Answer, None));
        }
        Ok(Transition::new(Phase::Display, Phase::Display, None))
    }

    /// Answer -> Result: judges the typed answer.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit(&mut self) -> Result<Transition, TransitionError> {
        self.expect_phase(Phase::Answer)?;

        let verdict = Verdict::judge(&self.user_answer, &self.target_number);
        self.verdict = Some(verdict);
        self.phase = Phase::Result;

        info!(%verdict, "Answer submitted");
        let cue = if verdict.is_correct() {
            Cue::Correct
        } else {
            Cue::Incorrect
        };
        Ok(Transition::new(Phase::Answer, Phase::Result, Some(cue)))
    }

    /// Result -> Setup: clears the answer and keeps the settings.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) -> Result<Transition, TransitionError> {
        self.expect_phase(Phase::Result)?;

        self.user_answer.clear();
        self.verdict = None;
        self.phase = Phase::Setup;

        info!("Session reset");
        Ok(Transition::new(Phase::Result, Phase::Setup, None))
    }

    /// The confirm action for the current phase.
    ///
    /// Start in Setup, submit in Answer, reset in Result. Returns `None` in
    /// Display, where confirming does nothing.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn confirm(&mut self) -> Option<Result<Transition, TransitionError>> {
        match self.phase {
            Phase::Setup => Some(self.start()),
            Phase::Display => None,
            Phase::Answer => Some(self.submit()),
            Phase::Result => Some(self.reset()),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}
