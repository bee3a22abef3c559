//! Focus tracking for fields and the phase's button.

use recall_core::Phase;
use tracing::{debug, instrument};

/// Something that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The "Number of digits" field.
    Digits,
    /// The "Seconds to memorize" field.
    Seconds,
    /// The "Your answer" field.
    Answer,
    /// The phase's action button.
    Confirm,
}

impl FocusTarget {
    /// Tab order of focusable targets in `phase`.
    pub fn order(phase: Phase) -> &'static [FocusTarget] {
        match phase {
            Phase::Setup => &[Self::Digits, Self::Seconds, Self::Confirm],
            Phase::Display => &[],
            Phase::Answer => &[Self::Answer, Self::Confirm],
            Phase::Result => &[Self::Confirm],
        }
    }
}

/// Focus handle a parent moves programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusHandle {
    current: Option<FocusTarget>,
}

impl FocusHandle {
    /// Creates a handle focused on the first target of `phase`.
    pub fn for_phase(phase: Phase) -> Self {
        let mut handle = Self::default();
        handle.reset_for(phase);
        handle
    }

    /// Focused target, if any.
    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    /// True when `target` has focus.
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current == Some(target)
    }

    /// Moves focus to `target`.
    #[instrument(skip(self))]
    pub fn focus(&mut self, target: FocusTarget) {
        debug!("Focus moved");
        self.current = Some(target);
    }

    /// Focuses the first target of `phase`, or nothing if it has none.
    pub fn reset_for(&mut self, phase: Phase) {
        self.current = FocusTarget::order(phase).first().copied();
    }

    /// Moves to the next target in `phase`, wrapping around.
    pub fn next(&mut self, phase: Phase) {
        self.step(phase, 1);
    }

    /// Moves to the previous target in `phase`, wrapping around.
    pub fn previous(&mut self, phase: Phase) {
        let len = FocusTarget::order(phase).len();
        self.step(phase, len.saturating_sub(1));
    }

    fn step(&mut self, phase: Phase, by: usize) {
        let order = FocusTarget::order(phase);
        if order.is_empty() {
            self.current = None;
            return;
        }
        let index = self
            .current
            .and_then(|c| order.iter().position(|t| *t == c))
            .map_or(0, |i| (i + by) % order.len());
        self.current = Some(order[index]);
    }
}
