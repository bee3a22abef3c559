//! Errors raised by rejected transitions.

use super::Phase;

/// Why a transition was refused.
///
/// A refused transition leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TransitionError {
    /// The operation is not valid from the current phase.
    #[display("Cannot do that during {actual}; expected {expected}")]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the session was actually in.
        actual: Phase,
    },

    /// Digit count was not a positive whole number within limits.
    ///
    /// Carries the raw text and the configured maximum.
    #[display("Digits must be a whole number from 1 to {_1}")]
    InvalidDigitCount(String, usize),

    /// Duration was not a positive whole number within limits.
    #[display("Seconds must be a whole number from 1 to {_1}")]
    InvalidDuration(String, u32),
}

impl std::error::Error for TransitionError {}
