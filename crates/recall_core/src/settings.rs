//! Free-text round settings and how they are interpreted.
//!
//! Settings are stored exactly as typed so the input fields can show any
//! intermediate text, including an empty field. They are only interpreted
//! when a round starts.

use tracing::{debug, instrument};

use super::TransitionError;

/// Default digit count shown in a fresh session.
pub const DEFAULT_DIGITS: &str = "5";
/// Default memorization time shown in a fresh session.
pub const DEFAULT_SECONDS: &str = "3";

/// Upper bounds applied by the start guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted digit count.
    pub max_digits: usize,
    /// Largest accepted memorization time, in seconds.
    pub max_seconds: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_digits: 100,
            max_seconds: 3600,
        }
    }
}

/// Digit count and duration as raw text.
///
/// Parsing is strict: surrounding whitespace is trimmed, but any other
/// non-digit text (`"4abc"`, `"3.5"`) reads as zero and fails the start guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    digits: String,
    seconds: String,
    limits: Limits,
}

impl GameSettings {
    /// Creates settings from raw text with default limits.
    #[instrument(skip(digits, seconds))]
    pub fn new(digits: impl Into<String>, seconds: impl Into<String>) -> Self {
        Self {
            digits: digits.into(),
            seconds: seconds.into(),
            limits: Limits::default(),
        }
    }

    /// Replaces the limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Raw digit count text.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Raw duration text.
    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    /// Limits enforced when a round starts.
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Mutable access to the digit count text.
    pub fn digits_mut(&mut self) -> &mut String {
        &mut self.digits
    }

    /// Mutable access to the duration text.
    pub fn seconds_mut(&mut self) -> &mut String {
        &mut self.seconds
    }

    /// Digit count, with anything unparsable read as zero.
    pub fn digit_count(&self) -> usize {
        parse_or_zero(&self.digits)
    }

    /// Duration in seconds, with anything unparsable read as zero.
    pub fn duration_seconds(&self) -> u32 {
        parse_or_zero(&self.seconds)
    }

    /// Checks both settings against the start guard.
    ///
    /// Returns the digit count and duration when both are positive and
    /// within [`Limits`].
    #[instrument(skip(self), fields(digits = %self.digits, seconds = %self.seconds))]
    pub fn validate(&self) -> Result<(usize, u32), TransitionError> {
        let digits = self.digit_count();
        if digits == 0 || digits > self.limits.max_digits {
            debug!(digits, "Digit count rejected");
            return Err(TransitionError::InvalidDigitCount(
                self.digits.clone(),
                self.limits.max_digits,
            ));
        }

        let seconds = self.duration_seconds();
        if seconds == 0 || seconds > self.limits.max_seconds {
            debug!(seconds, "Duration rejected");
            return Err(TransitionError::InvalidDuration(
                self.seconds.clone(),
                self.limits.max_seconds,
            ));
        }

        Ok((digits, seconds))
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS, DEFAULT_SECONDS)
    }
}

fn parse_or_zero<T: std::str::FromStr + Default>(text: &str) -> T {
    text.trim().parse().unwrap_or_default()
}
