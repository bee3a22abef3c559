//! Game phases and the verdict of a finished round.

use strum::{Display, EnumIter};
use tracing::instrument;

/// Phase of a game session.
///
/// Phases only advance along `Setup -> Display -> Answer -> Result -> Setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Phase {
    /// Player is choosing digit count and duration.
    #[default]
    Setup,
    /// Target number is on screen while the countdown runs.
    Display,
    /// Target is hidden and the player types it back.
    Answer,
    /// Verdict is shown until the player starts over.
    Result,
}

impl Phase {
    /// Label of the confirm action in this phase, if the phase has one.
    pub fn confirm_label(self) -> Option<&'static str> {
        match self {
            Self::Setup => Some("Start"),
            Self::Display => None,
            Self::Answer => Some("Submit"),
            Self::Result => Some("Play Again"),
        }
    }
}

/// Outcome of comparing the typed answer with the target number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The answer matched the target exactly.
    Correct,
    /// The answer differed from the target in any way.
    Incorrect,
}

impl Verdict {
    /// Compares `answer` to `target` by exact string equality.
    ///
    /// No trimming and no numeric comparison: `"007"` does not match `"7"`.
    #[instrument]
    pub fn judge(answer: &str, target: &str) -> Self {
        if answer == target {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Headline shown on the result screen.
    pub fn label(self) -> &'static str {
        match self {
            Self::Correct => "Correct!",
            Self::Incorrect => "Incorrect!",
        }
    }

    /// Returns true for [`Verdict::Correct`].
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
