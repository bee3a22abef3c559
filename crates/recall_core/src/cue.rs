//! Audio cues requested by phase transitions.

use strum::{Display, EnumIter};

/// A short sound tied to a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Cue {
    /// Played when a round starts.
    Start,
    /// Played when the answer matched.
    Correct,
    /// Played when the answer did not match.
    Incorrect,
}

impl Cue {
    /// File stem of the asset backing this cue (`start`, `correct`, `incorrect`).
    pub fn asset_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}
