//! Pure game logic for digit recall.
//!
//! A session walks through four phases: the player configures a round,
//! memorizes a random number while a countdown runs, types it back, and
//! sees whether the answer matched.
//!
//! # Architecture
//!
//! - **Session**: the authoritative state and its transition functions
//! - **Countdown**: a one-second deadline tracker polled by the shell
//! - **Digits**: random digit string generation
//! - **Cue**: the audio cues a transition asks the shell to play
//!
//! Nothing in this crate touches a terminal, a clock source, or an audio
//! device. Transitions describe their side effects and the caller performs
//! them.
//!
//! # Example
//!
//! ```
//! use recall_core::{GameSession, GameSettings, Phase};
//!
//! let mut session = GameSession::new(GameSettings::new("4", "2"));
//! session.start().expect("valid settings");
//! assert_eq!(session.phase(), Phase::Display);
//! assert_eq!(session.target_number().len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod countdown;
mod cue;
mod digits;
mod error;
mod phase;
mod session;
mod settings;

pub use countdown::CountdownTimer;
pub use cue::Cue;
pub use digits::generate;
pub use error::TransitionError;
pub use phase::{Phase, Verdict};
pub use session::{GameSession, Transition};
pub use settings::{GameSettings, Limits};
