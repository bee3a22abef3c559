//! Digit Recall - a terminal memory game
//!
//! The player sees a random number for a few seconds, then types it back
//! from memory and hears whether they got it right.
//!
//! # Architecture
//!
//! - **Game logic**: [`recall_core`] owns phases, countdown, and judging
//! - **Audio**: [`AudioCueBroker`] gates cue playback behind a user gesture
//! - **TUI**: [`GameController`] runs the event loop over ratatui widgets
//! - **Config**: [`RecallConfig`] loads TOML settings, [`Cli`] overrides them
//!
//! # Example
//!
//! ```no_run
//! use digit_recall::{RecallConfig, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RecallConfig::load("digit_recall.toml")?;
//! run_tui(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod cli;
mod config;
mod tui;

// Crate-level exports - Audio
pub use audio::{AudioBackend, AudioCueBroker, AudioError, AudioGate, RodioBackend, SilentBackend};

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{ConfigError, RecallConfig};

// Crate-level exports - TUI
pub use tui::{
    ActionButton, ButtonVariant, FieldKind, FocusHandle, FocusTarget, GameController, HitMap,
    InputField, Intent, KeyboardDispatcher, draw, run_tui,
};

// Crate-level exports - Game logic
pub use recall_core::{
    CountdownTimer, Cue, GameSession, GameSettings, Limits, Phase, Transition, TransitionError,
    Verdict,
};
