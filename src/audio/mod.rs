//! Audio cues gated behind a user gesture.
//!
//! The output device stays closed until the first genuine user gesture
//! calls [`AudioCueBroker::unlock`]. Until then every cue is dropped.
//! Failures never reach the game: they are logged and the game runs silent.

mod error;
mod rodio_backend;

pub use error::AudioError;
pub use rodio_backend::RodioBackend;

use recall_core::Cue;
use tracing::{debug, info, instrument, warn};

/// Something that can open an output and play cues on it.
pub trait AudioBackend {
    /// Opens the output. Called at most once per successful unlock.
    fn open(&mut self) -> Result<(), AudioError>;

    /// Plays a cue on the opened output.
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Backend that accepts everything and makes no sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn open(&mut self) -> Result<(), AudioError> {
        Ok(())
    }

    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Whether the output has been unlocked by a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioGate {
    /// No gesture has opened the output yet; cues are dropped.
    #[default]
    Locked,
    /// Output is open; cues play.
    Unlocked,
}

/// Plays start, correct, and incorrect cues once audio is unlocked.
#[derive(Debug)]
pub struct AudioCueBroker<B> {
    backend: B,
    gate: AudioGate,
}

impl<B: AudioBackend> AudioCueBroker<B> {
    /// Creates a locked broker over `backend`.
    #[instrument(skip(backend))]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            gate: AudioGate::Locked,
        }
    }

    /// Opens the output if it is not open yet.
    ///
    /// Idempotent once it succeeds. A failed attempt leaves the gate locked
    /// so the next gesture can try again.
    #[instrument(skip(self), fields(gate = ?self.gate))]
    pub fn unlock(&mut self) {
        if self.gate == AudioGate::Unlocked {
            return;
        }
        match self.backend.open() {
            Ok(()) => {
                info!("Audio unlocked");
                self.gate = AudioGate::Unlocked;
            }
            Err(e) => warn!(error = %e, "Audio unlock failed, cues stay muted"),
        }
    }

    /// Plays `cue` if unlocked, otherwise drops it.
    #[instrument(skip(self))]
    pub fn play(&mut self, cue: Cue) {
        if self.gate == AudioGate::Locked {
            debug!("Audio locked, dropping cue");
            return;
        }
        if let Err(e) = self.backend.play(cue) {
            warn!(error = %e, "Cue playback failed");
        }
    }

    /// True once a gesture has unlocked the output.
    pub fn is_ready(&self) -> bool {
        self.gate == AudioGate::Unlocked
    }

    /// Current gate state.
    pub fn gate(&self) -> AudioGate {
        self.gate
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
