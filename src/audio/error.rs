//! Audio error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Audio failure with location tracking.
///
/// Never fatal: callers log it and carry on without sound.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<rodio::StreamError> for AudioError {
    #[track_caller]
    fn from(err: rodio::StreamError) -> Self {
        Self::new(format!("Output stream error: {}", err))
    }
}

impl From<rodio::PlayError> for AudioError {
    #[track_caller]
    fn from(err: rodio::PlayError) -> Self {
        Self::new(format!("Playback error: {}", err))
    }
}

impl From<rodio::decoder::DecoderError> for AudioError {
    #[track_caller]
    fn from(err: rodio::decoder::DecoderError) -> Self {
        Self::new(format!("Decoder error: {}", err))
    }
}
