//! Cue playback through the default output device.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use recall_core::Cue;
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use super::{AudioBackend, AudioError};

/// Extensions tried, in order, when looking up a cue asset.
const ASSET_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac"];

struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// Rodio-backed cue player.
///
/// Cue files are read once at construction. The output stream is only
/// opened by [`AudioBackend::open`]. Cues without a usable file fall back
/// to a short synthesized tone.
pub struct RodioBackend {
    assets: HashMap<Cue, Arc<[u8]>>,
    volume: f32,
    output: Option<Output>,
}

impl std::fmt::Debug for RodioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioBackend")
            .field("assets", &self.assets.keys().collect::<Vec<_>>())
            .field("volume", &self.volume)
            .field("open", &self.output.is_some())
            .finish()
    }
}

impl RodioBackend {
    /// Reads `start`, `correct`, and `incorrect` assets from `sounds_dir`.
    ///
    /// Missing or unreadable files are skipped; those cues use a tone.
    #[instrument(skip(sounds_dir), fields(sounds_dir = %sounds_dir.as_ref().display()))]
    pub fn load(sounds_dir: impl AsRef<Path>, volume: f32) -> Self {
        let mut assets = HashMap::new();
        for cue in Cue::iter() {
            match read_asset(sounds_dir.as_ref(), cue) {
                Some(bytes) => {
                    debug!(%cue, bytes = bytes.len(), "Loaded cue asset");
                    assets.insert(cue, bytes);
                }
                None => debug!(%cue, "No cue asset found, using tone"),
            }
        }
        info!(loaded = assets.len(), "Cue assets loaded");
        Self {
            assets,
            volume: volume.clamp(0.0, 1.0),
            output: None,
        }
    }

    /// True when a file was loaded for `cue`.
    pub fn has_asset(&self, cue: Cue) -> bool {
        self.assets.contains_key(&cue)
    }

    /// True once the output stream is open.
    pub fn is_open(&self) -> bool {
        self.output.is_some()
    }
}

fn read_asset(dir: &Path, cue: Cue) -> Option<Arc<[u8]>> {
    ASSET_EXTENSIONS.iter().find_map(|ext| {
        let path = dir.join(format!("{}.{}", cue.asset_name(), ext));
        match std::fs::read(&path) {
            Ok(bytes) => Some(Arc::from(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read cue asset");
                None
            }
        }
    })
}

/// Fallback tone: frequency in Hz and length in milliseconds.
fn tone_for(cue: Cue) -> (f32, u64) {
    match cue {
        Cue::Start => (660.0, 150),
        Cue::Correct => (880.0, 250),
        Cue::Incorrect => (196.0, 400),
    }
}

impl AudioBackend for RodioBackend {
    #[instrument(skip(self))]
    fn open(&mut self) -> Result<(), AudioError> {
        if self.output.is_some() {
            return Ok(());
        }
        let (stream, handle) = OutputStream::try_default()?;
        info!("Opened default audio output");
        self.output = Some(Output {
            _stream: stream,
            handle,
        });
        Ok(())
    }

    #[instrument(skip(self))]
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        let output = self
            .output
            .as_ref()
            .ok_or_else(|| AudioError::new("Audio output is not open"))?;

        let sink = Sink::try_new(&output.handle)?;
        sink.set_volume(self.volume);

        let decoded = self
            .assets
            .get(&cue)
            .map(|bytes| Decoder::new(Cursor::new(Arc::clone(bytes))));

        match decoded {
            Some(Ok(source)) => sink.append(source),
            other => {
                if let Some(Err(e)) = other {
                    warn!(%cue, error = %AudioError::from(e), "Cue asset undecodable, using tone");
                }
                let (frequency, millis) = tone_for(cue);
                sink.append(
                    SineWave::new(frequency)
                        .take_duration(Duration::from_millis(millis))
                        .amplify(0.25),
                );
            }
        }
        sink.detach();
        debug!(%cue, "Cue queued");
        Ok(())
    }
}
