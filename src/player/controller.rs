use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info, warn};

use crate::backend::AudioBackend;
use crate::config::PlaybackSettings;
use crate::error::{Error, Result};

/// The three playback states.
///
/// `Stopped` covers both "nothing loaded" and "loaded but not started";
/// whether a file is loaded is [`Player::current_file`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::Stopped
    }
}

/// What a play/pause request actually did.
///
/// `NoFileLoaded` and `NotPlaying` are benign no-ops, reported so a UI can
/// surface them; they are deliberately not errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlOutcome {
    /// Playback started from the beginning of the loaded file.
    Started,
    /// Playback resumed from the paused position.
    Resumed,
    /// Playback was suspended.
    Paused,
    /// Play was requested with no file loaded.
    NoFileLoaded,
    /// Pause was requested while nothing was playing.
    NotPlaying,
}

impl ControlOutcome {
    /// True when the request changed nothing.
    pub fn is_noop(self) -> bool {
        matches!(self, Self::NoFileLoaded | Self::NotPlaying)
    }
}

/// The playback controller.
///
/// Owns the backend and the playback state: the currently loaded file, the
/// [`PlaybackState`], the volume as a factor in `[0.0, 1.0]` and the
/// advisory position (the last offset requested via [`Player::seek`], not a
/// live read of the backend's playhead).
pub struct Player<B> {
    backend: B,
    state: PlaybackState,
    current: Option<PathBuf>,
    volume: f32,
    position: Duration,
}

impl<B: AudioBackend> Player<B> {
    /// Wrap `backend` and apply the configured initial volume to it.
    pub fn new(mut backend: B, settings: &PlaybackSettings) -> Self {
        let volume = f32::from(settings.initial_volume.min(100)) / 100.0;
        backend.set_volume(volume);

        Self {
            backend,
            state: PlaybackState::default(),
            current: None,
            volume,
            position: Duration::ZERO,
        }
    }

    /// Load `path` as the current file.
    ///
    /// Fails with [`Error::FileNotFound`] before touching any state when the
    /// path does not exist. Otherwise playback is stopped first (the backend
    /// has a single output stream), the file is handed to the backend, the
    /// configured volume is reapplied and the state lands on `Stopped`.
    ///
    /// If the backend rejects the file the previously recorded file stays
    /// recorded; only the stop has happened.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            warn!("load rejected, file not found: {}", path.display());
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        self.stop();
        self.backend.load(path)?;
        self.backend.set_volume(self.volume);
        self.current = Some(path.to_path_buf());
        info!("loaded {}", path.display());
        Ok(())
    }

    /// Start or resume playback of the loaded file.
    ///
    /// From `Paused` this resumes at the paused position; from any other
    /// state it starts at the beginning. With nothing loaded it reports
    /// [`ControlOutcome::NoFileLoaded`] and changes nothing.
    pub fn play(&mut self) -> Result<ControlOutcome> {
        if self.current.is_none() {
            info!("play requested with no file loaded");
            return Ok(ControlOutcome::NoFileLoaded);
        }

        let outcome = if self.state == PlaybackState::Paused {
            self.backend.unpause();
            ControlOutcome::Resumed
        } else {
            self.backend.play()?;
            self.position = Duration::ZERO;
            ControlOutcome::Started
        };

        self.state = PlaybackState::Playing;
        if let Some(path) = &self.current {
            info!("playing {}", path.display());
        }
        Ok(outcome)
    }

    /// Suspend playback, keeping the position for a later resume.
    ///
    /// Only effective while `Playing`; otherwise reports
    /// [`ControlOutcome::NotPlaying`] without touching the backend.
    pub fn pause(&mut self) -> ControlOutcome {
        if self.state != PlaybackState::Playing {
            info!("pause requested but nothing is playing");
            return ControlOutcome::NotPlaying;
        }

        self.backend.pause();
        self.state = PlaybackState::Paused;
        info!("paused");
        ControlOutcome::Paused
    }

    /// Halt playback unconditionally: state back to `Stopped`, advisory
    /// position back to zero. The loaded file stays loaded.
    pub fn stop(&mut self) {
        self.backend.stop();
        self.state = PlaybackState::Stopped;
        self.position = Duration::ZERO;
        debug!("stopped");
    }

    /// Set the volume as a percentage. Values above 100 are clamped.
    ///
    /// Applied to the backend immediately, regardless of playback state.
    pub fn set_volume(&mut self, percent: u8) {
        let percent = if percent > 100 {
            warn!("volume {percent} out of range, clamping to 100");
            100
        } else {
            percent
        };

        self.volume = f32::from(percent) / 100.0;
        self.backend.set_volume(self.volume);
        debug!("volume set to {percent}%");
    }

    /// Request a jump to an absolute offset in the current file.
    ///
    /// The advisory position is recorded only when the backend accepts the
    /// request; a rejection is reported and the position stays put.
    pub fn seek(&mut self, position: Duration) -> Result<()> {
        match self.backend.set_position(position) {
            Ok(()) => {
                self.position = position;
                debug!("seeked to {}s", position.as_secs());
                Ok(())
            }
            Err(e) => {
                warn!("seek to {}s rejected: {e}", position.as_secs());
                Err(e.into())
            }
        }
    }

    /// Live busy indicator, straight from the backend.
    pub fn is_busy(&self) -> bool {
        self.backend.is_busy()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The currently loaded file, if any.
    pub fn current_file(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Current volume as a factor in `[0.0, 1.0]`.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// The last position requested via [`Player::seek`]. Advisory only —
    /// it is not updated as the backend plays.
    pub fn position(&self) -> Duration {
        self.position
    }
}
