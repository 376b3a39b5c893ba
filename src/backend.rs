//! Audio output backends.
//!
//! [`AudioBackend`] is the narrow contract the player depends on: load a
//! file, start/pause/resume/stop, adjust gain, reposition, report busy.
//! The production implementation is [`RodioBackend`]; tests inject a
//! recording fake instead.

mod rodio;

pub use rodio::RodioBackend;

#[cfg(test)]
pub(crate) mod fake;

use std::path::Path;
use std::time::Duration;

use crate::error::BackendError;

/// The audio output contract.
///
/// Exactly one source is loaded at a time; loading a new file replaces the
/// previous one. Gain is a factor in `[0.0, 1.0]` and survives across loads
/// only if the caller reapplies it — implementations are not required to
/// remember it for future sources.
pub trait AudioBackend {
    /// Load `path` as the current source, replacing any previous one.
    /// Playback does not start until [`AudioBackend::play`].
    fn load(&mut self, path: &Path) -> Result<(), BackendError>;

    /// Start playing the current source from the beginning.
    fn play(&mut self) -> Result<(), BackendError>;

    /// Suspend playback, keeping the current position.
    fn pause(&mut self);

    /// Resume playback from the paused position.
    fn unpause(&mut self);

    /// Halt playback. The loaded source stays loaded and can be replayed.
    fn stop(&mut self);

    /// Apply an output gain in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32);

    /// Jump to an absolute offset in the current source.
    ///
    /// Accuracy is format-dependent; callers treat a failure as "the
    /// position was not applied", nothing worse.
    fn set_position(&mut self, position: Duration) -> Result<(), BackendError>;

    /// Whether audio is actively being produced right now.
    fn is_busy(&self) -> bool;
}
