//! `rodio`-based implementation of [`AudioBackend`].
//!
//! The output stream is acquired once in [`RodioBackend::open`] and released
//! when the value drops. Each load/play/seek builds a fresh `Sink` on the
//! stream's mixer; `Source::skip_duration` is the seeking primitive, so
//! repositioning accuracy varies with the container format.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::error::BackendError;

use super::AudioBackend;

pub struct RodioBackend {
    stream: OutputStream,
    sink: Option<Sink>,
    loaded: Option<PathBuf>,
    volume: f32,
    paused: bool,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open() -> Result<Self, BackendError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| BackendError::Device(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for library users.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            loaded: None,
            volume: 1.0,
            paused: false,
        })
    }

    /// Decode `path` into a new paused sink starting at `start_at`.
    fn build_sink(&self, path: &Path, start_at: Duration) -> Result<Sink, BackendError> {
        let file = File::open(path)?;

        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| BackendError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            // `skip_duration` is the seeking primitive; Duration::ZERO is fine.
            .skip_duration(start_at);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        sink.set_volume(self.volume);
        Ok(sink)
    }

    fn replace_sink(&mut self, sink: Sink) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(sink);
    }
}

impl AudioBackend for RodioBackend {
    fn load(&mut self, path: &Path) -> Result<(), BackendError> {
        let sink = self.build_sink(path, Duration::ZERO)?;
        self.replace_sink(sink);
        self.loaded = Some(path.to_path_buf());
        self.paused = false;
        Ok(())
    }

    fn play(&mut self) -> Result<(), BackendError> {
        let Some(path) = self.loaded.clone() else {
            return Err(BackendError::NoSource);
        };

        // Play always means "from the beginning"; resuming a paused sink is
        // `unpause`. Rebuilding also covers the stopped and played-to-end
        // cases, where the previous sink is gone or drained.
        let sink = self.build_sink(&path, Duration::ZERO)?;
        sink.play();
        self.replace_sink(sink);
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
            self.paused = true;
        }
    }

    fn unpause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
            self.paused = false;
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.paused = false;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(sink) = &self.sink {
            sink.set_volume(volume);
        }
    }

    fn set_position(&mut self, position: Duration) -> Result<(), BackendError> {
        let Some(path) = self.loaded.clone() else {
            return Err(BackendError::NoSource);
        };

        // Rebuild the sink skipped to the requested offset, keeping the
        // current paused/playing disposition.
        let resume = self.sink.is_some() && !self.paused;
        let sink = self.build_sink(&path, position)?;
        if resume {
            sink.play();
        }
        self.replace_sink(sink);
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.empty() && !s.is_paused())
            .unwrap_or(false)
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.stop();
    }
}
