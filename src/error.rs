//! Error types shared across the crate.
//!
//! Every failure here is recoverable at the call site: operations abandon
//! their work, leave prior state in place and report the reason. Nothing in
//! this crate is allowed to take the process down.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A load was requested for a path that does not exist on disk.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// A playlist position outside the current bounds was requested.
    /// This indicates a programming error at the call site; the playlist
    /// rejects the call without moving its cursor.
    #[error("playlist index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The audio backend rejected an operation.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failures surfaced by an [`crate::AudioBackend`] implementation.
#[derive(Error, Debug)]
pub enum BackendError {
    /// No usable audio output device, or the output stream could not be
    /// opened.
    #[error("audio output unavailable: {0}")]
    Device(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The file opened fine but could not be decoded (unsupported format
    /// or corrupt data).
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    /// An operation that needs a loaded source was called without one.
    #[error("no source loaded")]
    NoSource,
}
