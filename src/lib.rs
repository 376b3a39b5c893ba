//! Playback core for a desktop media player.
//!
//! Two pieces collaborate: a [`Player`] that turns caller intent
//! (load/play/pause/stop/seek/volume) into calls against an audio backend
//! while keeping a consistent local view of playback state, and a
//! [`Playlist`] that keeps an ordered, de-duplicated list of tracks with a
//! cursor and drives the player when the selection moves.
//!
//! The backend is injected through the [`AudioBackend`] trait so the player
//! can be exercised against a fake in tests; [`RodioBackend`] is the
//! production implementation over the `rodio` mixer. Everything runs
//! synchronously on the caller's thread — typically a UI event loop — so
//! there is no locking and no background work to coordinate.
//!
//! ```no_run
//! use cadenza::{Playlist, Player, RodioBackend, Settings};
//!
//! let settings = Settings::load().unwrap_or_default();
//! let backend = RodioBackend::open()?;
//! let mut player = Player::new(backend, &settings.playback);
//! let mut playlist = Playlist::new();
//!
//! playlist.add("a.mp3");
//! playlist.add("b.mp3");
//! playlist.select_and_play(0, &mut player)?;
//! playlist.next(&mut player)?;
//! # Ok::<(), cadenza::Error>(())
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod library;
pub mod player;
pub mod playlist;

pub use backend::{AudioBackend, RodioBackend};
pub use config::{LibrarySettings, PlaybackSettings, Settings};
pub use error::{BackendError, Error, Result};
pub use library::Track;
pub use player::{ControlOutcome, PlaybackState, Player};
pub use playlist::Playlist;
