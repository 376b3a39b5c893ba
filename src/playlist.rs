//! Playlist sequencer: ordered, de-duplicated track list with a cursor,
//! driving the player when the selection moves.

mod sequencer;

pub use sequencer::*;
