//! Playback controller: translates caller intent into backend calls while
//! keeping a consistent local view of playback state.

mod controller;

pub use controller::*;
