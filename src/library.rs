//! Track model and the helpers that turn files on disk into tracks:
//! metadata reading, directory scanning and display-label assembly.

mod display;
mod model;
mod scan;

pub use display::display_from_fields;
pub use model::Track;
pub use scan::{read_track, scan};
