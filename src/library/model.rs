use std::path::PathBuf;
use std::time::Duration;

/// One playable item. Identity is the path; the rest is display metadata
/// read from tags at insertion/scan time, with filename fallbacks.
#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}
