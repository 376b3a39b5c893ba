use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::backend::AudioBackend;
use crate::config::LibrarySettings;
use crate::error::{Error, Result};
use crate::library::{self, Track};
use crate::player::Player;

/// Label reported while no track is selected.
const NO_FILE_LABEL: &str = "No file";

/// An ordered sequence of tracks plus a cursor.
///
/// Entries are identified by path: inserting a path that is already present
/// is a no-op, and first-insertion order is preserved. The list only grows;
/// there is no removal or reordering. The cursor is `None` until something
/// is selected and always references an existing entry afterwards.
#[derive(Default)]
pub struct Playlist {
    entries: Vec<Track>,
    cursor: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless it is already present.
    ///
    /// Returns whether a new entry was appended. Metadata for the entry's
    /// label is read here, once, at insertion time.
    pub fn add(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            debug!("playlist already contains {}", path.display());
            return false;
        }

        let track = library::read_track(&path);
        info!("playlist add: {}", track.display);
        self.entries.push(track);
        true
    }

    /// Scan `dir` for audio files and append the ones not already present.
    /// Returns how many entries were added.
    pub fn add_dir(&mut self, dir: &Path, settings: &LibrarySettings) -> usize {
        let mut added = 0;
        for track in library::scan(dir, settings) {
            if self.contains(&track.path) {
                continue;
            }
            self.entries.push(track);
            added += 1;
        }
        info!("playlist add_dir: {added} new entries from {}", dir.display());
        added
    }

    /// Move the cursor to `index` and start playing that entry.
    ///
    /// An out-of-bounds index is rejected without moving the cursor. The
    /// cursor moves before the load, so a failed load leaves it on the
    /// selected entry with playback stopped.
    pub fn select_and_play<B: AudioBackend>(
        &mut self,
        index: usize,
        player: &mut Player<B>,
    ) -> Result<()> {
        if index >= self.entries.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        self.play_index(index, player)
    }

    /// Advance to the next entry and play it.
    ///
    /// A no-op (`Ok(false)`) at the last entry or on an empty list. With an
    /// unset cursor on a non-empty list this starts at the first entry.
    pub fn next<B: AudioBackend>(&mut self, player: &mut Player<B>) -> Result<bool> {
        if self.entries.is_empty() {
            return Ok(false);
        }

        let target = match self.cursor {
            None => 0,
            Some(i) if i + 1 >= self.entries.len() => return Ok(false),
            Some(i) => i + 1,
        };

        self.play_index(target, player)?;
        Ok(true)
    }

    /// Step back to the previous entry and play it.
    ///
    /// A no-op (`Ok(false)`) at the first entry, on an empty list, or while
    /// the cursor is unset.
    pub fn previous<B: AudioBackend>(&mut self, player: &mut Player<B>) -> Result<bool> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.play_index(i - 1, player)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Human-readable label of the selected entry, or a placeholder while
    /// nothing is selected.
    pub fn current_label(&self) -> &str {
        self.cursor
            .and_then(|i| self.entries.get(i))
            .map(|t| t.display.as_str())
            .unwrap_or(NO_FILE_LABEL)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.entries.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.entries
    }

    fn contains(&self, path: &Path) -> bool {
        // O(n) membership check; playlists stay small enough for this.
        self.entries.iter().any(|t| t.path == path)
    }

    fn play_index<B: AudioBackend>(&mut self, index: usize, player: &mut Player<B>) -> Result<()> {
        self.cursor = Some(index);
        let path = self.entries[index].path.clone();
        player.load(&path)?;
        player.play()?;
        Ok(())
    }
}
