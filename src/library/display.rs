use std::path::Path;

use crate::config::TrackDisplayField;

fn clean(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Build a display string for a track according to `fields` and `sep`.
///
/// Composes the requested metadata fields in order, skipping the ones that
/// are empty or missing, and falls back to `title` when nothing was
/// produced at all.
pub fn display_from_fields(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in fields {
        match field {
            // "display" as a field means the default "artist - title" shape.
            TrackDisplayField::Display => {
                parts.extend(artist.and_then(clean));
                parts.extend(clean(title));
            }
            TrackDisplayField::Title => parts.extend(clean(title)),
            TrackDisplayField::Artist => parts.extend(artist.and_then(clean)),
            TrackDisplayField::Album => parts.extend(album.and_then(clean)),
            TrackDisplayField::Filename => {
                parts.extend(path.file_stem().and_then(|s| s.to_str()).and_then(clean));
            }
            TrackDisplayField::Path => parts.push(path.display().to_string()),
        }
    }

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(sep)
    }
}
