//! iTunes library parsing and track normalization.
//!
//! An iTunes library export is a property-list document containing (among
//! other things) a `Playlists` array and a `Tracks` dictionary keyed by
//! stringified track ID. This module loads that document, extracts the track
//! records for one named playlist in playlist order, and projects each raw
//! record down to the canonical [`Song`] form used by the matcher.

use std::path::Path;

use crate::{
    Res,
    types::{ItunesLibrary, ItunesTrack, Song},
};

/// Loads and parses a library export from disk.
///
/// The file handle is released as soon as the document has been read into
/// memory. A missing or malformed file propagates as an error.
pub fn load_library(path: impl AsRef<Path>) -> Res<ItunesLibrary> {
    let library: ItunesLibrary = plist::from_file(path.as_ref())
        .map_err(|e| format!("failed to read library {}: {}", path.as_ref().display(), e))?;
    Ok(library)
}

/// Parses a library export from an in-memory buffer.
pub fn parse_library(bytes: &[u8]) -> Res<ItunesLibrary> {
    let library: ItunesLibrary =
        plist::from_bytes(bytes).map_err(|e| format!("failed to parse library: {}", e))?;
    Ok(library)
}

/// Resolves the track records of the first playlist with the given name.
///
/// Playlists are scanned in document order and the name comparison is exact;
/// scanning stops at the first match, so duplicate playlist names are not
/// detected. Returns `None` when no playlist carries the name, which callers
/// can distinguish from a present-but-empty playlist (`Some` with an empty
/// vector).
///
/// # Errors
///
/// A playlist item referencing a track ID that is absent from the track table
/// is a data error and fails the lookup.
pub fn playlist_tracks<'a>(
    library: &'a ItunesLibrary,
    name: &str,
) -> Res<Option<Vec<&'a ItunesTrack>>> {
    for playlist in &library.playlists {
        if playlist.name == name {
            let mut tracks = Vec::with_capacity(playlist.items.len());
            for item in &playlist.items {
                let track = library
                    .tracks
                    .get(&item.track_id.to_string())
                    .ok_or_else(|| {
                        format!(
                            "playlist '{}' references unknown track ID {}",
                            name, item.track_id
                        )
                    })?;
                tracks.push(track);
            }
            return Ok(Some(tracks));
        }
    }
    Ok(None)
}

/// Projects a raw track record onto the canonical four-field form.
///
/// This is a direct field projection with no transformation; a record missing
/// any of the four fields fails with an error naming the field.
pub fn normalize(track: &ItunesTrack) -> Res<Song> {
    Ok(Song {
        artist: field(&track.artist, "Artist")?,
        title: field(&track.name, "Name")?,
        album: field(&track.album, "Album")?,
        year: track.year.ok_or("track record is missing field 'Year'")?,
    })
}

fn field(value: &Option<String>, key: &str) -> Res<String> {
    value
        .clone()
        .ok_or_else(|| format!("track record is missing field '{}'", key).into())
}

/// Reads the named playlist from a library export and normalizes its tracks.
///
/// This is the orchestrator-facing entry point. An absent playlist is
/// surfaced as a descriptive error rather than an empty migration; the
/// underlying [`playlist_tracks`] keeps the silent interpretation available.
pub fn read_playlist(path: impl AsRef<Path>, name: &str) -> Res<Vec<Song>> {
    let library = load_library(path)?;
    let tracks = playlist_tracks(&library, name)?
        .ok_or_else(|| format!("playlist '{}' not found in library", name))?;
    tracks.iter().map(|t| normalize(t)).collect()
}
