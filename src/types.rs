use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Shared state between the auth command and the OAuth callback handler.
#[derive(Debug, Clone)]
pub struct AuthState {
    pub csrf_state: String,
    pub token: Option<Token>,
}

/// Top-level structure of an iTunes library export.
///
/// Only the keys the migrator needs are mapped; the export carries plenty of
/// other metadata that is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ItunesLibrary {
    #[serde(rename = "Playlists", default)]
    pub playlists: Vec<ItunesPlaylist>,
    #[serde(rename = "Tracks", default)]
    pub tracks: HashMap<String, ItunesTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItunesPlaylist {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Playlist Items", default)]
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "Track ID")]
    pub track_id: u64,
}

/// A raw track record as it appears in the library export. All fields are
/// optional at this stage; normalization decides what is actually required.
#[derive(Debug, Clone, Deserialize)]
pub struct ItunesTrack {
    #[serde(rename = "Artist")]
    pub artist: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Album")]
    pub album: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<i64>,
}

/// The canonical four-field track record used for matching and for the
/// unmatched-tracks output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub year: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracks {
    pub items: Vec<FoundTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundTrack {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub collaborative: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct UnmatchedTableRow {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub year: i64,
}
