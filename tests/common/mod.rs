#![allow(dead_code)]

use std::collections::HashMap;

use tunelift::Res;
use tunelift::catalog::Catalog;
use tunelift::types::{FoundTrack, Playlist, Song};

/// Deterministic in-memory catalog double.
///
/// Search answers come from a fixed query → URI table; every call against the
/// double is recorded so tests can assert on call counts, order, and batch
/// sizes.
pub struct FakeCatalog {
    hits: HashMap<String, String>,
    pub searches: Vec<String>,
    pub created: Vec<(String, String)>,
    pub added: Vec<(String, Vec<String>)>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        FakeCatalog {
            hits: HashMap::new(),
            searches: Vec::new(),
            created: Vec::new(),
            added: Vec::new(),
        }
    }

    /// Registers a query that returns a single result with the given URI.
    pub fn with_hit(mut self, query: &str, uri: &str) -> Self {
        self.hits.insert(query.to_string(), uri.to_string());
        self
    }
}

impl Catalog for FakeCatalog {
    async fn search(&mut self, query: &str, _limit: u32) -> Res<Vec<FoundTrack>> {
        self.searches.push(query.to_string());
        Ok(self
            .hits
            .get(query)
            .map(|uri| {
                vec![FoundTrack {
                    id: "track-id".to_string(),
                    name: "track".to_string(),
                    uri: uri.clone(),
                }]
            })
            .unwrap_or_default())
    }

    async fn create_playlist(&mut self, name: &str, description: &str) -> Res<Playlist> {
        self.created.push((name.to_string(), description.to_string()));
        Ok(Playlist {
            id: format!("playlist-{}", self.created.len()),
            name: name.to_string(),
            description: Some(description.to_string()),
            public: Some(true),
            collaborative: Some(false),
        })
    }

    async fn add_tracks(&mut self, playlist_id: &str, uris: &[String]) -> Res<()> {
        self.added.push((playlist_id.to_string(), uris.to_vec()));
        Ok(())
    }
}

pub fn song(artist: &str, title: &str, album: &str, year: i64) -> Song {
    Song {
        artist: artist.to_string(),
        title: title.to_string(),
        album: album.to_string(),
        year,
    }
}
