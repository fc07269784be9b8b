//! The catalog capability consumed by the matcher and the publisher.
//!
//! Both components only ever need three operations from the destination
//! service: a track search, playlist creation, and a batched track add. They
//! are expressed as a trait so the production Spotify client and a
//! deterministic in-memory double used in tests are interchangeable.

use crate::{
    Res,
    types::{FoundTrack, Playlist},
};

/// The three destination-service operations the migration pipeline relies on.
///
/// Methods take `&mut self` because the production implementation refreshes
/// its access token in place when it expires.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Searches the catalog for tracks matching a structured query, returning
    /// at most `limit` ranked results.
    async fn search(&mut self, query: &str, limit: u32) -> Res<Vec<FoundTrack>>;

    /// Creates a public playlist owned by the configured account and returns
    /// the service's handle unmodified.
    async fn create_playlist(&mut self, name: &str, description: &str) -> Res<Playlist>;

    /// Appends tracks to a playlist in the given order. Callers are
    /// responsible for honoring the service's per-call item limit.
    async fn add_tracks(&mut self, playlist_id: &str, uris: &[String]) -> Res<()>;
}
