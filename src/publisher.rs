//! Playlist creation and batched track adds.
//!
//! The add-tracks endpoint accepts at most [`ADD_TRACKS_LIMIT`] URIs per call,
//! so population splits the matched sequence into consecutive chunks and
//! issues one call per chunk, in order. Chunks are added sequentially: the
//! playlist order must match the source playlist and the service documents no
//! concurrent-write guarantee. A failing chunk propagates and leaves the
//! playlist partially populated; each successful chunk is logged first so the
//! run leaves a record of how far it got.

use crate::{
    Res, info,
    catalog::Catalog,
    types::Playlist,
};

/// Maximum number of track URIs per add-tracks call.
pub const ADD_TRACKS_LIMIT: usize = 99;

/// Creates a public playlist with the given name and description, returning
/// the service's playlist handle unmodified.
pub async fn create<C: Catalog>(catalog: &mut C, name: &str, description: &str) -> Res<Playlist> {
    catalog.create_playlist(name, description).await
}

/// Appends the matched URIs to the playlist in batches of at most
/// [`ADD_TRACKS_LIMIT`], preserving order. An empty sequence issues no calls.
pub async fn populate<C: Catalog>(
    catalog: &mut C,
    playlist: &Playlist,
    uris: &[String],
) -> Res<()> {
    let total = uris.chunks(ADD_TRACKS_LIMIT).len();
    for (n, chunk) in uris.chunks(ADD_TRACKS_LIMIT).enumerate() {
        catalog.add_tracks(&playlist.id, chunk).await?;
        info!(
            "Added batch {}/{} ({} tracks) to playlist '{}'",
            n + 1,
            total,
            chunk.len(),
            playlist.name
        );
    }
    Ok(())
}
