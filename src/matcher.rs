//! Two-tier catalog search and matched/unmatched partitioning.
//!
//! For every canonical track the matcher first issues a precise query carrying
//! artist, title, album and year as separate field filters. The album/year
//! filters maximize precision for well-tagged libraries; when they miss, a
//! fallback query with only artist and title trades precision for recall,
//! since album and year metadata is often inconsistent between the two
//! catalogs. First hit wins; there is no fuzzy matching and no further tier.

use crate::{
    Res,
    catalog::Catalog,
    types::Song,
};

/// Outcome of matching a batch of tracks. Both sides preserve input order;
/// every input track ends up in exactly one of the two collections.
#[derive(Debug, Clone, Default)]
pub struct MatchPartition {
    pub matched: Vec<String>,
    pub unmatched: Vec<Song>,
}

/// Builds the precise field-filter query: artist, title, album and year.
///
/// Apostrophes are stripped from the title (and only the title); Spotify's
/// search treats them as token breaks, which loses more matches than dropping
/// them does.
pub fn primary_query(song: &Song) -> String {
    format!(
        "artist:{} track:{} album:{} year:{}",
        song.artist,
        strip_apostrophes(&song.title),
        song.album,
        song.year
    )
}

/// Builds the recall-oriented fallback query: artist and title only.
pub fn fallback_query(song: &Song) -> String {
    format!(
        "artist:{} track:{}",
        song.artist,
        strip_apostrophes(&song.title)
    )
}

fn strip_apostrophes(title: &str) -> String {
    title.replace('\'', "")
}

/// Runs the two-tier search for a single track.
///
/// Returns the URI of the first result of whichever query hits first, or
/// `None` when both queries come back empty. Transport and authentication
/// errors propagate; there is no per-track retry.
pub async fn match_track<C: Catalog>(catalog: &mut C, song: &Song) -> Res<Option<String>> {
    let results = catalog.search(&primary_query(song), 1).await?;
    if let Some(track) = results.first() {
        return Ok(Some(track.uri.clone()));
    }

    let results = catalog.search(&fallback_query(song), 1).await?;
    Ok(results.first().map(|track| track.uri.clone()))
}

/// Matches a batch of tracks in input order.
///
/// The partition is total and disjoint: `matched.len() + unmatched.len()`
/// equals the input length, matched URIs keep the order of their source
/// tracks, and unmatched tracks retain their full canonical record for later
/// inspection.
pub async fn match_tracks<C: Catalog>(catalog: &mut C, songs: &[Song]) -> Res<MatchPartition> {
    let mut partition = MatchPartition::default();
    for song in songs {
        match match_track(catalog, song).await? {
            Some(uri) => partition.matched.push(uri),
            None => partition.unmatched.push(song.clone()),
        }
    }
    Ok(partition)
}
