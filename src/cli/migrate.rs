use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    Res,
    config::Config,
    error, info, library, matcher, publisher,
    spotify::client::SpotifyClient,
    success,
    types::{Song, UnmatchedTableRow},
    warning,
};

/// Output file for tracks that matched neither query, written once at the end
/// of the run and overwritten if present.
pub const UNMATCHED_FILE: &str = "empty_songs.json";

/// Runs the migration pipeline end to end.
///
/// Sequential, no branching beyond what the components themselves do:
/// read config → extract and normalize iTunes tracks → load the cached token
/// → match → create playlist → populate → report and persist unmatched
/// tracks. Every stage failure terminates the process immediately.
pub async fn migrate() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Incomplete configuration: {}", e),
    };

    let songs = match library::read_playlist(&config.xml_path, &config.playlist_name) {
        Ok(songs) => songs,
        Err(e) => error!("{}", e),
    };
    info!(
        "Found {} tracks in playlist '{}'",
        songs.len(),
        config.playlist_name
    );

    let mut client = match SpotifyClient::load(&config).await {
        Ok(client) => client,
        Err(e) => {
            error!(
                "Failed to load token. Please run tunelift auth\n Error: {}",
                e
            );
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Searching Spotify for {} tracks...", songs.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let partition = match matcher::match_tracks(&mut client, &songs).await {
        Ok(partition) => {
            pb.finish_and_clear();
            partition
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Catalog search failed: {}", e);
        }
    };
    success!(
        "Matched {} of {} tracks",
        partition.matched.len(),
        songs.len()
    );

    let playlist = match publisher::create(
        &mut client,
        &config.playlist_name,
        &config.playlist_description,
    )
    .await
    {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to create playlist: {}", e),
    };
    success!("Created playlist '{}'", playlist.name);

    if partition.matched.is_empty() {
        warning!("No tracks matched; the playlist stays empty.");
    } else if let Err(e) = publisher::populate(&mut client, &playlist, &partition.matched).await {
        error!("Failed to add tracks to playlist: {}", e);
    }

    if !partition.unmatched.is_empty() {
        warning!("{} tracks could not be matched:", partition.unmatched.len());
        let rows: Vec<UnmatchedTableRow> = partition
            .unmatched
            .iter()
            .map(|song| UnmatchedTableRow {
                artist: song.artist.clone(),
                title: song.title.clone(),
                album: song.album.clone(),
                year: song.year,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Err(e) = write_unmatched(UNMATCHED_FILE, &partition.unmatched).await {
        error!("Failed to write {}: {}", UNMATCHED_FILE, e);
    }
    success!("Unmatched tracks written to {}", UNMATCHED_FILE);
}

/// Serializes the unmatched canonical records as a JSON array, `[]` when
/// everything matched.
pub async fn write_unmatched(path: impl AsRef<Path>, songs: &[Song]) -> Res<()> {
    let json = serde_json::to_string(songs)?;
    async_fs::write(path.as_ref(), json).await?;
    Ok(())
}
