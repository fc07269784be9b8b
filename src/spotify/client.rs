use reqwest::Client;

use crate::{
    Res,
    catalog::Catalog,
    config::{self, Config},
    management::TokenManager,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, FoundTrack, Playlist,
        SearchResponse,
    },
};

/// Production [`Catalog`] implementation backed by the Spotify Web API.
///
/// Every call authenticates with a bearer token from the [`TokenManager`],
/// which transparently refreshes it on expiry. There is no retry logic: a
/// transport or service error propagates and aborts the run.
pub struct SpotifyClient {
    http: Client,
    token_mgr: TokenManager,
    user_name: String,
}

impl SpotifyClient {
    /// Builds a client from the cached token.
    ///
    /// # Errors
    ///
    /// Fails when no token is cached, in which case the user needs to run
    /// `tunelift auth` first.
    pub async fn load(config: &Config) -> Result<Self, String> {
        let token_mgr = TokenManager::load(config).await?;
        Ok(SpotifyClient {
            http: Client::new(),
            token_mgr,
            user_name: config.user_name.clone(),
        })
    }
}

impl Catalog for SpotifyClient {
    /// Issues a track search against `GET /search`.
    async fn search(&mut self, query: &str, limit: u32) -> Res<Vec<FoundTrack>> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!("{uri}/search", uri = config::SPOTIFY_API_URL);
        let limit = limit.to_string();

        let response = self
            .http
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let res = response.json::<SearchResponse>().await?;
        Ok(res.tracks.items)
    }

    /// Creates a public playlist via `POST /users/{user_id}/playlists`.
    async fn create_playlist(&mut self, name: &str, description: &str) -> Res<Playlist> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!(
            "{uri}/users/{user}/playlists",
            uri = config::SPOTIFY_API_URL,
            user = self.user_name
        );

        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public: true,
            collaborative: false,
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let playlist = response.json::<Playlist>().await?;
        Ok(playlist)
    }

    /// Appends a chunk of URIs via `POST /playlists/{playlist_id}/tracks`.
    async fn add_tracks(&mut self, playlist_id: &str, uris: &[String]) -> Res<()> {
        let token = self.token_mgr.get_valid_token().await;
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = config::SPOTIFY_API_URL,
            id = playlist_id
        );

        let body = AddTracksRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(&api_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        // only interesting as confirmation that the write landed
        let _snapshot = response.json::<AddTracksResponse>().await?;
        Ok(())
    }
}
