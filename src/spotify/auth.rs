use std::{sync::Arc, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config::{self, Config},
    error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{AuthState, Token},
    warning,
};

/// Initiates the complete OAuth 2.0 authorization-code flow with Spotify.
///
/// This function orchestrates the entire authentication process including:
/// 1. Generating a random `state` value binding the callback to this run
/// 2. Starting a local callback server
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the OAuth callback to exchange the code for a token
/// 5. Persisting the obtained token for future `migrate` runs
///
/// The token exchange authenticates with the client ID and secret from the
/// configuration, matching the credentials registered with the Spotify
/// application.
///
/// # Arguments
///
/// * `config` - Runtime configuration carrying credentials and the callback
///   server address
/// * `shared_state` - Thread-safe shared state carrying the `state` value to
///   the callback handler and the resulting token back
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - Token persistence failures terminate the program with an error
/// - Authentication timeouts or failures terminate with an error message
pub async fn auth(config: &Config, shared_state: Arc<Mutex<Option<AuthState>>>) {
    let csrf_state = generate_state();

    // start the callback server
    let server_state = Arc::clone(&shared_state);
    let server_config = config.clone();
    tokio::spawn(async move {
        start_api_server(server_config, server_state).await;
    });

    // Construct the authorization URL
    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&state={state}&scope={scope}",
        spotify_auth_url = config::SPOTIFY_AUTH_URL,
        client_id = &config.client_id,
        redirect_uri = &config.redirect_uri,
        state = csrf_state,
        scope = config::SPOTIFY_SCOPE
    );

    // Store the state value before the redirect happens
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(AuthState {
            csrf_state: csrf_state.clone(),
            token: None,
        });
    }

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for the callback to be hit
    let token = wait_for_token(shared_state).await;

    match token {
        Some(t) => {
            let token_manager = TokenManager::new(t.clone(), config);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Waits for the OAuth callback to complete and return a token.
///
/// Polls the shared state for a completed token with a 60-second timeout.
/// This function runs concurrently with the callback handler that populates
/// the token after the code exchange.
async fn wait_for_token(shared_state: Arc<Mutex<Option<AuthState>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(auth_state) = lock.as_ref() {
            if let Some(token) = &auth_state.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Generates the random `state` value sent with the authorization request.
///
/// The callback handler rejects any redirect whose `state` does not match,
/// which ties the received authorization code to this process.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Builds the HTTP Basic authorization header value for the token endpoint.
///
/// The authorization-code grant authenticates the application itself with
/// `base64(client_id:client_secret)` as specified by RFC 6749.
pub fn basic_auth_value(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Exchanges an authorization code for an access token.
///
/// Completes the OAuth 2.0 flow by posting the code received from the
/// callback to Spotify's token endpoint, authenticated with the client
/// credentials.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Complete token with access token, refresh token, and metadata
/// - `Err(reqwest::Error)` - HTTP error, network error, or rejected exchange
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly (typically 10
/// minutes). The exchange should happen immediately after receiving the code.
pub async fn exchange_code(code: &str, config: &Config) -> Result<Token, reqwest::Error> {
    exchange_code_at(config::SPOTIFY_TOKEN_URL, code, config).await
}

/// Performs the code exchange against a specific token endpoint.
///
/// A rejected exchange (wrong client secret, expired or reused code) comes
/// back as a non-success status carrying an error body. That status is
/// surfaced as an error here, before any parsing, so the callback handler
/// reports the failure instead of persisting an empty token.
pub async fn exchange_code_at(
    token_url: &str,
    code: &str,
    config: &Config,
) -> Result<Token, reqwest::Error> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .header(
            reqwest::header::AUTHORIZATION,
            basic_auth_value(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &config.redirect_uri),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
