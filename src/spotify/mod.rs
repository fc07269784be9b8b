//! # Spotify Integration Module
//!
//! This module is the integration layer between the migrator and the Spotify
//! Web API. It handles the OAuth authorization-code flow and implements the
//! [`Catalog`](crate::catalog::Catalog) capability over HTTP.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, matcher, publisher)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code)
//!     └── Catalog client (search, playlist create, track add)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 authorization-code flow with a client
//! secret, which is the flow implied by the `CLIENT_ID`/`CLIENT_SECRET`
//! configuration pair:
//!
//! 1. **State Generation**: creates a random `state` value to bind the
//!    callback to this run
//! 2. **Authorization Request**: directs the user's browser to Spotify's
//!    consent page with the `playlist-modify-public` scope
//! 3. **Local Callback**: receives the authorization code via a temporary
//!    HTTP server
//! 4. **Token Exchange**: exchanges the code for an access token using HTTP
//!    Basic authentication with the client credentials
//! 5. **Token Storage**: persists the token in the local data directory for
//!    subsequent `migrate` runs
//!
//! ## API Coverage
//!
//! [`client`] covers exactly the endpoints the migration needs:
//!
//! - `GET /search` - structured track search, limited to one result per query
//! - `POST /users/{user_id}/playlists` - create the destination playlist
//! - `POST /playlists/{playlist_id}/tracks` - batched track adds
//! - `POST /api/token` - token exchange and refresh
//!
//! ## Error Handling
//!
//! Nothing is caught or retried here. A transport or service error from any
//! endpoint propagates to the caller and aborts the run, matching the
//! one-shot nature of the tool. Token refresh on expiry is the only
//! self-healing behavior.

pub mod auth;
pub mod client;
