//! # API Module
//!
//! HTTP endpoints for the temporary local web server that backs the OAuth
//! authorization-code flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Handles the redirect from Spotify's authorization server:
//!   validates the `state` value and exchanges the authorization code for an
//!   access token.
//! - [`health`] - Minimal health check returning application status and
//!   version, useful for verifying the callback server is reachable on the
//!   configured address.
//!
//! The server only runs for the duration of the `auth` command; the `migrate`
//! pipeline never binds a port.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
