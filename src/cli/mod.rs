//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the
//! underlying components and owns all terminal output; the lower layers
//! (library, matcher, publisher) stay silent apart from per-batch progress
//! logging.
//!
//! ## Commands
//!
//! - [`auth`] - One-time OAuth authentication, caching the token in the local
//!   data directory
//! - [`migrate`] - The one-shot migration pipeline: read the iTunes playlist,
//!   match tracks against Spotify, create and fill the playlist, report and
//!   persist the unmatched remainder
//!
//! ## Error Handling
//!
//! The pipeline is a linear sequence of external side effects with no
//! compensating actions. Any stage failure terminates the process through the
//! `error!` macro; successfully completed stages (a created playlist, already
//! added batches) are left as-is.

mod auth;
mod migrate;

pub use auth::auth;
pub use migrate::migrate;
pub use migrate::write_unmatched;
