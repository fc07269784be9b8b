//! iTunes → Spotify Playlist Migrator Library
//!
//! This library provides functionality for moving a playlist out of a local
//! iTunes library export and into a Spotify account. It includes modules for
//! parsing the property-list library file, matching tracks against the Spotify
//! catalog, publishing the resulting playlist, and the authentication plumbing
//! required to talk to the Spotify Web API.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `catalog` - The catalog capability trait consumed by matcher and publisher
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loading and the runtime `Config` struct
//! - `library` - iTunes property-list parsing and track normalization
//! - `management` - Token caching and refresh
//! - `matcher` - Two-tier catalog search and matched/unmatched partitioning
//! - `publisher` - Playlist creation and batched track adds
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use tunelift::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> tunelift::Res<()> {
//!     config::load_env().await?;
//!     // Dispatch CLI commands...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod library;
pub mod management;
pub mod matcher;
pub mod publisher;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use tunelift::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the migration pipeline.
///
/// # Example
///
/// ```
/// info!("Read {} tracks from the library", tracks.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Matched {} of {} tracks", matched, total);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. The migration is an unrepeatable
/// sequence of external side effects, so every unrecoverable failure goes
/// through this macro rather than attempting a partial recovery.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. Code after it will not execute.
///
/// # Example
///
/// ```
/// error!("Failed to read library: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Failed to open browser, navigate manually to {}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
