//! # spotmood
//!
//! Mood-based track recommendations and playlist plumbing for Spotify.
//!
//! The core is [`recommend::recommend_tracks`]: it turns a genre, artist, mood
//! and listening window into seeds, asks the catalog for candidates (falling
//! back to a text search when the recommendation endpoint fails), and thins
//! the result so no artist, title or title prefix dominates.
//!
//! ## Modules
//!
//! - [`recommend`]: mood profiles, seed selection, candidate requests, deduplication
//! - [`spotify`]: authenticated Web API client, playlists, browse and user endpoints
//! - [`suggest`]: time, weather and listening-history context
//! - [`cover`]: playlist cover sources and emoji hints
//! - [`management`]: access token lifecycle
//! - [`config`], [`logging`], [`error`]: ambient setup
//! - [`cli`]: command handlers used by the `spotmood` binary

pub mod cli;
pub mod config;
pub mod cover;
pub mod error;
pub mod logging;
pub mod management;
pub mod recommend;
pub mod spotify;
pub mod suggest;
pub mod types;
pub mod utils;

pub use error::{CatalogError, Error, Result};

#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
