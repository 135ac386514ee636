//! Command handlers for the `spotmood` binary.
//!
//! Handlers print with the crate's terminal macros and exit through
//! [`error!`](crate::error!) on failure; the library functions they call
//! return errors instead.

mod browse;
mod context;
mod cover;
mod playlist;
mod playlist_track;
mod tracks;
mod user;

pub use browse::{featured, new_releases};
pub use context::{time, weather};
pub use cover::cover;
pub use playlist::{create_playlist, delete_playlist, show_playlist, update_playlist};
pub use playlist_track::{add_track, move_track, remove_track, show_track};
pub use tracks::tracks;
pub use user::{preferences, user};

use crate::{config::Config, error, spotify::SpotifyClient};

/// Reads the configuration and builds an authenticated client, or exits.
pub fn client() -> SpotifyClient {
    match Config::from_env() {
        Ok(config) => SpotifyClient::from_config(&config),
        Err(e) => error!(
            "{}\nSet it in {}/.env or the environment.",
            e,
            crate::config::data_dir().display()
        ),
    }
}
