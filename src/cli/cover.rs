use reqwest::Client;

use crate::{
    cover::{self, CoverSource},
    error, info,
    spotify::{SpotifyClient, playlist},
    success, utils,
};

pub async fn cover(
    client: &SpotifyClient,
    playlist_id: &str,
    source: CoverSource,
    mood: Option<String>,
    weather: Option<String>,
) {
    if let Some(mood) = &mood {
        info!("Mood: {} {}", mood, cover::mood_emoji(mood));
    }
    if let Some(weather) = &weather {
        info!("Weather: {} {}", weather, cover::weather_emoji(weather));
    }

    let pb = utils::spinner("Loading image...");
    let image = source.load(&Client::new()).await;

    let image = match image {
        Ok(bytes) => bytes,
        Err(e) => {
            pb.finish_and_clear();
            error!("Cannot load cover image. Err: {}", e)
        }
    };

    pb.set_message("Uploading cover...");
    let uploaded = playlist::upload_cover(client, playlist_id, &image).await;
    pb.finish_and_clear();

    match uploaded {
        Ok(()) => success!("Cover for playlist {} updated", playlist_id),
        Err(e) => error!("Cannot upload cover. Err: {}", e),
    }
}
