use crate::{
    error, info,
    spotify::{SpotifyClient, playlist},
    success, utils,
};

pub async fn add_track(client: &SpotifyClient, playlist_id: &str, track_id: &str, position: Option<u32>) {
    let track = [track_id.to_string()];
    match playlist::add_tracks(client, playlist_id, &track, position).await {
        Ok(()) => match position {
            Some(p) => success!("Track {} added at position {}", track_id, p),
            None => success!("Track {} added", track_id),
        },
        Err(e) => error!("Cannot add track. Err: {}", e),
    }
}

pub async fn show_track(client: &SpotifyClient, playlist_id: &str, track_id: &str) {
    let pb = utils::spinner("Looking up track...");
    let found = playlist::find_track(client, playlist_id, track_id).await;
    pb.finish_and_clear();

    match found {
        Ok(t) => {
            let artist = t
                .track
                .artists
                .first()
                .map(|a| a.name.as_str())
                .unwrap_or("");
            let album = t.track.album.as_ref().map(|a| a.name.as_str()).unwrap_or("");

            info!("{} - {}", artist, t.track.name);
            info!("Album: {}", album);
            info!("Duration: {}", utils::format_duration(t.track.duration_ms));
            info!("Position: {}", t.position);
        }
        Err(e) => error!("Cannot show track. Err: {}", e),
    }
}

pub async fn move_track(client: &SpotifyClient, playlist_id: &str, track_id: &str, position: u32) {
    let pb = utils::spinner("Moving track...");
    let moved = playlist::move_track(client, playlist_id, track_id, position).await;
    pb.finish_and_clear();

    match moved {
        Ok(()) => success!("Track {} moved to position {}", track_id, position),
        Err(e) => error!("Cannot move track. Err: {}", e),
    }
}

pub async fn remove_track(client: &SpotifyClient, playlist_id: &str, track_id: &str) {
    let track = [track_id.to_string()];
    match playlist::remove_tracks(client, playlist_id, &track).await {
        Ok(()) => success!("Track {} removed", track_id),
        Err(e) => error!("Cannot remove track. Err: {}", e),
    }
}
