use tabled::{Table, Tabled};

use crate::{
    error, info,
    spotify::{
        SpotifyClient,
        playlist::{self, NewPlaylist, PlaylistUpdate},
    },
    success,
    types::ChangePlaylistDetailsRequest,
    utils,
};

#[derive(Tabled)]
struct DetailRow {
    field: &'static str,
    value: String,
}

pub async fn create_playlist(client: &SpotifyClient, new: NewPlaylist) {
    let pb = utils::spinner(format!("Creating playlist {}...", new.name));
    let created = playlist::create(client, &new).await;
    pb.finish_and_clear();

    match created {
        Ok(p) => {
            success!("Playlist {} created with {} tracks", p.name, new.tracks.len());
            info!("ID: {}", p.id);
            if let Some(url) = p.external_urls.spotify {
                info!("URL: {}", url);
            }
        }
        Err(e) => error!("Cannot create playlist. Err: {}", e),
    }
}

pub async fn show_playlist(client: &SpotifyClient, id: &str) {
    let pb = utils::spinner("Fetching playlist...");
    let details = playlist::show(client, id).await;
    pb.finish_and_clear();

    let details = match details {
        Ok(d) => d,
        Err(e) => error!("Cannot load playlist. Err: {}", e),
    };

    let p = details.playlist;
    let rows = vec![
        DetailRow {
            field: "id",
            value: p.id,
        },
        DetailRow {
            field: "name",
            value: p.name,
        },
        DetailRow {
            field: "description",
            value: p.description.unwrap_or_default(),
        },
        DetailRow {
            field: "public",
            value: utils::yes_no(p.public.unwrap_or(false)).to_string(),
        },
        DetailRow {
            field: "collaborative",
            value: utils::yes_no(p.collaborative).to_string(),
        },
        DetailRow {
            field: "snapshot",
            value: p.snapshot_id,
        },
        DetailRow {
            field: "url",
            value: p.external_urls.spotify.unwrap_or_default(),
        },
        DetailRow {
            field: "tracks",
            value: details.track_ids.len().to_string(),
        },
    ];
    println!("{}", Table::new(rows));

    for (i, id) in details.track_ids.iter().enumerate() {
        println!("{:>4}  {}", i, id);
    }
}

pub async fn update_playlist(
    client: &SpotifyClient,
    id: &str,
    details: ChangePlaylistDetailsRequest,
    tracks: Option<Vec<String>>,
) {
    if details.is_empty() && tracks.is_none() {
        info!("Nothing to update");
        return;
    }

    let changes = PlaylistUpdate { details, tracks };
    let pb = utils::spinner("Updating playlist...");
    let updated = playlist::update(client, id, &changes).await;
    pb.finish_and_clear();

    match updated {
        Ok(()) => success!("Playlist {} updated", id),
        Err(e) => error!("Cannot update playlist. Err: {}", e),
    }
}

pub async fn delete_playlist(client: &SpotifyClient, id: &str) {
    match playlist::delete(client, id).await {
        Ok(()) => success!("Playlist {} removed from your library", id),
        Err(e) => error!("Cannot delete playlist. Err: {}", e),
    }
}
