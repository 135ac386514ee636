use tabled::Table;

use crate::{
    error, info,
    spotify::{
        SpotifyClient,
        browse::{self, FeaturedQuery},
    },
    types::{AlbumTableRow, PlaylistTableRow},
    utils,
};

pub async fn featured(client: &SpotifyClient, query: FeaturedQuery) {
    let pb = utils::spinner("Fetching featured playlists...");
    let featured = browse::featured(client, &query).await;
    pb.finish_and_clear();

    let featured = match featured {
        Ok(f) => f,
        Err(e) => error!("Cannot get featured playlists. Err: {}", e),
    };

    if !featured.message.is_empty() {
        info!("{}", featured.message);
    }
    if featured.playlists.is_empty() {
        return;
    }

    let rows: Vec<PlaylistTableRow> = featured
        .playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            owner: p.owner.display_name.unwrap_or_default(),
            tracks: p.tracks.total,
            url: p.external_urls.spotify.unwrap_or(p.id),
        })
        .collect();
    println!("{}", Table::new(rows));
}

pub async fn new_releases(client: &SpotifyClient, country: Option<String>, limit: u32) {
    let pb = utils::spinner("Fetching new releases...");
    let albums = browse::new_releases(client, country.as_deref(), limit).await;
    pb.finish_and_clear();

    let albums = match albums {
        Ok(a) => a,
        Err(e) => error!("Cannot get new releases. Err: {}", e),
    };

    if albums.is_empty() {
        info!("No new releases available");
        return;
    }

    let rows: Vec<AlbumTableRow> = albums
        .iter()
        .map(|a| AlbumTableRow {
            date: a.release_date.clone(),
            name: a.name.clone(),
            artists: browse::album_artists(a),
            album_type: a.album_type.clone(),
            tracks: a.total_tracks,
        })
        .collect();
    println!("{}", Table::new(rows));
}
