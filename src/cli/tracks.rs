use tabled::Table;

use crate::{
    error, info,
    recommend::{self, TrackQuery},
    spotify::{SpotifyClient, playlist},
    success, utils, warning,
};

pub async fn tracks(client: &SpotifyClient, query: TrackQuery, save_as: Option<String>) {
    let pb = utils::spinner("Fetching recommendations...");
    let recommendation = recommend::recommend_tracks(client, &query).await;
    pb.finish_and_clear();

    let recommendation = match recommendation {
        Ok(r) => r,
        Err(e) => error!("Cannot get recommendations. Err: {}", e),
    };

    if let Some(search) = &recommendation.fallback_query {
        warning!("Recommendations unavailable, used search \"{}\"", search);
    }

    let result = &recommendation.result;
    if result.is_empty() {
        info!("No tracks left after filtering (seeds: {})", recommendation.seeds);
        return;
    }

    println!("{}", Table::new(result.table_rows()));
    success!(
        "{} tracks (seeds: {})",
        result.len(),
        recommendation.seeds
    );

    if let Some(name) = save_as {
        let new = playlist::NewPlaylist {
            name: name.clone(),
            description: playlist_description(&query),
            tracks: result.ids.clone(),
            ..playlist::NewPlaylist::default()
        };

        let pb = utils::spinner(format!("Creating playlist {}...", name));
        let created = playlist::create(client, &new).await;
        pb.finish_and_clear();

        match created {
            Ok(p) => success!(
                "Playlist {} created: {}",
                p.name,
                p.external_urls.spotify.unwrap_or(p.id)
            ),
            Err(e) => error!("Cannot create playlist. Err: {}", e),
        }
    }
}

fn playlist_description(query: &TrackQuery) -> String {
    let mut parts = Vec::new();
    if let Some(mood) = query.mood {
        parts.push(format!("{mood} mood"));
    }
    if let Some(genre) = &query.genre {
        parts.push(genre.clone());
    }
    if let Some(artist) = &query.artist {
        parts.push(format!("like {artist}"));
    }

    if parts.is_empty() {
        "Created by spotmood".to_string()
    } else {
        format!("Created by spotmood: {}", parts.join(", "))
    }
}
