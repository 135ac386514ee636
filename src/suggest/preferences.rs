use std::collections::HashMap;

use crate::{
    error::Result, recommend::TimeRange, spotify::SpotifyClient, spotify::user, types::Artist,
};

pub const TOP_ARTIST_LIMIT: u32 = 10;
pub const TOP_GENRE_LIMIT: usize = 5;
pub const SEED_ARTIST_LIMIT: usize = 2;
pub const FALLBACK_GENRES: [&str; 2] = ["pop", "rock"];

/// Listening preferences summarised from the user's top artists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub top_artists: Vec<String>,
    pub top_genres: Vec<String>,
    pub suggested_seed_genres: Vec<String>,
    pub suggested_seed_artists: Vec<String>,
}

/// Most frequent genres, highest count first. Ties keep first-seen order.
pub fn top_genres(artists: &[Artist], limit: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for genre in artists.iter().flat_map(|a| a.genres.iter()) {
        let count = counts.entry(genre.as_str()).or_insert(0);
        if *count == 0 {
            order.push(genre.as_str());
        }
        *count += 1;
    }

    // stable: equal counts stay in first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.into_iter().take(limit).map(str::to_string).collect()
}

pub fn summarize(artists: &[Artist]) -> Preferences {
    let top_genres = top_genres(artists, TOP_GENRE_LIMIT);

    let suggested_seed_genres = if top_genres.is_empty() {
        FALLBACK_GENRES.iter().map(|g| g.to_string()).collect()
    } else {
        top_genres.clone()
    };

    Preferences {
        top_artists: artists.iter().map(|a| a.name.clone()).collect(),
        top_genres,
        suggested_seed_genres,
        suggested_seed_artists: artists
            .iter()
            .take(SEED_ARTIST_LIMIT)
            .map(|a| a.id.clone())
            .collect(),
    }
}

/// Fetches the user's top artists and summarises them. Failures are not softened.
pub async fn fetch(client: &SpotifyClient, time_range: TimeRange) -> Result<Preferences> {
    let artists = user::top_artists(client, TOP_ARTIST_LIMIT, time_range).await?;
    tracing::debug!(count = artists.len(), time_range = %time_range, "top artists fetched");
    Ok(summarize(&artists))
}
