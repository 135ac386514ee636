use std::fmt;

use crate::{
    error::{Error, Result},
    recommend::{
        TrackQuery,
        catalog::{MusicCatalog, TimeRange},
        mood::Mood,
    },
};

const TOP_ARTIST_LIMIT: u32 = 3;

/// Anchors for a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub tracks: Vec<String>,
}

impl SeedSet {
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.artist.is_none() && self.tracks.is_empty()
    }

    pub fn genres(&self) -> Vec<&str> {
        self.genre.iter().map(String::as_str).collect()
    }

    pub fn artists(&self) -> Vec<&str> {
        self.artist.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for SeedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "genres=[{}] artists=[{}] tracks=[{}]",
            self.genres().join(","),
            self.artists().join(","),
            self.tracks.join(",")
        )
    }
}

/// Genres tried in order against the catalog's seed list.
pub fn preferred_genres(mood: Option<Mood>) -> &'static [&'static str] {
    match mood {
        Some(Mood::Energetic) => &["pop", "dance", "electronic", "edm", "party"],
        Some(Mood::Chill) => &["acoustic", "ambient", "chill", "study"],
        Some(Mood::Cozy) => &["jazz", "folk", "indie", "indie-pop"],
        _ => &["pop", "rock"],
    }
}

/// Used when the catalog's seed list is unavailable. Only the first entry is seeded.
pub fn offline_genres(mood: Option<Mood>) -> &'static [&'static str] {
    match mood {
        Some(Mood::Energetic) => &["pop", "dance", "electronic"],
        Some(Mood::Chill) => &["acoustic", "ambient", "chill"],
        Some(Mood::Cozy) => &["jazz", "folk", "indie"],
        _ => &["pop"],
    }
}

/// Picks the seed genre from the catalog's valid list.
pub fn pick_genre(mood: Option<Mood>, available: &[String]) -> Option<String> {
    preferred_genres(mood)
        .iter()
        .find(|candidate| available.iter().any(|g| g == *candidate))
        .map(|g| g.to_string())
        .or_else(|| available.first().cloned())
}

/// Resolves the seed set for a query. Never returns an empty set.
///
/// The artist search is the only hard-fail step. Top-artist and genre-seed
/// lookups degrade to warnings.
pub async fn select<C: MusicCatalog>(query: &TrackQuery, catalog: &C) -> Result<SeedSet> {
    let mut seeds = SeedSet::default();

    if let Some(genre) = &query.genre {
        seeds.genre = Some(genre.clone());
    }

    if let Some(artist) = &query.artist {
        let found = catalog
            .search_artist(artist)
            .await
            .map_err(|source| Error::UpstreamUnavailable {
                operation: "artist search",
                seeds: seeds.to_string(),
                mood: mood_label(query.mood),
                source,
            })?;

        match found {
            Some(a) => {
                tracing::debug!(artist = %artist, id = %a.id, "artist seed resolved");
                seeds.artist = Some(a.id);
            }
            None => tracing::debug!(artist = %artist, "no artist matched the search"),
        }
    }

    if seeds.artist.is_none() {
        if let Some(range) = query.time_range {
            seeds.artist = top_artist_seed(catalog, range).await;
        }
    }

    if seeds.is_empty() {
        seeds.genre = Some(default_genre(catalog, query.mood).await);
    }

    Ok(seeds)
}

async fn top_artist_seed<C: MusicCatalog>(catalog: &C, range: TimeRange) -> Option<String> {
    match catalog.top_artists(TOP_ARTIST_LIMIT, range).await {
        Ok(artists) => artists.into_iter().next().map(|a| a.id),
        Err(e) => {
            tracing::warn!(time_range = %range, error = %e, "top artists unavailable, continuing without");
            None
        }
    }
}

async fn default_genre<C: MusicCatalog>(catalog: &C, mood: Option<Mood>) -> String {
    let offline = || offline_genres(mood)[0].to_string();

    match catalog.available_genre_seeds().await {
        Ok(available) => pick_genre(mood, &available).unwrap_or_else(|| {
            tracing::warn!("catalog returned no genre seeds, using offline default");
            offline()
        }),
        Err(e) => {
            tracing::warn!(error = %e, "genre seeds unavailable, using offline default");
            offline()
        }
    }
}

pub(crate) fn mood_label(mood: Option<Mood>) -> String {
    mood.map(|m| m.to_string()).unwrap_or_default()
}
