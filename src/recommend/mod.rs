//! Mood-based track recommendation.
//!
//! [`recommend_tracks`] runs the whole pipeline against any [`MusicCatalog`]:
//!
//! ```text
//! TrackQuery -> mood profile -> seeds -> candidates -> filter -> FilteredResult
//! ```
//!
//! Each stage lives in its own module and can be called on its own.

pub mod catalog;
pub mod dedupe;
pub mod mood;
pub mod project;
pub mod request;
pub mod seeds;

pub use catalog::{ArtistRef, CandidateTrack, FeatureConstraints, MusicCatalog, TimeRange};
pub use mood::{FeatureRange, Mood, MoodProfile};
pub use project::FilteredResult;
pub use seeds::SeedSet;

use crate::error::{Error, Result};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;
pub const MAX_POPULARITY: u32 = 100;

/// Parameters for one recommendation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackQuery {
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub mood: Option<Mood>,
    pub limit: u32,
    pub time_range: Option<TimeRange>,
    /// Minimum popularity sent to the catalog. 0 leaves it unconstrained.
    pub popularity: u32,
}

impl Default for TrackQuery {
    fn default() -> Self {
        Self {
            genre: None,
            artist: None,
            mood: None,
            limit: DEFAULT_LIMIT,
            time_range: None,
            popularity: 0,
        }
    }
}

impl TrackQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = non_empty(genre.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = non_empty(artist.into());
        self
    }

    /// Sets the mood from a free-form label. See [`Mood::parse`].
    pub fn mood(mut self, label: &str) -> Self {
        self.mood = Mood::parse(label);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn time_range(mut self, range: Option<TimeRange>) -> Self {
        self.time_range = range;
        self
    }

    pub fn popularity(mut self, popularity: u32) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(Error::Validation(format!(
                "limit must be between 1 and {MAX_LIMIT}, got {}",
                self.limit
            )));
        }
        if self.popularity > MAX_POPULARITY {
            return Err(Error::Validation(format!(
                "popularity must be between 0 and {MAX_POPULARITY}, got {}",
                self.popularity
            )));
        }
        Ok(())
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Filtered tracks plus how they were found.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub result: FilteredResult,
    pub seeds: SeedSet,
    pub used_fallback: bool,
    /// Search text, when the fallback path was taken.
    pub fallback_query: Option<String>,
}

/// Runs the full recommendation pipeline for `query`.
///
/// An empty result is a success. Failures are an unreachable artist search,
/// a failed fallback search, or a fallback search with no results.
pub async fn recommend_tracks<C: MusicCatalog>(
    catalog: &C,
    query: &TrackQuery,
) -> Result<Recommendation> {
    query.validate()?;

    let profile = MoodProfile::resolve(query.mood);
    let seeds = seeds::select(query, catalog).await?;
    tracing::debug!(seeds = %seeds, mood = %seeds::mood_label(query.mood), "seeds selected");

    let candidates = request::request(&seeds, &profile, query, catalog).await?;
    let kept = dedupe::filter(candidates.tracks, candidates.used_fallback);

    Ok(Recommendation {
        result: project::project(&kept),
        seeds,
        used_fallback: candidates.used_fallback,
        fallback_query: candidates.query,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_normalise_to_none() {
        let q = TrackQuery::new().genre("").artist("  ").mood("");
        assert_eq!(q.genre, None);
        assert_eq!(q.artist, None);
        assert_eq!(q.mood, None);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(TrackQuery::new().limit(0).validate().is_err());
        assert!(TrackQuery::new().limit(101).validate().is_err());
        assert!(TrackQuery::new().popularity(101).validate().is_err());
        assert!(TrackQuery::new().limit(100).popularity(100).validate().is_ok());
    }
}
