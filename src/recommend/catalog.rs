use std::fmt;

use crate::{error::CatalogError, recommend::seeds::SeedSet};

/// Listening window for the user's top items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeRange {
    #[value(name = "short_term")]
    ShortTerm,
    #[value(name = "medium_term")]
    MediumTerm,
    #[value(name = "long_term")]
    LongTerm,
}

impl TimeRange {
    /// Lenient parse: empty is `None`, anything unrecognised falls back to short term.
    pub fn parse(value: &str) -> Option<TimeRange> {
        match value {
            "" => None,
            "medium_term" => Some(TimeRange::MediumTerm),
            "long_term" => Some(TimeRange::LongTerm),
            _ => Some(TimeRange::ShortTerm),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artist reference as returned by the catalog searches.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
}

/// A track as seen by the filter. `popularity` is only present on search results.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<String>,
    pub popularity: Option<u32>,
}

impl CandidateTrack {
    /// First credited artist, or an empty string for tracks without artists.
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(String::as_str).unwrap_or("")
    }
}

/// One `target_*`/`max_*` pair sent to the recommendation endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureConstraint {
    pub feature: &'static str,
    pub target: f32,
    pub max: f32,
}

/// Audio-feature and popularity constraints for a recommendation request.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureConstraints {
    pub features: Vec<FeatureConstraint>,
    pub min_popularity: Option<u32>,
}

impl FeatureConstraints {
    /// Query pairs in the order they are appended to the request URL.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.features.len() * 2 + 1);
        for c in &self.features {
            pairs.push((format!("target_{}", c.feature), c.target.to_string()));
            pairs.push((format!("max_{}", c.feature), c.max.to_string()));
        }
        if let Some(p) = self.min_popularity {
            pairs.push(("min_popularity".to_string(), p.to_string()));
        }
        pairs
    }
}

/// The catalog operations the recommendation pipeline depends on.
///
/// Every method is a single network round trip; implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait MusicCatalog {
    /// Best match for an artist name, if any.
    async fn search_artist(&self, name: &str) -> Result<Option<ArtistRef>, CatalogError>;

    async fn top_artists(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<ArtistRef>, CatalogError>;

    async fn available_genre_seeds(&self) -> Result<Vec<String>, CatalogError>;

    async fn recommend(
        &self,
        seeds: &SeedSet,
        constraints: &FeatureConstraints,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError>;

    /// Full-text track search. Result order is not guaranteed.
    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError>;
}
