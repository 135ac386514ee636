use crate::{
    error::{Error, Result},
    recommend::{
        TrackQuery,
        catalog::{CandidateTrack, FeatureConstraint, FeatureConstraints, MusicCatalog},
        mood::{Mood, MoodProfile},
        seeds::{SeedSet, mood_label},
    },
};

/// Raw candidates plus how they were obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates {
    pub tracks: Vec<CandidateTrack>,
    /// True when the tracks came from the search fallback and carry popularity.
    pub used_fallback: bool,
    pub query: Option<String>,
}

/// Builds the constraint set for a profile.
///
/// A dimension is only sent when its max is non-zero; this applies to all six.
pub fn constraints(profile: &MoodProfile, popularity: u32) -> FeatureConstraints {
    let features = profile
        .dimensions()
        .into_iter()
        .filter(|(_, range)| range.is_set())
        .map(|(feature, range)| FeatureConstraint {
            feature,
            target: range.target(),
            max: range.max,
        })
        .collect();

    FeatureConstraints {
        features,
        min_popularity: (popularity > 0).then_some(popularity),
    }
}

/// Search text used when the recommendation endpoint fails.
pub fn fallback_query(genre: Option<&str>, mood: Option<Mood>) -> String {
    if let Some(genre) = genre {
        let phrase = match mood {
            Some(Mood::Energetic) => "dance party",
            Some(Mood::Chill) => "chill relax",
            Some(Mood::Cozy) => "acoustic mellow",
            Some(Mood::Melancholy) => "sad emotional",
            Some(Mood::Upbeat) => "happy upbeat",
            Some(Mood::Focus) => "focus instrumental",
            Some(Mood::Workout) => "workout energetic",
            Some(Mood::Romantic) => "love romantic",
            Some(Mood::Balanced) | None => return genre.to_string(),
        };
        return format!("{genre} {phrase}");
    }

    let query = match mood {
        Some(Mood::Energetic) => "tag:party tag:upbeat tag:dance energy:>0.7 popularity:>70",
        Some(Mood::Chill) => "tag:chill tag:relaxing tag:ambient energy:<0.6 popularity:>60",
        Some(Mood::Cozy) => "tag:mellow tag:acoustic tag:indie acoustic:>0.6 popularity:>50",
        Some(Mood::Melancholy) => {
            "tag:sad tag:emotional tag:melancholy valence:<0.4 popularity:>50"
        }
        Some(Mood::Upbeat) => "tag:happy tag:upbeat tag:summer valence:>0.7 popularity:>70",
        Some(Mood::Focus) => {
            "tag:focus tag:concentration tag:study instrumentalness:>0.5 popularity:>50"
        }
        Some(Mood::Workout) => {
            "tag:workout tag:gym tag:fitness energy:>0.8 tempo:>130 popularity:>70"
        }
        Some(Mood::Romantic) => "tag:love tag:romantic tag:date valence:>0.5 popularity:>60",
        Some(Mood::Balanced) => "tag:popular year:2020-2023",
        None => "tag:popular year:2020-2023 popularity:>75",
    };
    query.to_string()
}

/// Stable sort, most popular first. Tracks without popularity sink to the end.
pub fn sort_by_popularity(tracks: &mut [CandidateTrack]) {
    tracks.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}

/// Requests candidates, falling back to a text search when the recommendation call fails.
///
/// An empty recommendation result is not a failure. A failed or empty
/// fallback search is.
pub async fn request<C: MusicCatalog>(
    seeds: &SeedSet,
    profile: &MoodProfile,
    query: &TrackQuery,
    catalog: &C,
) -> Result<Candidates> {
    let constraints = constraints(profile, query.popularity);

    let primary_err = match catalog.recommend(seeds, &constraints, query.limit).await {
        Ok(tracks) => {
            if tracks.is_empty() {
                tracing::warn!(
                    seeds = %seeds,
                    mood = %mood_label(query.mood),
                    "no tracks returned for the given criteria"
                );
            }
            return Ok(Candidates {
                tracks,
                used_fallback: false,
                query: None,
            });
        }
        Err(e) => e,
    };

    let search = fallback_query(query.genre.as_deref(), query.mood);
    tracing::warn!(
        seeds = %seeds,
        mood = %mood_label(query.mood),
        error = %primary_err,
        query = %search,
        "recommendations failed, falling back to search"
    );

    let mut tracks = catalog
        .search_tracks(&search, query.limit)
        .await
        .map_err(|source| Error::UpstreamUnavailable {
            operation: "fallback search",
            seeds: seeds.to_string(),
            mood: mood_label(query.mood),
            source,
        })?;

    if tracks.is_empty() {
        return Err(Error::NoCandidates {
            query: search,
            mood: mood_label(query.mood),
        });
    }

    sort_by_popularity(&mut tracks);

    Ok(Candidates {
        tracks,
        used_fallback: true,
        query: Some(search),
    })
}
