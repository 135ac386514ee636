use std::{collections::HashMap, sync::Mutex};

use pretty_assertions::assert_eq;
use spotmood::{
    error::{CatalogError, Error},
    recommend::{
        ArtistRef, CandidateTrack, FeatureConstraints, Mood, MoodProfile, MusicCatalog, SeedSet,
        TimeRange, TrackQuery, dedupe, project, recommend_tracks, request, seeds,
    },
};

// In-memory catalog recording every call it receives.
#[derive(Default)]
struct FakeCatalog {
    artist_match: Option<ArtistRef>,
    artist_search_fails: bool,
    top: Vec<ArtistRef>,
    top_fails: bool,
    genres: Vec<String>,
    genres_fail: bool,
    recommended: Vec<CandidateTrack>,
    recommend_fails: bool,
    searched: Vec<CandidateTrack>,
    search_fails: bool,
    calls: Mutex<Vec<&'static str>>,
    last_seeds: Mutex<Option<SeedSet>>,
    last_constraints: Mutex<Option<FeatureConstraints>>,
    last_search: Mutex<Option<String>>,
}

impl FakeCatalog {
    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn seeds(&self) -> SeedSet {
        self.last_seeds.lock().unwrap().clone().expect("recommend was not called")
    }
}

fn upstream_down(endpoint: &str) -> CatalogError {
    CatalogError::Api {
        endpoint: endpoint.to_string(),
        status: 503,
        message: "Service Unavailable".to_string(),
    }
}

impl MusicCatalog for FakeCatalog {
    async fn search_artist(&self, _name: &str) -> Result<Option<ArtistRef>, CatalogError> {
        self.record("search_artist");
        if self.artist_search_fails {
            return Err(upstream_down("/search"));
        }
        Ok(self.artist_match.clone())
    }

    async fn top_artists(
        &self,
        limit: u32,
        _time_range: TimeRange,
    ) -> Result<Vec<ArtistRef>, CatalogError> {
        self.record("top_artists");
        assert_eq!(limit, 3);
        if self.top_fails {
            return Err(upstream_down("/me/top/artists"));
        }
        Ok(self.top.clone())
    }

    async fn available_genre_seeds(&self) -> Result<Vec<String>, CatalogError> {
        self.record("available_genre_seeds");
        if self.genres_fail {
            return Err(upstream_down("/recommendations/available-genre-seeds"));
        }
        Ok(self.genres.clone())
    }

    async fn recommend(
        &self,
        seeds: &SeedSet,
        constraints: &FeatureConstraints,
        _limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        self.record("recommend");
        *self.last_seeds.lock().unwrap() = Some(seeds.clone());
        *self.last_constraints.lock().unwrap() = Some(constraints.clone());
        if self.recommend_fails {
            return Err(upstream_down("/recommendations"));
        }
        Ok(self.recommended.clone())
    }

    async fn search_tracks(
        &self,
        query: &str,
        _limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        self.record("search_tracks");
        *self.last_search.lock().unwrap() = Some(query.to_string());
        if self.search_fails {
            return Err(upstream_down("/search"));
        }
        Ok(self.searched.clone())
    }
}

fn track(id: &str, name: &str, artist: &str) -> CandidateTrack {
    CandidateTrack {
        id: id.to_string(),
        name: name.to_string(),
        artists: if artist.is_empty() {
            Vec::new()
        } else {
            vec![artist.to_string()]
        },
        popularity: None,
    }
}

fn popular(id: &str, name: &str, artist: &str, popularity: u32) -> CandidateTrack {
    CandidateTrack {
        popularity: Some(popularity),
        ..track(id, name, artist)
    }
}

fn artist(id: &str, name: &str) -> ArtistRef {
    ArtistRef {
        id: id.to_string(),
        name: name.to_string(),
        genres: Vec::new(),
    }
}

fn ids(tracks: &[CandidateTrack]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

// Deterministic pseudo-random track lists drawn from small pools so that
// names, artists and prefixes collide often.
fn generated_tracks(seed: u64, count: usize) -> Vec<CandidateTrack> {
    const WORDS: [&str; 6] = ["love", "the", "night", "a", "summer", "dancing"];
    const TAILS: [&str; 4] = ["song", "again", "remix", "forever"];
    const ARTISTS: [&str; 4] = ["A", "B", "C", ""];

    let mut state = seed;
    let mut next = move |n: usize| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % n
    };

    (0..count)
        .map(|i| {
            let name = format!("{} {}", WORDS[next(WORDS.len())], TAILS[next(TAILS.len())]);
            let name = if next(5) == 0 { name.to_uppercase() } else { name };
            CandidateTrack {
                id: format!("t{i}"),
                name,
                artists: match ARTISTS[next(ARTISTS.len())] {
                    "" => Vec::new(),
                    a => vec![a.to_string()],
                },
                popularity: Some(next(101) as u32),
            }
        })
        .collect()
}

fn is_subsequence(output: &[CandidateTrack], input: &[CandidateTrack]) -> bool {
    let mut rest = input.iter();
    output.iter().all(|o| rest.any(|i| i == o))
}

fn assert_filter_invariants(input: &[CandidateTrack], output: &[CandidateTrack]) {
    assert!(is_subsequence(output, input));

    let mut names = HashMap::new();
    let mut artists = HashMap::new();
    let mut prefixes = HashMap::new();
    for t in output {
        let name = t.name.to_lowercase();
        *names.entry(name.clone()).or_insert(0) += 1;
        *artists.entry(t.primary_artist().to_string()).or_insert(0) += 1;
        if let Some(prefix) = name.split_whitespace().next() {
            if prefix.len() > 3 {
                *prefixes.entry(prefix.to_string()).or_insert(0) += 1;
            }
        }
    }

    assert!(names.values().all(|&n| n == 1), "duplicate names: {names:?}");
    assert!(artists.values().all(|&n| n <= 2), "artist over cap: {artists:?}");
    assert!(prefixes.values().all(|&n| n == 1), "prefix over cap: {prefixes:?}");
}

#[test]
fn test_mood_profiles_target_the_lower_bound() {
    let labels = [
        "energetic",
        "chill",
        "cozy",
        "melancholy",
        "upbeat",
        "focus",
        "workout",
        "romantic",
        "not-a-mood",
    ];

    for label in labels {
        let profile = MoodProfile::resolve(Mood::parse(label));
        let constraints = request::constraints(&profile, 0);

        for c in &constraints.features {
            let range = profile
                .dimensions()
                .into_iter()
                .find(|(name, _)| *name == c.feature)
                .map(|(_, r)| r)
                .unwrap();
            assert_eq!(c.target, range.min, "{label}: {}", c.feature);
        }

        for (name, range) in profile.dimensions() {
            assert!(range.min <= range.max, "{label}: {name}");
            if name == "tempo" {
                assert!(range.min >= 60.0 && range.max <= 200.0, "{label}: tempo");
            } else {
                assert!(range.min >= 0.0 && range.max <= 1.0, "{label}: {name}");
            }
        }

        for name in ["energy", "tempo", "valence"] {
            assert!(constraints.features.iter().any(|c| c.feature == name));
        }
    }
}

#[test]
fn test_unknown_mood_resolves_to_balanced() {
    assert_eq!(Mood::parse("Energetic"), Some(Mood::Balanced));
    assert_eq!(Mood::parse(""), None);
    assert_eq!(
        MoodProfile::resolve(Mood::parse("whatever")),
        MoodProfile::resolve(None)
    );
}

#[test]
fn test_unset_dimensions_are_not_sent() {
    let cozy = request::constraints(&MoodProfile::resolve(Some(Mood::Cozy)), 0);
    let sent: Vec<&str> = cozy.features.iter().map(|c| c.feature).collect();

    assert_eq!(sent, vec!["energy", "tempo", "valence", "acousticness"]);
    assert_eq!(cozy.min_popularity, None);

    let with_popularity = request::constraints(&MoodProfile::resolve(None), 60);
    assert_eq!(with_popularity.min_popularity, Some(60));
}

#[test]
fn test_filter_invariants_hold_for_generated_lists() {
    for seed in 0..50 {
        let input = generated_tracks(seed, 40);

        for has_popularity in [false, true] {
            let output = dedupe::filter(input.clone(), has_popularity);
            assert_filter_invariants(&input, &output);

            if has_popularity {
                assert!(output.iter().all(|t| t.popularity.unwrap_or(0) >= 50));
            }
        }
    }
}

#[test]
fn test_filter_is_idempotent() {
    for seed in 0..50 {
        let input = generated_tracks(seed, 40);

        for has_popularity in [false, true] {
            let once = dedupe::filter(input.clone(), has_popularity);
            let twice = dedupe::filter(once.clone(), has_popularity);
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn test_filter_drops_unpopular_search_results() {
    let input = vec![
        popular("1", "Alpha", "A", 80),
        popular("2", "Beta", "B", 49),
        popular("3", "Gamma", "C", 50),
        track("4", "Delta", "D"),
    ];

    let output = dedupe::filter(input.clone(), true);
    assert_eq!(ids(&output), vec!["1", "3"]);

    // Recommendation results carry no popularity and are never dropped for it
    let output = dedupe::filter(input, false);
    assert_eq!(ids(&output), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_filter_keeps_first_two_tracks_per_artist() {
    let input = vec![
        track("1", "Alpha", "A"),
        track("2", "Bravo", "A"),
        track("3", "Charlie", "A"),
        track("4", "Delta", "A"),
        track("5", "Echo", "A"),
    ];

    let output = dedupe::filter(input, false);
    assert_eq!(ids(&output), vec!["1", "2"]);
}

#[test]
fn test_filter_skips_repeated_names_case_insensitively() {
    let input = vec![
        track("1", "Yellow", "Coldplay"),
        track("2", "YELLOW", "Someone Else"),
        track("3", "", "Nobody"),
    ];

    let output = dedupe::filter(input, false);
    assert_eq!(ids(&output), vec!["1"]);
}

#[test]
fn test_filter_caps_long_prefixes_only() {
    let input = vec![
        track("1", "Summer Nights", "A"),
        track("2", "Summer Rain", "B"),
        track("3", "The Less I Know", "C"),
        track("4", "The Chain", "D"),
        track("5", "Lose Yourself", "E"),
    ];

    let output = dedupe::filter(input, false);
    // "the" is three bytes and stays uncapped
    assert_eq!(ids(&output), vec!["1", "3", "4", "5"]);
}

#[test]
fn test_filter_measures_prefix_in_bytes() {
    // "été" is three characters but five bytes
    let input = vec![
        track("1", "Été indien", "A"),
        track("2", "Été 85", "B"),
    ];

    let output = dedupe::filter(input, false);
    assert_eq!(ids(&output), vec!["1"]);
}

#[test]
fn test_tracks_without_artists_share_the_empty_artist_cap() {
    let input = vec![
        track("1", "One", ""),
        track("2", "Two", ""),
        track("3", "Six", ""),
    ];

    let output = dedupe::filter(input, false);
    assert_eq!(ids(&output), vec!["1", "2"]);

    let projected = project::project(&output);
    assert_eq!(projected.artists, vec!["".to_string(), "".to_string()]);
}

#[test]
fn test_project_keeps_lists_parallel() {
    let tracks = vec![
        CandidateTrack {
            artists: vec!["Daft Punk".into(), "Pharrell Williams".into()],
            ..track("1", "Get Lucky", "")
        },
        track("2", "Midnight City", "M83"),
    ];

    let result = project::project(&tracks);
    assert_eq!(result.ids, vec!["1", "2"]);
    assert_eq!(result.names, vec!["Get Lucky", "Midnight City"]);
    assert_eq!(result.artists, vec!["Daft Punk", "M83"]);
}

#[test]
fn test_pick_genre_prefers_mood_order() {
    let available = vec!["dance".to_string(), "pop".to_string(), "metal".to_string()];
    assert_eq!(
        seeds::pick_genre(Some(Mood::Energetic), &available),
        Some("pop".to_string())
    );

    let unrelated = vec!["metal".to_string(), "punk".to_string()];
    assert_eq!(
        seeds::pick_genre(Some(Mood::Chill), &unrelated),
        Some("metal".to_string())
    );

    assert_eq!(seeds::pick_genre(None, &[]), None);
}

#[tokio::test]
async fn test_workout_without_genre_listing_seeds_pop() {
    let catalog = FakeCatalog {
        genres_fail: true,
        recommended: vec![track("1", "Stronger", "Kanye West")],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().mood("workout");

    let rec = recommend_tracks(&catalog, &query).await.unwrap();

    let seeds = catalog.seeds();
    assert_eq!(seeds.genres(), vec!["pop"]);
    assert!(seeds.artist.is_none());
    assert_eq!(rec.seeds, seeds);
    assert_eq!(catalog.calls(), vec!["available_genre_seeds", "recommend"]);

    let constraints = catalog.last_constraints.lock().unwrap().clone().unwrap();
    assert_eq!(constraints.features[0].feature, "energy");
    assert_eq!(constraints.features[0].target, 0.8);
    assert_eq!(constraints.min_popularity, None);
}

#[tokio::test]
async fn test_empty_genre_listing_uses_offline_default() {
    let catalog = FakeCatalog {
        recommended: vec![track("1", "Weightless", "Marconi Union")],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().mood("chill");

    recommend_tracks(&catalog, &query).await.unwrap();
    assert_eq!(catalog.seeds().genres(), vec!["acoustic"]);
}

#[tokio::test]
async fn test_genre_listing_match_is_used() {
    let catalog = FakeCatalog {
        genres: vec!["folk".into(), "jazz".into()],
        recommended: vec![track("1", "So What", "Miles Davis")],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().mood("cozy");

    recommend_tracks(&catalog, &query).await.unwrap();
    assert_eq!(catalog.seeds().genres(), vec!["jazz"]);
}

#[tokio::test]
async fn test_empty_recommendation_is_an_empty_success() {
    let catalog = FakeCatalog {
        genres: vec!["pop".into()],
        ..FakeCatalog::default()
    };

    let rec = recommend_tracks(&catalog, &TrackQuery::new()).await.unwrap();

    assert!(rec.result.ids.is_empty());
    assert!(rec.result.names.is_empty());
    assert!(rec.result.artists.is_empty());
    assert!(!rec.used_fallback);
    assert!(!catalog.calls().contains(&"search_tracks"));
}

#[tokio::test]
async fn test_artist_search_failure_is_fatal() {
    let catalog = FakeCatalog {
        artist_search_fails: true,
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().genre("rock").artist("Queen").mood("upbeat");

    let err = recommend_tracks(&catalog, &query).await.unwrap_err();

    match err {
        Error::UpstreamUnavailable {
            operation,
            seeds,
            mood,
            ..
        } => {
            assert_eq!(operation, "artist search");
            assert!(seeds.contains("rock"));
            assert_eq!(mood, "upbeat");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(catalog.calls(), vec!["search_artist"]);
}

#[tokio::test]
async fn test_artist_and_genre_are_both_seeded() {
    let catalog = FakeCatalog {
        artist_match: Some(artist("1dfeR4HaWDbWqFHLkxsg1d", "Queen")),
        recommended: vec![track("1", "Don't Stop Me Now", "Queen")],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new()
        .genre("rock")
        .artist("Queen")
        .time_range(Some(TimeRange::ShortTerm));

    recommend_tracks(&catalog, &query).await.unwrap();

    let seeds = catalog.seeds();
    assert_eq!(seeds.genres(), vec!["rock"]);
    assert_eq!(seeds.artists(), vec!["1dfeR4HaWDbWqFHLkxsg1d"]);
    // An artist seed already exists, so top artists are not consulted
    assert_eq!(catalog.calls(), vec!["search_artist", "recommend"]);
}

#[tokio::test]
async fn test_top_artist_seeds_when_no_artist_given() {
    let catalog = FakeCatalog {
        top: vec![artist("top1", "First"), artist("top2", "Second")],
        recommended: vec![track("1", "Song", "First")],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().time_range(Some(TimeRange::LongTerm));

    recommend_tracks(&catalog, &query).await.unwrap();

    assert_eq!(catalog.seeds().artists(), vec!["top1"]);
    assert_eq!(catalog.calls(), vec!["top_artists", "recommend"]);
}

#[tokio::test]
async fn test_top_artist_failure_is_swallowed() {
    let catalog = FakeCatalog {
        top_fails: true,
        genres: vec!["pop".into(), "rock".into()],
        recommended: vec![track("1", "Song", "Band")],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().time_range(Some(TimeRange::MediumTerm));

    let rec = recommend_tracks(&catalog, &query).await.unwrap();

    assert_eq!(rec.result.ids, vec!["1"]);
    assert_eq!(catalog.seeds().genres(), vec!["pop"]);
    assert_eq!(
        catalog.calls(),
        vec!["top_artists", "available_genre_seeds", "recommend"]
    );
}

#[tokio::test]
async fn test_fallback_search_is_sorted_and_filtered() {
    let catalog = FakeCatalog {
        recommend_fails: true,
        searched: vec![
            popular("low", "Low", "A", 30),
            popular("mid", "Middle", "B", 60),
            popular("top", "Top", "C", 90),
            popular("mid2", "Another One", "D", 60),
        ],
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().genre("rock").mood("energetic");

    let rec = recommend_tracks(&catalog, &query).await.unwrap();

    assert!(rec.used_fallback);
    assert_eq!(rec.fallback_query.as_deref(), Some("rock dance party"));
    assert_eq!(rec.result.ids, vec!["top", "mid", "mid2"]);
    assert_eq!(
        catalog.last_search.lock().unwrap().as_deref(),
        Some("rock dance party")
    );
}

#[tokio::test]
async fn test_fallback_with_no_results_is_no_candidates() {
    let catalog = FakeCatalog {
        recommend_fails: true,
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().genre("pop");

    let err = recommend_tracks(&catalog, &query).await.unwrap_err();
    match err {
        Error::NoCandidates { query, .. } => assert_eq!(query, "pop"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fallback_failure_is_fatal() {
    let catalog = FakeCatalog {
        recommend_fails: true,
        search_fails: true,
        ..FakeCatalog::default()
    };
    let query = TrackQuery::new().genre("pop").mood("focus");

    let err = recommend_tracks(&catalog, &query).await.unwrap_err();
    assert!(matches!(
        err,
        Error::UpstreamUnavailable {
            operation: "fallback search",
            ..
        }
    ));
}

#[tokio::test]
async fn test_fallback_results_all_filtered_is_empty_success() {
    let catalog = FakeCatalog {
        recommend_fails: true,
        searched: vec![popular("1", "Quiet", "A", 10)],
        ..FakeCatalog::default()
    };

    let rec = recommend_tracks(&catalog, &TrackQuery::new().genre("pop"))
        .await
        .unwrap();
    assert!(rec.used_fallback);
    assert!(rec.result.is_empty());
}

#[tokio::test]
async fn test_invalid_query_makes_no_calls() {
    let catalog = FakeCatalog::default();

    let err = recommend_tracks(&catalog, &TrackQuery::new().limit(0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = recommend_tracks(&catalog, &TrackQuery::new().popularity(150))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(catalog.calls().is_empty());
}

#[test]
fn test_fallback_queries() {
    assert_eq!(
        request::fallback_query(Some("jazz"), Some(Mood::Cozy)),
        "jazz acoustic mellow"
    );
    assert_eq!(
        request::fallback_query(Some("jazz"), Some(Mood::Balanced)),
        "jazz"
    );
    assert_eq!(
        request::fallback_query(None, Some(Mood::Workout)),
        "tag:workout tag:gym tag:fitness energy:>0.8 tempo:>130 popularity:>70"
    );
    assert_eq!(
        request::fallback_query(None, None),
        "tag:popular year:2020-2023 popularity:>75"
    );
}

#[test]
fn test_time_range_parse_is_lenient() {
    assert_eq!(TimeRange::parse(""), None);
    assert_eq!(TimeRange::parse("long_term"), Some(TimeRange::LongTerm));
    assert_eq!(TimeRange::parse("yesterday"), Some(TimeRange::ShortTerm));
}
