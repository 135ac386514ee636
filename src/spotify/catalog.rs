use crate::{
    error::CatalogError,
    recommend::{
        ArtistRef, CandidateTrack, FeatureConstraints, MusicCatalog, SeedSet, TimeRange,
    },
    spotify::SpotifyClient,
    types::{
        Artist, AvailableGenreSeedsResponse, FullTrack, Paging, RecommendationsResponse,
        SearchArtistsResponse, SearchTracksResponse, SimpleArtist, SimpleTrack,
    },
};

impl From<Artist> for ArtistRef {
    fn from(a: Artist) -> Self {
        ArtistRef {
            id: a.id,
            name: a.name,
            genres: a.genres,
        }
    }
}

fn artist_names(artists: Vec<SimpleArtist>) -> Vec<String> {
    artists.into_iter().map(|a| a.name).collect()
}

impl From<SimpleTrack> for CandidateTrack {
    fn from(t: SimpleTrack) -> Self {
        CandidateTrack {
            id: t.id,
            name: t.name,
            artists: artist_names(t.artists),
            popularity: None,
        }
    }
}

impl From<FullTrack> for CandidateTrack {
    fn from(t: FullTrack) -> Self {
        CandidateTrack {
            id: t.id,
            name: t.name,
            artists: artist_names(t.artists),
            popularity: t.popularity,
        }
    }
}

/// Query string for `GET /recommendations`. Empty seed kinds are left out.
pub fn recommendation_query(
    seeds: &SeedSet,
    constraints: &FeatureConstraints,
    limit: u32,
) -> Vec<(String, String)> {
    let mut query = Vec::new();

    let genres = seeds.genres();
    if !genres.is_empty() {
        query.push(("seed_genres".to_string(), genres.join(",")));
    }
    let artists = seeds.artists();
    if !artists.is_empty() {
        query.push(("seed_artists".to_string(), artists.join(",")));
    }
    if !seeds.tracks.is_empty() {
        query.push(("seed_tracks".to_string(), seeds.tracks.join(",")));
    }

    query.push(("limit".to_string(), limit.to_string()));
    query.extend(constraints.query_pairs());
    query
}

impl MusicCatalog for SpotifyClient {
    async fn search_artist(&self, name: &str) -> Result<Option<ArtistRef>, CatalogError> {
        let res: SearchArtistsResponse = self
            .get_json("/search", &[("q", name), ("type", "artist"), ("limit", "1")])
            .await?;

        Ok(res.artists.items.into_iter().next().map(ArtistRef::from))
    }

    async fn top_artists(
        &self,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<ArtistRef>, CatalogError> {
        let limit = limit.to_string();
        let res: Paging<Artist> = self
            .get_json(
                "/me/top/artists",
                &[("limit", limit.as_str()), ("time_range", time_range.as_str())],
            )
            .await?;

        Ok(res.items.into_iter().map(ArtistRef::from).collect())
    }

    async fn available_genre_seeds(&self) -> Result<Vec<String>, CatalogError> {
        let res: AvailableGenreSeedsResponse = self
            .get_json("/recommendations/available-genre-seeds", &[] as &[(&str, &str)])
            .await?;
        Ok(res.genres)
    }

    async fn recommend(
        &self,
        seeds: &SeedSet,
        constraints: &FeatureConstraints,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        let query = recommendation_query(seeds, constraints, limit);
        let res: RecommendationsResponse = self.get_json("/recommendations", &query).await?;

        Ok(res.tracks.into_iter().map(CandidateTrack::from).collect())
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<CandidateTrack>, CatalogError> {
        let limit = limit.to_string();
        let res: SearchTracksResponse = self
            .get_json(
                "/search",
                &[("q", query), ("type", "track"), ("limit", limit.as_str())],
            )
            .await?;

        Ok(res.tracks.items.into_iter().map(CandidateTrack::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{Mood, MoodProfile, request};

    #[test]
    fn query_leaves_out_empty_seed_kinds() {
        let seeds = SeedSet {
            genre: Some("pop".into()),
            ..SeedSet::default()
        };
        let query = recommendation_query(&seeds, &FeatureConstraints::default(), 20);

        assert_eq!(
            query,
            vec![
                ("seed_genres".to_string(), "pop".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn query_carries_targets_maxes_and_popularity() {
        let seeds = SeedSet {
            artist: Some("0OdUWJ0sBjDrqHygGUXeCF".into()),
            ..SeedSet::default()
        };
        let constraints =
            request::constraints(&MoodProfile::resolve(Some(Mood::Focus)), 40);
        let query = recommendation_query(&seeds, &constraints, 10);
        let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keys[0], "seed_artists");
        assert!(keys.contains(&"target_instrumentalness"));
        assert!(keys.contains(&"max_instrumentalness"));
        assert!(!keys.contains(&"target_danceability"));
        assert!(!keys.iter().any(|k| k.starts_with("min_") && *k != "min_popularity"));
        assert_eq!(query.last(), Some(&("min_popularity".to_string(), "40".to_string())));
    }
}
