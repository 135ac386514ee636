use chrono::DateTime;

use crate::{
    error::{Error, Result},
    spotify::SpotifyClient,
    types::{Album, FeaturedPlaylistsResponse, NewReleasesResponse, SimplePlaylist},
};

pub const DEFAULT_BROWSE_LIMIT: u32 = 20;

pub const NO_FEATURED_MESSAGE: &str = "No featured playlists available";

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedQuery {
    pub country: Option<String>,
    pub locale: Option<String>,
    /// RFC 3339 timestamp, e.g. `2024-05-01T09:00:00Z`.
    pub timestamp: Option<String>,
    pub limit: u32,
}

impl Default for FeaturedQuery {
    fn default() -> Self {
        Self {
            country: None,
            locale: None,
            timestamp: None,
            limit: DEFAULT_BROWSE_LIMIT,
        }
    }
}

impl FeaturedQuery {
    pub fn validate(&self) -> Result<()> {
        if let Some(ts) = &self.timestamp {
            DateTime::parse_from_rfc3339(ts).map_err(|e| {
                Error::Validation(format!("timestamp '{ts}' is not RFC 3339: {e}"))
            })?;
        }
        Ok(())
    }

    /// Query string. A zero limit is left to the API default.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = limit_pair(self.limit);
        if let Some(c) = &self.country {
            pairs.push(("country", c.clone()));
        }
        if let Some(l) = &self.locale {
            pairs.push(("locale", l.clone()));
        }
        if let Some(t) = &self.timestamp {
            pairs.push(("timestamp", t.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct FeaturedPlaylists {
    pub message: String,
    pub playlists: Vec<SimplePlaylist>,
}

/// Featured playlists. API failures degrade to an empty list with a notice.
pub async fn featured(client: &SpotifyClient, query: &FeaturedQuery) -> Result<FeaturedPlaylists> {
    query.validate()?;

    let res: FeaturedPlaylistsResponse = match client
        .get_json("/browse/featured-playlists", &query.query_pairs())
        .await
    {
        Ok(res) => res,
        Err(e) => {
            tracing::warn!(error = %e, "featured playlists unavailable");
            return Ok(FeaturedPlaylists {
                message: NO_FEATURED_MESSAGE.to_string(),
                playlists: Vec::new(),
            });
        }
    };

    Ok(FeaturedPlaylists {
        message: res.message.unwrap_or_default(),
        playlists: res.playlists.items,
    })
}

/// New album releases. API failures degrade to an empty list.
pub async fn new_releases(
    client: &SpotifyClient,
    country: Option<&str>,
    limit: u32,
) -> Result<Vec<Album>> {
    let mut pairs = limit_pair(limit);
    if let Some(c) = country {
        pairs.push(("country", c.to_string()));
    }

    match client
        .get_json::<NewReleasesResponse, _>("/browse/new-releases", &pairs)
        .await
    {
        Ok(res) => Ok(res.albums.items),
        Err(e) => {
            tracing::warn!(error = %e, "new releases unavailable");
            Ok(Vec::new())
        }
    }
}

fn limit_pair(limit: u32) -> Vec<(&'static str, String)> {
    if limit > 0 {
        vec![("limit", limit.to_string())]
    } else {
        Vec::new()
    }
}

pub fn album_artists(album: &Album) -> String {
    album
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_must_be_rfc3339() {
        let mut q = FeaturedQuery {
            timestamp: Some("2024-05-01 09:00".into()),
            ..FeaturedQuery::default()
        };
        assert!(matches!(q.validate(), Err(Error::Validation(_))));

        q.timestamp = Some("2024-05-01T09:00:00+02:00".into());
        assert!(q.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_not_sent() {
        let q = FeaturedQuery {
            limit: 0,
            ..FeaturedQuery::default()
        };
        assert!(q.query_pairs().is_empty());
    }

    #[test]
    fn query_pairs_skip_unset_fields() {
        let q = FeaturedQuery {
            country: Some("SE".into()),
            ..FeaturedQuery::default()
        };
        assert_eq!(
            q.query_pairs(),
            vec![("limit", "20".to_string()), ("country", "SE".to_string())]
        );
    }
}
