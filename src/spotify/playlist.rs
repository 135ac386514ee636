use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{StatusCode, header::CONTENT_TYPE};

use crate::{
    error::{CatalogError, Error, Result},
    spotify::{SpotifyClient, track_uri, user},
    types::{
        AddTracksRequest, ChangePlaylistDetailsRequest, CreatePlaylistRequest, FullTrack, Paging,
        Playlist, PlaylistItem, RemoveTracksRequest, ReplaceTracksRequest, SnapshotResponse,
        TrackUri,
    },
};

/// Spotify accepts at most this many URIs per add/replace request.
pub const TRACKS_PER_REQUEST: usize = 100;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
    pub tracks: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PlaylistDetails {
    pub playlist: Playlist,
    pub track_ids: Vec<String>,
}

/// Changes applied by [`update`]. `tracks`, when given, replaces the contents.
#[derive(Debug, Clone, Default)]
pub struct PlaylistUpdate {
    pub details: ChangePlaylistDetailsRequest,
    pub tracks: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct PlaylistTrack {
    pub track: FullTrack,
    /// 0-based index of the first occurrence in the playlist.
    pub position: usize,
}

fn not_found(kind: &'static str, id: &str) -> impl FnOnce(CatalogError) -> Error {
    let id = id.to_string();
    move |e| {
        if e.is_not_found() {
            Error::NotFound { kind, id }
        } else {
            Error::Catalog(e)
        }
    }
}

fn uris(ids: &[String]) -> Vec<String> {
    ids.iter().map(|id| track_uri(id)).collect()
}

/// Creates a playlist for the current user and fills it with `new.tracks`.
pub async fn create(client: &SpotifyClient, new: &NewPlaylist) -> Result<Playlist> {
    if new.name.trim().is_empty() {
        return Err(Error::Validation("playlist name must not be empty".into()));
    }

    let me = user::current_user(client).await?;
    let path = format!("/users/{}/playlists", me.id);
    let body = CreatePlaylistRequest {
        name: new.name.clone(),
        description: new.description.clone(),
        public: new.public,
        collaborative: new.collaborative,
    };

    let playlist: Playlist = client
        .send_json(&path, client.http().post(client.url(&path)).json(&body))
        .await?;
    tracing::debug!(id = %playlist.id, name = %playlist.name, "playlist created");

    if !new.tracks.is_empty() {
        add_tracks(client, &playlist.id, &new.tracks, None).await?;
    }

    Ok(playlist)
}

/// Playlist metadata and every track ID, read 100 at a time.
pub async fn show(client: &SpotifyClient, id: &str) -> Result<PlaylistDetails> {
    let path = format!("/playlists/{id}");
    let playlist: Playlist = client
        .get_json(&path, &[] as &[(&str, &str)])
        .await
        .map_err(not_found("playlist", id))?;

    let track_ids = track_ids(client, id).await?;
    Ok(PlaylistDetails {
        playlist,
        track_ids,
    })
}

pub async fn track_ids(client: &SpotifyClient, id: &str) -> Result<Vec<String>> {
    let path = format!("/playlists/{id}/tracks");
    let limit = TRACKS_PER_REQUEST.to_string();
    let mut ids = Vec::new();
    let mut offset = 0usize;

    loop {
        let offset_str = offset.to_string();
        let page: Paging<PlaylistItem> = client
            .get_json(
                &path,
                &[("limit", limit.as_str()), ("offset", offset_str.as_str())],
            )
            .await
            .map_err(not_found("playlist", id))?;

        let fetched = page.items.len();
        ids.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track.and_then(|t| t.id)),
        );

        if page.next.is_none() || fetched == 0 {
            break;
        }
        offset += fetched;
    }

    Ok(ids)
}

pub async fn update(client: &SpotifyClient, id: &str, changes: &PlaylistUpdate) -> Result<()> {
    if let Some(name) = &changes.details.name {
        if name.trim().is_empty() {
            return Err(Error::Validation("playlist name must not be empty".into()));
        }
    }

    if !changes.details.is_empty() {
        let path = format!("/playlists/{id}");
        client
            .send(&path, client.http().put(client.url(&path)).json(&changes.details))
            .await
            .map_err(not_found("playlist", id))?;
    }

    if let Some(tracks) = &changes.tracks {
        replace_tracks(client, id, tracks).await?;
    }

    Ok(())
}

/// Unfollows the playlist. The Web API has no hard delete.
pub async fn delete(client: &SpotifyClient, id: &str) -> Result<()> {
    let path = format!("/playlists/{id}/followers");
    client
        .send(&path, client.http().delete(client.url(&path)))
        .await
        .map_err(not_found("playlist", id))?;
    Ok(())
}

/// Adds tracks in chunks of 100. With a position, chunks are inserted consecutively from it.
pub async fn add_tracks(
    client: &SpotifyClient,
    id: &str,
    track_ids: &[String],
    position: Option<u32>,
) -> Result<()> {
    let path = format!("/playlists/{id}/tracks");

    for (i, chunk) in track_ids.chunks(TRACKS_PER_REQUEST).enumerate() {
        let body = AddTracksRequest {
            uris: uris(chunk),
            position: position.map(|p| p + (i * TRACKS_PER_REQUEST) as u32),
        };
        let _: SnapshotResponse = client
            .send_json(&path, client.http().post(client.url(&path)).json(&body))
            .await
            .map_err(not_found("playlist", id))?;
    }

    Ok(())
}

/// Replaces the contents: the first 100 via replace, the rest appended.
pub async fn replace_tracks(client: &SpotifyClient, id: &str, track_ids: &[String]) -> Result<()> {
    let path = format!("/playlists/{id}/tracks");
    let split = track_ids.len().min(TRACKS_PER_REQUEST);
    let (first, rest) = track_ids.split_at(split);

    let body = ReplaceTracksRequest { uris: uris(first) };
    client
        .send(&path, client.http().put(client.url(&path)).json(&body))
        .await
        .map_err(not_found("playlist", id))?;

    if !rest.is_empty() {
        add_tracks(client, id, rest, None).await?;
    }
    Ok(())
}

/// Removes every occurrence of the given tracks.
pub async fn remove_tracks(client: &SpotifyClient, id: &str, track_ids: &[String]) -> Result<()> {
    let path = format!("/playlists/{id}/tracks");

    for chunk in track_ids.chunks(TRACKS_PER_REQUEST) {
        let body = RemoveTracksRequest {
            tracks: chunk
                .iter()
                .map(|t| TrackUri { uri: track_uri(t) })
                .collect(),
        };
        let _: SnapshotResponse = client
            .send_json(&path, client.http().delete(client.url(&path)).json(&body))
            .await
            .map_err(not_found("playlist", id))?;
    }

    Ok(())
}

pub async fn get_track(client: &SpotifyClient, track_id: &str) -> Result<FullTrack> {
    let path = format!("/tracks/{track_id}");
    client
        .get_json(&path, &[] as &[(&str, &str)])
        .await
        .map_err(not_found("track", track_id))
}

/// Looks a track up inside a playlist. `NotFound` when it is not there.
pub async fn find_track(
    client: &SpotifyClient,
    playlist_id: &str,
    track_id: &str,
) -> Result<PlaylistTrack> {
    let ids = track_ids(client, playlist_id).await?;
    let position = ids
        .iter()
        .position(|id| id == track_id)
        .ok_or_else(|| Error::NotFound {
            kind: "track in playlist",
            id: track_id.to_string(),
        })?;

    let track = get_track(client, track_id).await?;
    Ok(PlaylistTrack { track, position })
}

/// Moves a track by removing it and re-inserting it at `position`.
pub async fn move_track(
    client: &SpotifyClient,
    playlist_id: &str,
    track_id: &str,
    position: u32,
) -> Result<()> {
    let ids = track_ids(client, playlist_id).await?;
    if !ids.iter().any(|id| id == track_id) {
        return Err(Error::NotFound {
            kind: "track in playlist",
            id: track_id.to_string(),
        });
    }

    let track = [track_id.to_string()];
    remove_tracks(client, playlist_id, &track).await?;
    add_tracks(client, playlist_id, &track, Some(position)).await
}

/// Uploads a JPEG as the playlist cover.
pub async fn upload_cover(client: &SpotifyClient, id: &str, jpeg: &[u8]) -> Result<()> {
    if jpeg.is_empty() {
        return Err(Error::Validation("cover image is empty".into()));
    }

    let path = format!("/playlists/{id}/images");
    let request = client
        .http()
        .put(client.url(&path))
        .header(CONTENT_TYPE, "image/jpeg")
        .body(STANDARD.encode(jpeg));

    let response = client
        .send(&path, request)
        .await
        .map_err(not_found("playlist", id))?;

    match response.status() {
        StatusCode::OK | StatusCode::ACCEPTED => Ok(()),
        status => Err(Error::Catalog(CatalogError::Api {
            endpoint: path,
            status: status.as_u16(),
            message: "unexpected status for cover upload".into(),
        })),
    }
}
