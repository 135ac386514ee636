use crate::{recommend::catalog::CandidateTrack, types::TrackTableRow};

/// Parallel output lists. `ids[i]`, `names[i]` and `artists[i]` describe the same track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredResult {
    pub ids: Vec<String>,
    pub names: Vec<String>,
    pub artists: Vec<String>,
}

impl FilteredResult {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn table_rows(&self) -> Vec<TrackTableRow> {
        self.ids
            .iter()
            .zip(&self.names)
            .zip(&self.artists)
            .enumerate()
            .map(|(i, ((id, name), artist))| TrackTableRow {
                position: i + 1,
                name: name.clone(),
                artist: artist.clone(),
                id: id.clone(),
            })
            .collect()
    }
}

pub fn project(tracks: &[CandidateTrack]) -> FilteredResult {
    let mut result = FilteredResult {
        ids: Vec::with_capacity(tracks.len()),
        names: Vec::with_capacity(tracks.len()),
        artists: Vec::with_capacity(tracks.len()),
    };

    for track in tracks {
        result.ids.push(track.id.clone());
        result.names.push(track.name.clone());
        result.artists.push(track.primary_artist().to_string());
    }

    result
}
