//! Near-duplicate removal for candidate track lists.
//!
//! Candidates from the catalog tend to cluster: the same song under several
//! releases, five tracks by the one artist the seed pointed at, or a run of
//! titles sharing a first word ("Remix ...", "Live ..."). [`filter`] walks the
//! list once, in the order given, and keeps a track only when it does not push
//! any of those clusters past its cap.
//!
//! # Rules, applied per track in this order
//!
//! 1. Search-path only: drop tracks with popularity below
//!    [`MIN_SEARCH_POPULARITY`].
//! 2. Drop tracks whose lowercase name is empty or was already emitted.
//! 3. Drop tracks whose primary artist was already emitted
//!    [`MAX_TRACKS_PER_ARTIST`] times.
//! 4. Take the first whitespace token of the lowercase name. Prefixes longer
//!    than [`SHORT_PREFIX_LEN`] bytes are capped at one emitted track; shorter
//!    prefixes are never capped.
//! 5. Emit.
//!
//! The output is always an order-preserving subsequence of the input, and
//! filtering an already filtered list returns it unchanged.

use std::collections::{HashMap, HashSet};

use crate::recommend::catalog::CandidateTrack;

/// Search results below this popularity are discarded.
pub const MIN_SEARCH_POPULARITY: u32 = 50;

pub const MAX_TRACKS_PER_ARTIST: u32 = 2;

/// Prefixes of at most this many bytes are not capped.
pub const SHORT_PREFIX_LEN: usize = 3;

pub const MAX_TRACKS_PER_PREFIX: u32 = 1;

/// Frequency tables for one filtering pass.
#[derive(Debug, Default)]
struct FilterState {
    seen_names: HashSet<String>,
    artist_counts: HashMap<String, u32>,
    prefix_counts: HashMap<String, u32>,
}

impl FilterState {
    fn admit(&mut self, track: &CandidateTrack, has_popularity: bool) -> bool {
        if has_popularity && track.popularity.unwrap_or(0) < MIN_SEARCH_POPULARITY {
            return false;
        }

        let name = track.name.to_lowercase();
        if name.is_empty() || self.seen_names.contains(&name) {
            return false;
        }

        let artist = track.primary_artist();
        if self.artist_counts.get(artist).copied().unwrap_or(0) >= MAX_TRACKS_PER_ARTIST {
            return false;
        }

        if let Some(prefix) = name.split_whitespace().next() {
            let count = self.prefix_counts.get(prefix).copied().unwrap_or(0);
            if prefix.len() > SHORT_PREFIX_LEN && count >= MAX_TRACKS_PER_PREFIX {
                return false;
            }
            *self.prefix_counts.entry(prefix.to_string()).or_insert(0) += 1;
        }

        *self.artist_counts.entry(artist.to_string()).or_insert(0) += 1;
        self.seen_names.insert(name);
        true
    }
}

/// Removes near-duplicates from `tracks`, keeping input order.
///
/// `has_popularity` marks tracks that came from the search fallback; only then
/// is the popularity floor applied.
pub fn filter(tracks: Vec<CandidateTrack>, has_popularity: bool) -> Vec<CandidateTrack> {
    let mut state = FilterState::default();
    let before = tracks.len();

    let kept: Vec<CandidateTrack> = tracks
        .into_iter()
        .filter(|t| state.admit(t, has_popularity))
        .collect();

    tracing::debug!(before, after = kept.len(), has_popularity, "filtered candidates");
    kept
}
