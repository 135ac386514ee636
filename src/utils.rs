use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Steady spinner used while a command waits on the network.
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Extracts a bare Spotify ID from an ID, a `spotify:<kind>:<id>` URI or an
/// `open.spotify.com` link.
pub fn spotify_id(value: &str) -> String {
    let value = value.trim();

    if let Some(rest) = value.strip_prefix("spotify:") {
        return rest.rsplit(':').next().unwrap_or(rest).to_string();
    }

    if value.contains("open.spotify.com/") {
        let path = value.split(['?', '#']).next().unwrap_or(value);
        return path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(path)
            .to_string();
    }

    value.to_string()
}

/// Splits a comma separated list of track references into bare IDs.
pub fn parse_track_ids(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(spotify_id)
        .filter(|id| !id.is_empty())
        .collect()
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
