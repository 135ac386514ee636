use spotmood::utils::*;

#[test]
fn test_spotify_id_from_bare_id() {
    assert_eq!(spotify_id("4uLU6hMCjMI75M1A2tKUQC"), "4uLU6hMCjMI75M1A2tKUQC");

    // Surrounding whitespace is dropped
    assert_eq!(spotify_id("  4uLU6hMCjMI75M1A2tKUQC \n"), "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_spotify_id_from_uri() {
    assert_eq!(
        spotify_id("spotify:track:4uLU6hMCjMI75M1A2tKUQC"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );
    assert_eq!(
        spotify_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_spotify_id_from_link() {
    assert_eq!(
        spotify_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123"),
        "4uLU6hMCjMI75M1A2tKUQC"
    );

    // Trailing slash and fragment are ignored
    assert_eq!(
        spotify_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M/#top"),
        "37i9dQZF1DXcBWIGoYBM5M"
    );
}

#[test]
fn test_parse_track_ids_mixed_forms() {
    let ids = parse_track_ids(
        "4uLU6hMCjMI75M1A2tKUQC, spotify:track:1301WleyT98MSxVHPZCA6M,,https://open.spotify.com/track/7ouMYWpwJ422jRcDASZB7P",
    );

    assert_eq!(
        ids,
        vec![
            "4uLU6hMCjMI75M1A2tKUQC".to_string(),
            "1301WleyT98MSxVHPZCA6M".to_string(),
            "7ouMYWpwJ422jRcDASZB7P".to_string(),
        ]
    );
}

#[test]
fn test_parse_track_ids_empty_input() {
    assert!(parse_track_ids("").is_empty());
    assert!(parse_track_ids(" , ,").is_empty());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(213_000), "3:33");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_yes_no() {
    assert_eq!(yes_no(true), "yes");
    assert_eq!(yes_no(false), "no");
}
