use crate::{
    error, info,
    recommend::TimeRange,
    spotify::{SpotifyClient, user as spotify_user},
    suggest::preferences,
    utils,
};

pub async fn user(client: &SpotifyClient) {
    let pb = utils::spinner("Fetching profile...");
    let profile = spotify_user::current_user(client).await;
    pb.finish_and_clear();

    match profile {
        Ok(u) => {
            info!("ID: {}", u.id);
            info!("Name: {}", u.display_name);
            info!("Email: {}", u.email);
            info!("Product: {}", u.product);
            info!("Followers: {}", u.followers);
            for url in &u.images {
                info!("Image: {}", url);
            }
        }
        Err(e) => error!("Cannot get user profile. Err: {}", e),
    }
}

pub async fn preferences(client: &SpotifyClient, time_range: TimeRange) {
    let pb = utils::spinner("Reading listening history...");
    let prefs = preferences::fetch(client, time_range).await;
    pb.finish_and_clear();

    match prefs {
        Ok(p) => {
            info!("Top artists: {}", p.top_artists.join(", "));
            info!("Top genres: {}", p.top_genres.join(", "));
            info!("Seed genres: {}", p.suggested_seed_genres.join(","));
            info!("Seed artists: {}", p.suggested_seed_artists.join(","));
        }
        Err(e) => error!("Cannot get preferences. Err: {}", e),
    }
}
