use crate::{
    config::{self, DEFAULT_GEO_API_URL, DEFAULT_WEATHER_API_URL},
    error, info,
    suggest::{TimeContext, WeatherClient},
    utils,
};

pub fn time(mood: Option<String>, genre: Option<String>) {
    let ctx = TimeContext::now(mood.as_deref(), genre.as_deref());

    info!("{} ({}), {}", ctx.current_time, ctx.day_of_week, ctx.time_of_day);
    info!("Weekend: {}", utils::yes_no(ctx.is_weekend));
    info!("Suggested moods: {}", ctx.suggested_moods.join(", "));
    info!("Suggested genres: {}", ctx.suggested_genres.join(", "));
    info!("Mood: {}  Genre: {}", ctx.mood, ctx.genre);
}

pub async fn weather(mood: Option<String>) {
    let client = match WeatherClient::new(
        config::env_or("GEO_API_URL", DEFAULT_GEO_API_URL),
        config::env_or("WEATHER_API_URL", DEFAULT_WEATHER_API_URL),
    ) {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let pb = utils::spinner("Checking the weather...");
    let ctx = client.context(mood.as_deref()).await;
    pb.finish_and_clear();

    match ctx {
        Ok(w) => {
            info!("{} ({:.4}, {:.4})", w.city, w.lat, w.lon);
            info!("Temperature: {:.1} °C, sunny: {}", w.temperature, utils::yes_no(w.is_sunny));
            info!("Suggested moods: {}", w.suggested_moods.join(", "));
            info!("Mood: {}", w.mood);
        }
        Err(e) => error!("Cannot get weather context. Err: {}", e),
    }
}
