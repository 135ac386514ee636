//! Context sources that suggest a mood or genre: clock, weather and the
//! user's listening history.

pub mod preferences;
pub mod time;
pub mod weather;

pub use preferences::Preferences;
pub use time::{TimeContext, TimeOfDay};
pub use weather::{WeatherClient, WeatherContext};
