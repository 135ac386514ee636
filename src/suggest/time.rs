use std::fmt;

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn suggested_moods(time_of_day: TimeOfDay, weekend: bool) -> [&'static str; 3] {
    match (time_of_day, weekend) {
        (TimeOfDay::Morning, true) => ["relaxed", "peaceful", "refreshed"],
        (TimeOfDay::Morning, false) => ["focused", "motivated", "energized"],
        (TimeOfDay::Afternoon, true) => ["energetic", "playful", "adventurous"],
        (TimeOfDay::Afternoon, false) => ["productive", "determined", "inspired"],
        (TimeOfDay::Evening, true) => ["party", "excited", "social"],
        (TimeOfDay::Evening, false) => ["chill", "relaxed", "unwinding"],
        (TimeOfDay::Night, _) => ["chill", "dreamy", "reflective"],
    }
}

pub fn suggested_genres(time_of_day: TimeOfDay, weekend: bool) -> [&'static str; 3] {
    match (time_of_day, weekend) {
        (TimeOfDay::Morning, true) => ["acoustic", "folk", "indie folk"],
        (TimeOfDay::Morning, false) => ["pop", "upbeat", "motivational"],
        (TimeOfDay::Afternoon, true) => ["dance", "pop", "hip-hop"],
        (TimeOfDay::Afternoon, false) => ["rock", "alternative", "indie rock"],
        (TimeOfDay::Evening, true) => ["electronic", "dance", "house"],
        (TimeOfDay::Evening, false) => ["indie", "alternative", "chill"],
        (TimeOfDay::Night, _) => ["ambient", "lo-fi", "chill electronic"],
    }
}

/// Mood and genre hints derived from the clock.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeContext {
    pub current_time: String,
    pub hour: u32,
    pub minute: u32,
    pub day_of_week: String,
    pub is_weekend: bool,
    pub time_of_day: TimeOfDay,
    pub suggested_moods: Vec<String>,
    pub mood: String,
    pub suggested_genres: Vec<String>,
    pub genre: String,
}

impl TimeContext {
    /// Builds the context for `at`. Overrides replace the first suggestion as the selection.
    pub fn at<Tz>(at: &DateTime<Tz>, mood: Option<&str>, genre: Option<&str>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let hour = at.hour();
        let weekday = at.weekday();
        let is_weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);
        let time_of_day = TimeOfDay::from_hour(hour);

        let moods = suggested_moods(time_of_day, is_weekend);
        let genres = suggested_genres(time_of_day, is_weekend);

        TimeContext {
            current_time: at.to_rfc3339(),
            hour,
            minute: at.minute(),
            day_of_week: weekday_name(weekday).to_string(),
            is_weekend,
            time_of_day,
            suggested_moods: moods.iter().map(|m| m.to_string()).collect(),
            mood: pick(mood, moods[0]),
            suggested_genres: genres.iter().map(|g| g.to_string()).collect(),
            genre: pick(genre, genres[0]),
        }
    }

    pub fn now(mood: Option<&str>, genre: Option<&str>) -> Self {
        Self::at(&Local::now(), mood, genre)
    }
}

fn pick(choice: Option<&str>, default: &str) -> String {
    choice
        .filter(|c| !c.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
