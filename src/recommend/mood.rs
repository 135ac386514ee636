use std::fmt;

/// Mood labels understood by the recommendation pipeline.
///
/// Parsing is an exact, case-sensitive match. Every other non-empty label
/// becomes [`Mood::Balanced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Energetic,
    Chill,
    Cozy,
    Melancholy,
    Upbeat,
    Focus,
    Workout,
    Romantic,
    Balanced,
}

impl Mood {
    /// Parses a free-text label. An empty label means "no mood given".
    pub fn parse(label: &str) -> Option<Mood> {
        let mood = match label {
            "" => return None,
            "energetic" => Mood::Energetic,
            "chill" => Mood::Chill,
            "cozy" => Mood::Cozy,
            "melancholy" => Mood::Melancholy,
            "upbeat" => Mood::Upbeat,
            "focus" => Mood::Focus,
            "workout" => Mood::Workout,
            "romantic" => Mood::Romantic,
            _ => Mood::Balanced,
        };
        Some(mood)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Chill => "chill",
            Mood::Cozy => "cozy",
            Mood::Melancholy => "melancholy",
            Mood::Upbeat => "upbeat",
            Mood::Focus => "focus",
            Mood::Workout => "workout",
            Mood::Romantic => "romantic",
            Mood::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A min/max window for one audio feature. `0..0` means unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureRange {
    pub min: f32,
    pub max: f32,
}

impl FeatureRange {
    pub const UNSET: FeatureRange = FeatureRange { min: 0.0, max: 0.0 };

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// The value sent as `target_*`: the lower bound, not the midpoint.
    pub fn target(&self) -> f32 {
        self.min
    }

    pub fn is_set(&self) -> bool {
        self.max > 0.0
    }
}

/// Audio-feature windows for a mood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodProfile {
    pub energy: FeatureRange,
    pub tempo: FeatureRange,
    pub valence: FeatureRange,
    pub danceability: FeatureRange,
    pub acousticness: FeatureRange,
    pub instrumentalness: FeatureRange,
}

const UNSET: FeatureRange = FeatureRange::UNSET;

impl MoodProfile {
    /// Resolves the feature windows for a mood. Total: no mood resolves to balanced.
    pub fn resolve(mood: Option<Mood>) -> MoodProfile {
        let r = FeatureRange::new;
        match mood.unwrap_or(Mood::Balanced) {
            Mood::Energetic => MoodProfile {
                energy: r(0.7, 1.0),
                tempo: r(120.0, 180.0),
                valence: r(0.6, 1.0),
                danceability: r(0.6, 1.0),
                acousticness: UNSET,
                instrumentalness: UNSET,
            },
            Mood::Chill => MoodProfile {
                energy: r(0.3, 0.6),
                tempo: r(70.0, 110.0),
                valence: r(0.4, 0.7),
                danceability: r(0.3, 0.6),
                acousticness: UNSET,
                instrumentalness: UNSET,
            },
            Mood::Cozy => MoodProfile {
                energy: r(0.1, 0.4),
                tempo: r(60.0, 90.0),
                valence: r(0.3, 0.6),
                danceability: UNSET,
                acousticness: r(0.5, 1.0),
                instrumentalness: UNSET,
            },
            Mood::Melancholy => MoodProfile {
                energy: r(0.2, 0.5),
                tempo: r(60.0, 90.0),
                valence: r(0.0, 0.4),
                danceability: UNSET,
                acousticness: r(0.4, 0.8),
                instrumentalness: UNSET,
            },
            Mood::Upbeat => MoodProfile {
                energy: r(0.6, 0.9),
                tempo: r(100.0, 140.0),
                valence: r(0.7, 1.0),
                danceability: r(0.5, 0.9),
                acousticness: UNSET,
                instrumentalness: UNSET,
            },
            Mood::Focus => MoodProfile {
                energy: r(0.3, 0.7),
                tempo: r(80.0, 120.0),
                valence: r(0.3, 0.7),
                danceability: UNSET,
                acousticness: UNSET,
                instrumentalness: r(0.5, 1.0),
            },
            Mood::Workout => MoodProfile {
                energy: r(0.8, 1.0),
                tempo: r(130.0, 200.0),
                valence: r(0.5, 1.0),
                danceability: r(0.6, 1.0),
                acousticness: UNSET,
                instrumentalness: UNSET,
            },
            Mood::Romantic => MoodProfile {
                energy: r(0.3, 0.6),
                tempo: r(70.0, 110.0),
                valence: r(0.5, 0.8),
                danceability: UNSET,
                acousticness: r(0.3, 0.7),
                instrumentalness: UNSET,
            },
            Mood::Balanced => MoodProfile {
                energy: r(0.4, 0.7),
                tempo: r(90.0, 130.0),
                valence: r(0.4, 0.7),
                danceability: r(0.4, 0.7),
                acousticness: UNSET,
                instrumentalness: UNSET,
            },
        }
    }

    /// Dimensions in wire order, keyed by their API suffix.
    pub fn dimensions(&self) -> [(&'static str, FeatureRange); 6] {
        [
            ("energy", self.energy),
            ("tempo", self.tempo),
            ("valence", self.valence),
            ("danceability", self.danceability),
            ("acousticness", self.acousticness),
            ("instrumentalness", self.instrumentalness),
        ]
    }
}
