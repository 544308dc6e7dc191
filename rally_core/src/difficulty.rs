/// Difficulty tiers, ordered easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Look up the fixed tuning profile for this tier
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                pursuit_gain: 0.038,
                initial_speed: 8.0,
                max_speed: 18.0,
            },
            Difficulty::Medium => DifficultyProfile {
                pursuit_gain: 0.08,
                initial_speed: 10.0,
                max_speed: 22.0,
            },
            Difficulty::Hard => DifficultyProfile {
                pursuit_gain: 0.15,
                initial_speed: 12.0,
                max_speed: 26.0,
            },
            Difficulty::Expert => DifficultyProfile {
                pursuit_gain: 0.5,
                initial_speed: 14.0,
                max_speed: 30.0,
            },
        }
    }
}

/// AI responsiveness and ball speed bounds for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Fraction of the gap to the ball the AI paddle closes per frame, in (0, 1]
    pub pursuit_gain: f32,
    /// Ball speed snapped to on the first paddle contact of a point
    pub initial_speed: f32,
    /// Cap on speed growth from rally hits
    pub max_speed: f32,
}
