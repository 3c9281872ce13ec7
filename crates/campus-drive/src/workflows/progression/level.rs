use serde::{Deserialize, Serialize};

/// Points needed to advance one level.
pub const LEVEL_SIZE: u32 = 250;

/// `floor(points / LEVEL_SIZE) + 1`; level 1 at zero points.
pub const fn derive_level(points: u32) -> u32 {
    points / LEVEL_SIZE + 1
}

/// Position within the current level, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub level: u32,
    pub points_into_level: u32,
    pub points_to_next_level: u32,
    pub fraction: f64,
}

impl LevelProgress {
    pub fn from_points(points: u32) -> Self {
        let points_into_level = points % LEVEL_SIZE;
        Self {
            level: derive_level(points),
            points_into_level,
            points_to_next_level: LEVEL_SIZE - points_into_level,
            fraction: points_into_level as f64 / LEVEL_SIZE as f64,
        }
    }
}
