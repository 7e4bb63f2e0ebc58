//! Proficiency levels. Both acquired and required skills carry one.
//!
//! Levels run from 0 (not acquired) to 4 (expert). Anything outside that
//! range is clamped on the way in rather than rejected, so a stray `7` or `-1`
//! coming from upstream data never makes the analyzer fail.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A proficiency level in the inclusive range `[0, 4]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Level(u8);

impl Level {
    /// Not acquired / not yet rated.
    pub const NONE: Level = Level(0);
    /// The highest proficiency we track.
    pub const EXPERT: Level = Level(4);

    /// Create a level, clamping `val` into `[0, 4]`.
    pub fn new(val: i64) -> Self {
        let clamped = val.max(Self::NONE.0 as i64).min(Self::EXPERT.0 as i64);
        Self(clamped as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// How many levels `self` sits above `other`, or 0 if it doesn't.
    pub fn deficit_over(&self, other: &Level) -> u8 {
        self.0.saturating_sub(other.0)
    }
}

impl From<i64> for Level {
    fn from(val: i64) -> Self {
        Self::new(val)
    }
}

impl From<i32> for Level {
    fn from(val: i32) -> Self {
        Self::new(val as i64)
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        level.0 as i64
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
