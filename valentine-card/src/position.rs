//! Percentage-based placement inside the letter panel.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{PERCENT_MAX, PERCENT_MIN};

/// A point inside the containing panel, both axes in percent of the panel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

impl Position {
    #[must_use]
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// CSS `top`/`left` declarations for absolute placement.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("top: {:.2}%; left: {:.2}%;", self.top, self.left)
    }
}

/// Closed sub-range of `[0, 100]` that random placements are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f32,
    pub max: f32,
}

impl PercentRange {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether the bounds form a usable range inside `[0, 100]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min >= PERCENT_MIN
            && self.max <= PERCENT_MAX
            && self.min <= self.max
    }

    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn contains_position(&self, position: Position) -> bool {
        self.contains(position.top) && self.contains(position.left)
    }

    /// Draw one value uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    /// Draw `top` then `left`, independently.
    pub fn sample_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let top = self.sample(rng);
        let left = self.sample(rng);
        Position { top, left }
    }
}

impl Default for PercentRange {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_PLACEMENT_MIN,
            crate::constants::DEFAULT_PLACEMENT_MAX,
        )
    }
}
