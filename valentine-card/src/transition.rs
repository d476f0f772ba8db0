//! Animated transitions described as data.
//!
//! The card only decides when a transition starts and between which poses;
//! interpolation is left to whatever renders the scene.
use serde::{Deserialize, Serialize};

use crate::constants::{ENVELOPE_EXIT_OFFSET_PX, LETTER_REST_OFFSET_PX};

/// Vertical offset and opacity of an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub y_offset_px: f32,
    pub opacity: f32,
}

impl Pose {
    pub const REST: Self = Self {
        y_offset_px: 0.0,
        opacity: 1.0,
    };
    /// Envelope slid down and faded out.
    pub const ENVELOPE_HIDDEN: Self = Self {
        y_offset_px: ENVELOPE_EXIT_OFFSET_PX,
        opacity: 0.0,
    };
    /// Letter risen slightly above center.
    pub const LETTER_VISIBLE: Self = Self {
        y_offset_px: LETTER_REST_OFFSET_PX,
        opacity: 1.0,
    };

    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({:.0}px); opacity: {:.2};",
            self.y_offset_px, self.opacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
}

impl Transition {
    #[must_use]
    pub const fn new(from: Pose, to: Pose, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
        }
    }

    /// Nothing moves.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.from == self.to
    }

    /// CSS `transition` declaration covering both animated properties.
    #[must_use]
    pub fn timing_css(&self) -> String {
        format!(
            "transition: transform {ms}ms ease-in-out, opacity {ms}ms ease-in-out;",
            ms = self.duration_ms
        )
    }

    /// Inline style for the element, at the start pose or the end pose.
    #[must_use]
    pub fn style(&self, settled: bool) -> String {
        let pose = if settled { self.to } else { self.from };
        format!("{} {}", pose.to_css(), self.timing_css())
    }
}

/// Envelope leaves once opened; otherwise it sits still.
#[must_use]
pub const fn envelope_transition(opened: bool, duration_ms: u32) -> Transition {
    let to = if opened { Pose::ENVELOPE_HIDDEN } else { Pose::REST };
    Transition::new(Pose::REST, to, duration_ms)
}

/// Letter rises from where the envelope went.
#[must_use]
pub const fn letter_transition(duration_ms: u32) -> Transition {
    Transition::new(Pose::ENVELOPE_HIDDEN, Pose::LETTER_VISIBLE, duration_ms)
}
