//! Card tuning and content.
//!
//! The widget ships one embedded JSON asset; fields missing from it fall back
//! to the defaults below. Historical versions of the card disagreed on the
//! decoy cap, batch size and placement range, so each of those is a knob and
//! [`CardVariant`] names the combinations that have shipped.
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    BURST_BATCH, BURST_MAX_DECOYS, BURST_PLACEMENT_MAX, BURST_PLACEMENT_MIN, DEFAULT_MAX_DECOYS,
    DEFAULT_REJECT_STACK_ORDER, DEFAULT_TRANSITION_MS, LOG_TARGET_CONFIG, TRICKLE_BATCH,
    TRICKLE_MAX_DECOYS, TRICKLE_PLACEMENT_MAX, TRICKLE_PLACEMENT_MIN,
};
use crate::position::PercentRange;
use crate::state::EvasionMode;

const DEFAULT_CARD_DATA: &str = include_str!("../../valentine-web/static/assets/data/card.json");

static STATIC_CONFIG: Lazy<CardConfig> = Lazy::new(|| match CardConfig::from_json(DEFAULT_CARD_DATA) {
    Ok(config) => config,
    Err(err) => {
        log::warn!(target: LOG_TARGET_CONFIG, "embedded card config rejected: {err}");
        CardConfig::default()
    }
});

/// Errors raised when a card configuration cannot be used.
#[derive(Debug, Error, PartialEq)]
pub enum CardConfigError {
    #[error("{field} must lie within 0..=100 with min <= max (got {min:.2}..={max:.2})")]
    PlacementRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("max_decoys must be at least 1")]
    ZeroCap,
    #[error("fixed decoy batch must spawn at least one button")]
    EmptyBatch,
    #[error("transition_ms must be greater than zero")]
    ZeroTransition,
    #[error("unknown card variant '{0}'")]
    UnknownVariant(String),
    #[error("card config JSON invalid: {0}")]
    Json(String),
}

/// How many decoys one rejection spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BatchPolicy {
    /// One more decoy than the number of rejections so far.
    #[default]
    Escalating,
    /// The same number every time.
    Fixed { size: u32 },
}

impl BatchPolicy {
    #[must_use]
    pub const fn fixed(size: u32) -> Self {
        Self::Fixed { size }
    }
}

/// Text and asset references shown on the card.
///
/// Image fields are opaque URLs handed straight to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub recipient: String,
    pub envelope_label: String,
    pub question: String,
    pub celebration: String,
    pub accept_label: String,
    pub reject_label: String,
    pub restart_label: String,
    pub stamp_url: String,
    pub stamp_alt: String,
    pub stamp_caption: String,
    pub asking_image_url: String,
    pub asking_image_alt: String,
    pub accepted_image_url: String,
    pub accepted_image_alt: String,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            recipient: "Josie".to_string(),
            envelope_label: "For Josie".to_string(),
            question: "Hi Josie, It's that time of year again. Will you be my Valentine? \u{2764}\u{fe0f}"
                .to_string(),
            celebration:
                "Yay! I knew you were going to say Yes Josie!\u{2764}\u{fe0f} Happy Valentine's Day!"
                    .to_string(),
            accept_label: "Yes!".to_string(),
            reject_label: "No!".to_string(),
            restart_label: "Start Over".to_string(),
            stamp_url: "https://jerseystamps.com/cdn/shop/collections/Lunar_New_Year_Snake_Stamp.png?v=1735565398"
                .to_string(),
            stamp_alt: "2025 Stamp".to_string(),
            stamp_caption: "2025".to_string(),
            asking_image_url: "https://media1.tenor.com/m/YciMs8-7iKAAAAAC/modcheck-confuse.gif"
                .to_string(),
            asking_image_alt: "Confused".to_string(),
            accepted_image_url: "https://media.tenor.com/ocBrDK-xRl4AAAAi/love-it-i-love-it.gif"
                .to_string(),
            accepted_image_alt: "Love It".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default = "CardConfig::default_max_decoys")]
    pub max_decoys: usize,
    #[serde(default)]
    pub batch: BatchPolicy,
    #[serde(default)]
    pub placement: PercentRange,
    #[serde(default)]
    pub initial_mode: EvasionMode,
    /// Flip between spawn and evade mode on every restart.
    #[serde(default)]
    pub alternate_modes: bool,
    /// Stack order of the rejection control; decoys always paint above it.
    #[serde(default = "CardConfig::default_reject_stack_order")]
    pub reject_stack_order: u32,
    #[serde(default = "CardConfig::default_transition_ms")]
    pub transition_ms: u32,
    #[serde(default)]
    pub content: CardContent,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            max_decoys: Self::default_max_decoys(),
            batch: BatchPolicy::default(),
            placement: PercentRange::default(),
            initial_mode: EvasionMode::default(),
            alternate_modes: false,
            reject_stack_order: Self::default_reject_stack_order(),
            transition_ms: Self::default_transition_ms(),
            content: CardContent::default(),
        }
    }
}

impl CardConfig {
    const fn default_max_decoys() -> usize {
        DEFAULT_MAX_DECOYS
    }

    const fn default_reject_stack_order() -> u32 {
        DEFAULT_REJECT_STACK_ORDER
    }

    const fn default_transition_ms() -> u32 {
        DEFAULT_TRANSITION_MS
    }

    /// Configuration embedded with the web assets, or the built-in default
    /// when the asset does not parse.
    #[must_use]
    pub fn load_from_static() -> Self {
        STATIC_CONFIG.clone()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values break a
    /// configuration invariant.
    pub fn from_json(json: &str) -> Result<Self, CardConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| CardConfigError::Json(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the reducer relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), CardConfigError> {
        if !self.placement.is_valid() {
            return Err(CardConfigError::PlacementRange {
                field: "placement",
                min: self.placement.min,
                max: self.placement.max,
            });
        }
        if self.max_decoys == 0 {
            return Err(CardConfigError::ZeroCap);
        }
        if self.batch == BatchPolicy::fixed(0) {
            return Err(CardConfigError::EmptyBatch);
        }
        if self.transition_ms == 0 {
            return Err(CardConfigError::ZeroTransition);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_variant(self, variant: CardVariant) -> Self {
        variant.apply(self)
    }
}

/// Named tuning presets matching versions of the card that shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardVariant {
    /// Escalating batches, cap 250, placed within 10..=90.
    Classic,
    /// Three decoys per rejection, cap 251, placed within 5..=95.
    Burst,
    /// One decoy per rejection, cap 15, placed near the middle.
    Trickle,
    /// The rejection control runs away instead of spawning decoys.
    Evasive,
    /// Classic spawning that swaps to evasion on every restart.
    Alternating,
}

impl CardVariant {
    pub const ALL: [Self; 5] = [
        Self::Classic,
        Self::Burst,
        Self::Trickle,
        Self::Evasive,
        Self::Alternating,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Burst => "burst",
            Self::Trickle => "trickle",
            Self::Evasive => "evasive",
            Self::Alternating => "alternating",
        }
    }

    /// Overwrite the tuning fields of `base`, keeping its content.
    #[must_use]
    pub fn apply(self, base: CardConfig) -> CardConfig {
        let content = base.content;
        let transition_ms = base.transition_ms;
        let tuned = match self {
            Self::Classic => CardConfig::default(),
            Self::Burst => CardConfig {
                max_decoys: BURST_MAX_DECOYS,
                batch: BatchPolicy::fixed(BURST_BATCH),
                placement: PercentRange::new(BURST_PLACEMENT_MIN, BURST_PLACEMENT_MAX),
                ..CardConfig::default()
            },
            Self::Trickle => CardConfig {
                max_decoys: TRICKLE_MAX_DECOYS,
                batch: BatchPolicy::fixed(TRICKLE_BATCH),
                placement: PercentRange::new(TRICKLE_PLACEMENT_MIN, TRICKLE_PLACEMENT_MAX),
                ..CardConfig::default()
            },
            Self::Evasive => CardConfig {
                initial_mode: EvasionMode::Evade,
                ..CardConfig::default()
            },
            Self::Alternating => CardConfig {
                alternate_modes: true,
                ..CardConfig::default()
            },
        };
        CardConfig {
            content,
            transition_ms,
            ..tuned
        }
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CardVariant {
    type Err = CardConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CardConfigError::UnknownVariant(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_and_validates() {
        let config = CardConfig::from_json(DEFAULT_CARD_DATA).unwrap();
        assert_eq!(config.max_decoys, DEFAULT_MAX_DECOYS);
        assert_eq!(config.batch, BatchPolicy::Escalating);
        assert_eq!(config.content.recipient, "Josie");
        assert_eq!(CardConfig::load_from_static(), config);
    }

    #[test]
    fn empty_object_takes_defaults() {
        let config = CardConfig::from_json("{}").unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn fixed_batch_round_trips_through_json() {
        let config = CardConfig::from_json(r#"{"batch":{"kind":"fixed","size":3}}"#).unwrap();
        assert_eq!(config.batch, BatchPolicy::fixed(3));
    }

    #[test]
    fn validate_reports_each_violation() {
        let bad_range = CardConfig {
            placement: PercentRange::new(80.0, 20.0),
            ..CardConfig::default()
        };
        assert!(matches!(
            bad_range.validate(),
            Err(CardConfigError::PlacementRange { .. })
        ));

        let zero_cap = CardConfig {
            max_decoys: 0,
            ..CardConfig::default()
        };
        assert_eq!(zero_cap.validate(), Err(CardConfigError::ZeroCap));

        let empty_batch = CardConfig {
            batch: BatchPolicy::fixed(0),
            ..CardConfig::default()
        };
        assert_eq!(empty_batch.validate(), Err(CardConfigError::EmptyBatch));

        let instant = CardConfig {
            transition_ms: 0,
            ..CardConfig::default()
        };
        assert_eq!(instant.validate(), Err(CardConfigError::ZeroTransition));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = CardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CardConfigError::Json(_)));
    }

    #[test]
    fn variants_parse_case_insensitively() {
        assert_eq!("Burst".parse::<CardVariant>(), Ok(CardVariant::Burst));
        assert_eq!(" evasive ".parse::<CardVariant>(), Ok(CardVariant::Evasive));
        assert_eq!(
            "sideways".parse::<CardVariant>(),
            Err(CardConfigError::UnknownVariant("sideways".to_string()))
        );
    }

    #[test]
    fn variants_keep_content_and_validate() {
        let mut base = CardConfig::default();
        base.content.recipient = "Sam".to_string();
        for variant in CardVariant::ALL {
            let config = base.clone().with_variant(variant);
            assert_eq!(config.content.recipient, "Sam");
            config.validate().unwrap();
        }
        let trickle = base.with_variant(CardVariant::Trickle);
        assert_eq!(trickle.max_decoys, 15);
        assert_eq!(trickle.batch, BatchPolicy::fixed(1));
        assert_eq!(trickle.placement, PercentRange::new(30.0, 70.0));
    }
}
