//! Default tuning values for the card.
//!
//! Every value here can be overridden through [`crate::CardConfig`]; the
//! constants only define what a config falls back to when a field is absent.

// Logging targets ----------------------------------------------------------
pub(crate) const LOG_TARGET_REDUCER: &str = "valentine_card::reducer";
pub(crate) const LOG_TARGET_DECOY: &str = "valentine_card::decoy";
pub(crate) const LOG_TARGET_EVASION: &str = "valentine_card::evasion";
pub(crate) const LOG_TARGET_CONFIG: &str = "valentine_card::config";

// Decoy spawning -----------------------------------------------------------
pub const DEFAULT_MAX_DECOYS: usize = 250;
pub const DEFAULT_PLACEMENT_MIN: f32 = 10.0;
pub const DEFAULT_PLACEMENT_MAX: f32 = 90.0;
pub const DEFAULT_REJECT_STACK_ORDER: u32 = 0;
pub const PRIMARY_ACCEPT_STACK_ORDER: u32 = 10;

// Observed variant tuning --------------------------------------------------
pub const BURST_MAX_DECOYS: usize = 251;
pub const BURST_BATCH: u32 = 3;
pub const BURST_PLACEMENT_MIN: f32 = 5.0;
pub const BURST_PLACEMENT_MAX: f32 = 95.0;
pub const TRICKLE_MAX_DECOYS: usize = 15;
pub const TRICKLE_BATCH: u32 = 1;
pub const TRICKLE_PLACEMENT_MIN: f32 = 30.0;
pub const TRICKLE_PLACEMENT_MAX: f32 = 70.0;

// Percent bounds -----------------------------------------------------------
pub const PERCENT_MIN: f32 = 0.0;
pub const PERCENT_MAX: f32 = 100.0;

// Animation ----------------------------------------------------------------
pub const DEFAULT_TRANSITION_MS: u32 = 800;
pub const ENVELOPE_EXIT_OFFSET_PX: f32 = 200.0;
pub const LETTER_REST_OFFSET_PX: f32 = -50.0;
