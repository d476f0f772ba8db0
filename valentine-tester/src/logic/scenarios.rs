//! Catalog of scripted and randomized card scenarios.
use anyhow::{Result, ensure};
use rand::Rng;
use rand::rngs::SmallRng;
use valentine_card::{CardConfig, CardEvent, CardSession, CardVariant, EvasionMode, EvasiveButton};

/// Builds the event sequence for one iteration.
pub type EventScript = fn(&CardConfig, &mut SmallRng) -> Vec<CardEvent>;

/// Final-state assertion run after the script completes.
pub type Expectation = fn(&CardSession) -> Result<()>;

#[derive(Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Preset this scenario needs regardless of `--variant`.
    pub pinned_variant: Option<CardVariant>,
    pub script: EventScript,
    pub expectations: Vec<Expectation>,
}

impl TestScenario {
    /// Variant to run with, given the CLI choice.
    #[must_use]
    pub fn variant(&self, requested: CardVariant) -> CardVariant {
        self.pinned_variant.unwrap_or(requested)
    }
}

const RANDOM_WALK_STEPS: usize = 200;
const EXTRA_REJECTIONS_AT_CAP: usize = 3;

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .into_iter()
        .map(|s| (s.key, s.description))
        .collect()
}

pub fn get_scenario(key: &str) -> Option<TestScenario> {
    all_scenarios().into_iter().find(|s| s.key == key)
}

pub fn scenario_keys() -> Vec<&'static str> {
    all_scenarios().into_iter().map(|s| s.key).collect()
}

fn all_scenarios() -> Vec<TestScenario> {
    vec![
        TestScenario {
            key: "smoke",
            name: "Smoke",
            description: "Open, reject twice, accept and restart",
            pinned_variant: None,
            script: smoke_script,
            expectations: vec![expect_pristine],
        },
        TestScenario {
            key: "saturation",
            name: "Decoy Saturation",
            description: "Reject past the decoy cap and confirm it holds",
            pinned_variant: None,
            script: saturation_script,
            expectations: vec![expect_saturated, expect_still_asking],
        },
        TestScenario {
            key: "evasive",
            name: "Evasive Rejection",
            description: "Chase the rejection button, then accept",
            pinned_variant: Some(CardVariant::Evasive),
            script: evasive_script,
            expectations: vec![expect_relocated_without_decoys, expect_accepted],
        },
        TestScenario {
            key: "alternating",
            name: "Alternating Modes",
            description: "Two full rounds with the mode swapping on restart",
            pinned_variant: Some(CardVariant::Alternating),
            script: alternating_script,
            expectations: vec![expect_pristine, expect_initial_mode],
        },
        TestScenario {
            key: "random-walk",
            name: "Random Walk",
            description: "Random events including stale decoy indices",
            pinned_variant: None,
            script: random_walk_script,
            expectations: Vec::new(),
        },
    ]
}

fn smoke_script(_: &CardConfig, _: &mut SmallRng) -> Vec<CardEvent> {
    vec![
        CardEvent::OpenEnvelope,
        CardEvent::Reject,
        CardEvent::Reject,
        CardEvent::ACCEPT_PRIMARY,
        CardEvent::Restart,
    ]
}

fn saturation_script(config: &CardConfig, _: &mut SmallRng) -> Vec<CardEvent> {
    // Every batch adds at least one decoy, so `max_decoys` rejections reach the cap.
    let rejections = config.max_decoys + EXTRA_REJECTIONS_AT_CAP;
    std::iter::once(CardEvent::OpenEnvelope)
        .chain(std::iter::repeat_n(CardEvent::Reject, rejections))
        .collect()
}

fn evasive_script(_: &CardConfig, rng: &mut SmallRng) -> Vec<CardEvent> {
    let hovers = rng.gen_range(1..=8);
    let mut events = vec![CardEvent::OpenEnvelope];
    events.extend(std::iter::repeat_n(CardEvent::PointerEnterReject, hovers));
    events.extend([
        CardEvent::Reject,
        CardEvent::PointerEnterReject,
        CardEvent::ACCEPT_PRIMARY,
        CardEvent::PointerEnterReject,
    ]);
    events
}

fn alternating_script(_: &CardConfig, _: &mut SmallRng) -> Vec<CardEvent> {
    vec![
        CardEvent::OpenEnvelope,
        CardEvent::Reject,
        CardEvent::accept_decoy(0),
        CardEvent::Restart,
        CardEvent::OpenEnvelope,
        CardEvent::PointerEnterReject,
        CardEvent::Reject,
        CardEvent::ACCEPT_PRIMARY,
        CardEvent::Restart,
    ]
}

fn random_walk_script(config: &CardConfig, rng: &mut SmallRng) -> Vec<CardEvent> {
    // Decoy indices may point past the current decoys; the reducer must ignore those.
    let index_bound = config.max_decoys.saturating_add(1);
    (0..RANDOM_WALK_STEPS)
        .map(|_| match rng.gen_range(0..100) {
            0..10 => CardEvent::OpenEnvelope,
            10..50 => CardEvent::Reject,
            50..70 => CardEvent::PointerEnterReject,
            70..78 => CardEvent::accept_decoy(rng.gen_range(0..index_bound)),
            78..82 => CardEvent::ACCEPT_PRIMARY,
            _ => CardEvent::Restart,
        })
        .collect()
}

fn expect_pristine(session: &CardSession) -> Result<()> {
    ensure!(
        session.state().is_pristine(),
        "card not fresh after restart: {:?}",
        session.state()
    );
    Ok(())
}

fn expect_initial_mode(session: &CardSession) -> Result<()> {
    let mode = session.state().evasion_mode;
    ensure!(
        mode == session.config().initial_mode,
        "mode {} after an even number of restarts",
        mode.label()
    );
    Ok(())
}

fn expect_saturated(session: &CardSession) -> Result<()> {
    let state = session.state();
    let config = session.config();
    if config.initial_mode == EvasionMode::Evade {
        ensure!(state.decoys.is_empty(), "evasive card spawned decoys");
        return Ok(());
    }
    ensure!(
        state.decoys.len() == config.max_decoys,
        "expected {} decoys at the cap, found {}",
        config.max_decoys,
        state.decoys.len()
    );
    let expected = u32::try_from(config.max_decoys + EXTRA_REJECTIONS_AT_CAP).unwrap_or(u32::MAX);
    ensure!(
        state.rejection_count == expected,
        "expected {expected} rejections, counted {}",
        state.rejection_count
    );
    Ok(())
}

fn expect_still_asking(session: &CardSession) -> Result<()> {
    ensure!(session.state().is_asking(), "card stopped asking");
    Ok(())
}

fn expect_relocated_without_decoys(session: &CardSession) -> Result<()> {
    let state = session.state();
    ensure!(state.decoys.is_empty(), "evasive card spawned decoys");
    ensure!(
        matches!(state.evasive, EvasiveButton::Relocated(_)),
        "rejection button never moved"
    );
    ensure!(
        state.rejection_count == 1,
        "expected one rejection, counted {}",
        state.rejection_count
    );
    Ok(())
}

fn expect_accepted(session: &CardSession) -> Result<()> {
    ensure!(session.state().accepted, "card was not accepted");
    Ok(())
}
