use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use valentine_card::{CardConfig, CardEvent, CardSession, CardVariant, derive_stream_seed};

use super::invariants::check_step;
use super::scenarios::TestScenario;

const SCRIPT_STREAM: &[u8] = b"tester-script";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub variant: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub events_dispatched: u64,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

/// What one iteration did before it stopped.
#[derive(Debug, Clone)]
pub struct IterationSummary {
    pub seed: u64,
    pub events: usize,
    pub failure: Option<String>,
}

pub struct LogicTester {
    base: CardConfig,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(base: CardConfig, verbose: bool) -> Self {
        Self { base, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        variant: CardVariant,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let variant = scenario.variant(variant);
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (variant: {} seed: {})",
                        scenario.name.bright_white(),
                        variant,
                        seed
                    );
                }
                self.run_single_scenario(scenario, variant, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        variant: CardVariant,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let config = variant.apply(self.base.clone());
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::with_capacity(iterations);
        let mut events_dispatched = 0_u64;

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let start = Instant::now();
            let summary = run_iteration(scenario, &config, iteration_seed);
            durations.push(start.elapsed());
            events_dispatched += u64::try_from(summary.events).unwrap_or(u64::MAX);

            match summary.failure {
                None => {
                    successes += 1;
                    if self.verbose {
                        println!(
                            "  ✅ Iteration {}/{} passed ({} events)",
                            i + 1,
                            iterations,
                            summary.events
                        );
                    }
                }
                Some(err) => {
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            i + 1,
                            iterations,
                            err.clone().red()
                        );
                    }
                    failures.push(format!(
                        "Iteration {} (variant {}, seed {}): {}",
                        i + 1,
                        variant,
                        summary.seed,
                        err
                    ));
                }
            }
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            variant: variant.label().to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            events_dispatched,
            failures,
            average_duration,
        }
    }
}

/// Play one scripted iteration, checking every step; stops at the first failure.
pub fn run_iteration(scenario: &TestScenario, config: &CardConfig, seed: u64) -> IterationSummary {
    let mut script_rng = SmallRng::seed_from_u64(derive_stream_seed(seed, SCRIPT_STREAM));
    let events = (scenario.script)(config, &mut script_rng);
    let mut session = CardSession::new(config.clone(), seed);

    for (index, event) in events.iter().copied().enumerate() {
        if let Err(err) = apply_checked(&mut session, event) {
            log::warn!("{} seed {seed} step {}: {err}", scenario.key, index + 1);
            return IterationSummary {
                seed,
                events: index + 1,
                failure: Some(format!("step {} ({}): {err}", index + 1, event.label())),
            };
        }
    }

    let failure = scenario
        .expectations
        .iter()
        .find_map(|expectation| expectation(&session).err())
        .map(|err| format!("after {} events: {err:#}", events.len()));

    IterationSummary {
        seed,
        events: events.len(),
        failure,
    }
}

fn apply_checked(
    session: &mut CardSession,
    event: CardEvent,
) -> Result<(), super::invariants::InvariantViolation> {
    let before = session.state().clone();
    let outcome = session.dispatch(event);
    check_step(session.config(), &before, event, outcome, session.state())
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}
