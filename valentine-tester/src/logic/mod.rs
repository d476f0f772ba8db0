pub mod invariants;
pub mod scenarios;
pub mod tester;

pub use scenarios::{get_scenario, list_scenarios, scenario_keys};
pub use tester::{LogicTester, ScenarioResult};
