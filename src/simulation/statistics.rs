//! Statistics aggregation for a simulation run.
//!
//! Pairs each empirical win rate with its closed-form expectation, binomial
//! standard error, and z-score. A large |z| after a long run points at a
//! sampler bug, not bad luck; the binaries warn past 3.5.

use serde::Serialize;

use crate::types::TrialParams;

use super::engine::SimulationResult;

/// Full run summary, serializable to JSON.
#[derive(Serialize)]
pub struct RunStatistics {
    pub trials: u64,
    pub seed: u64,
    pub doors: u64,
    pub opened: u64,
    pub sampler: String,
    pub elapsed_ms: f64,
    pub stay: StrategySummary,
    pub switch: StrategySummary,
}

/// Per-strategy outcome summary.
#[derive(Serialize)]
pub struct StrategySummary {
    pub wins: u64,
    pub rate: f64,
    pub expected_rate: f64,
    pub std_error: f64,
    pub z_score: f64,
}

/// Exact stay win probability: the initial pick is the car, `1/n`.
pub fn exact_stay_rate(params: TrialParams) -> f64 {
    1.0 / params.doors() as f64
}

/// Exact switch win probability: wrong initial pick `(n-1)/n`, then a
/// uniform pick among the `n-k-1` survivors, `(n-1) / (n * (n-k-1))`.
pub fn exact_switch_rate(params: TrialParams) -> f64 {
    let n = params.doors() as f64;
    (n - 1.0) / (n * params.remaining() as f64)
}

fn summarize(wins: u64, trials: u64, expected: f64) -> StrategySummary {
    let rate = wins as f64 / trials as f64;
    // Binomial standard error at the expected rate; expected is strictly
    // inside (0, 1) for every valid parameterization.
    let std_error = (expected * (1.0 - expected) / trials as f64).sqrt();
    StrategySummary {
        wins,
        rate,
        expected_rate: expected,
        std_error,
        z_score: (rate - expected) / std_error,
    }
}

/// Aggregate a batch result into a [`RunStatistics`].
pub fn aggregate_statistics(
    result: &SimulationResult,
    params: TrialParams,
    sampler: &str,
    seed: u64,
) -> RunStatistics {
    RunStatistics {
        trials: result.trials,
        seed,
        doors: params.doors(),
        opened: params.opened(),
        sampler: sampler.to_string(),
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
        stay: summarize(result.stay_wins, result.trials, exact_stay_rate(params)),
        switch: summarize(result.switch_wins, result.trials, exact_switch_rate(params)),
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &RunStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
