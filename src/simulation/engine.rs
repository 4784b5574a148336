//! Batch aggregation — run N independent trials and count wins.
//!
//! The sequential kernel [`simulate_trials`] owns nothing but its loop
//! counter pair; the random source is caller-owned. [`simulate_batch`]
//! parallelizes over rayon by splitting the run into fixed-size chunks,
//! seeding one private `SmallRng` per chunk (`seed.wrapping_add(chunk)`)
//! and merging per-chunk counters by summation, so results are identical
//! at any thread count.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::types::TrialParams;

use super::sampler::TrialSampler;

/// Trials per parallel work unit. Large enough that per-chunk seeding cost
/// vanishes, small enough to keep all workers busy on short runs.
pub const TRIALS_PER_CHUNK: u64 = 1 << 16;

/// Results of a batch simulation.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub stay_wins: u64,
    pub switch_wins: u64,
    pub trials: u64,
    pub elapsed: std::time::Duration,
}

impl SimulationResult {
    /// Fraction of trials the stay strategy won.
    #[inline]
    pub fn stay_rate(&self) -> f64 {
        self.stay_wins as f64 / self.trials as f64
    }

    /// Fraction of trials the switch strategy won.
    #[inline]
    pub fn switch_rate(&self) -> f64 {
        self.switch_wins as f64 / self.trials as f64
    }
}

/// Run `trials` i.i.d. trials with a caller-owned generator, returning
/// `(stay_wins, switch_wins)`. No trial's outcome depends on any other.
pub fn simulate_trials(
    params: TrialParams,
    sampler: &dyn TrialSampler,
    trials: u64,
    rng: &mut SmallRng,
) -> (u64, u64) {
    let mut stay_wins = 0u64;
    let mut switch_wins = 0u64;
    for _ in 0..trials {
        let outcome = sampler.sample(params, rng);
        stay_wins += outcome.stay_won as u64;
        switch_wins += outcome.switch_won as u64;
    }
    (stay_wins, switch_wins)
}

/// Run `trials` trials in parallel, deterministically for a given `seed`.
pub fn simulate_batch(
    params: TrialParams,
    sampler: &dyn TrialSampler,
    trials: u64,
    seed: u64,
) -> SimulationResult {
    let start = Instant::now();

    let num_chunks = trials.div_ceil(TRIALS_PER_CHUNK);
    let (stay_wins, switch_wins) = (0..num_chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(chunk));
            let remaining = trials - chunk * TRIALS_PER_CHUNK;
            let chunk_trials = remaining.min(TRIALS_PER_CHUNK);
            simulate_trials(params, sampler, chunk_trials, &mut rng)
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

    SimulationResult {
        stay_wins,
        switch_wins,
        trials,
        elapsed: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::sampler::DirectSampler;

    fn params(n: i64, k: i64) -> TrialParams {
        TrialParams::new(n, k).unwrap()
    }

    #[test]
    fn counts_bounded_by_trials() {
        let mut rng = SmallRng::seed_from_u64(5);
        let (stay, switch) = simulate_trials(params(10, 3), &DirectSampler, 5_000, &mut rng);
        assert!(stay <= 5_000);
        assert!(switch <= 5_000);
        assert!(stay + switch <= 5_000);
    }

    #[test]
    fn classical_counts_partition_trials() {
        // k = n-2: exactly one strategy wins each trial.
        let mut rng = SmallRng::seed_from_u64(5);
        let (stay, switch) = simulate_trials(params(3, 1), &DirectSampler, 5_000, &mut rng);
        assert_eq!(stay + switch, 5_000);
    }

    #[test]
    fn single_trial_boundary() {
        let result = simulate_batch(params(3, 1), &DirectSampler, 1, 42);
        assert_eq!(result.trials, 1);
        assert_eq!(result.stay_wins + result.switch_wins, 1);
    }

    #[test]
    fn batch_is_deterministic_under_seed() {
        let p = params(10, 3);
        let a = simulate_batch(p, &DirectSampler, 200_000, 42);
        let b = simulate_batch(p, &DirectSampler, 200_000, 42);
        assert_eq!(a.stay_wins, b.stay_wins);
        assert_eq!(a.switch_wins, b.switch_wins);
    }

    #[test]
    fn batch_spanning_multiple_chunks_counts_every_trial() {
        // Trial count chosen to leave a short tail chunk.
        let trials = 3 * TRIALS_PER_CHUNK + 17;
        let result = simulate_batch(params(3, 1), &DirectSampler, trials, 9);
        assert_eq!(result.trials, trials);
        assert_eq!(result.stay_wins + result.switch_wins, trials);
    }
}
