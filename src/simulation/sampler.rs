//! Trial samplers — two statistically equivalent ways to play one game.
//!
//! [`DirectSampler`] draws three uniforms and decides the switch outcome
//! through the symmetry of host behavior; [`ShuffleSampler`] materializes
//! the doors and plays the game out move by move. The second exists as a
//! cross-check for the first: both must converge to the same rates, which
//! the integration tests assert.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{TrialOutcome, TrialParams};

/// A trial-generation algorithm. Implementations assume `params` was
/// validated ([`TrialParams`] construction guarantees it) and must draw all
/// randomness from the passed-in generator.
pub trait TrialSampler: Send + Sync {
    fn name(&self) -> &'static str;
    fn sample(&self, params: TrialParams, rng: &mut SmallRng) -> TrialOutcome;
}

/// Sampler names accepted by [`make_sampler`], default first.
pub const SAMPLER_NAMES: &[&str] = &["direct", "shuffle"];

/// Resolve a CLI sampler spec to a concrete sampler.
pub fn make_sampler(spec: &str) -> Option<Box<dyn TrialSampler>> {
    match spec {
        "direct" => Some(Box::new(DirectSampler)),
        "shuffle" => Some(Box::new(ShuffleSampler)),
        _ => None,
    }
}

// ── Direct (symmetry-based) sampler ───────────────────────────────────────

/// O(1) sampler: three uniform draws, no allocation.
///
/// Conditioned on the initial pick being wrong, the car is uniform over the
/// `n-k-1` doors that survive the host's reveals (the host never opens the
/// car or the pick). So switch wins that branch with probability
/// `1/(n-k-1)`, modeled by one die roll landing on a fixed face.
pub struct DirectSampler;

impl TrialSampler for DirectSampler {
    fn name(&self) -> &'static str {
        "direct"
    }

    #[inline]
    fn sample(&self, params: TrialParams, rng: &mut SmallRng) -> TrialOutcome {
        let n = params.doors();
        let car_idx = rng.random_range(0..n);
        let player_idx = rng.random_range(0..n);
        let dice_roll = rng.random_range(1..=params.remaining());

        TrialOutcome {
            stay_won: car_idx == player_idx,
            switch_won: car_idx != player_idx && dice_roll == 1,
        }
    }
}

// ── Explicit-shuffle sampler ──────────────────────────────────────────────

/// O(n) sampler: plays the game out explicitly.
///
/// The host's `k` doors are chosen uniformly without replacement by
/// shuffling the openable doors and taking a prefix. The switching player
/// then draws uniformly from the alive set (unopened, non-chosen doors).
pub struct ShuffleSampler;

impl TrialSampler for ShuffleSampler {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    fn sample(&self, params: TrialParams, rng: &mut SmallRng) -> TrialOutcome {
        let n = params.doors() as usize;
        let k = params.opened() as usize;

        let car_idx = rng.random_range(0..n);
        let player_idx = rng.random_range(0..n);

        // Host may open any door that hides a goat and was not picked.
        let mut openable: Vec<usize> = (0..n)
            .filter(|&d| d != car_idx && d != player_idx)
            .collect();
        openable.shuffle(rng);

        let mut is_open = vec![false; n];
        for &d in openable.iter().take(k) {
            is_open[d] = true;
        }

        if player_idx == car_idx {
            return TrialOutcome {
                stay_won: true,
                switch_won: false,
            };
        }

        // Doors still available to switch to. The car is among them: the
        // host never opens it and the player did not pick it.
        let alive: Vec<usize> = (0..n)
            .filter(|&d| d != player_idx && !is_open[d])
            .collect();
        let final_pick = alive[rng.random_range(0..alive.len())];

        TrialOutcome {
            stay_won: false,
            switch_won: final_pick == car_idx,
        }
    }
}
