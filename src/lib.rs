//! # Monty Hall — generalized Monty Hall Monte Carlo simulator
//!
//! Estimates win probabilities for the Monty Hall puzzle with `n` doors of
//! which the host opens `k`, by running `s` independent random trials and
//! counting wins for the two player strategies (**stay** and **switch**).
//!
//! ## Sampling algorithms
//!
//! | Name | Rust item | Cost | Description |
//! |------|-----------|------|-------------|
//! | `direct` | [`simulation::DirectSampler`] | O(1) | Three uniform draws; the switch-win condition uses the symmetry of host behavior |
//! | `shuffle` | [`simulation::ShuffleSampler`] | O(n) | Materializes the doors, shuffles the host's openable doors, draws from the survivors |
//!
//! The `direct` sampler rests on one observation: given that the player's
//! initial pick is wrong (probability `(n-1)/n`), the host opens only
//! non-car, non-chosen doors, so the car is uniform over the `n-k-1` doors
//! the player could switch to. Switch therefore wins with probability
//! `1/(n-k-1)` in that branch, which a single die roll models exactly.
//!
//! ## Determinism
//!
//! Random sources are caller-owned and explicitly passed; nothing in the
//! crate holds a process-global generator. The parallel batch runner in
//! [`simulation::engine`] derives one seed per fixed-size chunk, so a given
//! `(params, sampler, trials, seed)` tuple produces identical counts at any
//! thread count.

pub mod env_config;
pub mod simulation;
pub mod types;
