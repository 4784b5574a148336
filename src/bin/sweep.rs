//! monty-sweep: run a batch for every host-reveal count `k` in `[0, n-2]`
//! and tabulate empirical vs. exact win rates.
//!
//! Useful for eyeballing how the switch advantage grows as the host opens
//! more doors: at k=0 both strategies sit at 1/n, at k=n-2 switch reaches
//! (n-1)/n.

use montyhall::simulation::{
    aggregate_statistics, make_sampler, simulate_batch, SAMPLER_NAMES,
};
use montyhall::types::{validate_trial_count, TrialParams};

fn print_usage() {
    println!("Usage: monty-sweep [--doors N] [--trials S] [--seed U64] [--sampler NAME]");
    println!();
    println!("Options:");
    println!("  --doors N        Total number of doors (default: 10)");
    println!("  --trials S       Trials per reveal count (default: 100000)");
    println!("  --seed U64       RNG seed (default: 42)");
    println!(
        "  --sampler NAME   Trial sampler: {} (default: {})",
        SAMPLER_NAMES.join(", "),
        SAMPLER_NAMES[0]
    );
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut doors = 10i64;
    let mut trials = 100_000i64;
    let mut seed = 42u64;
    let mut sampler_name = SAMPLER_NAMES[0].to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--doors" => {
                i += 1;
                doors = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --doors value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--trials" => {
                i += 1;
                trials = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --trials value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--seed" => {
                i += 1;
                seed = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i]);
                    std::process::exit(1);
                });
            }
            "--sampler" => {
                i += 1;
                sampler_name = args[i].clone();
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let trials = validate_trial_count(trials).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    // Validate the door count once via the smallest reveal count; per-k
    // params below can then only fail if the loop bound is wrong.
    if let Err(e) = TrialParams::new(doors, 0) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    let sampler = make_sampler(&sampler_name).unwrap_or_else(|| {
        eprintln!(
            "Unknown sampler: '{}'. Available: {}",
            sampler_name,
            SAMPLER_NAMES.join(", ")
        );
        std::process::exit(1);
    });

    let num_threads = montyhall::env_config::init_rayon_threads();

    println!(
        "Monty Hall sweep: {} doors, {} trials per reveal count, sampler '{}', seed {}, {} threads",
        doors,
        trials,
        sampler.name(),
        seed,
        num_threads
    );
    println!();
    println!(
        "{:>6}  {:>10}  {:>10}  {:>10}  {:>10}  {:>7}  {:>7}",
        "opened", "stay", "stay_exact", "switch", "sw_exact", "stay_z", "sw_z"
    );
    println!("{}", "-".repeat(72));

    for opened in 0..=(doors - 2) {
        let params = TrialParams::new(doors, opened).expect("reveal count in range");
        let result = simulate_batch(params, sampler.as_ref(), trials, seed);
        let stats = aggregate_statistics(&result, params, sampler.name(), seed);
        println!(
            "{:>6}  {:>10.5}  {:>10.5}  {:>10.5}  {:>10.5}  {:>+7.2}  {:>+7.2}",
            opened,
            stats.stay.rate,
            stats.stay.expected_rate,
            stats.switch.rate,
            stats.switch.expected_rate,
            stats.stay.z_score,
            stats.switch.z_score
        );
    }
}
