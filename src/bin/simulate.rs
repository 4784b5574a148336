use std::time::Instant;

use montyhall::simulation::{
    aggregate_statistics, exact_stay_rate, exact_switch_rate, make_sampler, save_statistics,
    simulate_batch, SAMPLER_NAMES,
};
use montyhall::types::{validate_trial_count, TrialParams};

struct Args {
    doors: i64,
    opened: i64,
    trials: i64,
    seed: Option<u64>,
    sampler: String,
    output: Option<String>,
}

fn print_usage() {
    println!(
        "Usage: monty-simulate [--doors N] [--opened K] [--trials S] [--seed U64] [--sampler NAME] [--output DIR]"
    );
    println!();
    println!("Options:");
    println!("  --doors N        Total number of doors (default: 3)");
    println!("  --opened K       Doors opened by the host, 0..=N-2 (default: 1)");
    println!("  --trials S       Number of trials to simulate (default: 10000)");
    println!("  --seed U64       RNG seed (default: fresh OS entropy)");
    println!(
        "  --sampler NAME   Trial sampler: {} (default: {})",
        SAMPLER_NAMES.join(", "),
        SAMPLER_NAMES[0]
    );
    println!("  --output DIR     Write monty_statistics.json to DIR");
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut doors = 3i64;
    let mut opened = 1i64;
    let mut trials = 10_000i64;
    let mut seed: Option<u64> = None;
    let mut sampler = SAMPLER_NAMES[0].to_string();
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--doors" | "-n" => {
                i += 1;
                if i < args.len() {
                    doors = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --doors value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--opened" | "-k" => {
                i += 1;
                if i < args.len() {
                    opened = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --opened value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--trials" | "-s" => {
                i += 1;
                if i < args.len() {
                    trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = Some(args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    }));
                }
            }
            "--sampler" => {
                i += 1;
                if i < args.len() {
                    sampler = args[i].clone();
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        doors,
        opened,
        trials,
        seed,
        sampler,
        output,
    }
}

fn main() {
    let args = parse_args();

    let params = TrialParams::new(args.doors, args.opened).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let trials = validate_trial_count(args.trials).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    let sampler = make_sampler(&args.sampler).unwrap_or_else(|| {
        eprintln!(
            "Unknown sampler: '{}'. Available: {}",
            args.sampler,
            SAMPLER_NAMES.join(", ")
        );
        std::process::exit(1);
    });

    let num_threads = montyhall::env_config::init_rayon_threads();
    let seed = args.seed.unwrap_or_else(rand::random);

    println!("Monty Hall Simulation ({} trials)", trials);
    println!(
        "  Doors:       {} ({} opened by host, {} left to switch to)",
        params.doors(),
        params.opened(),
        params.remaining()
    );
    println!("  Sampler:     {}", sampler.name());
    println!("  Seed:        {}", seed);
    println!();

    println!("Simulating {} trials ({} threads)...", trials, num_threads);
    let sim_start = Instant::now();
    let result = simulate_batch(params, sampler.as_ref(), trials, seed);
    let sim_elapsed = sim_start.elapsed();

    let per_trial_ns = sim_elapsed.as_secs_f64() * 1e9 / trials as f64;
    let throughput = trials as f64 / sim_elapsed.as_secs_f64();

    println!("  Elapsed:     {:.1} ms", sim_elapsed.as_secs_f64() * 1000.0);
    println!("  Per trial:   {:.0} ns", per_trial_ns);
    println!("  Throughput:  {:.0} trials/sec", throughput);
    println!();

    println!("Results:");
    println!(
        "  Scenario 1: {}/{} = {:.3}% wins if the player sticks to the initial choice.",
        result.stay_wins,
        result.trials,
        result.stay_rate() * 100.0
    );
    println!(
        "  Scenario 2: {}/{} = {:.3}% wins if the player switches the initial choice.",
        result.switch_wins,
        result.trials,
        result.switch_rate() * 100.0
    );
    println!();

    let stats = aggregate_statistics(&result, params, sampler.name(), seed);
    println!(
        "  Expected:   stay {:.4}, switch {:.4}",
        exact_stay_rate(params),
        exact_switch_rate(params)
    );
    println!(
        "  Deviation:  stay z = {:+.2}, switch z = {:+.2}  (|z| < 3.0 expected)",
        stats.stay.z_score, stats.switch.z_score
    );
    if stats.stay.z_score.abs() > 3.5 || stats.switch.z_score.abs() > 3.5 {
        eprintln!("WARNING: Win rate deviates from the exact probability by more than 3.5 standard errors — possible sampler bug!");
    }

    if let Some(ref output_dir) = args.output {
        let json_path = format!("{}/monty_statistics.json", output_dir);
        save_statistics(&stats, &json_path);
        println!();
        println!("  Statistics:  {}", json_path);
    }
}
