//! Algorithm variant cross-check CLI
//!
//! Usage: drills_verify [--max-base <N>] [--max-exponent <N>] [--max-fib <N>] [--max-ncr <N>]
//! Example: drills_verify --max-fib 30
//!
//! Checks that every variant of power, Fibonacci and nCr agrees over the given
//! ranges. Exits with status 1 if any disagreement is found. The naive recursive
//! variants are skipped for inputs above their tractable limit.

use drills_core::app::crosscheck::{CrosscheckBounds, run_crosscheck};
use std::env;
use std::str::FromStr;
use std::time::Instant;

fn parse_value<T: FromStr>(args: &[String], i: usize, option: &str) -> T {
    let Some(raw) = args.get(i) else {
        eprintln!("{} requires a value", option);
        std::process::exit(1);
    };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: Invalid value '{}' for {}", raw, option);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut bounds = CrosscheckBounds::default();

    let mut i = 1;
    while i < args.len() {
        let option = args[i].as_str();
        match option {
            "--max-base" => bounds.max_base = parse_value(&args, i + 1, option),
            "--max-exponent" => bounds.max_exponent = parse_value(&args, i + 1, option),
            "--max-fib" => bounds.max_fibonacci_n = parse_value(&args, i + 1, option),
            "--max-ncr" => bounds.max_combination_n = parse_value(&args, i + 1, option),
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 2;
    }

    println!(
        "Cross-checking: |base| <= {}, exponent <= {}, fib n <= {}, nCr n <= {}",
        bounds.max_base, bounds.max_exponent, bounds.max_fibonacci_n, bounds.max_combination_n
    );

    let start = Instant::now();
    let report = run_crosscheck(&bounds);
    let elapsed = start.elapsed();

    if report.combination_max_n < bounds.max_combination_n {
        println!(
            "Note: nCr checked only up to n = {} (largest n whose factorial fits in u64).",
            report.combination_max_n
        );
    }

    println!(
        "Checked {} cases ({} power, {} fibonacci, {} combination) in {:.2} seconds.",
        report.total_cases(),
        report.power_cases,
        report.fibonacci_cases,
        report.combination_cases,
        elapsed.as_secs_f64()
    );

    if report.is_consistent() {
        println!("All variants agree.");
        return;
    }

    eprintln!("Found {} mismatches:", report.mismatches.len());
    for mismatch in &report.mismatches {
        eprintln!("  {:?}", mismatch);
    }
    std::process::exit(1);
}
