//! Recursive numerics CLI
//!
//! Usage:
//!   drills_recursion power <base> <exponent>
//!   drills_recursion fib <n>
//!   drills_recursion ncr <n> <r>
//!
//! Prints the result of every algorithm variant for the given input. The naive
//! recursive variants are skipped when n is above their tractable limit.

use drills_core::constants::{MAX_NAIVE_COMBINATION_N, MAX_NAIVE_FIBONACCI_N};
use drills_core::{CombinationMethod, FibonacciMethod, NumericError, PowerMethod};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Instant;

fn usage(program: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {} power <base> <exponent>", program);
    eprintln!("  {} fib <n>", program);
    eprintln!("  {} ncr <n> <r>", program);
    std::process::exit(1);
}

fn parse_arg<T: FromStr>(value: &str, name: &str) -> T {
    match value.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: Invalid {} '{}'", name, value);
            std::process::exit(1);
        }
    }
}

fn report<T: Display>(label: &str, result: Result<T, NumericError>, start: Instant) -> bool {
    let elapsed = start.elapsed();
    match result {
        Ok(value) => {
            println!("{}: {} ({:.3} ms)", label, value, elapsed.as_secs_f64() * 1000.0);
            true
        }
        Err(e) => {
            eprintln!("{}: error: {}", label, e);
            false
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
    }

    let mut all_ok = true;
    match (args[1].as_str(), args.len()) {
        ("power", 4) => {
            let base: i64 = parse_arg(&args[2], "base");
            let exponent: u32 = parse_arg(&args[3], "exponent");
            println!("{}^{}", base, exponent);
            for method in PowerMethod::ALL {
                let start = Instant::now();
                all_ok &= report(method.name(), method.compute(base, exponent), start);
            }
        }
        ("fib", 3) => {
            let n: u32 = parse_arg(&args[2], "n");
            println!("F({})", n);
            for method in FibonacciMethod::ALL {
                if !method.is_tractable(n) {
                    println!("{}: skipped (n > {})", method.name(), MAX_NAIVE_FIBONACCI_N);
                    continue;
                }
                let start = Instant::now();
                all_ok &= report(method.name(), method.compute(n), start);
            }
        }
        ("ncr", 4) => {
            let n: u32 = parse_arg(&args[2], "n");
            let r: u32 = parse_arg(&args[3], "r");
            println!("C({}, {})", n, r);
            for method in CombinationMethod::ALL {
                if !method.is_tractable(n) {
                    println!("{}: skipped (n > {})", method.name(), MAX_NAIVE_COMBINATION_N);
                    continue;
                }
                let start = Instant::now();
                all_ok &= report(method.name(), method.compute(n, r), start);
            }
        }
        _ => usage(&args[0]),
    }

    if !all_ok {
        std::process::exit(1);
    }
}
