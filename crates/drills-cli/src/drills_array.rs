//! Bounded array walkthrough CLI
//!
//! Usage: drills_array [--key <N>]
//! Example: drills_array --key 9
//!
//! Builds the 10-slot demo array, appends/inserts/deletes, then looks the key up
//! with linear, transposition, move-to-front and binary search.

use drills_core::app::array_demo::{Mutation, run_walkthrough};
use drills_core::constants::DEFAULT_SEARCH_KEY;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut key = DEFAULT_SEARCH_KEY;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--key" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("--key requires a value");
                    std::process::exit(1);
                }
                key = match args[i].parse() {
                    Ok(v) => v,
                    Err(_) => {
                        eprintln!("Error: Invalid search key '{}'", args[i]);
                        std::process::exit(1);
                    }
                };
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Usage: {} [--key <N>]", args[0]);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let walkthrough = match run_walkthrough(key) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Initial array (capacity {}):",
        walkthrough.initial.capacity()
    );
    println!("{}", walkthrough.initial);

    for step in &walkthrough.mutations {
        match step.operation {
            Mutation::Append { value } => println!("\nAppend {}:", value),
            Mutation::Insert { index, value } => println!("\nInsert {} at index {}:", value, index),
            Mutation::Delete { index, removed } => {
                println!("\nDelete index {} (removed {}):", index, removed)
            }
        }
        println!("{}", step.after);
    }

    for step in &walkthrough.searches {
        println!("\n== {} search ==", step.strategy.name());
        println!("{}", step.before);
        match step.index {
            Some(index) => println!("{} is at index {}", walkthrough.key, index),
            None => println!("{} was not found", walkthrough.key),
        }
        if step.strategy.reorders() && step.before != step.after {
            println!("After reordering:");
            println!("{}", step.after);
        }
    }
}
