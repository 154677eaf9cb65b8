use std::process::ExitCode;

use binary_radix_sort::{cross_check_powers_of_two, run_benchmark, BenchmarkConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Time the binary radix sort on shuffled sequences
#[derive(Parser, Debug)]
#[command(name = "binary-radix-bench", version, about)]
struct BenchArgs {
    /// Number of elements in every sorted sequence
    #[arg(long, default_value_t = 1_000_000)]
    items: usize,

    /// Number of timed sorts
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Seed for shuffling the input sequences
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Compare the logarithmic and bit-scan digit estimators on powers of two instead of sorting
    #[arg(long)]
    check_digits: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = BenchArgs::parse();

    if args.check_digits {
        return match cross_check_powers_of_two(29) {
            None => {
                println!("Digit estimators agree on 2^1..=2^29");
                ExitCode::SUCCESS
            }
            Some(mismatch) => {
                println!(
                    "Estimators disagree at {}: logarithmic {}, bit scan {}",
                    mismatch.value, mismatch.logarithmic, mismatch.bit_scan
                );
                ExitCode::FAILURE
            }
        };
    }

    let config = BenchmarkConfig {
        items: args.items,
        iterations: args.iterations,
        seed: args.seed,
    };

    println!("\tItems:\t\t{}", config.items);
    println!("\tIterations:\t{}", config.iterations);

    let report = match run_benchmark(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for (i, result) in report.iterations().iter().enumerate() {
        println!(
            "{}\tTime elapsed:\t{:.3} ms\t({} passes)",
            i + 1,
            result.duration.as_secs_f64() * 1000.0,
            result.passes
        );
        if !result.verified {
            println!("Sorted output failed verification");
            return ExitCode::FAILURE;
        }
    }

    println!("---------------------");
    println!("Time average:\t\t{:.3} ms", report.average().as_secs_f64() * 1000.0);

    ExitCode::SUCCESS
}
