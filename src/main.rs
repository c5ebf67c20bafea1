use anyhow::{Context, Result};
use clap::{arg, Command};
use knapsack_tabu::input::{format_report, parse_instance};
use knapsack_tabu::neighborhood::TweakMode;
use knapsack_tabu::tabu::{SearchStrategy, TabuConfig, TabuRunner};
use std::{fs, io::Read, path::PathBuf, time::Duration};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("knapsack-tabu")
        .about("Solves a 0/1 knapsack instance with Tabu Search")
        .long_about(
            "Reads `N W` followed by N `weight value` pairs from INPUT (or stdin) \
             and prints the best selection found.",
        )
        .arg(
            arg!([INPUT] "Path to the instance file; stdin if omitted")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--iterations [ITERATIONS] "Neighbor-generation steps per round")
                .default_value("1000")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--rounds [ROUNDS] "Number of search rounds")
                .default_value("1")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"tabu-size" [TABU_SIZE] "Tabu list capacity")
                .default_value("10")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--strategy [STRATEGY] "Round strategy")
                .default_value("sampled")
                .value_parser(["sampled", "steepest"]),
        )
        .arg(
            arg!(--tweak [TWEAK] "Tweak fallback feasibility handling")
                .default_value("faithful")
                .value_parser(["faithful", "tracked"]),
        )
        .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64)))
        .arg(
            arg!(--"time-limit-ms" [MILLIS] "Wall-clock limit in milliseconds")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    let text = match matches.get_one::<PathBuf>("INPUT") {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read instance from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read instance from stdin")?;
            buffer
        }
    };
    let problem = parse_instance(&text).context("Failed to parse instance")?;

    let strategy = match matches.get_one::<String>("strategy").map(String::as_str) {
        Some("steepest") => SearchStrategy::Steepest,
        _ => SearchStrategy::Sampled,
    };
    let tweak_mode = match matches.get_one::<String>("tweak").map(String::as_str) {
        Some("tracked") => TweakMode::WeightTracked,
        _ => TweakMode::Faithful,
    };

    let mut config = TabuConfig::default()
        .with_iteration_budget(*matches.get_one::<usize>("iterations").unwrap())
        .with_rounds(*matches.get_one::<usize>("rounds").unwrap())
        .with_tabu_capacity(*matches.get_one::<usize>("tabu-size").unwrap())
        .with_strategy(strategy)
        .with_tweak_mode(tweak_mode);
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }
    if let Some(millis) = matches.get_one::<u64>("time-limit-ms") {
        config = config.with_time_limit(Duration::from_millis(*millis));
    }

    let result = TabuRunner::run(&problem, &config).context("Search failed")?;
    print!("{}", format_report(&problem, &result));
    Ok(())
}
