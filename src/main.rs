// src/main.rs
//
// Command-line significance calculator for two-group A/B tests.
// Counts come from flags or a TOML config file; the verdict, metrics,
// and a text report go to stdout.

use absig::config::{default_config_template, RunConfig};
use absig::engine::run_significance_test;
use absig::models::{GroupObservation, Hypothesis, TestConfiguration, ZMethod};
use absig::report::render_report;
use clap::Parser;

#[derive(Parser)]
#[command(name = "absig")]
#[command(about = "Two-group conversion significance calculator (z-test)")]
struct Args {
    /// Events in group A
    #[arg(long, default_value = "23")]
    events_a: u64,

    /// Population of group A
    #[arg(long, default_value = "228")]
    population_a: u64,

    /// Events in group B
    #[arg(long, default_value = "30")]
    events_b: u64,

    /// Population of group B
    #[arg(long, default_value = "254")]
    population_b: u64,

    /// Hypothesis: "two-sided" or "one-sided"
    #[arg(long, default_value = "two-sided")]
    hypothesis: String,

    /// Significance threshold (strictly between 0 and 1)
    #[arg(long, default_value = "0.05")]
    alpha: f64,

    /// Z-score estimator: "pooled" or "unpooled"
    #[arg(long, default_value = "pooled")]
    method: String,

    /// Path to configuration file (TOML); takes precedence over the flags
    #[arg(long, short)]
    config: Option<String>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Generate a default configuration file
    #[arg(long)]
    generate_config: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    // Handle config generation
    if args.generate_config {
        println!("{}", default_config_template());
        return;
    }

    let (group_a, group_b, test) = match build_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Invalid inputs: {}", e);
            eprintln!("Use --generate-config to create a config template.");
            std::process::exit(1);
        }
    };

    let result = match run_significance_test(&group_a, &group_b, &test) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Test failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_report(&group_a, &group_b, &test, &result));
    }
}

// =============================================================================
// Input Assembly
// =============================================================================

fn build_inputs(
    args: &Args,
) -> Result<(GroupObservation, GroupObservation, TestConfiguration), String> {
    if let Some(path) = &args.config {
        return RunConfig::from_file(path)?.build();
    }

    let group_a = GroupObservation::new(args.events_a, args.population_a)
        .map_err(|e| format!("group A: {}", e))?;
    let group_b = GroupObservation::new(args.events_b, args.population_b)
        .map_err(|e| format!("group B: {}", e))?;

    let hypothesis: Hypothesis = args.hypothesis.parse()?;
    let method: ZMethod = args.method.parse()?;
    if args.alpha < 0.01 || args.alpha > 0.20 {
        log::warn!("alpha {} is outside the usual [0.01, 0.20] range", args.alpha);
    }
    let test = TestConfiguration::new(hypothesis, args.alpha)
        .map_err(|e| e.to_string())?
        .with_method(method);

    Ok((group_a, group_b, test))
}
