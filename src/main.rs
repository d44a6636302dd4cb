//! Hawk Black Box simulator CLI.
//!
//! Usage:
//!   hawk-blackbox <STRATEGY> <LEVEL> <DEVICES> [OPTIONS]
//!
//! Examples:
//!   hawk-blackbox BtoS 0 100000              # One run, full breakdown
//!   hawk-blackbox BtoS 0 10000 -n 50 -s 42   # 50 seeded runs, aggregated
//!   hawk-blackbox --list                     # Strategies and stabilizers

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hawk_blackbox::simulator::{run_simulation_with, SimConfig, SimReport};
use hawk_blackbox::{StabilizerRegistry, StrategyKind};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hawk-blackbox",
    version,
    about = "Estimate device yields of the Hawk black box combiner"
)]
struct Cli {
    /// Strategy to run (see --list)
    #[arg(required_unless_present = "list")]
    strategy: Option<StrategyKind>,

    /// Stabilizer level
    #[arg(required_unless_present = "list")]
    level: Option<u32>,

    /// Number of devices the strategy starts with
    #[arg(required_unless_present = "list")]
    devices: Option<usize>,

    /// Number of independent runs
    #[arg(short = 'n', long, default_value_t = 1)]
    runs: u32,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also save the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// List strategies and stabilizer levels, then exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = StabilizerRegistry::standard();

    if cli.list {
        print_catalog(&registry);
        return Ok(());
    }

    let config = SimConfig {
        strategy: cli.strategy.context("missing strategy")?,
        stabilizer_level: cli.level.context("missing stabilizer level")?,
        starting_devices: cli.devices.context("missing device count")?,
        num_runs: cli.runs,
        seed: cli.seed,
    };

    config.validate().context("Invalid simulation settings")?;
    let stabilizer = registry
        .get(config.stabilizer_level)
        .context("No stabilizer, aborting strategy")?;

    println!("{}", SimReport::header(&config, stabilizer));
    let report = run_simulation_with(&config, stabilizer).context("Simulation aborted")?;
    print!("{}", report.to_text());

    if cli.json {
        let filename = format!(
            "blackbox_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())
            .with_context(|| format!("Failed to write JSON report to {}", filename))?;
        println!("\nJSON report saved to: {}", filename);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// `RUST_LOG` directives, or `warn` when unset. `-v`/`-vv` override the
/// global level only.
fn log_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    let filter = rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    match verbose {
        0 => filter,
        1 => filter.add_directive(Level::DEBUG.into()),
        _ => filter.add_directive(Level::TRACE.into()),
    }
}

fn print_catalog(registry: &StabilizerRegistry) {
    println!("STRATEGIES:");
    for kind in StrategyKind::ALL {
        println!("  {:<8} {}", kind.id(), kind.name());
        for line in kind.description().lines() {
            println!("           {}", line);
        }
    }
    println!();
    println!("STABILIZER LEVELS:");
    for level in registry.levels() {
        let Ok(stabilizer) = registry.get(level) else {
            continue;
        };
        println!("  {:<8} {} composition tables", level, stabilizer.len());
        for (key, total) in stabilizer.irregular_tables() {
            println!("           {} weights sum to {}", key, total);
        }
    }
}
