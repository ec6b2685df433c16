use analytics::SimulationReport;
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use configuration::Config;
use core_types::StrategyId;
use price_feed::build_feed;
use rust_decimal::Decimal;
use simulator::Simulator;
use std::path::PathBuf;
use strategies::{Strategy, create_strategy};
use tracing_subscriber::EnvFilter;

/// The main entry point for the drip simulator.
fn main() -> anyhow::Result<()> {
    // Default to "info" logging unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    tracing::debug!(path = %cli.config.display(), "scenario configuration loaded");

    // Execute the appropriate command
    match cli.command {
        Commands::Accumulate(args) => handle_accumulate(args, &config, cli.json),
        Commands::Decumulate(args) => handle_decumulate(args, &config, cli.json),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Compares recurring-investment policies against a monthly price series.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the scenario configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Emit the full report as JSON instead of a summary table.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate periodic buying against the configured price feed.
    Accumulate(AccumulateArgs),
    /// Seed a lump-sum position, then simulate periodic selling.
    Decumulate(DecumulateArgs),
}

#[derive(Parser)]
struct AccumulateArgs {
    /// Override the configured number of monthly periods.
    #[arg(long)]
    periods: Option<usize>,

    /// Override the configured spending cap.
    #[arg(long)]
    max_cash: Option<Decimal>,

    /// Run only the named policies (comma-separated, e.g. "fixed_price,fixed_value").
    #[arg(long, value_delimiter = ',')]
    only: Vec<StrategyId>,
}

#[derive(Parser)]
struct DecumulateArgs {
    /// Override the configured number of monthly periods.
    #[arg(long)]
    periods: Option<usize>,

    /// Override the configured size of the seeded lump-sum position.
    #[arg(long)]
    spot_units: Option<Decimal>,

    /// Run only the named policies (comma-separated, e.g. "fixed_price,fixed_value").
    #[arg(long, value_delimiter = ',')]
    only: Vec<StrategyId>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the orchestration of an accumulation run.
fn handle_accumulate(args: AccumulateArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let periods = args.periods.unwrap_or(config.simulation.periods);
    let max_cash = args.max_cash.unwrap_or(config.simulation.max_cash);

    let strategies = build_strategies(&args.only, config)?;
    let feed = build_feed(&config.prices).context("failed to build the price feed")?;

    let mut simulator = Simulator::new(strategies);
    let report = simulator.run_accumulation(feed, periods, max_cash)?;

    render_report(&report, json)
}

/// Handles the orchestration of a decumulation run.
fn handle_decumulate(args: DecumulateArgs, config: &Config, json: bool) -> anyhow::Result<()> {
    let periods = args.periods.unwrap_or(config.simulation.periods);
    let spot_units = args.spot_units.unwrap_or(config.simulation.spot_units);

    let strategies = build_strategies(&args.only, config)?;
    let feed = build_feed(&config.prices).context("failed to build the price feed")?;

    let mut simulator = Simulator::new(strategies);
    let report = simulator.run_decumulation(feed, periods, spot_units)?;

    render_report(&report, json)
}

/// Constructs the requested policies, defaulting to the whole family.
fn build_strategies(
    only: &[StrategyId],
    config: &Config,
) -> anyhow::Result<Vec<Box<dyn Strategy>>> {
    let ids: Vec<StrategyId> = if only.is_empty() {
        StrategyId::ALL.to_vec()
    } else {
        only.to_vec()
    };

    ids.into_iter()
        .map(|id| {
            create_strategy(id, config).with_context(|| format!("failed to construct strategy '{id}'"))
        })
        .collect()
}

/// Renders a finished run, either as a summary table or as raw JSON.
fn render_report(report: &SimulationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Run {} over {} periods", report.run_id, report.periods);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Strategy",
        "Paid",
        "Received",
        "Units Held",
        "Avg Cost",
        "Final Value",
        "Max Drawdown",
    ]);

    for summary in &report.summaries {
        table.add_row(vec![
            summary.label.clone(),
            summary.total_payment.round_dp(2).to_string(),
            summary.total_income.round_dp(2).to_string(),
            summary.units_held.round_dp(4).to_string(),
            summary.average_cost.round_dp(2).to_string(),
            summary.final_value.round_dp(2).to_string(),
            summary.max_drawdown.round_dp(2).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
