//! Energy Tracker - Main entry point
//!
//! Bootstraps the store (seeding the appliance catalog on first run) and
//! presents the index, result, and dashboard views on the terminal.

mod cli;

use anyhow::Context;
use clap::Parser;
use energy_tracker_lib::core::{Config, DisplayConfig};
use energy_tracker_lib::report::Dashboard;
use energy_tracker_lib::tracker::Tracker;

use crate::cli::{Args, CalcArgs, Command, DashboardArgs};

fn main() {
    if let Err(e) = run() {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load or create configuration
    let config = Config::load();

    let log_level = config
        .as_ref()
        .map(|c| c.general.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    log::info!("Starting Energy Tracker v{}", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let tracker = Tracker::open(&config).context("failed to open the usage database")?;

    match args.command.unwrap_or(Command::List) {
        Command::List => print_index(&tracker),
        Command::Calc(CalcArgs { appliance_id, hours }) => {
            print_result(&tracker, &appliance_id, &hours, &config.display)
        }
        Command::Dashboard(DashboardArgs { json: true }) => {
            let view = tracker.dashboard()?.view();
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
        Command::Dashboard(DashboardArgs { json: false }) => {
            print_dashboard(&tracker.dashboard()?, &config.display)
        }
    }
}

fn print_index(tracker: &Tracker) -> anyhow::Result<()> {
    println!("  ID  | Appliance        | Power (W)");
    println!("------+------------------+----------");
    for appliance in tracker.index()? {
        println!("  {:>3} | {:<16} | {:>8.0}", appliance.id, appliance.name, appliance.power);
    }
    Ok(())
}

fn print_result(
    tracker: &Tracker,
    appliance_id: &str,
    hours: &str,
    display: &DisplayConfig,
) -> anyhow::Result<()> {
    let result = tracker
        .calculate(appliance_id, hours)
        .context("calculation rejected")?;

    println!("  Appliance: {} ({} W)", result.appliance.name, result.appliance.power);
    println!("  Hours:     {}", result.hours_used);
    println!("  Energy:    {:.3} kWh", result.energy_kwh);
    println!("  Cost:      {}", display.format_cost(result.cost));
    println!();
    println!("  Energy saving tips:");
    for tip in &result.tips {
        println!("    {}", tip);
    }
    Ok(())
}

fn print_dashboard(dashboard: &Dashboard, display: &DisplayConfig) -> anyhow::Result<()> {
    println!("  Appliance        |  Hours  | Energy (kWh) |  Cost");
    println!("-------------------+---------+--------------+---------");
    for row in &dashboard.rows {
        println!(
            "  {:<16} | {:>7.2} | {:>12.3} | {}",
            row.appliance_name,
            row.hours_used,
            row.energy_kwh,
            display.format_cost(row.cost)
        );
    }
    println!("-------------------+---------+--------------+---------");
    println!(
        "  Total            |         | {:>12.3} | {}",
        dashboard.total_energy_kwh(),
        display.format_total(dashboard.total_cost())
    );

    if dashboard.warning_count() > 0 {
        println!(
            "\n  {} usage record(s) skipped: appliance no longer in catalog",
            dashboard.warning_count()
        );
    }
    Ok(())
}
