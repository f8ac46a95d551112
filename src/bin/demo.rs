//! Energy Tracker - Demo CLI
//!
//! Runs a handful of sample calculations against an in-memory store and
//! prints the resulting views. Nothing is written to disk.

use energy_tracker_lib::catalog::DEFAULT_APPLIANCES;
use energy_tracker_lib::pricing::RATE_PER_KWH;
use energy_tracker_lib::tracker::Tracker;

/// (appliance id, hours) as a user would submit them
const SAMPLE_REQUESTS: [(&str, &str); 6] = [
    ("1", "8"),
    ("2", "6"),
    ("5", "24"),
    ("6", "3.5"),
    ("7", "1"),
    ("4", "-2"),
];

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Energy Tracker - Demo CLI");
    println!("==============================================\n");

    // 1. Initialize store
    println!("[1/3] Initializing in-memory store...");
    let tracker = Tracker::in_memory()?;
    println!("      Seeded {} default appliances", DEFAULT_APPLIANCES.len());
    println!("      Rate: {:.2} per kWh\n", RATE_PER_KWH);

    // 2. Run sample calculations
    println!("[2/3] Recording sample usage...\n");
    for (appliance_id, hours) in SAMPLE_REQUESTS {
        match tracker.calculate(appliance_id, hours) {
            Ok(result) => println!(
                "      {:<16} {:>5} h  {:>7.3} kWh  {:>7.2}",
                result.appliance.name, result.hours_used, result.energy_kwh, result.cost
            ),
            Err(e) => println!("      Rejected ({}, {}): {}", appliance_id, hours, e),
        }
    }
    println!();

    // 3. Dashboard
    println!("[3/3] Building dashboard...\n");
    let dashboard = tracker.dashboard()?;
    for point in &dashboard.series {
        println!("      {:<16} {:>6.2} kWh", point.label, point.value);
    }

    println!("\n=== Summary ===\n");
    println!("  Records:       {}", dashboard.rows.len());
    println!("  Total Energy:  {:.3} kWh", dashboard.total_energy_kwh());
    println!("  Total Cost:    {:.2}", dashboard.total_cost());
    println!("  Warnings:      {}", dashboard.warning_count());
    println!();

    Ok(())
}
