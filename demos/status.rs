// SPDX-License-Identifier: MPL-2.0

//! Status dump example.
//!
//! Prints the decoded status, air quality, nominal flow, device clock and
//! preset levels of a `QStream` fan.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example status -- <device_ip> [timeout_secs]
//! ```
//!
//! Set `RUST_LOG=debug` to see the raw HTTP exchange.

use std::env;
use std::time::Duration;

use qstream_lib::Device;
use qstream_lib::types::LevelIndex;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <device_ip> [timeout_secs]", args[0]);
        std::process::exit(1);
    }

    let timeout = args
        .get(2)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .map_or(Duration::from_secs(10), Duration::from_secs);

    let device = Device::http(&args[1]).with_timeout(timeout).build()?;

    println!("=== QStream Device Status ===\n");

    let status = device.status().await?;
    println!("Current speed: {}%", status.actual_flow());
    println!("Target speed: {}%", status.set_flow());
    match status.timer_remaining_minutes() {
        Some(minutes) => println!("Timer active: {minutes} min left"),
        None => println!("Timer active: {}", status.timer_active()),
    }
    match status.schedule_mode() {
        Some(mode) => println!("Schedule enabled: {mode}"),
        None => println!("Schedule enabled: {}", status.schedule_enabled()),
    }
    println!("Demand control: {}", status.demand_control_enabled());
    println!(
        "Valve: {}",
        if status.valve_open() { "OPEN" } else { "CLOSED" }
    );

    println!("\nAir quality index: {}", device.air_quality().await?);
    println!("Nominal flow rate: {}", device.nominal_flow().await?);
    println!("Device clock: {}", device.datetime().await?);

    println!("\nPreset levels:");
    for index in LevelIndex::all() {
        match device.level(index).await {
            Ok(level) => println!("  Level {index}: {level}%"),
            Err(e) => println!("  Level {index}: Error - {e}"),
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
