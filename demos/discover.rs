// SPDX-License-Identifier: MPL-2.0

//! Tests the connection to a Nice controller and lists its devices, groups
//! and current positions.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example discover -- <base_url> [<username> <password>]
//! ```

use std::env;

use nice_blinds::manager::setup;
use nice_blinds::{Controller, HttpConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let args: Vec<String> = env::args().collect();

    let config = match args.len() {
        2 => HttpConfig::new(&args[1]),
        4 => HttpConfig::new(&args[1]).with_credentials(&args[2], &args[3]),
        _ => {
            eprintln!("Usage: {} <base_url> [<username> <password>]", args[0]);
            std::process::exit(1);
        }
    };

    let controller = Controller::new(config.clone());
    println!("Testing connection to {}...", config.base_url());
    if !controller.test_connection().await {
        eprintln!("Controller is not reachable");
        std::process::exit(1);
    }
    println!("Controller is reachable");

    let discovery = match setup::connect(&config).await {
        Ok(discovery) => discovery,
        Err(err) => {
            eprintln!("Setup failed [{}]: {err}", err.code());
            std::process::exit(1);
        }
    };

    println!();
    println!("Devices ({}):", discovery.devices.len());
    for device in &discovery.devices {
        let position = match controller.device_status(device.id()).await {
            Some(status) => status
                .position()
                .map_or_else(|| "unknown".to_string(), |p| p.to_string()),
            None => "no status".to_string(),
        };
        println!(
            "  {:<8} {:<24} {:<28} {position}",
            device.id().to_string(),
            device.name(),
            device.module_label()
        );
    }

    println!();
    println!("Groups ({}):", discovery.groups.len());
    for group in &discovery.groups {
        println!("  {:<4} {}", group.number().as_str(), group.name());
    }

    controller.close();
    Ok(())
}
