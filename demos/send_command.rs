// SPDX-License-Identifier: MPL-2.0

//! Sends one command to a Nice blind.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example send_command -- <base_url> <username> <password> <adr,ept> <open|close|stop>
//! ```
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=nice_blinds=debug cargo run --example send_command -- http://192.168.1.20 admin secret 1,01 open
//! ```

use std::env;

use nice_blinds::{Controller, HttpConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 6 {
        eprintln!(
            "Usage: {} <base_url> <username> <password> <adr,ept> <open|close|stop>",
            args[0]
        );
        eprintln!();
        eprintln!("Example:");
        eprintln!("  cargo run --example send_command -- http://192.168.1.20 admin secret 1,01 open");
        std::process::exit(1);
    }

    let base_url = &args[1];
    let username = &args[2];
    let password = &args[3];
    let device_id = &args[4];
    let command = &args[5];

    let controller = Controller::new(HttpConfig::new(base_url).with_credentials(username, password));

    println!("Sending {command} to {device_id} via {base_url}...");
    let result = controller.send_raw(device_id, command).await;
    controller.close();

    let response = result?;
    println!("Command sent: {}", response.status_line());

    let body = response.body();
    let preview: String = body.chars().take(200).collect();
    println!("Response: {preview}");

    Ok(())
}
