//! ThermoPi CLI - Provision the DHT11 temperature/humidity monitor on a Raspberry Pi

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use thermopi_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
