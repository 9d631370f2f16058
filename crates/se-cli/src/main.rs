/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio_util::sync::CancellationToken;
use tracing::warn;

mod commands;
use commands::{
  site::{SiteCommand, VersionCommand},
  telemetry::{EnergyCommand, PowerCommand, StorageCommand},
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "se")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  #[command(flatten)]
  connection: config::ConnectionArgs,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// List the sites visible to the API key
  Sites(commands::site::SitesCommand),
  /// Site details
  Details(SiteCommand),
  /// Site overview, optionally for several sites at once
  Overview(commands::site::OverviewCommand),
  /// Energy between two dates
  Energy(EnergyCommand),
  /// Power between two timestamps
  Power(PowerCommand),
  /// Current power flow
  PowerFlow(SiteCommand),
  /// Battery measurements
  Storage(StorageCommand),
  /// Equipment inventory
  Inventory(SiteCommand),
  /// Current and supported API versions
  Version(VersionCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = cli.connection.into_config()?;
  let client = se_client::AsyncMonitoringClient::new(config)?;

  let token = CancellationToken::new();
  let on_interrupt = token.clone();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      warn!("Interrupted, cancelling in-flight requests");
      on_interrupt.cancel();
    }
  });

  let result = match cli.command {
    Commands::Sites(cmd) => commands::site::sites(&client, &token, cmd).await,
    Commands::Details(cmd) => commands::site::details(&client, &token, cmd).await,
    Commands::Overview(cmd) => commands::site::overview(&client, &token, cmd).await,
    Commands::Energy(cmd) => commands::telemetry::energy(&client, &token, cmd).await,
    Commands::Power(cmd) => commands::telemetry::power(&client, &token, cmd).await,
    Commands::PowerFlow(cmd) => commands::telemetry::power_flow(&client, &token, cmd).await,
    Commands::Storage(cmd) => commands::telemetry::storage(&client, &token, cmd).await,
    Commands::Inventory(cmd) => commands::site::inventory(&client, &token, cmd).await,
    Commands::Version(cmd) => commands::site::version(&client, &token, cmd).await,
  };

  client.close();
  result
}
