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

use super::print_json;
use anyhow::Result;
use clap::Args;
use se_client::{run_cancellable, AsyncMonitoringClient};
use se_core::TimeUnit;
use se_models::{from_value, EnergyResponse, PowerResponse};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::site::SiteCommand;

#[derive(Args, Debug)]
pub struct EnergyCommand {
  /// Site id
  site_id: u64,

  /// First day, YYYY-MM-DD
  #[arg(long)]
  start: String,

  /// Last day, YYYY-MM-DD
  #[arg(long)]
  end: String,

  /// QUARTER_OF_AN_HOUR, HOUR, DAY, WEEK, MONTH or YEAR
  #[arg(long, default_value = "DAY")]
  unit: String,

  /// Log the period total
  #[arg(long)]
  total: bool,
}

#[derive(Args, Debug)]
pub struct PowerCommand {
  /// Site id
  site_id: u64,

  /// Start, "YYYY-MM-DD hh:mm:ss" or YYYY-MM-DD
  #[arg(long)]
  start: String,

  /// End, "YYYY-MM-DD hh:mm:ss" or YYYY-MM-DD
  #[arg(long)]
  end: String,

  /// Log the peak reading
  #[arg(long)]
  peak: bool,
}

#[derive(Args, Debug)]
pub struct StorageCommand {
  /// Site id
  site_id: u64,

  #[arg(long)]
  start: String,

  #[arg(long)]
  end: String,

  /// Battery serial number, repeatable; all batteries when omitted
  #[arg(long)]
  serial: Vec<String>,
}

pub async fn energy(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: EnergyCommand,
) -> Result<()> {
  let unit: TimeUnit = cmd.unit.parse()?;
  let response =
    run_cancellable(token, client.energy(cmd.site_id, &cmd.start, &cmd.end, unit.as_str())).await?;

  if cmd.total {
    let series: EnergyResponse = from_value(response.clone())?;
    info!(
      "Site {} produced {:.1} {} between {} and {}",
      cmd.site_id,
      series.energy.total(),
      series.energy.unit,
      cmd.start,
      cmd.end
    );
  }
  print_json(&response)
}

pub async fn power(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: PowerCommand,
) -> Result<()> {
  let response = run_cancellable(token, client.power(cmd.site_id, &cmd.start, &cmd.end)).await?;

  if cmd.peak {
    let series: PowerResponse = from_value(response.clone())?;
    match series.power.peak() {
      Some(peak) => info!("Peak {:?} at {}", peak.value, peak.date),
      None => info!("No power readings in range"),
    }
  }
  print_json(&response)
}

pub async fn power_flow(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: SiteCommand,
) -> Result<()> {
  print_json(&run_cancellable(token, client.current_power_flow(cmd.site_id)).await?)
}

pub async fn storage(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: StorageCommand,
) -> Result<()> {
  let serials: Vec<&str> = cmd.serial.iter().map(String::as_str).collect();
  print_json(
    &run_cancellable(token, client.storage_data(cmd.site_id, &cmd.start, &cmd.end, &serials))
      .await?,
  )
}
