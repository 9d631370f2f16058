//! Fleet Report Example
//!
//! Lists every site on the account, then pulls yesterday's energy for all of
//! them with the bulk endpoint (up to 100 sites per call) and reports the
//! best and worst producers. Falls back to the blocking client when run
//! with `--blocking`.

use chrono::{Duration, Local};
use se_client::{blocking::MonitoringClient, AsyncMonitoringClient};
use se_core::{Config, Error, SiteListQuery, TimeUnit, MAX_BULK_SITES};
use se_models::{from_value, SiteListResponse};
use serde_json::Value;

/// Per-site production for one day
#[derive(Debug)]
struct SiteYield {
  site_id: u64,
  energy_wh: f64,
}

fn yields_from_bulk(response: &Value) -> Vec<SiteYield> {
  response["sitesEnergy"]["siteEnergyList"]
    .as_array()
    .map(|sites| {
      sites
        .iter()
        .filter_map(|site| {
          let site_id = site["siteId"].as_u64()?;
          let energy_wh = site["energyValues"]["values"]
            .as_array()?
            .iter()
            .filter_map(|v| v["value"].as_f64())
            .sum();
          Some(SiteYield { site_id, energy_wh })
        })
        .collect()
    })
    .unwrap_or_default()
}

fn report(mut yields: Vec<SiteYield>) {
  yields.sort_by(|a, b| b.energy_wh.total_cmp(&a.energy_wh));
  println!("\n{:>10}  {:>12}", "site", "kWh");
  for y in &yields {
    println!("{:>10}  {:>12.2}", y.site_id, y.energy_wh / 1000.0);
  }
  let total: f64 = yields.iter().map(|y| y.energy_wh).sum();
  println!("Fleet total: {:.2} kWh across {} sites", total / 1000.0, yields.len());
}

async fn run_async(config: Config, day: &str) -> Result<Vec<SiteYield>, Error> {
  let client = AsyncMonitoringClient::new(config)?;
  let page: SiteListResponse = from_value(client.site_list(&SiteListQuery::default()).await?)?;
  let ids: Vec<u64> = page.sites.site.iter().map(|s| s.id).collect();

  let mut yields = Vec::new();
  for chunk in ids.chunks(MAX_BULK_SITES) {
    match client.sites_energy(chunk, day, day, TimeUnit::Day.as_str()).await {
      Ok(response) => yields.extend(yields_from_bulk(&response)),
      Err(e) if e.is_rate_limited() => {
        eprintln!("Daily quota spent, reporting what we have");
        break;
      }
      Err(e) => return Err(e),
    }
  }
  client.close();
  Ok(yields)
}

fn run_blocking(config: Config, day: &str) -> Result<Vec<SiteYield>, Error> {
  let client = MonitoringClient::new(config)?;
  let page: SiteListResponse = from_value(client.site_list(&SiteListQuery::default())?)?;
  let ids: Vec<u64> = page.sites.site.iter().map(|s| s.id).collect();

  let mut yields = Vec::new();
  for chunk in ids.chunks(MAX_BULK_SITES) {
    yields.extend(yields_from_bulk(&client.sites_energy(chunk, day, day, "DAY")?));
  }
  Ok(yields)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;
  let day = (Local::now().date_naive() - Duration::days(1)).format("%Y-%m-%d").to_string();
  println!("Fleet production for {}", day);

  let yields = if std::env::args().any(|a| a == "--blocking") {
    tokio::task::spawn_blocking(move || run_blocking(config, &day)).await??
  } else {
    run_async(config, &day).await?
  };

  report(yields);
  Ok(())
}
