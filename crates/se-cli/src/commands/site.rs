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
use futures::future::join_all;
use se_client::{run_cancellable, AsyncMonitoringClient};
use se_core::{Error, SiteListQuery, SiteStatus, SortOrder, VENDOR_CONCURRENCY_LIMIT};
use se_models::{from_value, SiteListResponse};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// A command that targets one site
#[derive(Args, Debug)]
pub struct SiteCommand {
  /// Site id
  pub site_id: u64,
}

#[derive(Args, Debug)]
pub struct SitesCommand {
  /// Page size (1-100)
  #[arg(long, default_value = "100")]
  size: u32,

  /// Index of the first site to return
  #[arg(long, default_value = "0")]
  start_index: u32,

  /// Free-text search on name, address and notes
  #[arg(short, long)]
  search: Option<String>,

  /// Status filter, repeatable (Active, Pending, Disabled, All)
  #[arg(long)]
  status: Vec<String>,

  /// ASC or DESC
  #[arg(long, default_value = "ASC")]
  sort_order: String,

  /// Print one line per site instead of JSON
  #[arg(long)]
  summary: bool,
}

impl SitesCommand {
  fn query(&self) -> Result<SiteListQuery> {
    let mut query = SiteListQuery {
      size: self.size,
      start_index: self.start_index,
      search_text: self.search.clone(),
      sort_order: self.sort_order.parse::<SortOrder>()?,
      ..Default::default()
    };
    if !self.status.is_empty() {
      query.status = self.status.iter().map(|s| s.parse::<SiteStatus>()).collect::<Result<_, _>>()?;
    }
    Ok(query)
  }
}

#[derive(Args, Debug)]
pub struct OverviewCommand {
  /// Site id
  site_id: u64,

  /// Further site ids to fetch alongside, a few at a time
  #[arg(long, num_args = 1..)]
  concurrent: Vec<u64>,
}

#[derive(Args, Debug)]
pub struct VersionCommand {
  /// Also list every supported version
  #[arg(long)]
  all: bool,
}

pub async fn sites(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: SitesCommand,
) -> Result<()> {
  let query = cmd.query()?;
  let response = run_cancellable(token, client.site_list(&query)).await?;

  if !cmd.summary {
    return print_json(&response);
  }

  let page: SiteListResponse = from_value(response)?;
  info!("{} sites visible, showing {}", page.sites.count, page.sites.site.len());
  for site in page.sites.site {
    println!(
      "{:>10}  {:<32}  {:<10}  {}",
      site.id,
      site.name,
      site.status.as_deref().unwrap_or("-"),
      site.peak_power.map(|p| format!("{p:.2} kWp")).unwrap_or_else(|| "-".to_string()),
    );
  }
  Ok(())
}

pub async fn details(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: SiteCommand,
) -> Result<()> {
  print_json(&run_cancellable(token, client.site_details(cmd.site_id)).await?)
}

pub async fn inventory(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: SiteCommand,
) -> Result<()> {
  print_json(&run_cancellable(token, client.inventory(cmd.site_id)).await?)
}

pub async fn overview(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: OverviewCommand,
) -> Result<()> {
  if cmd.concurrent.is_empty() {
    return print_json(&run_cancellable(token, client.overview(cmd.site_id)).await?);
  }

  let mut site_ids = vec![cmd.site_id];
  site_ids.extend(cmd.concurrent);

  // The API rejects more than three concurrent calls per key
  let mut overviews = serde_json::Map::new();
  for chunk in site_ids.chunks(VENDOR_CONCURRENCY_LIMIT) {
    let calls = chunk.iter().map(|&id| run_cancellable(token, client.overview(id)));
    let results = chunk.iter().copied().zip(join_all(calls).await);
    collect_overviews(results, &mut overviews)?;
  }

  print_json(&Value::Object(overviews))
}

/// Fold one chunk of overview results into `overviews`.
///
/// Per-site failures are recorded inline. Rate limiting and cancellation stop
/// the whole run.
fn collect_overviews(
  results: impl IntoIterator<Item = (u64, se_core::Result<Value>)>,
  overviews: &mut serde_json::Map<String, Value>,
) -> Result<()> {
  for (id, result) in results {
    match result {
      Ok(value) => {
        overviews.insert(id.to_string(), value);
      }
      Err(e) if e.is_rate_limited() => {
        warn!("Rate limited at site {}, stopping", id);
        return Err(e.into());
      }
      Err(Error::Cancelled) => {
        warn!("Cancelled at site {}, stopping", id);
        return Err(Error::Cancelled.into());
      }
      Err(e) => {
        warn!("Overview for site {} failed: {}", id, e);
        overviews.insert(id.to_string(), json!({ "error": e.to_string() }));
      }
    }
  }
  Ok(())
}

pub async fn version(
  client: &AsyncMonitoringClient,
  token: &CancellationToken,
  cmd: VersionCommand,
) -> Result<()> {
  let current = run_cancellable(token, client.current_version()).await?;
  if !cmd.all {
    return print_json(&current);
  }
  let supported = run_cancellable(token, client.supported_versions()).await?;
  print_json(&json!({ "current": current, "supported": supported }))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sites_command(status: &[&str], sort_order: &str) -> SitesCommand {
    SitesCommand {
      size: 50,
      start_index: 10,
      search: Some("barn".to_string()),
      status: status.iter().map(|s| s.to_string()).collect(),
      sort_order: sort_order.to_string(),
      summary: false,
    }
  }

  #[test]
  fn test_sites_query_from_flags() {
    let query = sites_command(&["disabled"], "desc").query().unwrap();
    assert_eq!(query.size, 50);
    assert_eq!(query.start_index, 10);
    assert_eq!(query.sort_order, SortOrder::Desc);
    assert_eq!(query.status, vec![SiteStatus::Disabled]);
  }

  #[test]
  fn test_sites_query_keeps_default_status() {
    let query = sites_command(&[], "ASC").query().unwrap();
    assert_eq!(query.status, vec![SiteStatus::Active, SiteStatus::Pending]);
  }

  #[test]
  fn test_sites_query_rejects_unknown_values() {
    assert!(sites_command(&["Retired"], "ASC").query().is_err());
    assert!(sites_command(&[], "SIDEWAYS").query().is_err());
  }

  #[test]
  fn test_overview_failures_recorded_inline() {
    let mut overviews = serde_json::Map::new();
    let results = vec![
      (1, Ok(json!({"overview": {}}))),
      (2, Err(Error::Http { status: 403, body: None })),
    ];
    collect_overviews(results, &mut overviews).unwrap();
    assert_eq!(overviews.len(), 2);
    assert!(overviews["2"]["error"].is_string());
  }

  #[test]
  fn test_overview_cancellation_stops_run() {
    let mut overviews = serde_json::Map::new();
    let results = vec![
      (1, Ok(json!({}))),
      (2, Err(Error::Cancelled)),
      (3, Ok(json!({}))),
    ];
    let err = collect_overviews(results, &mut overviews).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Cancelled)));
    assert!(!overviews.contains_key("2"));
    assert!(!overviews.contains_key("3"));
  }

  #[test]
  fn test_overview_rate_limit_stops_run() {
    let mut overviews = serde_json::Map::new();
    let results = vec![(1, Err(Error::RateLimit { status: 429 })), (2, Ok(json!({})))];
    assert!(collect_overviews(results, &mut overviews).is_err());
    assert!(overviews.is_empty());
  }
}
