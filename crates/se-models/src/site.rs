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

//! Site list, details, data period and overview

use crate::common::{EnergyFigure, PowerFigure};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `sites/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteListResponse {
  pub sites: SitePage,
}

/// One page of sites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitePage {
  pub count: u64,
  #[serde(rename = "site", alias = "list", default)]
  pub site: Vec<Site>,
}

/// A monitored installation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
  pub id: u64,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub account_id: Option<u64>,
  #[serde(default)]
  pub status: Option<String>,
  /// kWp
  #[serde(default)]
  pub peak_power: Option<f64>,
  #[serde(default)]
  pub last_update_time: Option<String>,
  #[serde(default)]
  pub installation_date: Option<String>,
  #[serde(default, rename = "type")]
  pub site_type: Option<String>,
  #[serde(default)]
  pub location: Option<Location>,
}

/// Postal location of a site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
  #[serde(default)]
  pub country: Option<String>,
  #[serde(default)]
  pub city: Option<String>,
  #[serde(default)]
  pub address: Option<String>,
  #[serde(default)]
  pub zip: Option<String>,
  #[serde(default)]
  pub time_zone: Option<String>,
}

/// `site/{id}/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDetailsResponse {
  pub details: Site,
}

/// `site/{id}/dataPeriod`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPeriodResponse {
  pub data_period: DataPeriod,
}

/// First and last day with production data. Both are absent for a site that never reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPeriod {
  #[serde(default)]
  pub start_date: Option<String>,
  #[serde(default)]
  pub end_date: Option<String>,
}

impl DataPeriod {
  pub fn start(&self) -> Option<NaiveDate> {
    parse_day(self.start_date.as_deref())
  }

  pub fn end(&self) -> Option<NaiveDate> {
    parse_day(self.end_date.as_deref())
  }
}

fn parse_day(value: Option<&str>) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(value?, se_core::DATE_FORMAT).ok()
}

/// `site/{id}/overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
  pub overview: Overview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
  #[serde(default)]
  pub last_update_time: Option<String>,
  #[serde(default)]
  pub life_time_data: Option<EnergyFigure>,
  #[serde(default)]
  pub last_year_data: Option<EnergyFigure>,
  #[serde(default)]
  pub last_month_data: Option<EnergyFigure>,
  #[serde(default)]
  pub last_day_data: Option<EnergyFigure>,
  #[serde(default)]
  pub current_power: Option<PowerFigure>,
  #[serde(default)]
  pub measured_by: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_site_list_accepts_both_list_keys() {
    let vendor = json!({"sites": {"count": 1, "site": [{"id": 1001, "name": "Roof"}]}});
    let parsed: SiteListResponse = serde_json::from_value(vendor).unwrap();
    assert_eq!(parsed.sites.site[0].id, 1001);

    let short = json!({"sites": {"count": 1, "list": [{"id": 1001}]}});
    let parsed: SiteListResponse = serde_json::from_value(short).unwrap();
    assert_eq!(parsed.sites.count, 1);
    assert_eq!(parsed.sites.site[0].name, "");
  }

  #[test]
  fn test_site_details() {
    let value = json!({
      "details": {
        "id": 1001,
        "name": "Barn",
        "accountId": 12,
        "status": "Active",
        "peakPower": 9.8,
        "type": "Optimizers & Inverters",
        "location": {"country": "France", "city": "Lyon", "timeZone": "Europe/Paris"}
      }
    });
    let parsed: SiteDetailsResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.details.peak_power, Some(9.8));
    assert_eq!(parsed.details.site_type.as_deref(), Some("Optimizers & Inverters"));
    assert_eq!(parsed.details.location.unwrap().time_zone.as_deref(), Some("Europe/Paris"));
  }

  #[test]
  fn test_data_period_dates() {
    let value = json!({"dataPeriod": {"startDate": "2013-05-05", "endDate": "2024-01-31"}});
    let parsed: DataPeriodResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.data_period.start(), NaiveDate::from_ymd_opt(2013, 5, 5));

    let empty: DataPeriodResponse = serde_json::from_value(json!({"dataPeriod": {}})).unwrap();
    assert_eq!(empty.data_period.end(), None);
  }

  #[test]
  fn test_overview() {
    let value = json!({
      "overview": {
        "lastUpdateTime": "2024-05-01 12:00:00",
        "lifeTimeData": {"energy": 761985.75, "revenue": 946.13},
        "lastDayData": {"energy": 4512.0},
        "currentPower": {"power": 1337.5},
        "measuredBy": "INVERTER"
      }
    });
    let parsed: OverviewResponse = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.overview.current_power.unwrap().power, 1337.5);
    assert_eq!(parsed.overview.last_day_data.unwrap().revenue, None);
  }
}
