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

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{
  dates::{DATE_FORMAT, DATE_TIME_FORMAT},
  params::{MeterType, SiteStatus, SortOrder, SystemUnits, TimeUnit},
  query::{AccountListQuery, SiteImageOptions, SiteListQuery},
  sites::{SiteIds, SiteScope},
};

/// The documented SolarEdge monitoring API operations.
///
/// Each variant knows its own path template; bulk-capable operations carry a
/// [`SiteScope`] so that the single-site and multi-site forms share one variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Site functions
  SiteList,
  SiteDetails(SiteScope),
  DataPeriod(SiteScope),
  Energy(SiteScope),
  TimeFrameEnergy(SiteScope),
  Power(SiteScope),
  Overview(SiteScope),
  PowerDetails(u64),
  EnergyDetails(u64),
  CurrentPowerFlow(u64),
  StorageData(u64),
  EnvBenefits(u64),
  Meters(u64),

  // Images
  SiteImage { site_id: u64, name: String },
  InstallerImage { site_id: u64, name: String },

  // Equipment functions
  Components(u64),
  Inventory(u64),
  InverterData { site_id: u64, serial: String },
  EquipmentChangeLog { site_id: u64, serial: String },
  Sensors(u64),
  SensorData(u64),

  // Account and API metadata
  AccountList,
  CurrentVersion,
  SupportedVersions,
}

impl Endpoint {
  /// Relative request path, without a leading slash.
  pub fn path(&self) -> String {
    match self {
      Endpoint::SiteList => "sites/list".to_string(),
      Endpoint::SiteDetails(scope) => scope.path("details"),
      Endpoint::DataPeriod(scope) => scope.path("dataPeriod"),
      Endpoint::Energy(scope) => scope.path("energy"),
      Endpoint::TimeFrameEnergy(scope) => scope.path("timeFrameEnergy"),
      Endpoint::Power(scope) => scope.path("power"),
      Endpoint::Overview(scope) => scope.path("overview"),
      Endpoint::PowerDetails(id) => format!("site/{id}/powerDetails"),
      Endpoint::EnergyDetails(id) => format!("site/{id}/energyDetails"),
      Endpoint::CurrentPowerFlow(id) => format!("site/{id}/currentPowerFlow"),
      Endpoint::StorageData(id) => format!("site/{id}/storageData"),
      Endpoint::EnvBenefits(id) => format!("site/{id}/envBenefits"),
      Endpoint::Meters(id) => format!("site/{id}/meters"),
      Endpoint::SiteImage { site_id, name } => format!("site/{site_id}/siteImage/{name}"),
      Endpoint::InstallerImage { site_id, name } => {
        format!("site/{site_id}/installerImage/{name}")
      }
      Endpoint::Components(id) => format!("equipment/{id}/list"),
      Endpoint::Inventory(id) => format!("site/{id}/inventory"),
      Endpoint::InverterData { site_id, serial } => format!("equipment/{site_id}/{serial}/data"),
      Endpoint::EquipmentChangeLog { site_id, serial } => {
        format!("equipment/{site_id}/{serial}/changeLog")
      }
      Endpoint::Sensors(id) => format!("equipment/{id}/sensors"),
      Endpoint::SensorData(id) => format!("site/{id}/sensors"),
      Endpoint::AccountList => "accounts/list".to_string(),
      Endpoint::CurrentVersion => "version/current".to_string(),
      Endpoint::SupportedVersions => "version/supported".to_string(),
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::SiteList => write!(f, "SITE_LIST"),
      Endpoint::SiteDetails(_) => write!(f, "SITE_DETAILS"),
      Endpoint::DataPeriod(_) => write!(f, "DATA_PERIOD"),
      Endpoint::Energy(_) => write!(f, "ENERGY"),
      Endpoint::TimeFrameEnergy(_) => write!(f, "TIME_FRAME_ENERGY"),
      Endpoint::Power(_) => write!(f, "POWER"),
      Endpoint::Overview(_) => write!(f, "OVERVIEW"),
      Endpoint::PowerDetails(_) => write!(f, "POWER_DETAILS"),
      Endpoint::EnergyDetails(_) => write!(f, "ENERGY_DETAILS"),
      Endpoint::CurrentPowerFlow(_) => write!(f, "CURRENT_POWER_FLOW"),
      Endpoint::StorageData(_) => write!(f, "STORAGE_DATA"),
      Endpoint::EnvBenefits(_) => write!(f, "ENV_BENEFITS"),
      Endpoint::Meters(_) => write!(f, "METERS"),
      Endpoint::SiteImage { .. } => write!(f, "SITE_IMAGE"),
      Endpoint::InstallerImage { .. } => write!(f, "INSTALLER_IMAGE"),
      Endpoint::Components(_) => write!(f, "COMPONENTS"),
      Endpoint::Inventory(_) => write!(f, "INVENTORY"),
      Endpoint::InverterData { .. } => write!(f, "INVERTER_DATA"),
      Endpoint::EquipmentChangeLog { .. } => write!(f, "EQUIPMENT_CHANGE_LOG"),
      Endpoint::Sensors(_) => write!(f, "SENSORS"),
      Endpoint::SensorData(_) => write!(f, "SENSOR_DATA"),
      Endpoint::AccountList => write!(f, "ACCOUNT_LIST"),
      Endpoint::CurrentVersion => write!(f, "CURRENT_VERSION"),
      Endpoint::SupportedVersions => write!(f, "SUPPORTED_VERSIONS"),
    }
  }
}

/// Base URL for the SolarEdge monitoring API
pub const SOLAREDGE_BASE_URL: &str = "https://monitoringapi.solaredge.com";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Most site ids a single bulk request may carry
pub const MAX_BULK_SITES: usize = 100;

/// Concurrent calls the vendor allows per key. Not enforced by the client.
pub const VENDOR_CONCURRENCY_LIMIT: usize = 3;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_single_site_paths() {
    assert_eq!(Endpoint::SiteDetails(SiteScope::Single(1001)).path(), "site/1001/details");
    assert_eq!(Endpoint::CurrentPowerFlow(7).path(), "site/7/currentPowerFlow");
    assert_eq!(Endpoint::Components(7).path(), "equipment/7/list");
    assert_eq!(Endpoint::Sensors(7).path(), "equipment/7/sensors");
    assert_eq!(Endpoint::SensorData(7).path(), "site/7/sensors");
  }

  #[test]
  fn test_bulk_paths_join_ids() {
    let ids = SiteIds::new(&[1, 2, 3]).unwrap();
    assert_eq!(Endpoint::Overview(SiteScope::Bulk(ids)).path(), "sites/1,2,3/overview");
  }

  #[test]
  fn test_equipment_paths_carry_serial() {
    let endpoint = Endpoint::InverterData { site_id: 9, serial: "7F1234AB-01".to_string() };
    assert_eq!(endpoint.path(), "equipment/9/7F1234AB-01/data");
    assert_eq!(endpoint.to_string(), "INVERTER_DATA");
  }
}
