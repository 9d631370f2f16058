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

//! Endpoint request builders.
//!
//! Each builder validates its arguments and returns an [`ApiRequest`]; it never
//! touches the network. The async and blocking clients generate one method per
//! entry of the tables below, so both surfaces validate identically.
//!
//! [`ApiRequest`]: crate::request::ApiRequest

pub mod account;
pub mod energy;
pub mod equipment;
pub mod images;
pub mod power;
pub mod site;

/// Table of JSON endpoints: `method(args) => builder;`
///
/// `$emit` receives the transport method to call, the return type and the
/// entries. Builder paths are absolute because they are resolved where the
/// table is expanded.
macro_rules! json_endpoints {
  ($emit:ident) => {
    $emit! {
      execute -> serde_json::Value;

      /// List the sites visible to the account (`sites/list`).
      site_list(query: &se_core::SiteListQuery) => $crate::endpoints::site::list(query);

      /// Site details: name, location, status, peak power (`site/{id}/details`).
      site_details(site_id: u64) => $crate::endpoints::site::details(site_id);

      /// Details for up to 100 sites in one call (`sites/{ids}/details`).
      sites_details(site_ids: &[u64]) => $crate::endpoints::site::bulk_details(site_ids);

      /// First and last dates with production data (`site/{id}/dataPeriod`).
      data_period(site_id: u64) => $crate::endpoints::site::data_period(site_id);

      /// Data periods for several sites (`sites/{ids}/dataPeriod`).
      sites_data_period(site_ids: &[u64]) => $crate::endpoints::site::bulk_data_period(site_ids);

      /// Site overview: lifetime, yearly, monthly and daily energy plus current power (`site/{id}/overview`).
      overview(site_id: u64) => $crate::endpoints::site::overview(site_id);

      /// Overviews for several sites (`sites/{ids}/overview`).
      sites_overview(site_ids: &[u64]) => $crate::endpoints::site::bulk_overview(site_ids);

      /// Environmental benefits: CO2 saved, trees planted (`site/{id}/envBenefits`).
      ///
      /// `system_units` is `Metrics` or `Imperial`; `None` uses the account setting.
      env_benefits(site_id: u64, system_units: Option<&str>) =>
        $crate::endpoints::site::env_benefits(site_id, system_units);

      /// Energy aggregated by `time_unit` between two dates (`site/{id}/energy`).
      energy(site_id: u64, start_date: &str, end_date: &str, time_unit: &str) =>
        $crate::endpoints::energy::energy(site_id, start_date, end_date, time_unit);

      /// Energy for several sites (`sites/{ids}/energy`).
      sites_energy(site_ids: &[u64], start_date: &str, end_date: &str, time_unit: &str) =>
        $crate::endpoints::energy::bulk_energy(site_ids, start_date, end_date, time_unit);

      /// Total energy produced in a period (`site/{id}/timeFrameEnergy`).
      time_frame_energy(site_id: u64, start_date: &str, end_date: &str) =>
        $crate::endpoints::energy::time_frame_energy(site_id, start_date, end_date);

      /// Period totals for several sites (`sites/{ids}/timeFrameEnergy`).
      sites_time_frame_energy(site_ids: &[u64], start_date: &str, end_date: &str) =>
        $crate::endpoints::energy::bulk_time_frame_energy(site_ids, start_date, end_date);

      /// Energy per meter type (`site/{id}/energyDetails`). An empty `meters` asks for all.
      energy_details(site_id: u64, start_time: &str, end_time: &str, time_unit: &str, meters: &[&str]) =>
        $crate::endpoints::energy::energy_details(site_id, start_time, end_time, time_unit, meters);

      /// Meter readings and lifetime energy per meter (`site/{id}/meters`).
      meters(site_id: u64, start_time: &str, end_time: &str, time_unit: &str, meters: &[&str]) =>
        $crate::endpoints::energy::meters(site_id, start_time, end_time, time_unit, meters);

      /// Power at 15 minute resolution (`site/{id}/power`).
      power(site_id: u64, start_time: &str, end_time: &str) =>
        $crate::endpoints::power::power(site_id, start_time, end_time);

      /// Power for several sites (`sites/{ids}/power`).
      sites_power(site_ids: &[u64], start_time: &str, end_time: &str) =>
        $crate::endpoints::power::bulk_power(site_ids, start_time, end_time);

      /// Power per meter type (`site/{id}/powerDetails`). An empty `meters` asks for all.
      power_details(site_id: u64, start_time: &str, end_time: &str, meters: &[&str]) =>
        $crate::endpoints::power::power_details(site_id, start_time, end_time, meters);

      /// Current flow between PV, grid, load and storage (`site/{id}/currentPowerFlow`).
      current_power_flow(site_id: u64) => $crate::endpoints::power::current_power_flow(site_id);

      /// Battery measurements (`site/{id}/storageData`). An empty `serials` asks for all batteries.
      storage_data(site_id: u64, start_time: &str, end_time: &str, serials: &[&str]) =>
        $crate::endpoints::power::storage_data(site_id, start_time, end_time, serials);

      /// Inverters and their serial numbers (`equipment/{id}/list`).
      components(site_id: u64) => $crate::endpoints::equipment::components(site_id);

      /// Full equipment inventory: inverters, meters, batteries, gateways (`site/{id}/inventory`).
      inventory(site_id: u64) => $crate::endpoints::equipment::inventory(site_id);

      /// Inverter technical telemetry (`equipment/{id}/{serial}/data`).
      inverter_data(site_id: u64, serial: &str, start_time: &str, end_time: &str) =>
        $crate::endpoints::equipment::inverter_data(site_id, serial, start_time, end_time);

      /// Replacement history for one component (`equipment/{id}/{serial}/changeLog`).
      equipment_change_log(site_id: u64, serial: &str) =>
        $crate::endpoints::equipment::change_log(site_id, serial);

      /// Sensors installed at the site (`equipment/{id}/sensors`).
      sensors(site_id: u64) => $crate::endpoints::equipment::sensors(site_id);

      /// Sensor measurements between two dates (`site/{id}/sensors`).
      sensor_data(site_id: u64, start_date: &str, end_date: &str) =>
        $crate::endpoints::equipment::sensor_data(site_id, start_date, end_date);

      /// Sub-accounts of the key's account (`accounts/list`).
      account_list(query: &se_core::AccountListQuery) => $crate::endpoints::account::list(query);

      /// Current API version (`version/current`).
      current_version() => $crate::endpoints::account::current_version();

      /// All supported API versions (`version/supported`).
      supported_versions() => $crate::endpoints::account::supported_versions();
    }
  };
}

/// Table of binary endpoints. Same shape as [`json_endpoints`].
macro_rules! image_endpoints {
  ($emit:ident) => {
    $emit! {
      execute_bytes -> bytes::Bytes;

      /// Site image as uploaded by the installer (`site/{id}/siteImage/{name}`).
      site_image(site_id: u64, name: &str, options: &se_core::SiteImageOptions) =>
        $crate::endpoints::images::site_image(site_id, name, options);

      /// Installer logo (`site/{id}/installerImage/{name}`).
      installer_image(site_id: u64, name: &str) =>
        $crate::endpoints::images::installer_image(site_id, name);
    }
  };
}

pub(crate) use image_endpoints;
pub(crate) use json_endpoints;

use se_core::{types::params::join_list, Result, SiteIds, SiteScope};

/// Validate bulk ids and wrap them in a scope
pub(crate) fn bulk_scope(site_ids: &[u64]) -> Result<SiteScope> {
  Ok(SiteScope::Bulk(SiteIds::new(site_ids)?))
}

/// Comma-join free-form identifiers such as battery serials, dropping blanks
pub(crate) fn join_identifiers(values: &[&str]) -> Option<String> {
  let kept: Vec<&str> = values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()).collect();
  (!kept.is_empty()).then(|| kept.join(","))
}

/// Validate and comma-join meter types
pub(crate) fn join_meters(meters: &[&str]) -> Result<Option<String>> {
  join_list::<se_core::MeterType>(meters)
}

#[cfg(test)]
mod tests {
  use super::*;
  use se_core::Error;

  #[test]
  fn test_bulk_scope_validates() {
    assert!(matches!(bulk_scope(&[]), Err(Error::Validation { .. })));
    assert_eq!(bulk_scope(&[1, 2, 3]).unwrap().path("overview"), "sites/1,2,3/overview");
  }

  #[test]
  fn test_join_identifiers() {
    assert_eq!(join_identifiers(&["A1", " ", "B2"]).as_deref(), Some("A1,B2"));
    assert_eq!(join_identifiers(&[]), None);
  }
}
