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

//! Power and storage endpoints

use super::{bulk_scope, join_identifiers, join_meters};
use crate::request::ApiRequest;
use se_core::types::dates::time_range;
use se_core::{Endpoint, Result, SiteScope};

fn timed(endpoint: Endpoint, start: &str, end: &str) -> Result<ApiRequest> {
  let (start_time, end_time) = time_range(start, end)?;
  Ok(ApiRequest::for_endpoint(&endpoint).param("startTime", start_time).param("endTime", end_time))
}

/// `site/{id}/power`
pub fn power(site_id: u64, start_time: &str, end_time: &str) -> Result<ApiRequest> {
  timed(Endpoint::Power(SiteScope::Single(site_id)), start_time, end_time)
}

/// `sites/{ids}/power`
pub fn bulk_power(site_ids: &[u64], start_time: &str, end_time: &str) -> Result<ApiRequest> {
  timed(Endpoint::Power(bulk_scope(site_ids)?), start_time, end_time)
}

/// `site/{id}/powerDetails`
pub fn power_details(
  site_id: u64,
  start_time: &str,
  end_time: &str,
  meters: &[&str],
) -> Result<ApiRequest> {
  let meters = join_meters(meters)?;
  Ok(timed(Endpoint::PowerDetails(site_id), start_time, end_time)?.opt_param("meters", meters))
}

/// `site/{id}/currentPowerFlow`
pub fn current_power_flow(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::CurrentPowerFlow(site_id)))
}

/// `site/{id}/storageData`
pub fn storage_data(
  site_id: u64,
  start_time: &str,
  end_time: &str,
  serials: &[&str],
) -> Result<ApiRequest> {
  Ok(
    timed(Endpoint::StorageData(site_id), start_time, end_time)?
      .opt_param("serials", join_identifiers(serials)),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use se_core::Error;

  #[test]
  fn test_power_params() {
    let request = power(1001, "2024-05-01 08:00:00", "2024-05-01 18:00:00").unwrap();
    assert_eq!(request.path(), "site/1001/power");
    assert_eq!(request.query()["startTime"], "2024-05-01 08:00:00");
    assert_eq!(request.query()["endTime"], "2024-05-01 18:00:00");
  }

  #[test]
  fn test_malformed_time_rejected() {
    let err = power(1001, "05/01/2024", "2024-05-01").unwrap_err();
    assert!(matches!(err, Error::Validation { ref parameter, .. } if parameter == "startTime"));
  }

  #[test]
  fn test_storage_serials_joined() {
    let request = storage_data(3, "2024-05-01", "2024-05-02", &["BAT-1", "BAT-2"]).unwrap();
    assert_eq!(request.query()["serials"], "BAT-1,BAT-2");

    let request = storage_data(3, "2024-05-01", "2024-05-02", &[]).unwrap();
    assert!(!request.query().contains_key("serials"));
  }

  #[test]
  fn test_power_details_meters() {
    let request = power_details(3, "2024-05-01", "2024-05-02", &["FeedIn"]).unwrap();
    assert_eq!(request.path(), "site/3/powerDetails");
    assert_eq!(request.query()["meters"], "FeedIn");
  }
}
