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

//! Energy endpoints

use super::{bulk_scope, join_meters};
use crate::request::ApiRequest;
use se_core::types::dates::{date_range, time_range};
use se_core::{Endpoint, Result, SiteScope, TimeUnit};

fn energy_request(scope: SiteScope, start: &str, end: &str, time_unit: &str) -> Result<ApiRequest> {
  let unit: TimeUnit = time_unit.parse()?;
  let (start_date, end_date) = date_range(start, end)?;
  Ok(
    ApiRequest::for_endpoint(&Endpoint::Energy(scope))
      .param("timeUnit", unit)
      .param("startDate", start_date)
      .param("endDate", end_date),
  )
}

fn time_frame_request(scope: SiteScope, start: &str, end: &str) -> Result<ApiRequest> {
  let (start_date, end_date) = date_range(start, end)?;
  Ok(
    ApiRequest::for_endpoint(&Endpoint::TimeFrameEnergy(scope))
      .param("startDate", start_date)
      .param("endDate", end_date),
  )
}

/// `site/{id}/energy`
pub fn energy(site_id: u64, start_date: &str, end_date: &str, time_unit: &str) -> Result<ApiRequest> {
  energy_request(SiteScope::Single(site_id), start_date, end_date, time_unit)
}

/// `sites/{ids}/energy`
pub fn bulk_energy(
  site_ids: &[u64],
  start_date: &str,
  end_date: &str,
  time_unit: &str,
) -> Result<ApiRequest> {
  let unit: TimeUnit = time_unit.parse()?;
  energy_request(bulk_scope(site_ids)?, start_date, end_date, unit.as_str())
}

/// `site/{id}/timeFrameEnergy`
pub fn time_frame_energy(site_id: u64, start_date: &str, end_date: &str) -> Result<ApiRequest> {
  time_frame_request(SiteScope::Single(site_id), start_date, end_date)
}

/// `sites/{ids}/timeFrameEnergy`
pub fn bulk_time_frame_energy(
  site_ids: &[u64],
  start_date: &str,
  end_date: &str,
) -> Result<ApiRequest> {
  time_frame_request(bulk_scope(site_ids)?, start_date, end_date)
}

/// `site/{id}/energyDetails`
pub fn energy_details(
  site_id: u64,
  start_time: &str,
  end_time: &str,
  time_unit: &str,
  meters: &[&str],
) -> Result<ApiRequest> {
  metered(Endpoint::EnergyDetails(site_id), start_time, end_time, time_unit, meters)
}

/// `site/{id}/meters`
pub fn meters(
  site_id: u64,
  start_time: &str,
  end_time: &str,
  time_unit: &str,
  meters: &[&str],
) -> Result<ApiRequest> {
  metered(Endpoint::Meters(site_id), start_time, end_time, time_unit, meters)
}

fn metered(
  endpoint: Endpoint,
  start: &str,
  end: &str,
  time_unit: &str,
  meters: &[&str],
) -> Result<ApiRequest> {
  let unit: TimeUnit = time_unit.parse()?;
  let meters = join_meters(meters)?;
  let (start_time, end_time) = time_range(start, end)?;
  Ok(
    ApiRequest::for_endpoint(&endpoint)
      .param("startTime", start_time)
      .param("endTime", end_time)
      .param("timeUnit", unit)
      .opt_param("meters", meters),
  )
}
