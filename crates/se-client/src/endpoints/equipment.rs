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

//! Equipment, inventory and sensor endpoints

use crate::request::ApiRequest;
use se_core::types::dates::{date_range, time_range};
use se_core::types::sites::required_segment;
use se_core::{Endpoint, Result};

/// `equipment/{id}/list`
pub fn components(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::Components(site_id)))
}

/// `site/{id}/inventory`
pub fn inventory(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::Inventory(site_id)))
}

/// `equipment/{id}/{serial}/data`
pub fn inverter_data(
  site_id: u64,
  serial: &str,
  start_time: &str,
  end_time: &str,
) -> Result<ApiRequest> {
  let serial = required_segment("serialNumber", serial)?;
  let (start_time, end_time) = time_range(start_time, end_time)?;
  Ok(
    ApiRequest::for_endpoint(&Endpoint::InverterData { site_id, serial })
      .param("startTime", start_time)
      .param("endTime", end_time),
  )
}

/// `equipment/{id}/{serial}/changeLog`
pub fn change_log(site_id: u64, serial: &str) -> Result<ApiRequest> {
  let serial = required_segment("serialNumber", serial)?;
  Ok(ApiRequest::for_endpoint(&Endpoint::EquipmentChangeLog { site_id, serial }))
}

/// `equipment/{id}/sensors`
pub fn sensors(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::Sensors(site_id)))
}

/// `site/{id}/sensors`
pub fn sensor_data(site_id: u64, start_date: &str, end_date: &str) -> Result<ApiRequest> {
  let (start_date, end_date) = date_range(start_date, end_date)?;
  Ok(
    ApiRequest::for_endpoint(&Endpoint::SensorData(site_id))
      .param("startDate", start_date)
      .param("endDate", end_date),
  )
}
