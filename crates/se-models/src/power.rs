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

//! Power series and live power flow

use crate::common::Measurement;
use se_core::TimeUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `site/{id}/power`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerResponse {
  pub power: PowerSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSeries {
  pub time_unit: TimeUnit,
  pub unit: String,
  #[serde(default)]
  pub measured_by: Option<String>,
  #[serde(default)]
  pub values: Vec<Measurement>,
}

impl PowerSeries {
  /// Highest reported value and when it occurred
  pub fn peak(&self) -> Option<&Measurement> {
    self
      .values
      .iter()
      .filter(|m| m.value.is_some())
      .max_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(std::cmp::Ordering::Equal))
  }
}

/// `site/{id}/currentPowerFlow`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPowerFlowResponse {
  pub site_current_power_flow: PowerFlow,
}

/// Live flow between the site's elements. Elements the site lacks are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerFlow {
  #[serde(default)]
  pub update_refresh_rate: Option<u32>,
  #[serde(default)]
  pub unit: Option<String>,
  #[serde(default)]
  pub connections: Vec<Connection>,
  #[serde(rename = "GRID", default)]
  pub grid: Option<FlowElement>,
  #[serde(rename = "LOAD", default)]
  pub load: Option<FlowElement>,
  #[serde(rename = "PV", default)]
  pub pv: Option<FlowElement>,
  #[serde(rename = "STORAGE", default)]
  pub storage: Option<FlowElement>,
  #[serde(flatten)]
  pub other: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
  pub from: String,
  pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowElement {
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub current_power: Option<f64>,
  /// Battery state of charge in percent
  #[serde(default)]
  pub charge_level: Option<f64>,
  #[serde(default)]
  pub critical: Option<bool>,
}
