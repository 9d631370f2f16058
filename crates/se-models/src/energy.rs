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

//! Energy series

use crate::common::Measurement;
use se_core::TimeUnit;
use serde::{Deserialize, Serialize};

/// `site/{id}/energy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResponse {
  pub energy: EnergySeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySeries {
  pub time_unit: TimeUnit,
  /// Usually `Wh`
  pub unit: String,
  #[serde(default)]
  pub measured_by: Option<String>,
  #[serde(default)]
  pub values: Vec<Measurement>,
}

impl EnergySeries {
  /// Sum of the reported values, skipping gaps
  pub fn total(&self) -> f64 {
    self.values.iter().filter_map(|m| m.value).sum()
  }
}

/// `site/{id}/timeFrameEnergy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameEnergyResponse {
  pub time_frame_energy: TimeFrameEnergy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeFrameEnergy {
  pub energy: f64,
  pub unit: String,
  #[serde(default)]
  pub measured_by: Option<String>,
}
