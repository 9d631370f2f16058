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

//! Site-level endpoints: listing, details, data period, overview, benefits

use super::bulk_scope;
use crate::request::ApiRequest;
use se_core::{Endpoint, Result, SiteListQuery, SiteScope, SystemUnits};

/// `sites/list`
pub fn list(query: &SiteListQuery) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::SiteList).params(query.pairs()?))
}

/// `site/{id}/details`
pub fn details(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::SiteDetails(SiteScope::Single(site_id))))
}

/// `sites/{ids}/details`
pub fn bulk_details(site_ids: &[u64]) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::SiteDetails(bulk_scope(site_ids)?)))
}

/// `site/{id}/dataPeriod`
pub fn data_period(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::DataPeriod(SiteScope::Single(site_id))))
}

/// `sites/{ids}/dataPeriod`
pub fn bulk_data_period(site_ids: &[u64]) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::DataPeriod(bulk_scope(site_ids)?)))
}

/// `site/{id}/overview`
pub fn overview(site_id: u64) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::Overview(SiteScope::Single(site_id))))
}

/// `sites/{ids}/overview`
pub fn bulk_overview(site_ids: &[u64]) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::Overview(bulk_scope(site_ids)?)))
}

/// `site/{id}/envBenefits`
pub fn env_benefits(site_id: u64, system_units: Option<&str>) -> Result<ApiRequest> {
  let units = system_units.map(str::parse::<SystemUnits>).transpose()?;
  Ok(ApiRequest::for_endpoint(&Endpoint::EnvBenefits(site_id)).opt_param("systemUnits", units))
}
