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

//! Account and API version endpoints

use crate::request::ApiRequest;
use se_core::{AccountListQuery, Endpoint, Result};

/// `accounts/list`
pub fn list(query: &AccountListQuery) -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::AccountList).params(query.pairs()?))
}

/// `version/current`
pub fn current_version() -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::CurrentVersion))
}

/// `version/supported`
pub fn supported_versions() -> Result<ApiRequest> {
  Ok(ApiRequest::for_endpoint(&Endpoint::SupportedVersions))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_account_list_defaults() {
    let request = list(&AccountListQuery::default()).unwrap();
    assert_eq!(request.path(), "accounts/list");
    assert_eq!(request.query()["size"], "100");
    assert_eq!(request.query()["sortOrder"], "ASC");
    assert!(!request.query().contains_key("status"));
  }
}
