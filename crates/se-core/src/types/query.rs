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

//! Option sets for the endpoints with many optional parameters

use crate::error::{Error, Result};
use crate::types::params::{SiteStatus, SortOrder};
use serde::{Deserialize, Serialize};

/// Largest page the list endpoints return
pub const MAX_PAGE_SIZE: u32 = 100;

/// Parameters for `sites/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteListQuery {
  /// Page size, 1 to 100
  pub size: u32,
  /// Index of the first site returned
  pub start_index: u32,
  /// Free-text search over name, notes, address and the like
  pub search_text: Option<String>,
  /// Vendor sort property, e.g. `Name` or `InstallationDate`
  pub sort_property: Option<String>,
  pub sort_order: SortOrder,
  /// Status filter, sent comma-joined
  pub status: Vec<SiteStatus>,
}

impl Default for SiteListQuery {
  fn default() -> Self {
    Self {
      size: MAX_PAGE_SIZE,
      start_index: 0,
      search_text: None,
      sort_property: None,
      sort_order: SortOrder::Asc,
      status: vec![SiteStatus::Active, SiteStatus::Pending],
    }
  }
}

impl SiteListQuery {
  /// Query pairs in the order they are sent
  pub fn pairs(&self) -> Result<Vec<(&'static str, String)>> {
    check_page_size(self.size)?;
    if self.status.is_empty() {
      return Err(Error::validation("status", "at least one status is required"));
    }

    let mut pairs = vec![
      ("size", self.size.to_string()),
      ("startIndex", self.start_index.to_string()),
      ("sortOrder", self.sort_order.to_string()),
      ("status", self.status.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(",")),
    ];
    push_non_empty(&mut pairs, "searchText", self.search_text.as_deref());
    push_non_empty(&mut pairs, "sortProperty", self.sort_property.as_deref());
    Ok(pairs)
  }
}

/// Parameters for `accounts/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountListQuery {
  pub size: u32,
  pub start_index: u32,
  pub search_text: Option<String>,
  pub sort_property: Option<String>,
  pub sort_order: SortOrder,
}

impl Default for AccountListQuery {
  fn default() -> Self {
    Self {
      size: MAX_PAGE_SIZE,
      start_index: 0,
      search_text: None,
      sort_property: None,
      sort_order: SortOrder::Asc,
    }
  }
}

impl AccountListQuery {
  /// Query pairs in the order they are sent
  pub fn pairs(&self) -> Result<Vec<(&'static str, String)>> {
    check_page_size(self.size)?;

    let mut pairs = vec![
      ("size", self.size.to_string()),
      ("startIndex", self.start_index.to_string()),
      ("sortOrder", self.sort_order.to_string()),
    ];
    push_non_empty(&mut pairs, "searchText", self.search_text.as_deref());
    push_non_empty(&mut pairs, "sortProperty", self.sort_property.as_deref());
    Ok(pairs)
  }
}

/// Scaling and caching options for `siteImage`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteImageOptions {
  pub max_width: Option<u32>,
  pub max_height: Option<u32>,
  /// Hash of a previously downloaded image; the API answers 304 when unchanged
  pub hash: Option<i64>,
}

impl SiteImageOptions {
  pub fn pairs(&self) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(width) = self.max_width {
      pairs.push(("maxWidth", width.to_string()));
    }
    if let Some(height) = self.max_height {
      pairs.push(("maxHeight", height.to_string()));
    }
    if let Some(hash) = self.hash {
      pairs.push(("hash", hash.to_string()));
    }
    pairs
  }
}

fn check_page_size(size: u32) -> Result<()> {
  if size == 0 || size > MAX_PAGE_SIZE {
    return Err(Error::validation("size", format!("must be between 1 and {MAX_PAGE_SIZE}")));
  }
  Ok(())
}

fn push_non_empty(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<&str>) {
  if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
    pairs.push((name, value.to_string()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_site_list_defaults() {
    let pairs = SiteListQuery::default().pairs().unwrap();
    assert_eq!(
      pairs,
      vec![
        ("size", "100".to_string()),
        ("startIndex", "0".to_string()),
        ("sortOrder", "ASC".to_string()),
        ("status", "Active,Pending".to_string()),
      ]
    );
  }

  #[test]
  fn test_blank_search_text_is_omitted() {
    let query = SiteListQuery {
      search_text: Some("  ".to_string()),
      sort_property: Some("Name".to_string()),
      ..Default::default()
    };
    let pairs = query.pairs().unwrap();
    assert!(pairs.iter().all(|(name, _)| *name != "searchText"));
    assert!(pairs.contains(&("sortProperty", "Name".to_string())));
  }

  #[test]
  fn test_page_size_bounds() {
    let query = SiteListQuery { size: 0, ..Default::default() };
    assert!(matches!(query.pairs(), Err(Error::Validation { .. })));
    let query = AccountListQuery { size: 101, ..Default::default() };
    assert!(matches!(query.pairs(), Err(Error::Validation { .. })));
  }

  #[test]
  fn test_image_options() {
    let options = SiteImageOptions { max_width: Some(640), hash: Some(-12), ..Default::default() };
    assert_eq!(options.pairs(), vec![("maxWidth", "640".to_string()), ("hash", "-12".to_string())]);
  }
}
