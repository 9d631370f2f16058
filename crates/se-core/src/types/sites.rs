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

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A validated, non-empty list of site ids for the bulk `sites/{ids}/...` endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteIds(Vec<u64>);

impl SiteIds {
  /// Validate a list of numeric ids
  pub fn new(ids: &[u64]) -> Result<Self> {
    if ids.is_empty() {
      return Err(Error::validation("siteIds", "at least one site id is required"));
    }
    if ids.len() > crate::MAX_BULK_SITES {
      return Err(Error::validation(
        "siteIds",
        format!("{} ids given, the API accepts at most {}", ids.len(), crate::MAX_BULK_SITES),
      ));
    }
    Ok(SiteIds(ids.to_vec()))
  }

  /// Parse textual ids, e.g. from a command line or a config file
  pub fn parse<S: AsRef<str>>(ids: &[S]) -> Result<Self> {
    let parsed = ids
      .iter()
      .map(|id| {
        let id = id.as_ref().trim();
        id.parse::<u64>()
          .map_err(|_| Error::validation("siteIds", format!("`{id}` is not a numeric site id")))
      })
      .collect::<Result<Vec<u64>>>()?;
    Self::new(&parsed)
  }

  /// Comma-joined form used in request paths
  pub fn joined(&self) -> String {
    self.0.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
  }

  /// The ids in request order
  pub fn as_slice(&self) -> &[u64] {
    &self.0
  }
}

/// Whether a site endpoint addresses one site or a batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteScope {
  Single(u64),
  Bulk(SiteIds),
}

impl SiteScope {
  /// Render `site/{id}/{suffix}` or `sites/{ids}/{suffix}`
  pub fn path(&self, suffix: &str) -> String {
    match self {
      SiteScope::Single(id) => format!("site/{id}/{suffix}"),
      SiteScope::Bulk(ids) => format!("sites/{}/{suffix}", ids.joined()),
    }
  }
}

/// Reject an empty required identifier such as a serial number or image name
pub fn required_segment(parameter: &str, value: &str) -> Result<String> {
  let value = value.trim();
  if value.is_empty() {
    return Err(Error::validation(parameter, "must not be empty"));
  }
  if value.contains('/') {
    return Err(Error::validation(parameter, "must not contain `/`"));
  }
  // `.` and `..` are dropped when the URL is normalised
  let decoded = value.to_ascii_lowercase().replace("%2e", ".");
  if decoded == "." || decoded == ".." {
    return Err(Error::validation(parameter, format!("`{value}` is not a valid path segment")));
  }
  Ok(value.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_textual_ids_are_comma_joined() {
    let ids = SiteIds::parse(&["1", "2", "3"]).unwrap();
    assert_eq!(ids.joined(), "1,2,3");
    assert_eq!(ids.as_slice(), &[1, 2, 3]);
  }

  #[test]
  fn test_empty_and_oversized_lists_rejected() {
    assert!(matches!(SiteIds::new(&[]), Err(Error::Validation { .. })));

    let too_many: Vec<u64> = (1..=101).collect();
    assert!(matches!(SiteIds::new(&too_many), Err(Error::Validation { .. })));

    let at_cap: Vec<u64> = (1..=100).collect();
    assert!(SiteIds::new(&at_cap).is_ok());
  }

  #[test]
  fn test_non_numeric_id_rejected() {
    let err = SiteIds::parse(&["1", "abc"]).unwrap_err();
    assert!(err.to_string().contains("abc"));
  }

  #[test]
  fn test_required_segment() {
    assert_eq!(required_segment("serialNumber", " 7F1234AB-01 ").unwrap(), "7F1234AB-01");
    assert!(required_segment("serialNumber", "").is_err());
    assert!(required_segment("name", "a/b").is_err());
    for dots in [".", "..", " .. ", "%2e", "%2E%2e", ".%2e"] {
      assert!(
        matches!(required_segment("serialNumber", dots), Err(Error::Validation { .. })),
        "{dots}"
      );
    }
    assert_eq!(required_segment("name", "roof.v2.png").unwrap(), "roof.v2.png");
    assert_eq!(required_segment("name", "...").unwrap(), "...");
  }
}
