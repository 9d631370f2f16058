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

//! Enumerated query parameters.
//!
//! Every enumeration parses from the vendor spelling (matched without regard to
//! case) and renders back to it. Anything else is a validation error raised
//! before a request is built.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

macro_rules! vendor_enum {
  (
    $(#[$meta:meta])*
    $name:ident, $parameter:literal {
      $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum $name {
      $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
    }

    impl $name {
      /// Every recognised value
      pub const ALL: &'static [$name] = &[$($name::$variant),+];

      /// Name of the query parameter this value is sent as
      pub const PARAMETER: &'static str = $parameter;

      /// Vendor spelling
      pub fn as_str(&self) -> &'static str {
        match self {
          $($name::$variant => $text),+
        }
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }

    impl FromStr for $name {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        $(
          if s.eq_ignore_ascii_case($text) {
            return Ok($name::$variant);
          }
        )+
        let expected: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
        Err(Error::validation(
          $parameter,
          format!("unrecognised value `{}`, expected one of {}", s, expected.join(", ")),
        ))
      }
    }
  };
}

vendor_enum! {
  /// Aggregation granularity for energy and meter queries
  TimeUnit, "timeUnit" {
    QuarterOfAnHour => "QUARTER_OF_AN_HOUR",
    Hour => "HOUR",
    Day => "DAY",
    Week => "WEEK",
    Month => "MONTH",
    Year => "YEAR",
  }
}

vendor_enum! {
  /// Meter types accepted by the details and meters endpoints
  MeterType, "meters" {
    Production => "Production",
    Consumption => "Consumption",
    SelfConsumption => "SelfConsumption",
    FeedIn => "FeedIn",
    Purchased => "Purchased",
  }
}

vendor_enum! {
  /// Sort direction for list endpoints
  SortOrder, "sortOrder" {
    Asc => "ASC",
    Desc => "DESC",
  }
}

vendor_enum! {
  /// Site status filter for the site list
  SiteStatus, "status" {
    Active => "Active",
    Pending => "Pending",
    Disabled => "Disabled",
    All => "All",
  }
}

vendor_enum! {
  /// Unit system for environmental benefits
  SystemUnits, "systemUnits" {
    Metrics => "Metrics",
    Imperial => "Imperial",
  }
}

impl Default for SortOrder {
  fn default() -> Self {
    SortOrder::Asc
  }
}

/// Parse a list of enumerated values and join them with commas.
///
/// Returns `None` for an empty list so optional list parameters are omitted.
pub fn join_list<T>(values: &[&str]) -> Result<Option<String>>
where
  T: FromStr<Err = Error> + std::fmt::Display,
{
  if values.is_empty() {
    return Ok(None);
  }
  let parsed = values.iter().map(|v| v.parse::<T>()).collect::<Result<Vec<T>>>()?;
  Ok(Some(parsed.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",")))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_time_unit_parses_vendor_spelling() {
    assert_eq!("DAY".parse::<TimeUnit>().unwrap(), TimeUnit::Day);
    assert_eq!("quarter_of_an_hour".parse::<TimeUnit>().unwrap(), TimeUnit::QuarterOfAnHour);
    assert_eq!(TimeUnit::Week.to_string(), "WEEK");
  }

  #[test]
  fn test_unknown_time_unit_is_validation_error() {
    let err = "FORTNIGHT".parse::<TimeUnit>().unwrap_err();
    match err {
      Error::Validation { parameter, message } => {
        assert_eq!(parameter, "timeUnit");
        assert!(message.contains("FORTNIGHT"));
        assert!(message.contains("QUARTER_OF_AN_HOUR"));
      }
      other => panic!("Expected Validation error, got {other:?}"),
    }
  }

  #[test]
  fn test_join_list_normalises_spelling() {
    let joined = join_list::<MeterType>(&["production", "FeedIn"]).unwrap();
    assert_eq!(joined.as_deref(), Some("Production,FeedIn"));
    assert_eq!(join_list::<MeterType>(&[]).unwrap(), None);
    assert!(join_list::<MeterType>(&["Battery"]).is_err());
  }

  #[test]
  fn test_serde_uses_vendor_spelling() {
    let json = serde_json::to_string(&SiteStatus::Active).unwrap();
    assert_eq!(json, "\"Active\"");
    let unit: TimeUnit = serde_json::from_str("\"QUARTER_OF_AN_HOUR\"").unwrap();
    assert_eq!(unit, TimeUnit::QuarterOfAnHour);
  }
}
