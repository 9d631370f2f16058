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

//! # se-models
//!
//! Typed views of the SolarEdge monitoring API responses most callers read.
//!
//! The client returns `serde_json::Value` and guarantees only that it is valid
//! JSON. These structs are an opt-in layer on top: unknown fields are ignored
//! and most fields are optional, since the API omits values it has no data for.
//!
//! ## Usage
//!
//! ```ignore
//! use se_models::{from_value, SiteListResponse};
//!
//! let value = client.site_list(&SiteListQuery::default()).await?;
//! let sites: SiteListResponse = from_value(value)?;
//! for site in &sites.sites.site {
//!     println!("{} {}", site.id, site.name);
//! }
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod energy;
pub mod power;
pub mod site;
pub mod version;

pub use common::*;
pub use energy::*;
pub use power::*;
pub use site::*;
pub use version::*;

use se_core::{Error, Result};
use serde::de::DeserializeOwned;

/// Convert a raw response into a typed model.
///
/// A shape mismatch is reported as [`Error::Decode`], the same class as an
/// unparseable body.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
  serde_json::from_value(value).map_err(|e| Error::Decode {
    message: format!("response does not match {}", std::any::type_name::<T>()),
    source: e,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_shape_mismatch_is_decode_error() {
    let result: Result<VersionResponse> = from_value(json!({"version": 3}));
    assert!(matches!(result, Err(Error::Decode { .. })));
  }
}
