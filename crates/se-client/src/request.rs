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

//! Request building and response classification shared by the async and
//! blocking transports.
//!
//! Nothing in here performs I/O. The transports feed it a request descriptor
//! on the way out and a status code plus body bytes on the way back, so both
//! scheduling models classify failures identically.

use se_core::{Endpoint, Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;
use tracing::{error, warn};
use url::Url;

/// Query parameter that carries the API key
pub const API_KEY_PARAM: &str = "api_key";

const HTTP_TOO_MANY_REQUESTS: u16 = 429;

/// One GET request: a filled-in path and its query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
  path: String,
  params: BTreeMap<String, String>,
}

impl ApiRequest {
  /// Request for an arbitrary relative path
  pub fn new(path: impl Into<String>) -> Self {
    Self { path: path.into(), params: BTreeMap::new() }
  }

  /// Request for a documented endpoint
  pub fn for_endpoint(endpoint: &Endpoint) -> Self {
    Self::new(endpoint.path())
  }

  /// Add a query parameter
  pub fn param(mut self, name: &str, value: impl Display) -> Self {
    self.params.insert(name.to_string(), value.to_string());
    self
  }

  /// Add a query parameter when `value` is present
  pub fn opt_param(self, name: &str, value: Option<impl Display>) -> Self {
    match value {
      Some(value) => self.param(name, value),
      None => self,
    }
  }

  /// Add several parameters at once
  pub fn params<I, V>(mut self, pairs: I) -> Self
  where
    I: IntoIterator<Item = (&'static str, V)>,
    V: Display,
  {
    for (name, value) in pairs {
      self.params.insert(name.to_string(), value.to_string());
    }
    self
  }

  /// Relative path, e.g. `site/1001/overview`
  pub fn path(&self) -> &str {
    &self.path
  }

  /// Query parameters, without the API key
  pub fn query(&self) -> &BTreeMap<String, String> {
    &self.params
  }
}

/// Build the absolute URL for `request`, with the API key as the last query pair.
///
/// A caller-supplied `api_key` parameter is replaced by the configured key.
pub fn build_url(base_url: &str, api_key: &str, request: &ApiRequest) -> Result<Url> {
  let mut url =
    Url::parse(base_url).map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

  {
    let mut segments = url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("Base URL `{}` cannot carry a path", base_url)))?;
    segments.pop_if_empty();
    segments.extend(request.path.split('/').filter(|s| !s.is_empty()));
  }

  {
    let mut query_pairs = url.query_pairs_mut();
    for (key, value) in request.params.iter().filter(|(key, _)| key.as_str() != API_KEY_PARAM) {
      query_pairs.append_pair(key, value);
    }
    query_pairs.append_pair(API_KEY_PARAM, api_key);
  }

  Ok(url)
}

/// Render `url` for logs with the API key masked
pub fn redact(url: &Url) -> String {
  let mut redacted = url.clone();
  let pairs: Vec<(String, String)> = url
    .query_pairs()
    .map(|(k, v)| {
      let v = if k == API_KEY_PARAM { "***".to_string() } else { v.into_owned() };
      (k.into_owned(), v)
    })
    .collect();
  redacted.query_pairs_mut().clear().extend_pairs(pairs);
  redacted.to_string()
}

/// Classify a response status. 2xx passes; everything else becomes an error.
pub fn check_status(status: u16, body: &[u8]) -> Result<()> {
  if (200..300).contains(&status) {
    return Ok(());
  }

  if status == HTTP_TOO_MANY_REQUESTS {
    warn!("Rate limit exceeded (HTTP {})", status);
    return Err(Error::RateLimit { status });
  }

  error!("Request failed with status: {}", status);
  Err(Error::Http { status, body: error_body(body) })
}

/// Decode a successful body as JSON
pub fn decode_json(body: &[u8]) -> Result<Value> {
  #[cfg(feature = "debug-logging")]
  tracing::debug!("Response body: {}", String::from_utf8_lossy(body));

  serde_json::from_slice(body).map_err(|e| {
    error!("Failed to parse JSON response: {}", e);
    Error::Decode {
      message: format!("body is not valid JSON ({} bytes): {}", body.len(), preview(body)),
      source: e,
    }
  })
}

/// Wrap a reqwest failure. The URL is stripped so the key never reaches error text.
pub fn transport_error(err: reqwest::Error) -> Error {
  let message = if err.is_timeout() {
    "request timed out"
  } else if err.is_connect() {
    "connection failed"
  } else if err.is_body() || err.is_decode() {
    "failed to read response body"
  } else {
    "request failed"
  };
  Error::Transport { message: message.to_string(), source: Box::new(err.without_url()) }
}

fn error_body(body: &[u8]) -> Option<Value> {
  if body.is_empty() {
    return None;
  }
  match serde_json::from_slice::<Value>(body) {
    Ok(value) => Some(value),
    Err(_) => {
      let text = String::from_utf8_lossy(body).trim().to_string();
      (!text.is_empty()).then_some(Value::String(text))
    }
  }
}

fn preview(body: &[u8]) -> String {
  let text = String::from_utf8_lossy(body);
  text.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use se_core::SiteScope;
  use serde_json::json;

  const BASE: &str = "https://monitoringapi.solaredge.com";

  #[test]
  fn test_build_url() {
    let request = ApiRequest::for_endpoint(&Endpoint::Energy(SiteScope::Single(1001)))
      .param("timeUnit", "DAY")
      .param("startDate", "2024-01-01");

    let url = build_url(BASE, "test_key", &request).unwrap();

    assert_eq!(url.path(), "/site/1001/energy");
    let query = url.query().unwrap();
    assert!(query.contains("timeUnit=DAY"));
    assert!(query.contains("startDate=2024-01-01"));
    assert!(query.ends_with("api_key=test_key"));
  }

  #[test]
  fn test_caller_key_is_overwritten() {
    let request = ApiRequest::new("version/current").param(API_KEY_PARAM, "stale");
    let url = build_url(BASE, "fresh", &request).unwrap();

    let keys: Vec<String> =
      url.query_pairs().filter(|(k, _)| k == API_KEY_PARAM).map(|(_, v)| v.into_owned()).collect();
    assert_eq!(keys, vec!["fresh".to_string()]);
  }

  #[test]
  fn test_base_url_with_prefix_path() {
    let request = ApiRequest::new("sites/list");
    let url = build_url("http://localhost:9000/proxy/", "k", &request).unwrap();
    assert_eq!(url.path(), "/proxy/sites/list");
  }

  #[test]
  fn test_path_segments_are_encoded() {
    let request = ApiRequest::new("site/1/siteImage/roof view.png");
    let url = build_url(BASE, "k", &request).unwrap();
    assert_eq!(url.path(), "/site/1/siteImage/roof%20view.png");
  }

  #[test]
  fn test_redact_masks_key() {
    let request = ApiRequest::new("sites/list").param("size", 10);
    let url = build_url(BASE, "secret-key", &request).unwrap();
    let shown = redact(&url);
    assert!(!shown.contains("secret-key"));
    assert!(shown.contains("size=10"));
  }

  #[test]
  fn test_check_status_classes() {
    assert!(check_status(200, b"{}").is_ok());
    assert!(matches!(check_status(429, b""), Err(Error::RateLimit { status: 429 })));

    match check_status(403, br#"{"String":"Invalid token"}"#) {
      Err(Error::Http { status, body }) => {
        assert_eq!(status, 403);
        assert_eq!(body, Some(json!({"String": "Invalid token"})));
      }
      other => panic!("Expected Http error, got {other:?}"),
    }

    match check_status(500, b"Internal Server Error") {
      Err(Error::Http { status, body }) => {
        assert_eq!(status, 500);
        assert_eq!(body, Some(json!("Internal Server Error")));
      }
      other => panic!("Expected Http error, got {other:?}"),
    }

    assert!(matches!(check_status(502, b""), Err(Error::Http { status: 502, body: None })));
  }

  #[test]
  fn test_decode_json() {
    let value = decode_json(br#"{"version":{"release":"1.0.0"}}"#).unwrap();
    assert_eq!(value["version"]["release"], "1.0.0");

    let err = decode_json(b"<html>maintenance</html>").unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
  }
}
