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

//! Async HTTP transport for SolarEdge API requests

use crate::request::{self, ApiRequest};
use bytes::Bytes;
use reqwest::Client;
use se_core::{Config, Error, Result};
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// User agent sent with every request
pub(crate) const USER_AGENT: &str = concat!("se-client/", env!("CARGO_PKG_VERSION"));

/// Async transport for the monitoring API.
///
/// Owns the connection pool (a `reqwest::Client`) from construction until
/// [`Transport::close`]. Every call clones the pool handle out of the lock
/// before awaiting, so no lock is held across I/O.
pub struct Transport {
  client: RwLock<Option<Client>>,
  base_url: String,
  api_key: String,
  timeout: Option<Duration>,
}

impl Transport {
  /// Create a new transport with its own connection pool
  pub fn new(config: &Config) -> Result<Self> {
    config.validate()?;
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self::assemble(config, client, Some(timeout)))
  }

  /// Create a transport over a caller-supplied client, e.g. one pointed at a mock.
  ///
  /// The caller's own handles to the pool stay usable after `close()`.
  /// `config.timeout_secs` is ignored; the client's own timeout applies.
  pub fn with_client(config: &Config, client: Client) -> Result<Self> {
    config.validate()?;
    Ok(Self::assemble(config, client, None))
  }

  fn assemble(config: &Config, client: Client, timeout: Option<Duration>) -> Self {
    Self {
      client: RwLock::new(Some(client)),
      base_url: config.normalized_base_url().to_string(),
      api_key: config.api_key.clone(),
      timeout,
    }
  }

  /// GET `request` and decode the body as JSON
  #[instrument(skip(self, request), fields(path = %request.path()))]
  pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
    let body = self.send(&request).await?;
    let value = request::decode_json(&body)?;
    info!("Successfully parsed response for: {}", request.path());
    Ok(value)
  }

  /// GET `request` and return the raw body, for binary endpoints such as images
  #[instrument(skip(self, request), fields(path = %request.path()))]
  pub async fn execute_bytes(&self, request: ApiRequest) -> Result<Bytes> {
    let body = self.send(&request).await?;
    info!("Received {} bytes for: {}", body.len(), request.path());
    Ok(body)
  }

  async fn send(&self, request: &ApiRequest) -> Result<Bytes> {
    let client = self.pool()?;
    let url = request::build_url(&self.base_url, &self.api_key, request)?;
    debug!("Making request to: {}", request::redact(&url));

    let response = client.get(url).send().await.map_err(request::transport_error)?;
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(request::transport_error)?;
    debug!("Response status {} with {} bytes", status, body.len());

    request::check_status(status, &body)?;
    Ok(body)
  }

  fn pool(&self) -> Result<Client> {
    self.client.read().unwrap_or_else(PoisonError::into_inner).clone().ok_or(Error::Closed)
  }

  /// Release the connection pool. Idempotent; later calls fail with [`Error::Closed`].
  ///
  /// Requests already in flight keep their own pool handle and finish normally.
  pub fn close(&self) {
    let released = self.client.write().unwrap_or_else(PoisonError::into_inner).take();
    if released.is_some() {
      debug!("Connection pool released");
    }
  }

  /// Whether [`Transport::close`] has run
  pub fn is_closed(&self) -> bool {
    self.client.read().unwrap_or_else(PoisonError::into_inner).is_none()
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Request timeout applied by the pool this transport built.
  ///
  /// `None` for an injected client, whose own settings apply.
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .field("closed", &self.is_closed())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> Config {
    Config::new("test_key").unwrap().with_base_url("https://mock.solaredge.test/")
  }

  #[test]
  fn test_transport_normalises_base_url() {
    let transport = Transport::new(&config()).unwrap();
    assert_eq!(transport.base_url(), "https://mock.solaredge.test");
    assert_eq!(transport.timeout(), Some(Duration::from_secs(10)));
  }

  #[test]
  fn test_injected_client_reports_no_timeout() {
    let transport = Transport::with_client(&config().with_timeout_secs(3), Client::new()).unwrap();
    assert_eq!(transport.timeout(), None);
  }

  #[test]
  fn test_invalid_config_fails_at_construction() {
    let mut bad = config();
    bad.api_key = String::new();
    assert!(matches!(Transport::new(&bad), Err(Error::ApiKey(_))));
  }

  #[tokio::test]
  async fn test_close_is_idempotent_and_blocks_calls() {
    let transport = Transport::new(&config()).unwrap();
    assert!(!transport.is_closed());

    transport.close();
    transport.close();
    assert!(transport.is_closed());

    let result = transport.execute(ApiRequest::new("version/current")).await;
    assert!(matches!(result, Err(Error::Closed)));
  }

  #[test]
  fn test_debug_hides_key() {
    let transport = Transport::new(&config()).unwrap();
    assert!(!format!("{transport:?}").contains("test_key"));
  }
}
