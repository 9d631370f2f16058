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

//! Blocking HTTP transport for SolarEdge API requests

use crate::request::{self, ApiRequest};
use bytes::Bytes;
use reqwest::blocking::Client;
use se_core::{Config, Error, Result};
use serde_json::Value;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Blocking transport. Each call occupies the calling thread until the
/// response or a failure arrives.
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
      .user_agent(crate::transport::USER_AGENT)
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self::assemble(config, client, Some(timeout)))
  }

  /// Create a transport over a caller-supplied blocking client.
  ///
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
  pub fn execute(&self, request: ApiRequest) -> Result<Value> {
    let body = self.send(&request)?;
    let value = request::decode_json(&body)?;
    info!("Successfully parsed response for: {}", request.path());
    Ok(value)
  }

  /// GET `request` and return the raw body
  #[instrument(skip(self, request), fields(path = %request.path()))]
  pub fn execute_bytes(&self, request: ApiRequest) -> Result<Bytes> {
    let body = self.send(&request)?;
    info!("Received {} bytes for: {}", body.len(), request.path());
    Ok(body)
  }

  fn send(&self, request: &ApiRequest) -> Result<Bytes> {
    let client = self.pool()?;
    let url = request::build_url(&self.base_url, &self.api_key, request)?;
    debug!("Making request to: {}", request::redact(&url));

    let response = client.get(url).send().map_err(request::transport_error)?;
    let status = response.status().as_u16();
    let body = response.bytes().map_err(request::transport_error)?;
    debug!("Response status {} with {} bytes", status, body.len());

    request::check_status(status, &body)?;
    Ok(body)
  }

  fn pool(&self) -> Result<Client> {
    self.client.read().unwrap_or_else(PoisonError::into_inner).clone().ok_or(Error::Closed)
  }

  /// Release the connection pool. Idempotent.
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
    f.debug_struct("blocking::Transport")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .field("closed", &self.is_closed())
      .finish()
  }
}
