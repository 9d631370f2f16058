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

//! Configuration management for the SolarEdge client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Main configuration struct for the SolarEdge client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// SolarEdge monitoring API key
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the monitoring API
  pub base_url: String,
}

impl Config {
  /// Create a config for `api_key` with default timeout and base URL.
  ///
  /// Fails when the key is empty so a misconfigured client never reaches the network.
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    let config = Config {
      api_key: api_key.into(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::SOLAREDGE_BASE_URL.to_string(),
    };
    config.validate()?;
    Ok(config)
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("SOLAREDGE_API_KEY")
      .map_err(|_| Error::ApiKey("SOLAREDGE_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("SOLAREDGE_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SOLAREDGE_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("SOLAREDGE_BASE_URL").unwrap_or_else(|_| crate::SOLAREDGE_BASE_URL.to_string());

    let config = Config { api_key, timeout_secs, base_url };
    config.validate()?;
    Ok(config)
  }

  /// Override the base URL, e.g. to point at a mock server
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Override the request timeout
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Base URL without trailing slashes
  pub fn normalized_base_url(&self) -> &str {
    self.base_url.trim_end_matches('/')
  }

  /// Check the invariants every client relies on
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::ApiKey("API key must not be empty".to_string()));
    }
    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
    }
    let url = Url::parse(self.normalized_base_url())
      .map_err(|e| Error::Config(format!("Invalid base URL `{}`: {}", self.base_url, e)))?;
    if url.cannot_be_a_base() {
      return Err(Error::Config(format!("Base URL `{}` cannot carry a path", self.base_url)));
    }
    Ok(())
  }
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"<redacted>")
      .field("timeout_secs", &self.timeout_secs)
      .field("base_url", &self.base_url)
      .finish()
  }
}
