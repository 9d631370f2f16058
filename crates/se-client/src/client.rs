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

//! The async monitoring client

use crate::endpoints::{image_endpoints, json_endpoints};
use crate::transport::Transport;
use se_core::{Config, Result};
use std::sync::Arc;
use tracing::instrument;

/// Async SolarEdge monitoring API client
///
/// Provides one method per documented endpoint. Each method validates its
/// arguments, then issues exactly one GET request through the shared
/// [`Transport`]. The client never retries, caches or throttles; the vendor's
/// limit of three concurrent calls per key is the caller's to respect.
///
/// Cloning is cheap and clones share the connection pool.
///
/// # Examples
///
/// ```rust,no_run
/// use se_client::AsyncMonitoringClient;
/// use se_core::{Config, SiteListQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = AsyncMonitoringClient::new(Config::from_env()?)?;
///
///     let sites = client.site_list(&SiteListQuery::default()).await?;
///     println!("{}", sites["sites"]["count"]);
///
///     let overview = client.overview(1001).await?;
///     println!("{}", overview["overview"]["currentPower"]["power"]);
///
///     client.close();
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AsyncMonitoringClient {
  transport: Arc<Transport>,
}

macro_rules! async_endpoint_methods {
  (
    $exec:ident -> $out:ty;
    $( $(#[$meta:meta])* $name:ident ( $($arg:ident : $ty:ty),* ) => $build:expr; )*
  ) => {
    impl AsyncMonitoringClient {
      $(
        $(#[$meta])*
        #[instrument(skip(self))]
        pub async fn $name(&self, $($arg: $ty),*) -> Result<$out> {
          let request = $build?;
          self.transport.$exec(request).await
        }
      )*
    }
  };
}

json_endpoints!(async_endpoint_methods);
image_endpoints!(async_endpoint_methods);

impl AsyncMonitoringClient {
  /// Create a new client with its own connection pool
  ///
  /// # Errors
  ///
  /// Returns an error if the key is empty, the base URL is invalid, or the
  /// HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client over an existing `reqwest::Client`
  pub fn with_client(config: Config, client: reqwest::Client) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::with_client(&config, client)?) })
  }

  /// Run an arbitrary request through the transport, e.g. for an endpoint
  /// this client has no method for yet
  pub async fn execute(&self, request: crate::request::ApiRequest) -> Result<serde_json::Value> {
    self.transport.execute(request).await
  }

  /// Release the connection pool. Safe to call more than once.
  ///
  /// Any later call on this client or its clones fails with [`se_core::Error::Closed`].
  pub fn close(&self) {
    self.transport.close();
  }

  /// Whether [`AsyncMonitoringClient::close`] has run
  pub fn is_closed(&self) -> bool {
    self.transport.is_closed()
  }

  /// Get a reference to the transport layer
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use se_core::Error;

  fn client() -> AsyncMonitoringClient {
    let config = Config::new("test_key").unwrap().with_base_url("http://127.0.0.1:9");
    AsyncMonitoringClient::new(config).unwrap()
  }

  #[test]
  fn test_client_creation() {
    let client = client();
    assert!(!client.is_closed());
    assert_eq!(client.transport().base_url(), "http://127.0.0.1:9");
  }

  #[test]
  fn test_empty_key_rejected_at_construction() {
    let config = Config {
      api_key: String::new(),
      timeout_secs: 10,
      base_url: se_core::SOLAREDGE_BASE_URL.to_string(),
    };
    assert!(matches!(AsyncMonitoringClient::new(config), Err(Error::ApiKey(_))));
  }

  #[tokio::test]
  async fn test_validation_precedes_closed_check() {
    let client = client();
    client.close();

    let result = client.energy(1, "2024-01-01", "2024-01-31", "FORTNIGHT").await;
    assert!(matches!(result, Err(Error::Validation { .. })));

    let result = client.overview(1).await;
    assert!(matches!(result, Err(Error::Closed)));
  }

  #[tokio::test]
  async fn test_clones_share_pool_state() {
    let client = client();
    let clone = client.clone();
    clone.close();
    assert!(client.is_closed());
    assert!(matches!(client.current_version().await, Err(Error::Closed)));
  }
}
