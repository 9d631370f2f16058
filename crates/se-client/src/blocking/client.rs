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

//! The blocking monitoring client

use super::transport::Transport;
use crate::endpoints::{image_endpoints, json_endpoints};
use se_core::{Config, Result};
use tracing::instrument;

/// Blocking SolarEdge monitoring API client
///
/// Same surface as [`crate::AsyncMonitoringClient`], minus the `.await`.
/// The pool is released when the client is dropped or [`MonitoringClient::close`]
/// is called, whichever comes first.
///
/// ```rust,no_run
/// use se_client::blocking::MonitoringClient;
/// use se_core::Config;
///
/// let client = MonitoringClient::new(Config::new("API_KEY")?)?;
/// let details = client.site_details(1001)?;
/// println!("{}", details["details"]["name"]);
/// # Ok::<(), se_core::Error>(())
/// ```
#[derive(Debug)]
pub struct MonitoringClient {
  transport: Transport,
}

macro_rules! blocking_endpoint_methods {
  (
    $exec:ident -> $out:ty;
    $( $(#[$meta:meta])* $name:ident ( $($arg:ident : $ty:ty),* ) => $build:expr; )*
  ) => {
    impl MonitoringClient {
      $(
        $(#[$meta])*
        #[instrument(skip(self))]
        pub fn $name(&self, $($arg: $ty),*) -> Result<$out> {
          let request = $build?;
          self.transport.$exec(request)
        }
      )*
    }
  };
}

json_endpoints!(blocking_endpoint_methods);
image_endpoints!(blocking_endpoint_methods);

impl MonitoringClient {
  /// Create a new client with its own connection pool
  pub fn new(config: Config) -> Result<Self> {
    Ok(Self { transport: Transport::new(&config)? })
  }

  /// Create a client over an existing `reqwest::blocking::Client`
  pub fn with_client(config: Config, client: reqwest::blocking::Client) -> Result<Self> {
    Ok(Self { transport: Transport::with_client(&config, client)? })
  }

  /// Run an arbitrary request through the transport
  pub fn execute(&self, request: crate::request::ApiRequest) -> Result<serde_json::Value> {
    self.transport.execute(request)
  }

  /// Release the connection pool. Safe to call more than once.
  pub fn close(&self) {
    self.transport.close();
  }

  /// Whether [`MonitoringClient::close`] has run
  pub fn is_closed(&self) -> bool {
    self.transport.is_closed()
  }

  /// Get a reference to the transport layer
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use se_core::{Error, SiteListQuery};

  #[test]
  fn test_validation_runs_before_closed_check() {
    let client = MonitoringClient::new(Config::new("test_key").unwrap()).unwrap();
    client.close();

    let query = SiteListQuery { size: 500, ..Default::default() };
    assert!(matches!(client.site_list(&query), Err(Error::Validation { .. })));
    assert!(matches!(client.site_details(1), Err(Error::Closed)));
  }
}
