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

//! # se-client
//!
//! A thin client for the SolarEdge monitoring API.
//!
//! ## Features
//!
//! - **One method per endpoint**: sites, energy, power, storage, equipment,
//!   sensors, accounts, versions and images
//! - **Async and blocking**: [`AsyncMonitoringClient`] on tokio and
//!   [`blocking::MonitoringClient`] on `reqwest::blocking`, sharing one
//!   validation and error-classification core in [`request`]
//! - **Fail fast**: out-of-domain arguments are rejected before any request is sent
//! - **Opaque JSON**: responses come back as `serde_json::Value`; typed views
//!   live in `se-models`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use se_client::AsyncMonitoringClient;
//! use se_core::{Config, TimeUnit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = AsyncMonitoringClient::new(config)?;
//!
//!     let energy = client
//!         .energy(1001, "2024-01-01", "2024-01-31", TimeUnit::Day.as_str())
//!         .await?;
//!     println!("{}", energy["energy"]["unit"]);
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! The API allows three concurrent calls per key and answers `429` once the
//! daily quota is spent. The client enforces neither: a `429` surfaces as
//! [`Error::RateLimit`] after exactly one request, and any backoff is up to the
//! caller ([`Error::is_retryable`] helps decide).
//!
//! ## Error Handling
//!
//! All methods return `Result<T, se_core::Error>`; every failure class is a
//! distinct variant.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blocking;
pub mod cancel;
pub mod client;
pub mod endpoints;
pub mod request;
pub mod transport;

// Re-export the main client and common types
pub use cancel::run_cancellable;
pub use client::AsyncMonitoringClient;
pub use request::ApiRequest;
pub use se_core::{Config, Error, Result};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::new("test_key").unwrap();
    assert_eq!(config.api_key, "test_key");
    assert!(AsyncMonitoringClient::new(config).is_ok());
  }
}
