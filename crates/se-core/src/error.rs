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

use thiserror::Error;

/// The main error type for se-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or empty API key
  #[error("Invalid API key: {0}")]
  ApiKey(String),

  /// A parameter was outside its documented domain. Raised before any request is sent.
  #[error("Invalid value for `{parameter}`: {message}")]
  Validation { parameter: String, message: String },

  /// The API answered 429. Never retried by the client.
  #[error("Rate limit exceeded (HTTP {status})")]
  RateLimit { status: u16 },

  /// Any other non-2xx answer
  #[error("HTTP error {status}")]
  Http {
    status: u16,
    /// Decoded JSON error body, or the raw text when it is not JSON
    body: Option<serde_json::Value>,
  },

  /// Network-level failure: timeout, refused connection, DNS
  #[error("Transport error: {message}")]
  Transport {
    message: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  /// A successful response whose body could not be decoded
  #[error("Failed to decode response: {message}")]
  Decode {
    message: String,
    #[source]
    source: serde_json::Error,
  },

  /// The client was used after `close()`
  #[error("Client has been closed")]
  Closed,

  /// The call was cancelled before a response arrived
  #[error("Request was cancelled")]
  Cancelled,
}

impl Error {
  /// Build a validation error for `parameter`
  pub fn validation(parameter: impl Into<String>, message: impl Into<String>) -> Self {
    Error::Validation { parameter: parameter.into(), message: message.into() }
  }

  /// HTTP status carried by the error, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::RateLimit { status } | Error::Http { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// True for a 429 answer
  pub fn is_rate_limited(&self) -> bool {
    matches!(self, Error::RateLimit { .. })
  }

  /// Whether a caller-side retry could succeed.
  ///
  /// The client never retries on its own; this is guidance for callers that
  /// wrap calls in their own backoff loop.
  pub fn is_retryable(&self) -> bool {
    match self {
      Error::RateLimit { .. } | Error::Transport { .. } => true,
      Error::Http { status, .. } => *status >= 500,
      _ => false,
    }
  }
}

/// Result type alias for se-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_is_exposed_for_http_classes() {
    assert_eq!(Error::RateLimit { status: 429 }.status(), Some(429));
    assert_eq!(Error::Http { status: 500, body: None }.status(), Some(500));
    assert_eq!(Error::Closed.status(), None);
  }

  #[test]
  fn test_retry_guidance() {
    assert!(Error::RateLimit { status: 429 }.is_retryable());
    assert!(Error::Http { status: 503, body: None }.is_retryable());
    assert!(!Error::Http { status: 403, body: None }.is_retryable());
    assert!(!Error::validation("timeUnit", "bad").is_retryable());
    assert!(!Error::Closed.is_retryable());
  }

  #[test]
  fn test_validation_message_names_parameter() {
    let err = Error::validation("timeUnit", "unrecognised value `FORTNIGHT`");
    assert_eq!(err.to_string(), "Invalid value for `timeUnit`: unrecognised value `FORTNIGHT`");
  }
}
