use anyhow::{Context, Result};
use clap::Args;
use se_core::Config;

/// Connection flags. Each falls back to its environment variable, then to
/// the library default.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
  /// Monitoring API key
  #[arg(long, env = "SOLAREDGE_API_KEY", hide_env_values = true, global = true)]
  api_key: Option<String>,

  /// Base URL of the monitoring API
  #[arg(long, env = "SOLAREDGE_BASE_URL", global = true)]
  base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, env = "SOLAREDGE_TIMEOUT_SECS", global = true)]
  timeout: Option<u64>,
}

impl ConnectionArgs {
  pub fn into_config(self) -> Result<Config> {
    let api_key = self.api_key.context("SOLAREDGE_API_KEY environment variable not set")?;

    let mut config = Config::new(api_key)?;
    if let Some(base_url) = self.base_url {
      config = config.with_base_url(base_url);
    }
    if let Some(timeout) = self.timeout {
      config = config.with_timeout_secs(timeout);
    }
    config.validate().context("Invalid connection settings")?;
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(api_key: Option<&str>, base_url: Option<&str>, timeout: Option<u64>) -> ConnectionArgs {
    ConnectionArgs {
      api_key: api_key.map(str::to_string),
      base_url: base_url.map(str::to_string),
      timeout,
    }
  }

  #[test]
  fn test_defaults_apply() {
    let config = args(Some("key"), None, None).into_config().unwrap();
    assert_eq!(config.base_url, se_core::SOLAREDGE_BASE_URL);
    assert_eq!(config.timeout_secs, se_core::DEFAULT_TIMEOUT_SECS);
  }

  #[test]
  fn test_overrides_apply() {
    let config = args(Some("key"), Some("http://localhost:8080"), Some(3)).into_config().unwrap();
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, 3);
  }

  #[test]
  fn test_missing_key_and_bad_timeout_rejected() {
    assert!(args(None, None, None).into_config().is_err());
    assert!(args(Some("key"), None, Some(0)).into_config().is_err());
  }
}
