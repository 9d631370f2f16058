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

#![allow(clippy::unwrap_used)]
// Integration tests for the blocking `MonitoringClient`.
//
// The mock server lives on its own tokio runtime; the client is driven from
// the plain test thread so `reqwest::blocking` never runs inside async code.

use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use se_client::blocking::MonitoringClient;
use se_client::{Config, Error, Result};
use se_core::{AccountListQuery, SiteImageOptions, SiteListQuery};
use se_models::{from_value, OverviewResponse};

const API_KEY: &str = "test_key";
const JSON_ENDPOINTS: usize = 28;
const IMAGE_ENDPOINTS: usize = 2;

/// Client, server and runtime, declared in drop order.
struct Harness {
  client: MonitoringClient,
  server: MockServer,
  runtime: Runtime,
}

impl Harness {
  fn new() -> Self {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("se_client=debug").try_init();
    let runtime = Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    let config = Config::new(API_KEY).unwrap().with_base_url(server.uri());
    let client = MonitoringClient::new(config).unwrap();
    Self { client, server, runtime }
  }

  fn mount(&self, mock: Mock) {
    self.runtime.block_on(mock.mount(&self.server));
  }

  fn request_count(&self) -> usize {
    self.runtime.block_on(self.server.received_requests()).map(|r| r.len()).unwrap_or(0)
  }
}

fn call_every_json_endpoint(client: &MonitoringClient) -> Vec<(&'static str, Result<Value>)> {
  let (d0, d1) = ("2024-01-01", "2024-01-31");
  let (t0, t1) = ("2024-01-01 00:00:00", "2024-01-02 00:00:00");
  vec![
    ("site_list", client.site_list(&SiteListQuery::default())),
    ("site_details", client.site_details(1001)),
    ("sites_details", client.sites_details(&[1, 2])),
    ("data_period", client.data_period(1001)),
    ("sites_data_period", client.sites_data_period(&[1, 2])),
    ("overview", client.overview(1001)),
    ("sites_overview", client.sites_overview(&[1, 2])),
    ("env_benefits", client.env_benefits(1001, None)),
    ("energy", client.energy(1001, d0, d1, "DAY")),
    ("sites_energy", client.sites_energy(&[1, 2], d0, d1, "MONTH")),
    ("time_frame_energy", client.time_frame_energy(1001, d0, d1)),
    ("sites_time_frame_energy", client.sites_time_frame_energy(&[1, 2], d0, d1)),
    ("energy_details", client.energy_details(1001, t0, t1, "QUARTER_OF_AN_HOUR", &[])),
    ("meters", client.meters(1001, t0, t1, "DAY", &["FeedIn"])),
    ("power", client.power(1001, t0, t1)),
    ("sites_power", client.sites_power(&[1, 2], t0, t1)),
    ("power_details", client.power_details(1001, t0, t1, &["Purchased"])),
    ("current_power_flow", client.current_power_flow(1001)),
    ("storage_data", client.storage_data(1001, t0, t1, &[])),
    ("components", client.components(1001)),
    ("inventory", client.inventory(1001)),
    ("inverter_data", client.inverter_data(1001, "7F1234AB-01", t0, t1)),
    ("equipment_change_log", client.equipment_change_log(1001, "7F1234AB-01")),
    ("sensors", client.sensors(1001)),
    ("sensor_data", client.sensor_data(1001, d0, d1)),
    ("account_list", client.account_list(&AccountListQuery::default())),
    ("current_version", client.current_version()),
    ("supported_versions", client.supported_versions()),
  ]
}

fn call_every_image_endpoint(client: &MonitoringClient) -> Vec<(&'static str, Result<()>)> {
  vec![
    ("site_image", client.site_image(1001, "roof.png", &SiteImageOptions::default()).map(drop)),
    ("installer_image", client.installer_image(1001, "logo.png").map(drop)),
  ]
}

#[test]
fn test_every_endpoint_returns_body_unchanged() {
  let h = Harness::new();
  let body = json!({"count": 2, "items": [{"a": 1}, {"b": null}]});
  h.mount(
    Mock::given(method("GET"))
      .and(query_param("api_key", API_KEY))
      .respond_with(ResponseTemplate::new(200).set_body_json(&body))
      .expect(JSON_ENDPOINTS as u64),
  );

  for (name, result) in call_every_json_endpoint(&h.client) {
    assert_eq!(result.unwrap_or_else(|e| panic!("{name} failed: {e}")), body, "{name}");
  }
  assert_eq!(h.request_count(), JSON_ENDPOINTS);
}

#[test]
fn test_every_endpoint_surfaces_rate_limit() {
  let h = Harness::new();
  h.mount(Mock::given(any()).respond_with(ResponseTemplate::new(429)));

  for (name, result) in call_every_json_endpoint(&h.client) {
    assert!(matches!(result, Err(Error::RateLimit { status: 429 })), "{name}: {result:?}");
  }
  for (name, result) in call_every_image_endpoint(&h.client) {
    assert!(matches!(result, Err(Error::RateLimit { status: 429 })), "{name}: {result:?}");
  }
  assert_eq!(h.request_count(), JSON_ENDPOINTS + IMAGE_ENDPOINTS);
}

#[test]
fn test_every_endpoint_surfaces_server_error() {
  let h = Harness::new();
  h.mount(Mock::given(any()).respond_with(ResponseTemplate::new(500).set_body_string("Internal error")));

  for (name, result) in call_every_json_endpoint(&h.client) {
    assert_eq!(result.as_ref().err().and_then(Error::status), Some(500), "{name}");
  }
  for (name, result) in call_every_image_endpoint(&h.client) {
    assert_eq!(result.as_ref().err().and_then(Error::status), Some(500), "{name}");
  }
  assert_eq!(h.request_count(), JSON_ENDPOINTS + IMAGE_ENDPOINTS);
}

#[test]
fn test_invalid_arguments_send_nothing() {
  let h = Harness::new();
  h.mount(Mock::given(any()).respond_with(ResponseTemplate::new(200)));

  let result = h.client.energy(1001, "2024-01-01", "2024-01-31", "FORTNIGHT");
  assert!(matches!(result, Err(Error::Validation { .. })));

  let result = h.client.time_frame_energy(1001, "2024-02-01", "2024-01-01");
  assert!(matches!(result, Err(Error::Validation { ref parameter, .. }) if parameter == "endDate"));

  let result = h.client.meters(1001, "2024-01-01", "2024-01-02", "DAY", &["Solar"]);
  assert!(matches!(result, Err(Error::Validation { .. })));

  let too_many: Vec<u64> = (1..=101).collect();
  assert!(matches!(h.client.sites_details(&too_many), Err(Error::Validation { .. })));

  let query = SiteListQuery { size: 0, ..Default::default() };
  assert!(matches!(h.client.site_list(&query), Err(Error::Validation { .. })));

  assert!(matches!(h.client.inverter_data(1001, "", "2024-01-01", "2024-01-02"), Err(Error::Validation { .. })));
  assert!(matches!(h.client.equipment_change_log(1001, ".."), Err(Error::Validation { .. })));
  assert!(matches!(h.client.installer_image(1001, "."), Err(Error::Validation { .. })));

  assert_eq!(h.request_count(), 0);
}

#[test]
fn test_overview_decodes_into_model() {
  let h = Harness::new();
  h.mount(
    Mock::given(method("GET"))
      .and(path("/site/1001/overview"))
      .and(query_param("api_key", API_KEY))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "overview": {
          "lastUpdateTime": "2024-05-01 12:00:00",
          "lifeTimeData": {"energy": 761985.75},
          "lastYearData": {"energy": 761985.75},
          "lastMonthData": {"energy": 492736.7},
          "lastDayData": {"energy": 1100.0},
          "currentPower": {"power": 352.5}
        }
      })))
      .expect(1),
  );

  let value = h.client.overview(1001).unwrap();
  let overview: OverviewResponse = from_value(value).unwrap();
  assert_eq!(overview.overview.current_power.map(|p| p.power), Some(352.5));
}

#[test]
fn test_installer_image_returns_bytes() {
  let h = Harness::new();
  let logo = b"GIF89a\x01\x00".to_vec();
  h.mount(
    Mock::given(method("GET"))
      .and(path("/site/1001/installerImage/logo.gif"))
      .respond_with(ResponseTemplate::new(200).set_body_bytes(logo.clone()))
      .expect(1),
  );

  let bytes = h.client.installer_image(1001, "logo.gif").unwrap();
  assert_eq!(bytes.as_ref(), logo.as_slice());
}

#[test]
fn test_unchanged_image_is_http_304() {
  let h = Harness::new();
  h.mount(
    Mock::given(method("GET"))
      .and(path("/site/1001/siteImage/roof.jpg"))
      .and(query_param("hash", "12345"))
      .respond_with(ResponseTemplate::new(304))
      .expect(1),
  );

  let options = SiteImageOptions { hash: Some(12345), ..Default::default() };
  let err = h.client.site_image(1001, "roof.jpg", &options).unwrap_err();
  assert_eq!(err.status(), Some(304));
}

#[test]
fn test_calls_then_close_then_usage_failure() {
  let h = Harness::new();
  h.mount(
    Mock::given(method("GET"))
      .and(path("/version/current"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": {"release": "1.0.0"}})))
      .expect(2),
  );

  h.client.current_version().unwrap();
  h.client.current_version().unwrap();

  h.client.close();
  h.client.close();
  assert!(h.client.is_closed());
  assert!(matches!(h.client.current_version(), Err(Error::Closed)));
  assert_eq!(h.request_count(), 2);
}

#[test]
fn test_non_json_success_is_decode_error() {
  let h = Harness::new();
  h.mount(Mock::given(any()).respond_with(ResponseTemplate::new(200).set_body_string("not json")));

  assert!(matches!(h.client.inventory(1001), Err(Error::Decode { .. })));
}

#[test]
fn test_connection_failure_is_transport_error() {
  let config = Config::new(API_KEY).unwrap().with_base_url("http://127.0.0.1:1").with_timeout_secs(2);
  let client = MonitoringClient::new(config).unwrap();

  let err = client.sensors(1001).unwrap_err();
  assert!(matches!(err, Error::Transport { .. }), "got {err:?}");
  assert!(!format!("{err:?}").contains(API_KEY));
}
