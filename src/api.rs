/// Synchronous client for the dashboard backend.
///
/// Two endpoints, both `POST` with an empty JSON body:
/// - `/trend_chart` -> `{ "chartDim": {hotel: [[millis, amount], ...]} }`
/// - `/bookings_by_month` -> `{ "chartData": {hotel: {month: count}} }`
///
/// Payloads are fetched fresh on every call, never cached. Failures (network
/// error or non-success status) surface as a single error per attempt; the
/// dashboard's error policy is alert-and-stop, so there is no retry here.
///
/// Typical usage:
/// ```no_run
/// # use bookdash::Client;
/// let client = Client::default();
/// let payload = client.fetch_revenue_trend()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::{BookingsPayload, BookingsResponse, ChartKind, TrendPayload, TrendResponse};
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// The backend's development default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("bookdash/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            http,
        }
    }
}

impl Client {
    /// Client against a non-default backend, e.g. `http://dashboard:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    fn post_chart<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        log::debug!("POST {url}");
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .with_context(|| format!("POST {url}"))?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        resp.json().context("decode json")
    }

    /// Fetch the per-hotel revenue time series.
    pub fn fetch_revenue_trend(&self) -> Result<TrendPayload> {
        let resp: TrendResponse = self.post_chart(ChartKind::RevenueTrend.endpoint())?;
        Ok(resp.chart_dim)
    }

    /// Fetch the hotel -> month -> count bookings map.
    pub fn fetch_bookings_by_month(&self) -> Result<BookingsPayload> {
        let resp: BookingsResponse = self.post_chart(ChartKind::BookingsByMonth.endpoint())?;
        Ok(resp.chart_data)
    }
}
