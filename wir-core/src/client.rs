//! HTTP client for the weather summary endpoint.
//!
//! One request per search, no retries. Transport errors, timeouts, non-2xx
//! statuses and unparseable bodies all come back as a [`QueryError`] for the
//! caller to surface.

use crate::config::ServiceConfig;
use crate::error::QueryError;
use crate::query::WeatherQuery;
use crate::summary::WeatherSummary;
use futures::future::{self, Either};
use log::{debug, info, warn};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    config: ServiceConfig,
}

impl WeatherClient {
    /// Build a client for the given service configuration.
    ///
    /// Every request is bounded by `timeout_secs`: by reqwest's own timer on
    /// native targets, by a `setTimeout` deadline in the browser.
    pub fn new(config: ServiceConfig) -> Result<Self, QueryError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        let client = builder
            .build()
            .map_err(|e| QueryError::Client(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// `GET /weather?lat=..&lon=..&event_date=..` and parse the summary.
    pub async fn fetch_summary(&self, query: &WeatherQuery) -> Result<WeatherSummary, QueryError> {
        let url = self.config.weather_url();
        info!("{} ({})", query.describe(), url);

        let limit = Duration::from_secs(self.config.timeout_secs);
        let summary = within(limit, deadline(limit), self.request_summary(&url, query))
            .await
            .inspect_err(|e| warn!("Weather query to {} failed: {}", url, e))?;
        debug!("Received {} categories from {}", summary.len(), url);
        Ok(summary)
    }

    async fn request_summary(
        &self,
        url: &str,
        query: &WeatherQuery,
    ) -> Result<WeatherSummary, QueryError> {
        let response = self
            .client
            .get(url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        WeatherSummary::from_json_str(&body)
    }
}

/// Settle `request`, or fail with a transport error once `deadline` fires.
async fn within<F, D>(limit: Duration, deadline: D, request: F) -> Result<WeatherSummary, QueryError>
where
    F: Future<Output = Result<WeatherSummary, QueryError>>,
    D: Future<Output = ()>,
{
    match future::select(std::pin::pin!(request), std::pin::pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(QueryError::Transport(format!(
            "timed out after {}s",
            limit.as_secs()
        ))),
    }
}

/// Resolves after `limit` via `window.setTimeout`.
#[cfg(target_arch = "wasm32")]
async fn deadline(limit: Duration) {
    let millis = i32::try_from(limit.as_millis()).unwrap_or(i32::MAX);
    let timer = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            log::error!("Could not schedule the request deadline");
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(timer).await;
}

/// The native client already enforces the timeout.
#[cfg(not(target_arch = "wasm32"))]
async fn deadline(_limit: Duration) {
    future::pending::<()>().await
}
