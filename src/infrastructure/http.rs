pub mod coingecko_client;
pub mod dto;

pub use coingecko_client::CoinGeckoClient;

use crate::config::RetryPolicy;
use crate::domain::{
    errors::{AppError, AppResult, NetworkError},
    logging::LogComponent,
};
use futures::future::{Either, select};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

/// JSON-over-HTTP client on top of gloo-net with a timeout and bounded retry
#[derive(Debug, Clone)]
pub struct GlooHttpClient {
    timeout_ms: u32,
    retry: RetryPolicy,
}

impl Default for GlooHttpClient {
    fn default() -> Self {
        Self::new(15_000, RetryPolicy::default())
    }
}

impl GlooHttpClient {
    pub fn new(timeout_ms: u32, retry: RetryPolicy) -> Self {
        Self { timeout_ms, retry }
    }

    /// GET and decode JSON, retrying transport failures, 429 and 5xx.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let mut attempt = 0;
        loop {
            match self.get_json_once::<T>(url).await {
                Ok(data) => return Ok(data),
                Err(e) if e.is_retryable() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for(attempt);
                    crate::log_warn!(
                        LogComponent::Infrastructure("HTTP"),
                        "GET {} failed ({}), retry {} in {} ms",
                        url,
                        e,
                        attempt + 1,
                        delay
                    );
                    TimeoutFuture::new(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    crate::log_error!(LogComponent::Infrastructure("HTTP"), "GET {} failed: {}", url, e);
                    return Err(e);
                }
            }
        }
    }

    async fn get_json_once<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        crate::log_trace!(LogComponent::Infrastructure("HTTP"), "🌐 GET: {}", url);

        let response = self.send_with_timeout(url).await?;
        if !response.ok() {
            return Err(NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            }
            .into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    async fn send_with_timeout(&self, url: &str) -> AppResult<Response> {
        let request = Request::get(url).header("Accept", "application/json").send();
        match select(Box::pin(request), TimeoutFuture::new(self.timeout_ms)).await {
            Either::Left((result, _)) => {
                result.map_err(|e| NetworkError::RequestFailed(e.to_string()).into())
            }
            Either::Right(_) => Err(NetworkError::Timeout(self.timeout_ms).into()),
        }
    }
}
