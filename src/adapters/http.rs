use crate::utils::error::{Result, StatsError};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

const USER_AGENT: &str = concat!("devjobs-stats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Extra attempts after the first one.
    pub attempts: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32) -> Self {
        Self {
            attempts,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Send a GET request, retrying transient failures (connect errors, timeouts,
/// 429 and 5xx) with exponential backoff. Any other non-2xx status fails
/// immediately as `RequestFailed`.
pub async fn send_with_retry(request: RequestBuilder, retry: &RetryPolicy) -> Result<Response> {
    let mut backoff = retry.initial_backoff;
    let mut attempt = 0u32;

    loop {
        let current = request.try_clone().ok_or_else(|| StatsError::ConfigError {
            message: "request is not retryable (streaming body)".to_string(),
        })?;

        match current.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    return Ok(response);
                }
                if !is_transient_status(status) || attempt >= retry.attempts {
                    return Err(StatsError::RequestFailed {
                        url: response.url().to_string(),
                        status,
                    });
                }
                tracing::warn!(
                    "got {} from {}, retrying in {:?}",
                    status,
                    response.url(),
                    backoff
                );
            }
            Err(err) => {
                if !is_transient_error(&err) || attempt >= retry.attempts {
                    return Err(err.into());
                }
                tracing::warn!("transport error ({}), retrying in {:?}", err, backoff);
            }
        }

        tokio::time::sleep(backoff).await;
        backoff *= 2;
        attempt += 1;
    }
}

fn is_transient_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

fn is_transient_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}
