//! HTTP client wrapper for downloading legislation pages.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{HTTP_TIMEOUT_SECS, MAX_RESPONSE_SIZE};
use crate::error::{HarvestError, Result};

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("leisbr-harvester/", env!("CARGO_PKG_VERSION"));

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const RETRY_BASE_DELAY_MS: u64 = 500;

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download a page as text, with retry logic.
///
/// Uses exponential backoff for transient failures (connection errors,
/// timeouts, 5xx responses). Client errors (4xx) are not retried. Responses
/// larger than [`MAX_RESPONSE_SIZE`] are rejected.
pub fn download_text(client: &Client, url: &str) -> Result<String> {
    let mut last_error: Option<String> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            // Exponential backoff: 500ms, 1000ms, 2000ms
            let delay = RETRY_BASE_DELAY_MS * (1 << (attempt - 1));
            tracing::debug!(attempt, delay_ms = delay, "Retrying after delay");
            thread::sleep(Duration::from_millis(delay));
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();

                // Retry on server errors (5xx)
                if status.is_server_error() {
                    tracing::warn!(
                        status = %status,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Server error, will retry"
                    );
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }

                let response = response.error_for_status()?;
                if let Some(length) = response.content_length() {
                    if length > MAX_RESPONSE_SIZE {
                        return Err(HarvestError::ResponseTooLarge {
                            size: length,
                            limit: MAX_RESPONSE_SIZE,
                        });
                    }
                }

                let body = response.text()?;
                if body.len() as u64 > MAX_RESPONSE_SIZE {
                    return Err(HarvestError::ResponseTooLarge {
                        size: body.len() as u64,
                        limit: MAX_RESPONSE_SIZE,
                    });
                }
                return Ok(body);
            }
            Err(e) => {
                // Retry on connection/timeout errors
                if e.is_connect() || e.is_timeout() {
                    tracing::warn!(
                        error = %e,
                        attempt = attempt + 1,
                        max_retries = MAX_RETRIES,
                        "Connection error, will retry"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
                // Other errors (like invalid URL) - don't retry
                return Err(HarvestError::Http(e));
            }
        }
    }

    Err(HarvestError::RetriesExhausted {
        attempts: MAX_RETRIES,
        message: last_error.unwrap_or_else(|| "Unknown error".to_string()),
    })
}
