//! HTTP plumbing for registry requests.

use std::time::Duration;

use reqwest::Client;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a shared reqwest client for registry fetches.
pub fn build_client() -> miette::Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent("hull/0.2")
        .build()
        .map_err(|e| {
            hull_util::errors::HullError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            }
            .into()
        })
}

/// Fetch a text document from a URL, with bounded retries.
///
/// Returns `Ok(None)` for 404 (no such document). Server errors, timeouts,
/// and connection failures are retried; anything else fails immediately.
pub async fn fetch_text(client: &Client, url: &str) -> miette::Result<Option<String>> {
    let mut last_err = String::new();

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            tokio::time::sleep(RETRY_DELAY * attempt).await;
        }

        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status == reqwest::StatusCode::NOT_FOUND {
                    return Ok(None);
                }
                if status.is_server_error() {
                    last_err = format!("HTTP {status} from {url}");
                    continue;
                }
                if !status.is_success() {
                    return Err(hull_util::errors::HullError::Network {
                        message: format!("HTTP {status} fetching {url}"),
                    }
                    .into());
                }

                let body =
                    resp.text()
                        .await
                        .map_err(|e| hull_util::errors::HullError::Network {
                            message: format!("Failed to read response from {url}: {e}"),
                        })?;
                return Ok(Some(body));
            }
            Err(e) if e.is_timeout() || e.is_connect() => {
                last_err = format!("{e}");
                continue;
            }
            Err(e) => {
                return Err(hull_util::errors::HullError::Network {
                    message: format!("Request to {url} failed: {e}"),
                }
                .into());
            }
        }
    }

    Err(hull_util::errors::HullError::Network {
        message: format!("Failed after {MAX_RETRIES} retries for {url}: {last_err}"),
    }
    .into())
}
