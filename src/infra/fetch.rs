//! HTTP retrieval of remote assets
//!
//! Fetches resource bodies as UTF-8 text with explicit timeouts and retry
//! with exponential backoff. Only transient failures (transport errors,
//! timeouts, 5xx) are retried; client errors and undecodable bodies abort
//! immediately.

use std::time::Duration;

use crate::config::defaults;
use crate::error::FetchError;

/// HTTP fetcher for remote asset bodies
#[derive(Debug, Clone)]
pub struct Fetcher {
    /// HTTP client
    client: reqwest::Client,
    /// Maximum attempts per resource
    max_attempts: u32,
    /// Base delay for exponential backoff (in milliseconds)
    base_delay_ms: u64,
}

impl Fetcher {
    /// Create a fetcher with default retry settings
    pub fn new() -> Self {
        Self::with_config(
            defaults::MAX_FETCH_ATTEMPTS,
            defaults::BACKOFF_BASE_DELAY_MS,
        )
    }

    /// Create a fetcher with custom retry settings
    pub fn with_config(max_attempts: u32, base_delay_ms: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(defaults::REQUEST_TIMEOUT)
                .connect_timeout(defaults::CONNECT_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            max_attempts,
            base_delay_ms,
        }
    }

    /// Get max attempts
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fetch `url` and decode the body as UTF-8 text.
    ///
    /// `filename` names the resource in errors, per the batch contract of
    /// the preparation run.
    pub async fn fetch_text(&self, url: &str, filename: &str) -> Result<String, FetchError> {
        let mut attempts = 0;
        let mut last_error = None;
        let mut delay_ms = self.base_delay_ms;

        while attempts < self.max_attempts {
            attempts += 1;

            match self.fetch_once(url, filename).await {
                Ok(text) => return Ok(text),
                Err(e) if !e.is_transient() => return Err(e),
                Err(e) => {
                    tracing::debug!("Attempt {attempts} for `{filename}` failed: {e}");
                    last_error = Some(e);

                    if attempts < self.max_attempts {
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        delay_ms = (delay_ms * 2).min(defaults::BACKOFF_MAX_DELAY_MS);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| FetchError::MaxRetriesExceeded {
            url: url.to_string(),
            retries: self.max_attempts,
        }))
    }

    /// Single fetch attempt without retry
    async fn fetch_once(&self, url: &str, filename: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Network {
                    url: url.to_string(),
                    error: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                filename: filename.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Network {
                    url: url.to_string(),
                    error: e.to_string(),
                }
            }
        })?;

        String::from_utf8(body.to_vec()).map_err(|e| FetchError::Decode {
            filename: filename.to_string(),
            error: e.to_string(),
        })
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_fetcher() -> Fetcher {
        // Short backoff to keep tests quick
        Fetcher::with_config(3, 10)
    }

    #[tokio::test]
    async fn test_fetch_text_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repo/1.0/file.c"))
            .respond_with(ResponseTemplate::new(200).set_body_string("int main;\n"))
            .mount(&mock_server)
            .await;

        let fetcher = fast_fetcher();
        let text = fetcher
            .fetch_text(&format!("{}/repo/1.0/file.c", mock_server.uri()), "file.c")
            .await
            .unwrap();

        assert_eq!(text, "int main;\n");
    }

    #[tokio::test]
    async fn test_fetch_text_not_found_is_permanent() {
        let mock_server = MockServer::start().await;

        // A 404 must not be retried
        Mock::given(method("GET"))
            .and(path("/missing.c"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = fast_fetcher();
        let err = fetcher
            .fetch_text(&format!("{}/missing.c", mock_server.uri()), "missing.c")
            .await
            .unwrap_err();

        match err {
            FetchError::Status { filename, status } => {
                assert_eq!(filename, "missing.c");
                assert_eq!(status, 404);
            }
            e => panic!("Expected Status error, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_text_retries_server_errors() {
        let mock_server = MockServer::start().await;

        // First two requests fail, third succeeds
        Mock::given(method("GET"))
            .and(path("/flaky.c"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/flaky.c"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&mock_server)
            .await;

        let fetcher = fast_fetcher();
        let text = fetcher
            .fetch_text(&format!("{}/flaky.c", mock_server.uri()), "flaky.c")
            .await
            .unwrap();

        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_fetch_text_exhausts_retries() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/down.c"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&mock_server)
            .await;

        let fetcher = fast_fetcher();
        let err = fetcher
            .fetch_text(&format!("{}/down.c", mock_server.uri()), "down.c")
            .await
            .unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status, 503),
            e => panic!("Expected Status error, got: {e:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_text_rejects_invalid_utf8() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/binary.bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xFE, 0x00, 0x80]))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = fast_fetcher();
        let err = fetcher
            .fetch_text(&format!("{}/binary.bin", mock_server.uri()), "binary.bin")
            .await
            .unwrap_err();

        match err {
            FetchError::Decode { filename, .. } => assert_eq!(filename, "binary.bin"),
            e => panic!("Expected Decode error, got: {e:?}"),
        }
    }

    #[test]
    fn test_fetcher_default_attempts() {
        let fetcher = Fetcher::new();
        assert_eq!(fetcher.max_attempts(), 3);
    }
}
