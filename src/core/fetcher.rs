use crate::core::{ConfigProvider, DatasetSource};
use crate::utils::error::{MapError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_UPSTREAM_URL: &str = "https://covid19.ddc.moph.go.th/api/Deaths/round-4-line-list";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

/// Bounded retry with a fixed pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Runs `operation` until it succeeds or `policy.max_attempts` attempts have
/// failed. The closure receives the 1-based attempt number.
///
/// Exhaustion yields [`MapError::FetchError`] carrying the last error message.
pub async fn retry_with_delay<T, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let max_attempts = policy.max_attempts;
    let mut attempt = 1;

    loop {
        tracing::info!("Fetching COVID data... attempt {}/{}", attempt, max_attempts);

        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!("✅ Fetch succeeded on attempt {}", attempt);
                }
                return Ok(value);
            }
            Err(e) => {
                tracing::warn!("⚠️ Error fetching API (attempt {}): {}", attempt, e);

                if attempt >= max_attempts {
                    return Err(MapError::FetchError {
                        attempts: attempt,
                        message: e.to_string(),
                    });
                }

                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

/// Upstream client: one GET per attempt, body validated as JSON before it is
/// handed on.
#[derive(Debug, Clone)]
pub struct ResilientFetcher {
    client: Client,
    url: String,
    policy: RetryPolicy,
}

impl ResilientFetcher {
    pub fn new(url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self::with_client(Client::new(), url, policy)
    }

    pub fn with_client(client: Client, url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            client,
            url: url.into(),
            policy,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::with_client(
            client,
            config.upstream_url(),
            RetryPolicy::new(config.max_attempts(), config.retry_delay()),
        ))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    async fn fetch_once(&self) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(MapError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // 先讀成文字，才能分辨空回應與 JSON 格式錯誤
        let body = response.text().await?;
        tracing::debug!("Raw API response: {} bytes", body.len());

        if body.is_empty() {
            return Err(MapError::EmptyResponse);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl DatasetSource for ResilientFetcher {
    async fn fetch(&self) -> Result<serde_json::Value> {
        retry_with_delay(self.policy, |_| self.fetch_once()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_retry_succeeds_after_k_failures() {
        for k in 0..3u32 {
            let calls = AtomicU32::new(0);
            let result = retry_with_delay(quick_policy(3), |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt <= k {
                        Err(MapError::EmptyResponse)
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;

            assert_eq!(result.unwrap(), k + 1);
            assert_eq!(calls.load(Ordering::SeqCst), k + 1);
        }
    }

    #[tokio::test]
    async fn test_retry_exhausts_after_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = retry_with_delay(quick_policy(4), |attempt| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Err(MapError::HttpStatus { status: 500 + attempt as u16 }) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        match result {
            Err(MapError::FetchError { attempts, message }) => {
                assert_eq!(attempts, 4);
                // last error wins
                assert_eq!(message, "HTTP error! Status: 504");
            }
            other => panic!("expected FetchError, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fixed_delay_between_attempts_only() {
        let policy = RetryPolicy::new(3, Duration::from_millis(200));
        let start = tokio::time::Instant::now();

        let result: Result<()> =
            retry_with_delay(policy, |_| async { Err(MapError::EmptyResponse) }).await;

        assert!(matches!(result, Err(MapError::FetchError { attempts: 3, .. })));
        // two waits for three attempts, none after the last one
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_is_not_exponential() {
        let policy = RetryPolicy::new(5, Duration::from_millis(100));
        let start = tokio::time::Instant::now();

        let result = retry_with_delay(policy, |attempt| async move {
            if attempt < 4 {
                Err(MapError::HttpStatus { status: 503 })
            } else {
                Ok(attempt)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 4);
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_try_success_does_not_wait() {
        let start = tokio::time::Instant::now();
        let result = retry_with_delay(RetryPolicy::new(3, Duration::from_secs(2)), |_| async {
            Ok::<_, MapError>(())
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let calls = AtomicU32::new(0);
        let result = retry_with_delay(RetryPolicy::new(0, Duration::ZERO), |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, MapError>("ok") }
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_successful_json() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/deaths")
                .header("Content-Type", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"data": []}));
        });

        let fetcher = ResilientFetcher::new(server.url("/deaths"), quick_policy(3));
        let doc = fetcher.fetch().await.unwrap();

        mock.assert_hits(1);
        assert_eq!(doc, serde_json::json!({"data": []}));
    }

    #[tokio::test]
    async fn test_fetch_server_error_retries_every_attempt() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/deaths");
            then.status(503);
        });

        let fetcher = ResilientFetcher::new(server.url("/deaths"), quick_policy(3));
        let err = fetcher.fetch().await.unwrap_err();

        mock.assert_hits(3);
        assert!(err.to_string().contains("HTTP error! Status: 503"));
    }

    #[tokio::test]
    async fn test_fetch_empty_body_is_distinguished() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/empty");
            then.status(200);
        });

        let fetcher = ResilientFetcher::new(server.url("/empty"), quick_policy(2));
        let err = fetcher.fetch().await.unwrap_err();

        mock.assert_hits(2);
        assert!(err.to_string().contains("API response is empty"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_json() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(200).body("<html>maintenance</html>");
        });

        let fetcher = ResilientFetcher::new(server.url("/broken"), quick_policy(2));
        let err = fetcher.fetch().await.unwrap_err();

        mock.assert_hits(2);
        assert!(matches!(err, MapError::FetchError { attempts: 2, .. }));
        assert!(err.to_string().contains("Malformed JSON body"));
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        // nothing listens on port 9 locally
        let fetcher = ResilientFetcher::new("http://127.0.0.1:9/deaths", quick_policy(2));
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, MapError::FetchError { attempts: 2, .. }));
    }
}
