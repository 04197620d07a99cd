use anyhow::{Context, Result};
use std::future::Future;

/// Attempt cap for a single page fetch. The remote host drops connections
/// now and then; each failure is retried immediately, with no backoff.
pub const MAX_FETCH_ATTEMPTS: u32 = 100;

/// Something that can turn a URL into an HTML body.
///
/// The traversal is written against this trait so tests can drive it from
/// an in-memory page map instead of the network.
pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

/// HTTP-backed page source with bounded retry.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("nudxs/0.1 (cross-section table scraper)")
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        with_retry(MAX_FETCH_ATTEMPTS, url, || {
            let client = self.client.clone();
            let url = url.to_string();
            async move {
                let response = client
                    .get(&url)
                    .send()
                    .await
                    .context("Failed to fetch page")?;

                let status = response.status();
                anyhow::ensure!(status.is_success(), "HTTP {status} for {url}");

                response.text().await.context("Failed to read response body")
            }
        })
        .await
    }
}

/// Run `op` until it succeeds or `max_attempts` calls have failed.
///
/// Each failure short of the cap logs a warning and retries immediately.
/// Once the cap is hit, the last error propagates with the URL attached.
pub async fn with_retry<T, F, Fut>(max_attempts: u32, url: &str, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                tracing::warn!(url = %url, attempt, error = %err, "Retrying");
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Gave up on {url} after {attempt} attempts"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_retry_gives_up_after_exact_cap() {
        let attempts = AtomicU32::new(0);
        let result: Result<String> =
            with_retry(MAX_FETCH_ATTEMPTS, "http://unreachable.invalid/", || {
                attempts.fetch_add(1, Ordering::SeqCst);
                async { anyhow::bail!("connection reset") }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 100);
    }

    #[tokio::test]
    async fn test_retry_stops_on_first_success() {
        let attempts = AtomicU32::new(0);
        let result = with_retry(MAX_FETCH_ATTEMPTS, "http://flaky.invalid/", || {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            async move {
                anyhow::ensure!(n >= 2, "connection reset");
                Ok("<html></html>".to_string())
            }
        })
        .await;

        assert_eq!(result.unwrap(), "<html></html>");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
