//! Bounded retry for store queries.
//!
//! A fixed number of retries with a fixed delay between attempts. Only
//! transient failures are retried; data errors surface immediately.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use super::StoreError;

/// Retry policy for schedule store queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Run `query` until it succeeds, fails permanently, or retries run out.
    ///
    /// `operation` names the query in log output.
    pub async fn run<T, F, Fut>(
        &self,
        operation: &'static str,
        mut query: F,
    ) -> Result<T, StoreError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let mut attempt = 0;
        loop {
            match query().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        operation,
                        attempt,
                        max_retries = self.max_retries,
                        error = %e,
                        "Store query failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay: Duration::from_secs(1),
        }
    }
}
