//! Opt-in retry for read operations.
//!
//! Nothing in the crate retries on its own. Wrapping a call in
//! [`RetryPolicy::run`] repeats it only when the operation is a `GET` and the
//! failure happened before any response arrived.

use crate::descriptor::OperationDescriptor;
use crate::error::VcdResult;

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    /// Total attempts including the first (default: 3).
    pub max_attempts: u32,
    /// Initial backoff in milliseconds (default: 500).
    pub initial_backoff_ms: u64,
    /// Backoff cap in milliseconds (default: 20_000).
    pub max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 500,
            max_backoff_ms: 20_000,
        }
    }
}

impl RetryPolicy {
    /// Single attempt.
    pub fn never() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Run `call`, retrying transport failures of reads.
    pub async fn run<T, F, Fut>(&self, op: &OperationDescriptor, mut call: F) -> VcdResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = VcdResult<T>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    if op.method.is_read() && e.is_retryable() && attempt + 1 < max_attempts {
                        let delay = self.backoff(attempt);
                        log::warn!(
                            "{} transport error (attempt {}/{}): {} - retrying in {}ms",
                            op.name,
                            attempt + 1,
                            max_attempts,
                            e,
                            delay.as_millis()
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e);
                }
            }
        }
    }

    /// Exponential backoff with full jitter: uniform in `0..=min(base·2ⁿ, cap)`.
    fn backoff(&self, attempt: u32) -> Duration {
        use rand::Rng;

        let exponential = self
            .initial_backoff_ms
            .saturating_mul(2u64.saturating_pow(attempt));
        let capped = exponential.min(self.max_backoff_ms);
        let mut rng = rand::thread_rng();
        Duration::from_millis(rng.gen_range(0..=capped))
    }
}
