use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry policy for database connection attempts
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial try
    pub max_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub initial_delay_ms: u64,

    /// Upper bound on the delay between retries, in milliseconds
    pub max_delay_ms: u64,

    /// Backoff multiplier applied after each failed attempt
    pub backoff_multiplier: f64,

    /// Whether to randomize delays to avoid thundering herd on restart
    pub use_jitter: bool,
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Retry an async operation with exponential backoff.
///
/// The operation runs once immediately, then up to `config.max_retries` more
/// times with exponentially growing delays. The final error is returned
/// unchanged once the attempts are exhausted.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay_ms;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    debug!("Operation succeeded after {} retries", attempt);
                }
                return Ok(result);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    warn!(
                        "Operation failed after {} attempts: {}",
                        config.max_retries, e
                    );
                    return Err(e);
                }

                let current_delay = if config.use_jitter {
                    apply_jitter(delay, attempt)
                } else {
                    delay
                };

                debug!(
                    "Operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                    attempt, config.max_retries, e, current_delay
                );

                tokio::time::sleep(Duration::from_millis(current_delay)).await;

                delay =
                    ((delay as f64 * config.backoff_multiplier) as u64).min(config.max_delay_ms);
            }
        }
    }
}

/// Retry with the default policy (3 retries, 100ms initial delay).
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

/// Scale a delay into the 50%..100% range pseudo-randomly.
fn apply_jitter(delay: u64, attempt: u32) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let seed = RandomState::new().hash_one((std::time::SystemTime::now(), attempt));
    let factor = (seed % 50) as f64 / 100.0 + 0.5;

    (delay as f64 * factor) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn counting_op(
        counter: Arc<AtomicU32>,
        fail_first: u32,
    ) -> impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = Result<&'static str, String>>>> {
        move || {
            let counter = counter.clone();
            Box::pin(async move {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                if n < fail_first {
                    Err(format!("attempt {} failed", n + 1))
                } else {
                    Ok("ok")
                }
            })
        }
    }

    #[tokio::test]
    async fn succeeds_without_retrying() {
        let counter = Arc::new(AtomicU32::new(0));
        let result = retry(counting_op(counter.clone(), 0)).await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let config = RetryConfig::new().with_initial_delay(5).without_jitter();

        let result = retry_with_backoff(counting_op(counter.clone(), 2), config).await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let counter = Arc::new(AtomicU32::new(0));
        let config = RetryConfig::new()
            .with_max_retries(2)
            .with_initial_delay(5)
            .without_jitter();

        let result = retry_with_backoff(counting_op(counter.clone(), u32::MAX), config).await;

        assert!(result.is_err());
        // 1 initial attempt + 2 retries
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = RetryConfig::new()
            .with_max_retries(5)
            .with_initial_delay(200)
            .with_max_delay(10_000)
            .without_jitter();

        assert_eq!(config.max_retries, 5);
        assert_eq!(config.initial_delay_ms, 200);
        assert_eq!(config.max_delay_ms, 10_000);
        assert!(!config.use_jitter);
    }

    #[test]
    fn jitter_stays_within_half_to_full_delay() {
        for attempt in 0..20 {
            let jittered = apply_jitter(1000, attempt);
            assert!((500..=1000).contains(&jittered));
        }
    }
}
