//! Batch writer

use std::future::Future;
use std::time::Duration;

use rfshop_domain::constants::{BATCH_DELAY_MS, MAX_BATCH_SIZE};
use rfshop_domain::{Result, WriteConfig};
use tracing::{debug, warn};

/// Batch size and pacing for bulk writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    pub max_batch_size: usize,
    pub inter_batch_delay: Duration,
}

impl BatchPolicy {
    /// Batch size is clamped to `1..=MAX_BATCH_SIZE`.
    pub fn new(max_batch_size: usize, inter_batch_delay: Duration) -> Self {
        Self { max_batch_size: max_batch_size.clamp(1, MAX_BATCH_SIZE), inter_batch_delay }
    }
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::new(MAX_BATCH_SIZE, Duration::from_millis(BATCH_DELAY_MS))
    }
}

impl From<&WriteConfig> for BatchPolicy {
    fn from(config: &WriteConfig) -> Self {
        Self::new(config.batch_size, config.batch_delay())
    }
}

/// Split `items` into consecutive groups of at most `max_batch_size` and hand
/// each group to `submit`, one at a time, in input order.
///
/// A group is only submitted after the previous one resolved, and every group
/// but the first waits `inter_batch_delay` first. The first failing group
/// aborts the run: its error is returned and later groups are never sent.
/// Groups already submitted stay committed.
///
/// `submit` receives the zero-based batch index and the owned group. Results
/// are concatenated in submission order. An empty input makes no calls.
///
/// # Errors
///
/// Returns the error of the first failing batch.
pub async fn submit_in_batches<T, R, F, Fut>(
    items: Vec<T>,
    policy: &BatchPolicy,
    mut submit: F,
) -> Result<Vec<R>>
where
    F: FnMut(usize, Vec<T>) -> Fut,
    Fut: Future<Output = Result<Vec<R>>>,
{
    let total = items.len();
    let size = policy.max_batch_size.max(1);
    let batch_count = total.div_ceil(size);

    let mut results = Vec::with_capacity(total);
    let mut remaining = items.into_iter();

    for index in 0..batch_count {
        let chunk: Vec<T> = remaining.by_ref().take(size).collect();

        if index > 0 && !policy.inter_batch_delay.is_zero() {
            tokio::time::sleep(policy.inter_batch_delay).await;
        }

        debug!(batch = index + 1, of = batch_count, size = chunk.len(), "submitting batch");

        match submit(index, chunk).await {
            Ok(mut written) => results.append(&mut written),
            Err(err) => {
                warn!(
                    failed_batch = index + 1,
                    committed_batches = index,
                    committed_records = results.len(),
                    error = %err,
                    "batch write aborted"
                );
                return Err(err);
            }
        }
    }

    Ok(results)
}
