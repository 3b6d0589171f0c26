// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Poll until a condition holds
//!
//! Mutating eCloud calls return before the server has finished the work.
//! [`wait_for`] repeatedly evaluates a predicate until it reports
//! completion, fails, or the timeout elapses. Predicates for specific
//! resources live in `commands::ecloud::wait`.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{Instant, sleep};

/// Default overall wait timeout
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(1200);

/// Default delay between predicate evaluations
pub const DEFAULT_WAIT_INTERVAL: Duration = Duration::from_secs(5);

/// Poller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            interval: DEFAULT_WAIT_INTERVAL,
        }
    }
}

impl WaitConfig {
    /// Build a config, replacing sub-second values with the defaults
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self {
            timeout: if timeout < Duration::from_secs(1) {
                DEFAULT_WAIT_TIMEOUT
            } else {
                timeout
            },
            interval: if interval < Duration::from_secs(1) {
                DEFAULT_WAIT_INTERVAL
            } else {
                interval
            },
        }
    }

    pub fn from_secs(timeout_secs: u64, interval_secs: u64) -> Self {
        Self::new(
            Duration::from_secs(timeout_secs),
            Duration::from_secs(interval_secs),
        )
    }
}

/// Why a wait ended without the condition being met
#[derive(Error, Debug)]
pub enum WaitError {
    #[error("timed out waiting for command")]
    Timeout,

    #[error("error waiting for command: {0:#}")]
    Predicate(anyhow::Error),
}

/// Evaluate `predicate` every `config.interval` until it returns `true`
///
/// The elapsed time is checked before each evaluation, so a predicate is
/// never called once the timeout has passed. An error from the predicate
/// stops polling immediately.
pub async fn wait_for<F, Fut>(config: WaitConfig, mut predicate: F) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<bool>>,
{
    let start = Instant::now();
    let mut attempt: u32 = 0;

    loop {
        if start.elapsed() > config.timeout {
            tracing::debug!(attempt, timeout = ?config.timeout, "wait timed out");
            return Err(WaitError::Timeout);
        }

        attempt += 1;
        tracing::debug!(attempt, elapsed = ?start.elapsed(), "evaluating wait condition");

        match predicate().await {
            Ok(true) => return Ok(()),
            Ok(false) => sleep(config.interval).await,
            Err(e) => return Err(WaitError::Predicate(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counting(
        done_after: u32,
    ) -> (
        Arc<AtomicU32>,
        impl FnMut() -> std::future::Ready<anyhow::Result<bool>>,
    ) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let predicate = move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(Ok(n >= done_after))
        };
        (calls, predicate)
    }

    #[test]
    fn test_config_replaces_sub_second_values() {
        let config = WaitConfig::new(Duration::ZERO, Duration::from_millis(500));
        assert_eq!(config, WaitConfig::default());

        let config = WaitConfig::from_secs(30, 2);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.interval, Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finishes_immediately() {
        let (calls, predicate) = counting(1);
        let start = Instant::now();

        wait_for(WaitConfig::from_secs(60, 5), predicate).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleeps_between_attempts() {
        let (calls, predicate) = counting(3);
        let start = Instant::now();

        wait_for(WaitConfig::from_secs(60, 5), predicate).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(start.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_times_out() {
        let (calls, predicate) = counting(u32::MAX);

        let err = wait_for(WaitConfig::from_secs(12, 5), predicate)
            .await
            .unwrap_err();

        assert!(matches!(err, WaitError::Timeout));
        assert_eq!(err.to_string(), "timed out waiting for command");
        // Evaluated at t=0, 5 and 10; the check at t=15 exceeds 12s.
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_predicate_error_stops_polling() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let err = wait_for(WaitConfig::from_secs(60, 5), move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n == 2 {
                    Err(anyhow::anyhow!("resource in [failed] state"))
                } else {
                    Ok(false)
                }
            }
        })
        .await
        .unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            err.to_string(),
            "error waiting for command: resource in [failed] state"
        );
    }
}
