//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting mock
//! sleepers in tests while using real tokio timers in production.

use std::future::Future;
use std::time::Duration;

/// Abstraction over timed waits for testability.
///
/// Implementations suspend the caller for the given duration, allowing
/// tests to observe or skip delays instead of waiting in real time.
///
/// # Example
///
/// ```
/// use cfddns::time::{Sleeper, TokioSleeper};
/// use std::time::Duration;
///
/// # async fn example() {
/// let sleeper = TokioSleeper;
/// sleeper.sleep(Duration::from_millis(1)).await;
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper using tokio timers.
///
/// This is the default sleeper implementation that delegates to
/// [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately without waiting.
///
/// Useful in tests where the configured delay is irrelevant.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// A mock sleeper that records requested durations.
    #[derive(Default)]
    struct RecordingSleeper {
        requested: Mutex<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.requested.lock().unwrap().push(duration);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_waits_for_duration() {
        let sleeper = TokioSleeper;
        let start = tokio::time::Instant::now();

        sleeper.sleep(Duration::from_secs(5)).await;

        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn instant_sleeper_returns_immediately() {
        let sleeper = InstantSleeper;
        let start = std::time::Instant::now();

        sleeper.sleep(Duration::from_secs(3600)).await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn recording_sleeper_captures_durations() {
        let sleeper = RecordingSleeper::default();

        sleeper.sleep(Duration::from_secs(10)).await;
        sleeper.sleep(Duration::from_secs(20)).await;

        let requested = sleeper.requested.lock().unwrap();
        assert_eq!(
            *requested,
            vec![Duration::from_secs(10), Duration::from_secs(20)]
        );
    }

    #[test]
    fn sleepers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokioSleeper>();
        assert_send_sync::<InstantSleeper>();
    }

    #[test]
    fn tokio_sleeper_is_copy() {
        let sleeper1 = TokioSleeper;
        let sleeper2 = sleeper1;
        let _ = (sleeper1, sleeper2);
    }
}
