use crate::domain::ports::TickSource;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Repeating tokio timer that owns at most one interval at a time.
///
/// `arm` must be called from within a tokio runtime.
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    /// Periods below one millisecond are raised to one millisecond.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

#[async_trait]
impl TickSource for Ticker {
    fn arm(&mut self) {
        if self.interval.is_some() {
            return;
        }

        // first firing one full period after arming, like a fresh repeating timer
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        tracing::debug!("Ticker armed ({:?} period)", self.period);
    }

    fn disarm(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!("Ticker disarmed");
        }
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    async fn next_tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}
