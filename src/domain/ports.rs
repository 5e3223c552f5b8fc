use crate::domain::model::Fixture;
use async_trait::async_trait;
use std::time::Duration;

/// A periodic time source that drives the match clock.
///
/// The source is armed only while the clock is running. Disarming must
/// discard any pending firing, so that no tick is observed after the clock
/// stops.
#[async_trait]
pub trait TickSource: Send {
    /// Arms the source. Arming an armed source is a no-op.
    fn arm(&mut self);

    /// Disarms the source and drops any pending firing.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;

    /// Resolves on the next firing. Never resolves while disarmed.
    async fn next_tick(&mut self);
}

pub trait ConfigProvider: Send + Sync {
    fn fixture(&self) -> Fixture;
    fn tick_interval(&self) -> Duration;
    fn json_output(&self) -> bool;
}
