use crate::core::clock::{MatchClock, Transition};
use crate::core::ticker::Ticker;
use crate::core::{ConfigProvider, Snapshot, Team, TickSource};
use crate::utils::error::{Result, ScorecardError};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

const REQUEST_BUFFER: usize = 32;

/// Operator commands accepted by a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Toggle,
    Reset,
    IncrementScore(Team),
    DecrementScore(Team),
}

enum Request {
    Apply(Command, oneshot::Sender<Snapshot>),
    Shutdown,
}

/// Owns one match clock and the tick source that drives it.
///
/// All commands and ticks are handled one at a time on a single task, and
/// the tick source is armed exactly while the clock is running.
pub struct MatchSession<T: TickSource> {
    clock: MatchClock,
    ticker: T,
    requests: mpsc::Receiver<Request>,
    snapshots: watch::Sender<Snapshot>,
}

impl MatchSession<Ticker> {
    /// Spawns a session driven by a real-time ticker.
    pub fn spawn(tick_interval: Duration) -> (MatchHandle, JoinHandle<MatchClock>) {
        Self::spawn_with(Ticker::new(tick_interval))
    }

    pub fn spawn_from_config<C: ConfigProvider>(config: &C) -> (MatchHandle, JoinHandle<MatchClock>) {
        Self::spawn(config.tick_interval())
    }
}

impl<T: TickSource + 'static> MatchSession<T> {
    pub fn new(ticker: T) -> (Self, MatchHandle) {
        let clock = MatchClock::new();
        let (request_tx, request_rx) = mpsc::channel(REQUEST_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(clock.snapshot());

        let session = Self {
            clock,
            ticker,
            requests: request_rx,
            snapshots: snapshot_tx,
        };
        let handle = MatchHandle {
            requests: request_tx,
            snapshots: snapshot_rx,
        };
        (session, handle)
    }

    pub fn spawn_with(ticker: T) -> (MatchHandle, JoinHandle<MatchClock>) {
        let (session, handle) = Self::new(ticker);
        (handle, tokio::spawn(session.run()))
    }

    /// Runs until shutdown is requested or every handle is dropped, then
    /// returns the final clock.
    pub async fn run(mut self) -> MatchClock {
        tracing::info!("Match session started");

        loop {
            tokio::select! {
                biased;

                request = self.requests.recv() => match request {
                    Some(Request::Apply(command, reply)) => {
                        let snapshot = self.apply(command);
                        // the caller may have stopped waiting
                        let _ = reply.send(snapshot);
                    }
                    Some(Request::Shutdown) | None => break,
                },
                _ = self.ticker.next_tick(), if self.clock.is_running() => {
                    self.on_tick();
                }
            }
        }

        self.ticker.disarm();
        tracing::info!(
            "Match session closed at {} ({})",
            self.clock.snapshot().formatted_time,
            self.clock.status()
        );
        self.clock
    }

    fn apply(&mut self, command: Command) -> Snapshot {
        let transition = match command {
            Command::Start => self.clock.start(),
            Command::Pause => self.clock.pause(),
            Command::Toggle => self.clock.toggle(),
            Command::Reset => self.clock.reset(),
            Command::IncrementScore(team) => self.clock.increment_score(team),
            Command::DecrementScore(team) => self.clock.decrement_score(team),
        };

        match transition {
            Transition::Applied => tracing::debug!("{:?} applied", command),
            Transition::Ignored(reason) => tracing::debug!("{:?} ignored: {}", command, reason),
        }

        self.sync_ticker();
        self.publish()
    }

    fn on_tick(&mut self) {
        if self.clock.tick().is_applied() {
            self.sync_ticker();
            let snapshot = self.publish();
            if !snapshot.running {
                tracing::info!("Full time: {}", snapshot.scoreline());
            }
        }
    }

    fn sync_ticker(&mut self) {
        if self.clock.is_running() {
            self.ticker.arm();
        } else {
            self.ticker.disarm();
        }
    }

    fn publish(&self) -> Snapshot {
        let snapshot = self.clock.snapshot();
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }
}

/// Cloneable operator handle for a [`MatchSession`].
#[derive(Clone)]
pub struct MatchHandle {
    requests: mpsc::Sender<Request>,
    snapshots: watch::Receiver<Snapshot>,
}

impl MatchHandle {
    /// Sends a command and waits for the snapshot it produced.
    pub async fn send(&self, command: Command) -> Result<Snapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send(Request::Apply(command, reply_tx))
            .await
            .map_err(|_| ScorecardError::SessionClosed)?;
        reply_rx.await.map_err(|_| ScorecardError::SessionClosed)
    }

    pub async fn start(&self) -> Result<Snapshot> {
        self.send(Command::Start).await
    }

    pub async fn pause(&self) -> Result<Snapshot> {
        self.send(Command::Pause).await
    }

    pub async fn toggle(&self) -> Result<Snapshot> {
        self.send(Command::Toggle).await
    }

    pub async fn reset(&self) -> Result<Snapshot> {
        self.send(Command::Reset).await
    }

    pub async fn increment_score(&self, team: Team) -> Result<Snapshot> {
        self.send(Command::IncrementScore(team)).await
    }

    pub async fn decrement_score(&self, team: Team) -> Result<Snapshot> {
        self.send(Command::DecrementScore(team)).await
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.requests
            .send(Request::Shutdown)
            .await
            .map_err(|_| ScorecardError::SessionClosed)
    }
}
