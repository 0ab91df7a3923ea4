//! Timer-driven stand-ins for asynchronous work.
//!
//! Nothing real runs behind these. Every task owns a `CancellationToken`
//! and is cancelled when its handle is dropped, so tearing down the owner
//! never leaves a timer behind. All constructors must be called from within
//! a Tokio runtime.

use crate::run::RunState;
use ahash::AHashMap;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Runs a closure once after a delay unless cancelled first.
#[derive(Debug)]
pub struct DelayedTask {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl DelayedTask {
    pub fn spawn<F>(delay: Duration, task: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => debug!("delayed task cancelled"),
                _ = tokio::time::sleep(delay) => task(),
            }
        });
        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// True once the closure ran or the task observed its cancellation.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

const MIN_TICK: Duration = Duration::from_millis(1);

/// One progress step: `+1`, wrapping back to 0 past 100.
pub fn advance_progress(progress: u8) -> u8 {
    if progress >= 100 { 0 } else { progress + 1 }
}

/// Simulated progress of a running node, published through a watch channel.
#[derive(Debug)]
pub struct ProgressTicker {
    token: CancellationToken,
    progress: watch::Receiver<u8>,
}

impl ProgressTicker {
    /// Starts ticking every `period`. Periods under 1ms tick every 1ms.
    pub fn spawn(period: Duration) -> Self {
        let period = period.max(MIN_TICK);
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let (tx, rx) = watch::channel(0u8);
        tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticks.tick() => tx.send_modify(|p| *p = advance_progress(*p)),
                }
            }
        });
        Self {
            token,
            progress: rx,
        }
    }

    pub fn progress(&self) -> u8 {
        *self.progress.borrow()
    }

    /// A receiver that observes every update.
    pub fn subscribe(&self) -> watch::Receiver<u8> {
        self.progress.clone()
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Keeps one `ProgressTicker` per running node.
#[derive(Debug)]
pub struct RunSimulator {
    period: Duration,
    tickers: AHashMap<String, ProgressTicker>,
}

impl RunSimulator {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            tickers: AHashMap::new(),
        }
    }

    /// Starts tickers for newly running nodes and drops those of stopped ones.
    pub fn sync(&mut self, run: &RunState) {
        self.tickers.retain(|node_id, _| {
            let keep = run.is_running(node_id);
            if !keep {
                debug!(node_id = %node_id, "progress ticker stopped");
            }
            keep
        });
        for node_id in run.running() {
            if !self.tickers.contains_key(node_id) {
                debug!(node_id = %node_id, "progress ticker started");
                self.tickers
                    .insert(node_id.clone(), ProgressTicker::spawn(self.period));
            }
        }
    }

    /// Progress of a node; stopped nodes report 0.
    pub fn progress(&self, node_id: &str) -> u8 {
        self.tickers.get(node_id).map_or(0, ProgressTicker::progress)
    }

    pub fn active(&self) -> usize {
        self.tickers.len()
    }

    pub fn stop_all(&mut self) {
        self.tickers.clear();
    }
}
