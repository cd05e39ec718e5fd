//! Periodic countdown refresh.
//!
//! `RefreshScheduler` owns a single background thread that recomputes the
//! countdown on a fixed interval and hands every snapshot to a callback. The
//! callback runs on the worker thread; UI code is expected to marshal the value
//! onto its own update context.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use thiserror::Error;

use super::calculator::compute;
use crate::models::countdown::CountdownSnapshot;

/// Source of "now" for the scheduler
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Host wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("refresh interval must be greater than zero")]
    ZeroInterval,
    #[error("failed to spawn refresh thread: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

struct Worker {
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

pub struct RefreshScheduler {
    clock: Arc<dyn Clock>,
    worker: Option<Worker>,
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            worker: None,
        }
    }

    pub fn state(&self) -> SchedulerState {
        if self.worker.is_some() {
            SchedulerState::Running
        } else {
            SchedulerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == SchedulerState::Running
    }

    /// Deliver one snapshot to `on_tick` right away on the calling thread, then
    /// keep delivering one every `interval` until [`stop`](Self::stop).
    ///
    /// Starting an already running scheduler stops the previous worker first.
    pub fn start<F>(&mut self, interval: Duration, mut on_tick: F) -> Result<(), SchedulerError>
    where
        F: FnMut(CountdownSnapshot) + Send + 'static,
    {
        if interval.is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }

        if self.is_running() {
            log::warn!("Refresh scheduler restarted while running; stopping previous timer");
            self.stop();
        }

        on_tick(compute(&self.clock.now()));

        let (stop_tx, stop_rx) = mpsc::channel();
        let clock = Arc::clone(&self.clock);
        let handle = thread::Builder::new()
            .name("countdown-refresh".to_string())
            .spawn(move || {
                let mut next_tick = Instant::now() + interval;
                loop {
                    let wait = next_tick.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            let snapshot = compute(&clock.now());
                            log::debug!("Countdown tick: {}", snapshot);
                            let outcome = panic::catch_unwind(AssertUnwindSafe(|| on_tick(snapshot)));
                            if outcome.is_err() {
                                log::error!("Countdown refresh callback panicked; timer keeps running");
                            }
                            next_tick = next_deadline(next_tick, interval, Instant::now());
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
            })?;

        self.worker = Some(Worker { stop_tx, handle });
        log::info!("Refresh scheduler started with interval {:?}", interval);
        Ok(())
    }

    /// Cancel the timer. Once this returns no new callback invocation starts.
    /// Safe to call when idle.
    pub fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        // The worker may already be gone if the thread died
        let _ = worker.stop_tx.send(());

        if worker.handle.join().is_err() {
            log::error!("Refresh worker thread terminated abnormally");
        }
        log::info!("Refresh scheduler stopped");
    }
}

/// Deadline following `previous`. Deadlines missed while a tick ran long (or
/// the host was suspended) are dropped rather than fired back to back.
fn next_deadline(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let next = previous + interval;
    if next <= now {
        now + interval
    } else {
        next
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
