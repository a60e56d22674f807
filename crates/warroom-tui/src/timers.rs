//! Periodic animation timers.
//!
//! Each timer is a thread that forwards `Tick(kind)` into the dashboard's
//! channel. A timer lives exactly as long as its handle: dropping it stops
//! and joins the thread, so nothing fires after the view is gone.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::Sender;
use warroom_core::{TimerKind, TimerSettings};

use crate::messages::DashboardMessage;

/// Handle to one running timer thread.
pub struct AnimationTimer {
    kind: TimerKind,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl AnimationTimer {
    /// Start a timer that sends `Tick(kind)` every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(
        kind: TimerKind,
        interval: Duration,
        tx: Sender<DashboardMessage>,
    ) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let ticker = crossbeam_channel::tick(interval);

        let handle = thread::Builder::new()
            .name(format!("timer-{kind:?}").to_lowercase())
            .spawn(move || loop {
                crossbeam_channel::select! {
                    recv(ticker) -> _ => {
                        if tx.send(DashboardMessage::Tick(kind)).is_err() {
                            break;
                        }
                    }
                    recv(stop_rx) -> _ => break,
                }
            })?;

        tracing::debug!(?kind, ?interval, "timer started");
        Ok(Self {
            kind,
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Which timer this is.
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Stop the timer and wait for its thread. Idempotent.
    pub fn stop(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            tracing::debug!(kind = ?self.kind, "timer stopped");
        }
    }

    /// Whether the thread is still attached.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for AnimationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The full set of dashboard timers.
pub struct TimerSet {
    timers: Vec<AnimationTimer>,
}

impl TimerSet {
    /// Start one timer per `TimerKind` with the configured intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if any thread cannot be spawned. Timers already
    /// started are stopped when the partial set drops.
    pub fn start(settings: &TimerSettings, tx: &Sender<DashboardMessage>) -> std::io::Result<Self> {
        let timers = TimerKind::ALL
            .iter()
            .map(|&kind| AnimationTimer::spawn(kind, settings.interval(kind), tx.clone()))
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self { timers })
    }

    /// Number of running timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.iter().filter(|t| t.is_running()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stop every timer.
    pub fn stop_all(&mut self) {
        for timer in &mut self.timers {
            timer.stop();
        }
    }
}
