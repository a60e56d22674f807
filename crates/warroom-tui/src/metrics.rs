//! Host CPU and memory sampling for the HUD footer.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Sender, TrySendError};
use sysinfo::System;

use crate::messages::{DashboardMessage, SystemMetrics};

/// Metrics collector using sysinfo.
pub struct MetricsCollector {
    system: System,
    /// Last collected CPU usage (0.0 - 100.0).
    pub cpu_percent: f64,
    /// Last collected memory usage as a percentage of total.
    pub memory_percent: f64,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: System::new(),
            cpu_percent: 0.0,
            memory_percent: 0.0,
        }
    }

    /// Refresh system metrics.
    #[allow(clippy::cast_precision_loss)]
    pub fn refresh(&mut self) {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        // Average CPU across all cores
        let cpus = self.system.cpus();
        if !cpus.is_empty() {
            self.cpu_percent =
                cpus.iter().map(|c| f64::from(c.cpu_usage())).sum::<f64>() / cpus.len() as f64;
        }

        self.memory_percent =
            memory_percent(self.system.used_memory(), self.system.total_memory());
    }

    /// Create a `SystemMetrics` snapshot for sending as a message.
    #[must_use]
    pub fn snapshot(&self) -> SystemMetrics {
        SystemMetrics {
            cpu_percent: self.cpu_percent,
            memory_percent: self.memory_percent,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Used memory as a percentage of total. Zero when the total is unknown.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn memory_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Background thread that samples host metrics on a fixed interval.
///
/// Dropping the sampler stops and joins the thread.
pub struct MetricsSampler {
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl MetricsSampler {
    /// Spawn the sampler, sending a snapshot every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(interval: Duration, tx: Sender<DashboardMessage>) -> std::io::Result<Self> {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(0);
        let ticker = crossbeam_channel::tick(interval);

        let handle = thread::Builder::new()
            .name("metrics-sampler".into())
            .spawn(move || {
                let mut collector = MetricsCollector::new();
                loop {
                    crossbeam_channel::select! {
                        recv(ticker) -> _ => {
                            collector.refresh();
                            let msg = DashboardMessage::SystemMetrics(collector.snapshot());
                            if let Err(TrySendError::Disconnected(_)) = tx.try_send(msg) {
                                break;
                            }
                        }
                        recv(stop_rx) -> _ => break,
                    }
                }
            })?;

        tracing::debug!(?interval, "metrics sampler started");
        Ok(Self {
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }
}

impl Drop for MetricsSampler {
    fn drop(&mut self) {
        // Disconnecting the stop channel wakes the select.
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        tracing::debug!("metrics sampler stopped");
    }
}
