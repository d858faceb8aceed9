//! Periodic throughput reporter
//!
//! Read-only with respect to all other state: each report is one atomic
//! load of the processed counter plus a wall-clock read, so the reporter
//! never blocks a worker and never touches the sink.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Granularity at which the sleep loop rechecks the cancellation flag
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Samples the shared processed counter on a fixed period and prints
/// throughput status lines
pub struct ThroughputReporter {
    /// Total digests computed across all workers (read-only here)
    processed: Arc<AtomicU64>,
    /// Period between reports
    interval: Duration,
    /// Run start time
    started: Instant,
}

impl ThroughputReporter {
    /// Create a reporter over the shared processed counter
    pub fn new(processed: Arc<AtomicU64>, interval: Duration) -> Self {
        Self {
            processed,
            interval,
            started: Instant::now(),
        }
    }

    /// Run the report loop until the cancellation flag is raised
    ///
    /// The flag is checked at the top of every iteration and while
    /// sleeping, so shutdown is prompt regardless of the report period.
    pub fn run(&self, cancelled: &AtomicBool) {
        while !cancelled.load(Ordering::SeqCst) {
            if !self.sleep_interruptibly(cancelled) {
                break;
            }
            self.report();
        }
    }

    /// Take a point-in-time snapshot of progress
    pub fn snapshot(&self) -> ProgressSnapshot {
        let hashes = self.processed.load(Ordering::Relaxed);
        let elapsed = self.started.elapsed();
        ProgressSnapshot { hashes, elapsed }
    }

    /// Print one status line
    fn report(&self) {
        let snapshot = self.snapshot();
        println!(
            "[{}s] Hashes computed: {}",
            snapshot.elapsed.as_secs(),
            snapshot.hashes
        );
    }

    /// Sleep for one report interval, waking early on cancellation.
    /// Returns false if cancelled during the sleep.
    fn sleep_interruptibly(&self, cancelled: &AtomicBool) -> bool {
        let deadline = Instant::now() + self.interval;
        while Instant::now() < deadline {
            if cancelled.load(Ordering::SeqCst) {
                return false;
            }
            thread::sleep(CANCEL_POLL_INTERVAL.min(deadline - Instant::now()));
        }
        true
    }
}

/// Point-in-time progress sample
#[derive(Debug, Clone, Copy)]
pub struct ProgressSnapshot {
    /// Total digests computed so far
    pub hashes: u64,
    /// Wall-clock time since the run started
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    /// Average throughput in hashes per second
    pub fn rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.hashes as f64 / secs
        } else {
            0.0
        }
    }
}
