//! Main digest generation engine
//!
//! Orchestrates the fixed worker pool and the progress reporter. All shared
//! state (range cursor, processed counter, cancellation flag, sink) is owned
//! here and handed to workers by reference at construction, never reached
//! through ambient globals.

use crate::config::{DigestAlgorithm, RunConfig};
use crate::digest::hash_range;
use crate::dispatch::RangeDispenser;
use crate::error::{HashMillError, Result};
use crate::progress::ThroughputReporter;
use crate::sink::DigestSink;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Result of a completed (drained) digest generation run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Total digests computed and written
    pub hashes: u64,
    /// Total bytes appended to the destination
    pub bytes_written: u64,
    /// Wall-clock run time in seconds
    pub elapsed_secs: f64,
    /// Average throughput in hashes per second
    pub hashes_per_sec: f64,
    /// Algorithm the run used
    pub algorithm: DigestAlgorithm,
    /// Number of workers in the pool
    pub workers: usize,
}

impl RunSummary {
    /// Print summary to console
    pub fn print_summary(&self) {
        println!("\n=== Run Summary ===");
        println!("Algorithm:       {}", self.algorithm.name());
        println!("Workers:         {}", self.workers);
        println!("Hashes computed: {}", self.hashes);
        println!(
            "Bytes written:   {}",
            humansize::format_size(self.bytes_written, humansize::BINARY)
        );
        println!("Duration:        {:.2}s", self.elapsed_secs);
        println!("Throughput:      {:.0} hashes/s", self.hashes_per_sec);
    }

    /// Render the summary as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Main digest generation engine
pub struct HashEngine {
    /// Configuration
    config: RunConfig,
    /// Shared range cursor
    dispenser: Arc<RangeDispenser>,
    /// Total digests computed across all workers
    processed: Arc<AtomicU64>,
    /// Cancellation flag, checked at the top of every loop iteration
    cancelled: Arc<AtomicBool>,
}

impl HashEngine {
    /// Create a new engine
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            dispenser: Arc::new(RangeDispenser::new()),
            processed: Arc::new(AtomicU64::new(0)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the cancellation flag for external control
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Request a cooperative shutdown: every worker drains its in-flight
    /// buffer and exits at the top of its next iteration
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Run the worker pool and reporter until cancellation
    ///
    /// Blocks the calling thread. Without an external `cancel()` or a
    /// configured `duration`, this runs until the process is terminated.
    /// The destination is opened before any worker starts; an unwritable
    /// destination at startup aborts the run immediately.
    pub fn run(&self) -> Result<RunSummary> {
        let started = Instant::now();
        let sink = Arc::new(DigestSink::open(&self.config.output)?);

        let workers = self.config.effective_threads();
        info!(
            workers,
            batch_size = self.config.batch_size,
            algorithm = self.config.algorithm.name(),
            output = %sink.path().display(),
            "starting digest generation"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("hash-worker-{}", i))
            .build()
            .map_err(|e| HashMillError::ThreadPoolError(e.to_string()))?;

        let reporter_handle = self.spawn_reporter()?;
        let deadline_handle = self.spawn_deadline_watch()?;

        let worker_results: Vec<Result<()>> = pool.install(|| {
            (0..workers)
                .into_par_iter()
                .map(|worker_id| self.worker_loop(worker_id, &sink))
                .collect()
        });

        // Workers are done; release the reporter and the deadline watch.
        self.cancel();
        if let Some(handle) = reporter_handle {
            handle
                .join()
                .map_err(|_| HashMillError::ThreadPoolError("reporter panicked".to_string()))?;
        }
        if let Some(handle) = deadline_handle {
            handle
                .join()
                .map_err(|_| HashMillError::ThreadPoolError("deadline watch panicked".to_string()))?;
        }

        for result in worker_results {
            result?;
        }

        let elapsed = started.elapsed();
        let hashes = self.processed.load(Ordering::SeqCst);
        let elapsed_secs = elapsed.as_secs_f64();
        let summary = RunSummary {
            hashes,
            bytes_written: sink.bytes_written(),
            elapsed_secs,
            hashes_per_sec: if elapsed_secs > 0.0 {
                hashes as f64 / elapsed_secs
            } else {
                0.0
            },
            algorithm: self.config.algorithm,
            workers,
        };

        info!(
            hashes = summary.hashes,
            rate = summary.hashes_per_sec,
            "run drained"
        );
        Ok(summary)
    }

    /// One worker's unbounded {acquire, compute, submit} cycle
    ///
    /// The compute phase is pure CPU work over a private buffer; the sink
    /// lock is held only for the duration of one buffer's writes, never
    /// across the compute phase.
    fn worker_loop(&self, worker_id: usize, sink: &DigestSink) -> Result<()> {
        let batch_size = self.config.batch_size;
        let algorithm = self.config.algorithm;
        let mut buffer = Vec::with_capacity(batch_size as usize);

        while !self.cancelled.load(Ordering::SeqCst) {
            let range = self.dispenser.acquire(batch_size);
            hash_range(range, algorithm, &mut buffer);

            if let Err(e) = sink.submit(&buffer) {
                error!(worker_id, error = %e, "sink write failed, aborting run");
                self.cancel();
                return Err(e);
            }

            self.processed.fetch_add(range.len, Ordering::Relaxed);
            buffer.clear();
        }

        debug!(worker_id, "worker drained");
        Ok(())
    }

    /// Start the progress reporter thread, unless running quiet
    fn spawn_reporter(&self) -> Result<Option<thread::JoinHandle<()>>> {
        if self.config.quiet {
            return Ok(None);
        }

        let reporter =
            ThroughputReporter::new(Arc::clone(&self.processed), self.config.report_interval);
        let cancelled = Arc::clone(&self.cancelled);
        let handle = thread::Builder::new()
            .name("reporter".to_string())
            .spawn(move || reporter.run(&cancelled))
            .map_err(|e| HashMillError::ThreadPoolError(e.to_string()))?;
        Ok(Some(handle))
    }

    /// Start the deadline watch thread when a bounded run was requested
    fn spawn_deadline_watch(&self) -> Result<Option<thread::JoinHandle<()>>> {
        let Some(duration) = self.config.duration else {
            return Ok(None);
        };

        let cancelled = Arc::clone(&self.cancelled);
        let handle = thread::Builder::new()
            .name("deadline".to_string())
            .spawn(move || {
                let deadline = Instant::now() + duration;
                while Instant::now() < deadline {
                    if cancelled.load(Ordering::SeqCst) {
                        return;
                    }
                    thread::sleep(Duration::from_millis(50).min(deadline - Instant::now()));
                }
                info!("deadline reached, draining workers");
                cancelled.store(true, Ordering::SeqCst);
            })
            .map_err(|e| HashMillError::ThreadPoolError(e.to_string()))?;
        Ok(Some(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    fn test_config(output: std::path::PathBuf) -> RunConfig {
        RunConfig {
            output,
            threads: 2,
            batch_size: 50,
            algorithm: DigestAlgorithm::Sha256,
            report_interval: Duration::from_secs(60),
            duration: Some(Duration::from_millis(200)),
            quiet: true,
        }
    }

    #[test]
    fn test_bounded_run_drains_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let engine = HashEngine::new(test_config(path.clone()));

        let summary = engine.run().unwrap();
        let lines = read_lines(&path);

        // Counter accuracy: every computed digest landed in the file,
        // in whole batches.
        assert!(summary.hashes > 0);
        assert_eq!(lines.len() as u64, summary.hashes);
        assert_eq!(summary.hashes % 50, 0);

        // Fixed line width: 2 hex chars per digest byte.
        for line in &lines {
            assert_eq!(line.len(), DigestAlgorithm::Sha256.line_width());
        }

        // Bytes written include one terminator per line.
        assert_eq!(
            summary.bytes_written,
            summary.hashes * (DigestAlgorithm::Sha256.line_width() as u64 + 1)
        );
    }

    #[test]
    fn test_single_worker_output_is_input_ordered() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let mut config = test_config(path.clone());
        config.threads = 1;
        config.batch_size = 10;
        config.duration = Some(Duration::from_millis(100));

        let engine = HashEngine::new(config);
        let summary = engine.run().unwrap();
        let lines = read_lines(&path);

        // One worker submits ranges in acquisition order, so the file is
        // exactly the digests of 0..N in order.
        assert_eq!(lines.len() as u64, summary.hashes);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(
                line,
                &crate::digest::hash_value(i as u64, DigestAlgorithm::Sha256)
            );
        }
    }

    #[test]
    fn test_external_cancellation_stops_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let mut config = test_config(path);
        config.duration = None;

        let engine = HashEngine::new(config);
        let flag = engine.cancellation_flag();
        let canceller = thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            flag.store(true, Ordering::SeqCst);
        });

        let summary = engine.run().unwrap();
        assert!(summary.hashes > 0);
        canceller.join().unwrap();
    }

    #[test]
    fn test_unwritable_destination_fails_before_workers_start() {
        let config = RunConfig {
            output: std::path::PathBuf::from("/nonexistent-dir/out.txt"),
            ..test_config(std::path::PathBuf::new())
        };
        let engine = HashEngine::new(config);

        let err = engine.run().unwrap_err();
        assert!(err.is_sink_failure());
        // Nothing was assigned: the pool never started.
        assert_eq!(engine.dispenser.assigned(), 0);
    }

    #[test]
    fn test_summary_json_round_trips() {
        let summary = RunSummary {
            hashes: 100,
            bytes_written: 6_500,
            elapsed_secs: 1.5,
            hashes_per_sec: 66.7,
            algorithm: DigestAlgorithm::Sha512,
            workers: 4,
        };
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"hashes\": 100"));
        assert!(json.contains("\"sha512\""));
    }
}
