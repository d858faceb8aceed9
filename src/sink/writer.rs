//! Append-only digest sink
//!
//! Opened once at startup in append mode and held for the process lifetime.
//! Every submission takes the sink lock, writes the whole buffer (one record
//! per line), and flushes before releasing, so no two submissions interleave
//! mid-buffer. Line order across submitters is unspecified.

use crate::error::{HashMillError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Buffer size for the underlying writer
const WRITE_BUFFER_SIZE: usize = 1024 * 1024;

/// The single serialized destination all workers append to
#[derive(Debug)]
pub struct DigestSink {
    /// Destination path, kept for error context
    path: PathBuf,
    /// The append-only destination, guarded for exclusive access
    writer: Mutex<BufWriter<File>>,
    /// Total bytes written through the sink, including line terminators
    bytes_written: AtomicU64,
}

impl DigestSink {
    /// Open the destination in append mode
    ///
    /// Failure here is fatal: the caller must not start the worker pool
    /// without a writable destination.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| HashMillError::sink_open(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::with_capacity(WRITE_BUFFER_SIZE, file)),
            bytes_written: AtomicU64::new(0),
        })
    }

    /// Write a full buffer of records, one line each, as a single
    /// uninterrupted span
    ///
    /// A write failure is fatal for the whole run; the records of the
    /// failed buffer are lost. There is no retry or backpressure policy.
    pub fn submit(&self, records: &[String]) -> Result<()> {
        let mut writer = self.writer.lock().map_err(|_| HashMillError::SinkPoisoned)?;

        let mut span_bytes: u64 = 0;
        for record in records {
            writer
                .write_all(record.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| HashMillError::sink_write(&self.path, e))?;
            span_bytes += record.len() as u64 + 1;
        }
        writer
            .flush()
            .map_err(|e| HashMillError::sink_write(&self.path, e))?;

        self.bytes_written.fetch_add(span_bytes, Ordering::Relaxed);
        Ok(())
    }

    /// Total bytes written through the sink so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
