//! # HashMill - Sustained Parallel Digest Generation
//!
//! HashMill enumerates the non-negative integers, hashes each one's decimal
//! text with a cryptographic digest function, and appends the lowercase hex
//! digests (one per line) to a single output file indefinitely, while
//! reporting throughput. It exists to exercise and measure sustained hashing
//! throughput under concurrency, not to serve any consumer of the digests'
//! semantic content.
//!
//! ## Features
//!
//! - **Lock-Free Work Distribution**: disjoint input ranges handed out via a
//!   single atomic cursor
//! - **Batched Output**: workers hash thousands of inputs privately before
//!   taking the sink lock once per batch
//! - **Atomic-Buffer Writes**: concurrent submissions never interleave
//!   mid-buffer (line order across workers is unspecified)
//! - **Multiple Algorithms**: SHA-512 (default), SHA-256, BLAKE3
//! - **Cooperative Shutdown**: a shared cancellation flag drains in-flight
//!   buffers before exit
//! - **Throughput Reporting**: periodic status lines from a read-only
//!   reporter task
//!
//! ## Quick Start
//!
//! ```no_run
//! use hashmill::config::RunConfig;
//! use hashmill::core::HashEngine;
//! use std::time::Duration;
//!
//! // Hash for ten seconds on every core, then drain and report.
//! let config = RunConfig {
//!     duration: Some(Duration::from_secs(10)),
//!     ..Default::default()
//! };
//!
//! let summary = HashEngine::new(config).run().unwrap();
//! summary.print_summary();
//! ```
//!
//! ## External Control
//!
//! ```no_run
//! use hashmill::config::RunConfig;
//! use hashmill::core::HashEngine;
//! use std::sync::atomic::Ordering;
//!
//! let engine = HashEngine::new(RunConfig::default());
//! let cancel = engine.cancellation_flag();
//!
//! // Some other thread decides when to stop:
//! std::thread::spawn(move || {
//!     cancel.store(true, Ordering::SeqCst);
//! });
//!
//! let summary = engine.run().unwrap();
//! println!("{} hashes at {:.0}/s", summary.hashes, summary.hashes_per_sec);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod digest;
pub mod dispatch;
pub mod error;
pub mod progress;
pub mod sink;

// Re-export commonly used types
pub use config::{DigestAlgorithm, RunConfig};
pub use core::{HashEngine, RunSummary};
pub use error::{HashMillError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use hashmill::prelude::*;
    //! ```

    pub use crate::config::{CliArgs, DigestAlgorithm, OutputFormat, RunConfig};
    pub use crate::core::{HashEngine, RunSummary};
    pub use crate::digest::{digest_hex, hash_range, hash_value};
    pub use crate::dispatch::{RangeDispenser, WorkRange};
    pub use crate::error::{HashMillError, Result};
    pub use crate::progress::{ProgressSnapshot, ThroughputReporter};
    pub use crate::sink::DigestSink;
}
