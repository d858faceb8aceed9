//! Configuration settings for HashMill
//!
//! Defines all configuration options, CLI arguments, and defaults
//! for the digest generation run.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default number of inputs a worker hashes before contending for the sink lock
pub const DEFAULT_BATCH_SIZE: u64 = 10_000;

/// Default reporter period in seconds
pub const DEFAULT_REPORT_INTERVAL_SECS: u64 = 2;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// HashMill - sustained multi-worker digest generator
#[derive(Parser, Debug, Clone)]
#[command(name = "hashmill")]
#[command(author = "HashMill Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Hash the integers forever, as fast as the machine allows")]
#[command(long_about = r#"
HashMill enumerates the non-negative integers, hashes each one's decimal text
with a cryptographic digest function, and appends the lowercase hex digests
(one per line) to an output file until stopped, reporting throughput
periodically.

It exists to exercise and measure sustained hashing throughput under
concurrency. The output stream carries hash values only; the originating
integers are not recorded, and line order across workers is unspecified.

Examples:
  hashmill                                  # SHA-512, all cores, run forever
  hashmill -o hashes.log -t 4               # 4 workers, custom output
  hashmill --algorithm blake3 --duration 30s # bounded throughput measurement
  hashmill --duration 10s --output-format json -q  # machine-readable summary
"#)]
pub struct CliArgs {
    /// Output file path (opened in append mode)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT, value_name = "PATH")]
    pub output: PathBuf,

    /// Number of parallel workers (0 = auto-detect)
    #[arg(short = 't', long, default_value = "0", value_name = "NUM")]
    pub threads: usize,

    /// Hashes computed per worker between sink submissions
    #[arg(short = 'b', long, default_value = "10000", value_name = "NUM")]
    pub batch_size: u64,

    /// Digest algorithm
    #[arg(short = 'a', long, value_enum, default_value = "sha512", value_name = "ALGO")]
    pub algorithm: DigestAlgorithm,

    /// Seconds between progress reports
    #[arg(short = 'r', long, default_value = "2", value_name = "SECS")]
    pub report_interval: u64,

    /// Stop cleanly after this long (e.g. 30s, 5m); runs forever if omitted
    #[arg(short = 'd', long, value_name = "DURATION")]
    pub duration: Option<String>,

    /// Output format for the end-of-run summary
    #[arg(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress and summary output)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Digest algorithm for the hash workers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-512 - the classic 64-byte workhorse (default)
    #[default]
    #[value(name = "sha512")]
    Sha512,
    /// SHA-256 - standard 32-byte cryptographic hash
    #[value(name = "sha256")]
    Sha256,
    /// BLAKE3 - fast and cryptographically secure (32 bytes)
    #[value(name = "blake3")]
    Blake3,
}

impl DigestAlgorithm {
    /// Get the digest size in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Sha512 => 64,
            Self::Sha256 => 32,
            Self::Blake3 => 32,
        }
    }

    /// Width of one hex-encoded output line, excluding the line terminator
    pub fn line_width(&self) -> usize {
        self.digest_len() * 2
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha512 => "SHA-512",
            Self::Sha256 => "SHA-256",
            Self::Blake3 => "BLAKE3",
        }
    }
}

/// Output format for the end-of-run summary
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

/// Validated runtime configuration for a digest generation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Output file path, opened once in append mode
    pub output: PathBuf,
    /// Number of workers (0 = auto-detect at startup)
    pub threads: usize,
    /// Hashes computed per worker between sink submissions
    pub batch_size: u64,
    /// Digest algorithm
    pub algorithm: DigestAlgorithm,
    /// Reporter period
    pub report_interval: Duration,
    /// Optional deadline after which the run drains and stops
    pub duration: Option<Duration>,
    /// Suppress progress reporting
    pub quiet: bool,
}

impl RunConfig {
    /// Build a validated configuration from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        if args.batch_size == 0 {
            return Err("batch size must be at least 1".to_string());
        }
        if args.report_interval == 0 {
            return Err("report interval must be at least 1 second".to_string());
        }

        let duration = args
            .duration
            .as_deref()
            .map(humantime::parse_duration)
            .transpose()
            .map_err(|e| format!("invalid duration: {}", e))?;

        if let Some(d) = duration {
            if d.is_zero() {
                return Err("duration must be positive".to_string());
            }
        }

        Ok(Self {
            output: args.output.clone(),
            threads: args.threads,
            batch_size: args.batch_size,
            algorithm: args.algorithm,
            report_interval: Duration::from_secs(args.report_interval),
            duration,
            quiet: args.quiet,
        })
    }

    /// Resolve the worker count, auto-detecting when unset
    pub fn effective_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            threads: 0,
            batch_size: DEFAULT_BATCH_SIZE,
            algorithm: DigestAlgorithm::default(),
            report_interval: Duration::from_secs(DEFAULT_REPORT_INTERVAL_SECS),
            duration: None,
            quiet: false,
        }
    }
}
