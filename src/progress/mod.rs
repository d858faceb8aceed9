//! Progress reporting module
//!
//! Provides the periodic throughput reporter that samples the shared
//! processed counter and prints human-readable status lines.

mod reporter;

pub use reporter::*;
