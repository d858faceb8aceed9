//! Output sink module
//!
//! Serializes concurrent buffer submissions into a single append-only
//! destination with atomic-at-buffer-granularity write ordering.

mod writer;

pub use writer::*;
