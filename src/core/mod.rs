//! Core engine module
//!
//! Provides the orchestrator that owns the shared run state and drives
//! the worker pool and progress reporter.

mod engine;

pub use engine::*;
