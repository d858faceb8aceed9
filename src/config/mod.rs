//! Configuration module for HashMill
//!
//! Provides configuration management including CLI arguments
//! and validated runtime settings.

mod settings;

pub use settings::*;
