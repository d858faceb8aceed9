//! Work distribution module
//!
//! Hands out disjoint, contiguous ranges of the global input sequence
//! to requesting workers via a single lock-free shared cursor.

mod cursor;

pub use cursor::*;
