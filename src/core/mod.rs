//! Core logic for reading tokens and failure messages.
//!
//! Everything here is pure and synchronous: no I/O, no shared state.
//! All types and functions are testable without the CLI layer.

pub mod claims;
pub mod classifier;
pub mod signal;
