//! Terminal output formatting.
//!
//! Renders decoded claims and error categories either as aligned
//! human-readable lines or as JSON for machine consumption.

pub mod report;
