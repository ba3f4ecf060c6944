//! Common utilities for the Sieve sanitizer.
//!
//! This crate provides shared infrastructure used by the sanitizer crates:
//! - **Warning System** - deduplicated warnings routed through `tracing`
//! - **Logging** - subscriber setup for binaries

pub mod logging;
pub mod warning;
