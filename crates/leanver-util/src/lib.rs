//! Shared utilities for leanver.
//!
//! This crate holds the cross-cutting error type used by the other leanver
//! crates, so that configuration loading and strict resolution report
//! failures the same way.

pub mod errors;
