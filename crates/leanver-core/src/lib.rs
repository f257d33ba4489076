//! Core data types for leanver.
//!
//! This crate defines the structured form of a version range specifier, the
//! specificity ranking that orders specifiers from narrowest to broadest, the
//! insertion-ordered map that holds resolution results, and the resolver
//! configuration.
//!
//! This crate is intentionally free of version matching. Deciding whether a
//! concrete version satisfies a range lives in `leanver-resolver`.

pub mod config;
pub mod priority;
pub mod resolution;
pub mod specifier;
