// In: src/error.rs

//! This module defines the single, unified error type for the entire fst-outputs
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Note that value-domain violations (an explicit zero output, a `subtract`
//! whose increment exceeds the output) are deliberately NOT represented here.
//! Those are programming defects in the calling FST builder, caught by
//! debug-only assertions and compiled out of release builds.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FstError {
    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    /// An error originating from the underlying I/O subsystem
    /// (e.g., a write failure on the caller's stream).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Truncated or corrupt varint data encountered while decoding an output.
    #[error("Varint decoding error: {0}")]
    VarintDecodeError(String),
}
