//! The output algebras attached to FST arcs.
//!
//! An FST compresses a sorted key→value dictionary by sharing key prefixes and
//! pushing each value as far toward the root as it will go. Doing that needs a
//! small closed algebra over output values: find what two candidate arcs can
//! share (`common`), peel a shared prefix off an output (`subtract`), and glue
//! an accumulated prefix back onto an arc's local output while traversing
//! (`add`). The [`Outputs`] trait is that contract; [`positive_int`] provides
//! the one specialization in this crate.

use std::fmt::Debug;
use std::io::Cursor;

use crate::error::FstError;

pub mod positive_int;

pub use positive_int::PositiveIntOutputs;

/// The algebra of output values for one FST flavor.
///
/// Implementations are stateless and shared freely across threads: every
/// method is a pure function of its arguments (`write` and `read` touch only
/// the buffer the caller hands them, whose concurrency discipline is the
/// caller's concern).
pub trait Outputs {
    /// The value attached to arcs.
    type Value: Clone + Eq + Debug;

    /// The sentinel meaning "no output on this arc".
    fn no_output(&self) -> Self::Value;

    /// The output two candidate arcs can share, used to decide how much of a
    /// value the builder may factor onto a common prefix arc.
    fn common(&self, a: Self::Value, b: Self::Value) -> Self::Value;

    /// Removes a previously factored prefix `inc` from `output`, leaving the
    /// remainder for the diverging branch.
    ///
    /// `inc` must not exceed `output` in the domain ordering. Violating that
    /// is a caller bug, checked by a debug-only assertion.
    fn subtract(&self, output: Self::Value, inc: Self::Value) -> Self::Value;

    /// Recombines an accumulated `prefix` with an arc's local `output` during
    /// traversal. Exact inverse of [`Outputs::subtract`] wherever subtract's
    /// precondition held.
    fn add(&self, prefix: Self::Value, output: Self::Value) -> Self::Value;

    /// Encodes one value into `buffer`. No framing is added; the surrounding
    /// arc format decides how many values appear and in what order.
    fn write(&self, output: &Self::Value, buffer: &mut Vec<u8>) -> Result<(), FstError>;

    /// Decodes the single value at the cursor, leaving the cursor on the byte
    /// after it.
    fn read(&self, cursor: &mut Cursor<&[u8]>) -> Result<Self::Value, FstError>;

    /// Human-readable rendering for diagnostics. Never parsed back.
    fn describe(&self, output: &Self::Value) -> String;
}
