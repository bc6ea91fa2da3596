//! This file is the root of the `fst_outputs` Rust crate.
//!
//! An FST (finite-state transducer) compactly encodes a large sorted
//! key→value dictionary by sharing key prefixes; many paths also share output
//! prefixes, and the algebra in this crate is what lets a builder factor the
//! shared portion onto a common arc and the remainder onto diverging arcs.
//! The crate covers exactly that algebra and its wire codec:
//!
//! 1.  `outputs` — the [`Outputs`] contract and the positive-integer
//!     specialization, [`PositiveIntOutputs`].
//! 2.  `output` — the tagged value type, [`Output`].
//! 3.  `kernels` — the LEB128 varint codec the persistence layer uses.
//!
//! The FST graph representation, the builder's traversal, and arc
//! minimization are external collaborators and live with the caller.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod kernels;
pub mod outputs;

mod error;
mod output;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use error::FstError;
pub use output::Output;
pub use outputs::{Outputs, PositiveIntOutputs};
