//! The positive-integer output algebra.
//!
//! Each output is either absent or a strictly positive 64-bit value, and
//! `common` takes the minimum of two values. Factoring the smaller value onto
//! the shared arc always leaves a valid remainder on both branches, so the
//! decomposition is deterministic regardless of key insertion order.

use std::io::Cursor;
use std::num::NonZeroU64;

use crate::error::FstError;
use crate::kernels::varint;
use crate::output::Output;
use crate::outputs::Outputs;

/// Zero-sized, stateless algebra over [`Output`] values.
///
/// Any number of copies may be used concurrently; there is no state to
/// synchronize. The FST builder calls `common`/`subtract` while minimizing
/// arcs, the reader calls `add` while reassembling a value along a path, and
/// the persistence layer calls `write`/`read` once per stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositiveIntOutputs;

impl PositiveIntOutputs {
    pub const fn new() -> Self {
        PositiveIntOutputs
    }
}

impl Outputs for PositiveIntOutputs {
    type Value = Output;

    fn no_output(&self) -> Output {
        Output::None
    }

    fn common(&self, a: Output, b: Output) -> Output {
        match (a, b) {
            // An absent output on either side leaves nothing to factor.
            (Output::Value(x), Output::Value(y)) => Output::Value(x.min(y)),
            _ => Output::None,
        }
    }

    fn subtract(&self, output: Output, inc: Output) -> Output {
        debug_assert!(
            inc <= output,
            "subtract precondition violated: inc {} exceeds output {}",
            inc,
            output
        );
        match (output, inc) {
            (out, Output::None) => out,
            (out, inc) if out == inc => Output::None,
            // inc < output here, so the difference is strictly positive.
            (out, Output::Value(i)) => Output::new(out.to_u64() - i.get()),
        }
    }

    fn add(&self, prefix: Output, output: Output) -> Output {
        match (prefix, output) {
            (Output::None, out) => out,
            (pre, Output::None) => pre,
            (Output::Value(p), Output::Value(o)) => Output::new(p.get() + o.get()),
        }
    }

    fn write(&self, output: &Output, buffer: &mut Vec<u8>) -> Result<(), FstError> {
        varint::encode_one(output.to_u64(), buffer)
    }

    fn read(&self, cursor: &mut Cursor<&[u8]>) -> Result<Output, FstError> {
        let raw = varint::decode_one::<u64>(cursor)?;
        Ok(match NonZeroU64::new(raw) {
            Some(v) => Output::Value(v),
            None => Output::None,
        })
    }

    fn describe(&self, output: &Output) -> String {
        output.to_string()
    }
}
