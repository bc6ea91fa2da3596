//! This module contains the pure, stateless kernel for LEB128 (Little-Endian
//! Base 128) variable-length unsigned integer encoding and decoding.
//!
//! Every output value an FST arc carries is persisted as exactly one varint
//! segment; the surrounding arc format owns all framing, so no header, length
//! prefix, or type tag is ever emitted here. The kernel is fully panic-free.

use num_traits::{PrimInt, Unsigned};
use std::io::Cursor;

use crate::error::FstError;

//==================================================================================
// 1. Public API for Single-Value Operations
//==================================================================================

/// Encodes a single unsigned integer as a LEB128 byte sequence, appending to
/// `buffer`. Each byte carries 7 data bits in little-endian group order, with
/// the high bit set on every byte except the last.
pub fn encode_one<T>(value: T, buffer: &mut Vec<u8>) -> Result<(), FstError>
where
    T: PrimInt + Unsigned,
{
    let low_seven = T::from(0x7F)
        .ok_or_else(|| FstError::InternalError("varint group mask does not fit target type".to_string()))?;

    let mut remaining = value;
    loop {
        let group = (remaining & low_seven)
            .to_u8()
            .ok_or_else(|| FstError::InternalError("7-bit varint group did not fit in a byte".to_string()))?;
        remaining = remaining >> 7;

        if remaining == T::zero() {
            buffer.push(group);
            return Ok(());
        }
        buffer.push(group | 0x80);
    }
}

/// Decodes a single unsigned integer from a LEB128 byte stream cursor, leaving
/// the cursor positioned on the byte after the value.
pub fn decode_one<T>(cursor: &mut Cursor<&[u8]>) -> Result<T, FstError>
where
    T: PrimInt + Unsigned,
{
    let total_bits = std::mem::size_of::<T>() * 8;
    let mut result = T::zero();
    let mut shift = 0usize;

    loop {
        let pos = cursor.position() as usize;
        let byte = *cursor.get_ref().get(pos).ok_or_else(|| {
            log::trace!("varint decode ran off the end of the buffer at offset {}", pos);
            FstError::VarintDecodeError("unexpected end of buffer".to_string())
        })?;
        cursor.set_position(pos as u64 + 1);

        // Every continuation group must still fit below the type's width.
        if shift >= total_bits {
            return Err(FstError::VarintDecodeError(
                "integer overflow during decoding".to_string(),
            ));
        }

        let group = T::from(byte & 0x7F)
            .ok_or_else(|| FstError::InternalError("7-bit varint group did not fit target type".to_string()))?;
        result = result | (group << shift);

        if byte & 0x80 == 0 {
            // The final group may straddle the type boundary; any data bits
            // past the top of the type mean the stream is corrupt.
            if shift + 7 > total_bits && (byte >> (total_bits - shift)) != 0 {
                return Err(FstError::VarintDecodeError(
                    "integer overflow during decoding".to_string(),
                ));
            }
            return Ok(result);
        }

        shift += 7;
    }
}

/// Number of bytes `encode_one` emits for `value` (1..=10 for a `u64`).
pub fn encoded_len(value: u64) -> usize {
    let data_bits = 64 - value.max(1).leading_zeros() as usize;
    data_bits.div_ceil(7)
}
