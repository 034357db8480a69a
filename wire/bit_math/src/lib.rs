//! # bit_math
//!
//! Bit/byte size conversions and byte-boundary alignment for bit cursors.
//!
//! Everything here is a total `const fn`, usable in array lengths and
//! associated constants.
//!
//! ```rust
//! use bit_math::{bits_to_contain, bytes_to_contain, next_boundary_bit_pos};
//!
//! assert_eq!(bits_to_contain(2), 16);
//! assert_eq!(bytes_to_contain(9), 2);
//! assert_eq!(next_boundary_bit_pos(13), 16);
//! ```

#![no_std]

const DIV8_SHIFT: usize = 3;
const MOD8_MASK: usize = 0x7;

/// Number of bits spanned by `num_bytes` whole bytes.
#[inline]
pub const fn bits_to_contain(num_bytes: usize) -> usize {
    num_bytes << DIV8_SHIFT
}

/// Number of whole bytes required to hold `num_bits`.
///
/// Any nonzero remainder rounds up, so a partially occupied trailing byte
/// counts in full.
#[inline]
pub const fn bytes_to_contain(num_bits: usize) -> usize {
    let spills_over = (num_bits & MOD8_MASK) != 0;
    (num_bits >> DIV8_SHIFT) + if spills_over { 1 } else { 0 }
}

/// Bit position of the next byte boundary at or after `start_bit_pos`.
///
/// Idempotent when the position is already byte-aligned.
#[inline]
pub const fn next_boundary_bit_pos(start_bit_pos: usize) -> usize {
    bits_to_contain(bytes_to_contain(start_bit_pos))
}
