//! The encode/decode traits every schema type implements.
//!
//! Both operate on a borrowed byte buffer and an in/out bit cursor counted
//! from the buffer origin. The cursor only moves forward, and only on
//! success; after a failed call it holds the same value it held on entry,
//! so the caller can retry from the same position with a fresh buffer.

use crate::error::CodecError;

/// Copies a value's footprint into a byte buffer at a bit cursor.
pub trait Encode {
    /// Encodes `self` into `buffer`, starting no earlier than `cursor` bits
    /// from the buffer origin.
    ///
    /// On success the cursor advances past the encoded footprint. On failure
    /// the cursor is untouched; bytes already written to `buffer` by an
    /// enclosing packet may remain.
    fn encode(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError>;
}

/// Copies a value's footprint out of a byte buffer at a bit cursor.
pub trait Decode {
    /// Decodes into `self` from `buffer`, starting no earlier than `cursor`
    /// bits from the buffer origin.
    ///
    /// On success the cursor advances past the decoded footprint. On failure
    /// the cursor is untouched and `self` is unspecified.
    fn decode(&mut self, buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError>;
}
