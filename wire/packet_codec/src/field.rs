//! The closed set of field kinds a packet is built from.
//!
//! - Bare scalars and [`Field`] wrappers are byte-aligned: padding is
//!   inserted before them when needed and the cursor lands on the next byte
//!   boundary after them.
//! - [`BitField`] and [`ConstBitField`] ignore alignment entirely.
//!   Consecutive bit-level fields pack back to back with no padding, so up
//!   to eight single-bit fields share one byte.

use bit_math::bits_to_contain;

use crate::bits;
use crate::codec::{Decode, Encode};
use crate::error::CodecError;
use crate::footprint::Footprint;
use crate::scalar::Scalar;
use crate::width::{BitWidth, Width};

/// A field that can take a slot in a [`Packet`](crate::Packet).
///
/// `PACKED` fields continue at the raw bit cursor; everything else starts
/// on a byte boundary.
pub trait PacketField: Encode + Decode + Footprint {
    /// True for bit-level fields that pack with no padding before them.
    const PACKED: bool;
}

// Bare scalars are accepted as fields directly, with aligned semantics.
impl<T: Scalar> PacketField for T {
    const PACKED: bool = false;
}

/// Explicit wrapper for a byte-aligned value field.
///
/// Functionally identical to using the bare value; schemas that want every
/// slot spelled out can use it for symmetry with the bit-level kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Field<T> {
    pub value: T,
}

impl<T> Field<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self { value }
    }
}

impl<T: Scalar> Footprint for Field<T> {
    const SIZE_BITS: usize = T::SIZE_BITS;
}

impl<T: Scalar> PacketField for Field<T> {
    const PACKED: bool = false;
}

impl<T: Scalar> Encode for Field<T> {
    fn encode(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError> {
        self.value.encode(buffer, cursor)
    }
}

impl<T: Scalar> Decode for Field<T> {
    fn decode(&mut self, buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError> {
        self.value.decode(buffer, cursor)
    }
}

/// A bit-packed field of exactly `N` bits.
///
/// Stores the smallest unsigned integer holding `N` bits, or `bool` when
/// `N = 1`. Only the low `N` bits of the stored value are encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BitField<const N: usize>
where
    Width<N>: BitWidth,
{
    pub value: <Width<N> as BitWidth>::Repr,
}

impl<const N: usize> BitField<N>
where
    Width<N>: BitWidth,
{
    pub const fn new(value: <Width<N> as BitWidth>::Repr) -> Self {
        Self { value }
    }
}

/// Single mutable bit.
pub type Bit = BitField<1>;

impl<const N: usize> Footprint for BitField<N>
where
    Width<N>: BitWidth,
{
    const SIZE_BITS: usize = N;
}

impl<const N: usize> PacketField for BitField<N>
where
    Width<N>: BitWidth,
{
    const PACKED: bool = true;
}

impl<const N: usize> Encode for BitField<N>
where
    Width<N>: BitWidth,
{
    fn encode(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError> {
        encode_packed::<N>(<Width<N> as BitWidth>::to_native(self.value), buffer, cursor)
    }
}

impl<const N: usize> Decode for BitField<N>
where
    Width<N>: BitWidth,
{
    fn decode(&mut self, buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError> {
        let capacity = bits_to_contain(buffer.len());
        if *cursor + N > capacity {
            return Err(CodecError::CapacityExceeded {
                required: *cursor + N,
                capacity,
            });
        }

        let mut raw = [0u8; 8];
        bits::decode_bits(&mut raw, buffer, *cursor, N);
        self.value = <Width<N> as BitWidth>::from_native(raw);
        *cursor += N;
        Ok(())
    }
}

/// A reserved bit-packed field whose value is fixed at construction.
///
/// Encodes exactly like [`BitField`]. Decoding skips over the reserved bits:
/// the stored value is never overwritten, but the cursor still advances by
/// `N`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConstBitField<const N: usize>
where
    Width<N>: BitWidth,
{
    value: <Width<N> as BitWidth>::Repr,
}

impl<const N: usize> ConstBitField<N>
where
    Width<N>: BitWidth,
{
    pub const fn new(value: <Width<N> as BitWidth>::Repr) -> Self {
        Self { value }
    }

    /// The value fixed at construction.
    pub const fn value(&self) -> <Width<N> as BitWidth>::Repr {
        self.value
    }
}

/// Single reserved bit.
pub type ConstBit = ConstBitField<1>;

impl<const N: usize> Footprint for ConstBitField<N>
where
    Width<N>: BitWidth,
{
    const SIZE_BITS: usize = N;
}

impl<const N: usize> PacketField for ConstBitField<N>
where
    Width<N>: BitWidth,
{
    const PACKED: bool = true;
}

impl<const N: usize> Encode for ConstBitField<N>
where
    Width<N>: BitWidth,
{
    fn encode(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError> {
        encode_packed::<N>(<Width<N> as BitWidth>::to_native(self.value), buffer, cursor)
    }
}

impl<const N: usize> Decode for ConstBitField<N>
where
    Width<N>: BitWidth,
{
    fn decode(&mut self, _buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError> {
        // The reserved value cannot be reassigned, so nothing that is
        // decoded could be stored; skip over the footprint.
        *cursor += N;
        Ok(())
    }
}

fn encode_packed<const N: usize>(
    src: [u8; 8],
    buffer: &mut [u8],
    cursor: &mut usize,
) -> Result<(), CodecError> {
    let capacity = bits_to_contain(buffer.len());
    if *cursor + N > capacity {
        return Err(CodecError::CapacityExceeded {
            required: *cursor + N,
            capacity,
        });
    }

    bits::encode_bits(buffer, &src, *cursor, N);
    *cursor += N;
    Ok(())
}
