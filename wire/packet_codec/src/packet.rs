//! Packets: ordered field sequences with compile-time layout.
//!
//! A packet's size is computed by folding its fields' contributions in
//! declaration order and rounding up to the next byte boundary once at the
//! end, so every packet is a whole number of bytes. Encode and decode walk
//! the same fold at runtime, recursing into nested packets.

use bit_math::{bits_to_contain, bytes_to_contain, next_boundary_bit_pos};

use crate::codec::{Decode, Encode};
use crate::error::CodecError;
use crate::field::PacketField;
use crate::footprint::Footprint;

/// An ordered sequence of fields, implemented for tuples of
/// [`PacketField`] types up to arity 12.
pub trait FieldSeq {
    /// Folded size of the sequence in bits, before the trailing alignment a
    /// packet applies.
    const ACCUM_BITS: usize;

    /// Number of fields in the sequence.
    const LEN: usize;

    fn encode_fields(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError>;

    fn decode_fields(&mut self, buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError>;
}

/// Adds one field's contribution to a running bit total: packed fields
/// continue at the current position, everything else rounds up to the next
/// byte boundary first.
const fn add_field<F: PacketField>(aggregate: usize) -> usize {
    if F::PACKED {
        aggregate + F::SIZE_BITS
    } else {
        next_boundary_bit_pos(aggregate) + F::SIZE_BITS
    }
}

const fn one<F: PacketField>() -> usize {
    1
}

/// Data's final form: an ordered collection of value wrappers comprising a
/// bit-exact structure of memory.
///
/// Field values are owned by the packet and reachable through the `fields`
/// tuple in declaration order. Packets have plain value semantics and nest
/// freely; a nested packet is aligned like any other byte-aligned field.
///
/// Encoding does not clear the destination: bit-level fields OR their bits
/// in, so zero the buffer before encoding when exact byte contents matter.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Packet<Fs> {
    pub fields: Fs,
}

impl<Fs: FieldSeq> Packet<Fs> {
    /// Number of fields held by the packet.
    pub const NUM_FIELDS: usize = Fs::LEN;

    pub const fn new(fields: Fs) -> Self {
        Self { fields }
    }
}

impl<Fs: FieldSeq> Footprint for Packet<Fs> {
    const SIZE_BITS: usize = next_boundary_bit_pos(Fs::ACCUM_BITS);
}

impl<Fs: FieldSeq> PacketField for Packet<Fs> {
    const PACKED: bool = false;
}

impl<Fs: FieldSeq> Encode for Packet<Fs> {
    fn encode(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError> {
        // The packet begins on a byte boundary at or after the cursor.
        let start_byte = bytes_to_contain(*cursor);
        if start_byte + Self::SIZE_BYTES > buffer.len() {
            return Err(CodecError::CapacityExceeded {
                required: bits_to_contain(start_byte + Self::SIZE_BYTES),
                capacity: bits_to_contain(buffer.len()),
            });
        }

        let mut local = bits_to_contain(start_byte);
        self.fields.encode_fields(buffer, &mut local)?;

        // Pad the tail so the packet also ends on a byte boundary.
        *cursor = next_boundary_bit_pos(local);
        Ok(())
    }
}

impl<Fs: FieldSeq> Decode for Packet<Fs> {
    fn decode(&mut self, buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError> {
        let start_byte = bytes_to_contain(*cursor);
        if start_byte + Self::SIZE_BYTES > buffer.len() {
            return Err(CodecError::CapacityExceeded {
                required: bits_to_contain(start_byte + Self::SIZE_BYTES),
                capacity: bits_to_contain(buffer.len()),
            });
        }

        let mut local = bits_to_contain(start_byte);
        self.fields.decode_fields(buffer, &mut local)?;

        *cursor = next_boundary_bit_pos(local);
        Ok(())
    }
}

impl FieldSeq for () {
    const ACCUM_BITS: usize = 0;
    const LEN: usize = 0;

    fn encode_fields(&self, _buffer: &mut [u8], _cursor: &mut usize) -> Result<(), CodecError> {
        Ok(())
    }

    fn decode_fields(&mut self, _buffer: &[u8], _cursor: &mut usize) -> Result<(), CodecError> {
        Ok(())
    }
}

macro_rules! impl_field_seq {
    ($($field:ident . $idx:tt),+) => {
        impl<$($field: PacketField),+> FieldSeq for ($($field,)+) {
            const ACCUM_BITS: usize = {
                let aggregate = 0;
                $(let aggregate = add_field::<$field>(aggregate);)+
                aggregate
            };

            const LEN: usize = 0 $(+ one::<$field>())+;

            fn encode_fields(
                &self,
                buffer: &mut [u8],
                cursor: &mut usize,
            ) -> Result<(), CodecError> {
                $(self.$idx.encode(buffer, cursor)?;)+
                Ok(())
            }

            fn decode_fields(
                &mut self,
                buffer: &[u8],
                cursor: &mut usize,
            ) -> Result<(), CodecError> {
                $(self.$idx.decode(buffer, cursor)?;)+
                Ok(())
            }
        }
    };
}

impl_field_seq!(A.0);
impl_field_seq!(A.0, B.1);
impl_field_seq!(A.0, B.1, C.2);
impl_field_seq!(A.0, B.1, C.2, D.3);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10);
impl_field_seq!(A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7, I.8, J.9, K.10, L.11);
