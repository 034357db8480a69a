//! The byte-aligned single-value codec.
//!
//! Scalars are copied bytewise in host order. Encoding at a mid-byte cursor
//! first rounds the cursor up to the next byte boundary, so a scalar always
//! begins and ends on a whole byte.

use bit_math::{bits_to_contain, bytes_to_contain};

use crate::codec::{Decode, Encode};
use crate::error::CodecError;
use crate::footprint::Footprint;

/// An arithmetic value whose footprint is its native storage size.
pub trait Scalar: Footprint + Copy {
    /// Writes the value's native byte representation to the front of `dest`.
    ///
    /// `dest` must hold at least `SIZE_BYTES` bytes.
    fn store_native(&self, dest: &mut [u8]);

    /// Reads a value from the front of `src` in native byte order.
    ///
    /// `src` must hold at least `SIZE_BYTES` bytes.
    fn load_native(src: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($t:ty),+ $(,)?) => {$(
        impl Footprint for $t {
            const SIZE_BITS: usize = core::mem::size_of::<$t>() * 8;
        }

        impl Scalar for $t {
            #[inline]
            fn store_native(&self, dest: &mut [u8]) {
                dest[..Self::SIZE_BYTES].copy_from_slice(bytemuck::bytes_of(self));
            }

            #[inline]
            fn load_native(src: &[u8]) -> Self {
                bytemuck::pod_read_unaligned(&src[..Self::SIZE_BYTES])
            }
        }
    )+};
}

impl_scalar!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl Footprint for bool {
    const SIZE_BITS: usize = core::mem::size_of::<bool>() * 8;
}

// bool is not Pod; any byte value other than 0 or 1 would be undefined.
impl Scalar for bool {
    #[inline]
    fn store_native(&self, dest: &mut [u8]) {
        dest[0] = *self as u8;
    }

    #[inline]
    fn load_native(src: &[u8]) -> Self {
        src[0] != 0
    }
}

impl<T: Scalar> Encode for T {
    fn encode(&self, buffer: &mut [u8], cursor: &mut usize) -> Result<(), CodecError> {
        // A mid-byte cursor rounds up to the next boundary.
        let start_byte = bytes_to_contain(*cursor);
        if start_byte + Self::SIZE_BYTES > buffer.len() {
            return Err(CodecError::CapacityExceeded {
                required: bits_to_contain(start_byte + Self::SIZE_BYTES),
                capacity: bits_to_contain(buffer.len()),
            });
        }

        self.store_native(&mut buffer[start_byte..]);
        *cursor = bits_to_contain(start_byte) + Self::SIZE_BITS;
        Ok(())
    }
}

impl<T: Scalar> Decode for T {
    fn decode(&mut self, buffer: &[u8], cursor: &mut usize) -> Result<(), CodecError> {
        let start_byte = bytes_to_contain(*cursor);
        if start_byte + Self::SIZE_BYTES > buffer.len() {
            return Err(CodecError::CapacityExceeded {
                required: bits_to_contain(start_byte + Self::SIZE_BYTES),
                capacity: bits_to_contain(buffer.len()),
            });
        }

        *self = Self::load_native(&buffer[start_byte..]);
        *cursor = bits_to_contain(start_byte) + Self::SIZE_BITS;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_values_round_trip() {
        let values: (i8, u32, f32) = (-69, 0x0ABC_DEF0, 3.14);

        let mut buffer = [0u8; 4];
        let mut cursor = 0;
        values.0.encode(&mut buffer, &mut cursor).unwrap();
        assert_eq!(cursor, i8::SIZE_BITS);
        assert_eq!(&buffer[..1], &values.0.to_ne_bytes());

        let mut buffer = [0u8; 4];
        let mut cursor = 0;
        values.1.encode(&mut buffer, &mut cursor).unwrap();
        assert_eq!(cursor, u32::SIZE_BITS);
        assert_eq!(buffer, values.1.to_ne_bytes());

        let mut decoded = 0u32;
        let mut cursor = 0;
        decoded.decode(&buffer, &mut cursor).unwrap();
        assert_eq!(decoded, values.1);

        let mut buffer = [0u8; 4];
        let mut cursor = 0;
        values.2.encode(&mut buffer, &mut cursor).unwrap();
        let mut decoded = 0f32;
        let mut cursor = 0;
        decoded.decode(&buffer, &mut cursor).unwrap();
        assert_eq!(decoded, values.2);
    }

    #[test]
    fn sequential_values_pack_bytewise() {
        let first: u8 = 0xFF;
        let second: u32 = 0x0ABC_DEF0;

        let mut buffer = [0u8; 5];
        let mut cursor = 0;
        first.encode(&mut buffer, &mut cursor).unwrap();
        second.encode(&mut buffer, &mut cursor).unwrap();

        assert_eq!(cursor, bits_to_contain(buffer.len()));
        assert_eq!(buffer, [0xFF, 0xF0, 0xDE, 0xBC, 0x0A]);

        let mut first_decoded = 0u8;
        let mut second_decoded = 0u32;
        let mut cursor = 0;
        first_decoded.decode(&buffer, &mut cursor).unwrap();
        second_decoded.decode(&buffer, &mut cursor).unwrap();
        assert_eq!((first_decoded, second_decoded), (first, second));
        assert_eq!(cursor, bits_to_contain(buffer.len()));
    }

    #[test]
    fn encode_at_offset_rounds_to_next_boundary() {
        let mut buffer = [0u8; 2];
        let mut cursor = 3;
        0xFFu8.encode(&mut buffer, &mut cursor).unwrap();
        assert_eq!(cursor, 16);
        assert_eq!(buffer, [0x00, 0xFF]);
    }

    #[test]
    fn decode_at_offset_rounds_to_next_boundary() {
        let buffer = [0x00u8, 0xFF];
        let mut decoded = 0u8;
        let mut cursor = 3;
        decoded.decode(&buffer, &mut cursor).unwrap();
        assert_eq!(decoded, 0xFF);
        assert_eq!(cursor, 16);
    }

    #[test]
    fn encode_avoids_overflow() {
        let mut buffer = [0u8; 2];
        let mut cursor = 0;
        0xFFu8.encode(&mut buffer, &mut cursor).unwrap();
        assert_eq!(cursor, u8::SIZE_BITS);

        let result = 0xFFFF_FFFFu32.encode(&mut buffer, &mut cursor);
        assert!(result.is_err());
        // The failed encode neither advanced the cursor nor touched bytes.
        assert_eq!(cursor, u8::SIZE_BITS);
        assert_eq!(buffer, [0xFF, 0x00]);
    }

    #[test]
    fn decode_avoids_underflow() {
        let buffer = [0u8; 3];
        let mut decoded = 0u32;
        let mut cursor = 0;
        let result = decoded.decode(&buffer, &mut cursor);
        assert!(result.is_err());
        assert_eq!(cursor, 0);
    }
}
