//! Bit-count to integer-representation mapping.
//!
//! A [`BitField`](crate::BitField) of `N` bits stores the smallest unsigned
//! integer that holds `N` bits, or `bool` for a single bit. The mapping is
//! a trait on [`Width`] markers so that out-of-range widths (0, or more than
//! 64) fail to compile instead of failing at runtime.

use core::fmt::Debug;

/// Marker for a field width of `N` bits.
pub struct Width<const N: usize>;

/// Maps a bit count to the smallest integer representations that hold it.
///
/// Implemented for widths 1 through 64.
pub trait BitWidth {
    /// Smallest unsigned representation (`bool` for a single bit).
    type Repr: Copy + Default + PartialEq + Debug;

    /// Smallest signed representation.
    type Signed: Copy + Default + PartialEq + Debug;

    /// The representation's bytes as laid out in memory, low address first,
    /// zero padded.
    fn to_native(value: Self::Repr) -> [u8; 8];

    /// Rebuilds the representation from its in-memory byte layout.
    fn from_native(bytes: [u8; 8]) -> Self::Repr;
}

/// Smallest unsigned type holding `N` bits.
pub type SmallestUnsigned<const N: usize> = <Width<N> as BitWidth>::Repr;

/// Smallest signed type holding `N` bits.
pub type SmallestSigned<const N: usize> = <Width<N> as BitWidth>::Signed;

impl BitWidth for Width<1> {
    type Repr = bool;
    type Signed = i8;

    #[inline]
    fn to_native(value: bool) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[0] = value as u8;
        out
    }

    #[inline]
    fn from_native(bytes: [u8; 8]) -> bool {
        bytes[0] & 0x1 != 0
    }
}

macro_rules! impl_bit_width {
    ($repr:ty, $signed:ty: $($n:literal)+) => {$(
        impl BitWidth for Width<$n> {
            type Repr = $repr;
            type Signed = $signed;

            #[inline]
            fn to_native(value: $repr) -> [u8; 8] {
                let mut out = [0u8; 8];
                let bytes = value.to_ne_bytes();
                out[..bytes.len()].copy_from_slice(&bytes);
                out
            }

            #[inline]
            fn from_native(bytes: [u8; 8]) -> $repr {
                let mut raw = [0u8; core::mem::size_of::<$repr>()];
                raw.copy_from_slice(&bytes[..core::mem::size_of::<$repr>()]);
                <$repr>::from_ne_bytes(raw)
            }
        }
    )+};
}

impl_bit_width!(u8, i8: 2 3 4 5 6 7 8);
impl_bit_width!(u16, i16: 9 10 11 12 13 14 15 16);
impl_bit_width!(u32, i32: 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32);
impl_bit_width!(u64, i64:
    33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48
    49 50 51 52 53 54 55 56 57 58 59 60 61 62 63 64);

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn widths_pick_smallest_reprs() {
        assert_eq!(size_of::<SmallestUnsigned<1>>(), 1);
        assert_eq!(size_of::<SmallestUnsigned<8>>(), 1);
        assert_eq!(size_of::<SmallestUnsigned<9>>(), 2);
        assert_eq!(size_of::<SmallestUnsigned<16>>(), 2);
        assert_eq!(size_of::<SmallestUnsigned<17>>(), 4);
        assert_eq!(size_of::<SmallestUnsigned<32>>(), 4);
        assert_eq!(size_of::<SmallestUnsigned<33>>(), 8);
        assert_eq!(size_of::<SmallestUnsigned<64>>(), 8);

        assert_eq!(size_of::<SmallestSigned<1>>(), 1);
        assert_eq!(size_of::<SmallestSigned<12>>(), 2);
        assert_eq!(size_of::<SmallestSigned<40>>(), 8);
    }

    #[test]
    fn native_bytes_round_trip() {
        let bytes = <Width<14> as BitWidth>::to_native(0x1FFF);
        assert_eq!(<Width<14> as BitWidth>::from_native(bytes), 0x1FFF);

        let bytes = <Width<1> as BitWidth>::to_native(true);
        assert_eq!(bytes[0], 1);
        assert!(<Width<1> as BitWidth>::from_native(bytes));

        let bytes = <Width<36> as BitWidth>::to_native(0x321ABCDEF);
        assert_eq!(<Width<36> as BitWidth>::from_native(bytes), 0x321ABCDEF);
    }
}
