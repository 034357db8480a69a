// tests/proptest.rs

#![cfg(test)]

use packet_codec::{
    next_boundary_bit_pos, Bit, BitField, Decode, Encode, Footprint, Packet,
};
use proptest::prelude::*;

type Mixed = Packet<(Bit, u8, bool, BitField<14>, u16)>;
type PackedOnly = Packet<(BitField<3>, BitField<5>, BitField<7>, BitField<9>)>;

//
// -----------------------------------------------------------------------------
// Round Trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_mixed_packet_round_trip(
        flag: bool,
        byte: u8,
        toggle: bool,
        packed in 0u16..0x4000,
        word: u16,
    ) {
        let packet = Mixed::new((
            Bit::new(flag),
            byte,
            toggle,
            BitField::new(packed),
            word,
        ));

        let mut buffer = [0u8; Mixed::SIZE_BYTES];
        let mut cursor = 0;
        packet.encode(&mut buffer, &mut cursor).unwrap();
        prop_assert_eq!(cursor, Mixed::SIZE_BITS);

        let mut decoded = Mixed::default();
        let mut cursor = 0;
        decoded.decode(&buffer, &mut cursor).unwrap();
        prop_assert_eq!(cursor, Mixed::SIZE_BITS);
        prop_assert_eq!(decoded, packet);
    }
}

proptest! {
    #[test]
    fn prop_bit_run_round_trip(
        a in 0u8..0x8,
        b in 0u8..0x20,
        c in 0u8..0x80,
        d in 0u16..0x200,
    ) {
        let packet = PackedOnly::new((
            BitField::new(a),
            BitField::new(b),
            BitField::new(c),
            BitField::new(d),
        ));

        let mut buffer = [0u8; PackedOnly::SIZE_BYTES];
        let mut cursor = 0;
        packet.encode(&mut buffer, &mut cursor).unwrap();

        let mut decoded = PackedOnly::default();
        let mut cursor = 0;
        decoded.decode(&buffer, &mut cursor).unwrap();
        prop_assert_eq!(decoded, packet);
    }
}

proptest! {
    #[test]
    fn prop_scalar_round_trip_at_any_cursor(value: u32, start in 0usize..64) {
        let mut buffer = [0u8; 16];
        let mut cursor = start;
        value.encode(&mut buffer, &mut cursor).unwrap();
        prop_assert_eq!(cursor, next_boundary_bit_pos(start) + u32::SIZE_BITS);

        let mut decoded = 0u32;
        let mut cursor = start;
        decoded.decode(&buffer, &mut cursor).unwrap();
        prop_assert_eq!(decoded, value);
    }
}

proptest! {
    #[test]
    fn prop_bit_field_round_trip_at_any_offset(value in 0u16..0x2000, offset in 0usize..16) {
        let mut buffer = [0u8; 5];
        let mut cursor = offset;
        BitField::<13>::new(value).encode(&mut buffer, &mut cursor).unwrap();
        prop_assert_eq!(cursor, offset + 13);

        let mut decoded = BitField::<13>::default();
        let mut cursor = offset;
        decoded.decode(&buffer, &mut cursor).unwrap();
        prop_assert_eq!(decoded.value, value);
    }
}

//
// -----------------------------------------------------------------------------
// Cursor Discipline
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_packet_cursor_lands_on_byte_boundary(start in 0usize..32) {
        let packet = Mixed::new((
            Bit::new(true),
            0xA5,
            false,
            BitField::new(0x1234),
            0x5AA5,
        ));

        let mut buffer = [0u8; Mixed::SIZE_BYTES + 4];
        let mut cursor = start;
        packet.encode(&mut buffer, &mut cursor).unwrap();

        prop_assert_eq!(cursor % 8, 0);
        prop_assert_eq!(cursor, next_boundary_bit_pos(start) + Mixed::SIZE_BITS);
    }
}

proptest! {
    #[test]
    fn prop_failed_encode_never_rewinds_or_advances(start in 0usize..64) {
        let packet = Mixed::new((
            Bit::new(true),
            0xFF,
            true,
            BitField::new(0x3FFF),
            0xFFFF,
        ));

        // One byte short of the packet's footprint at any starting byte.
        let mut buffer = [0u8; Mixed::SIZE_BYTES - 1];
        let mut cursor = start;
        prop_assert!(packet.encode(&mut buffer, &mut cursor).is_err());
        prop_assert_eq!(cursor, start);

        let mut decoded = Mixed::default();
        let mut cursor = start;
        prop_assert!(decoded.decode(&buffer, &mut cursor).is_err());
        prop_assert_eq!(cursor, start);
    }
}

//
// -----------------------------------------------------------------------------
// Packing Density
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_bit_runs_have_no_internal_padding(
        a in 0u8..0x8,
        b in 0u8..0x20,
        c in 0u8..0x80,
        d in 0u16..0x200,
    ) {
        // 3 + 5 + 7 + 9 = 24 bits exactly; the packet claims no spare byte.
        prop_assert_eq!(PackedOnly::SIZE_BITS, 24);
        prop_assert_eq!(PackedOnly::SIZE_BYTES, 3);

        let packet = PackedOnly::new((
            BitField::new(a),
            BitField::new(b),
            BitField::new(c),
            BitField::new(d),
        ));

        // An oversized buffer: bytes past the footprint stay untouched.
        let mut buffer = [0u8; 8];
        let mut cursor = 0;
        packet.encode(&mut buffer, &mut cursor).unwrap();
        prop_assert_eq!(cursor, 24);
        prop_assert!(buffer[3..].iter().all(|&b| b == 0));
    }
}
