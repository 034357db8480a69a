use packet_codec::{Bit, BitField, ConstBitField, Decode, Encode, Footprint, Packet};

// A telemetry frame: a fixed 4-bit version tag, a 12-bit sensor id, a
// byte-aligned reading, two status bits, a 6-bit sequence counter, and a
// signed temperature offset.
type TelemetryFrame = Packet<(
    ConstBitField<4>,
    BitField<12>,
    u16,
    Bit,
    Bit,
    BitField<6>,
    i8,
)>;

fn main() {
    println!("frame footprint: {} bits ({} bytes)\n", TelemetryFrame::SIZE_BITS, TelemetryFrame::SIZE_BYTES);

    let frame = TelemetryFrame::new((
        ConstBitField::new(0x2),
        BitField::new(0x3A7),
        51_234,
        Bit::new(true),
        Bit::new(false),
        BitField::new(17),
        -12,
    ));

    let mut buffer = [0u8; TelemetryFrame::SIZE_BYTES];
    let mut cursor = 0;
    frame.encode(&mut buffer, &mut cursor).expect("frame fits the buffer");

    print!("encoded:");
    for byte in &buffer {
        print!(" {byte:02X}");
    }
    println!(" ({cursor} bits)\n");

    // The receiver constructs its frame with the reserved version it
    // expects; decoding skips those bits rather than overwrite them.
    let mut decoded = TelemetryFrame::new((
        ConstBitField::new(0x2),
        BitField::new(0),
        0,
        Bit::new(false),
        Bit::new(false),
        BitField::new(0),
        0,
    ));
    let mut cursor = 0;
    decoded.decode(&buffer, &mut cursor).expect("buffer holds a full frame");

    println!("version:   {:#X} (fixed at construction)", decoded.fields.0.value());
    println!("sensor id: {:#X}", decoded.fields.1.value);
    println!("reading:   {}", decoded.fields.2);
    println!("status:    active={} fault={}", decoded.fields.3.value, decoded.fields.4.value);
    println!("sequence:  {}", decoded.fields.5.value);
    println!("temp_off:  {}", decoded.fields.6);
}
