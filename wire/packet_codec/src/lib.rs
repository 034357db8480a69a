//! # packet_codec
//!
//! Declarative, allocation-free binary packets for byte-oriented transports.
//!
//! Message schemas are compositions of typed fields: byte-aligned values
//! (bare scalars or [`Field`]), densely packed [`BitField`]s, write-once
//! [`ConstBitField`]s, and nested [`Packet`]s. Layout is resolved entirely at
//! compile time; encoded sizes are associated constants usable in array
//! lengths, and encode/decode dispatch monomorphizes with no per-field tags.
//!
//! ```rust
//! use packet_codec::{Bit, BitField, Decode, Encode, Footprint, Packet};
//!
//! // One status bit, a 3-bit mode, then a byte-aligned counter.
//! type StatusFrame = Packet<(Bit, BitField<3>, u16)>;
//!
//! let frame = StatusFrame::new((Bit::new(true), BitField::new(5), 0xA55A));
//!
//! let mut buffer = [0u8; StatusFrame::SIZE_BYTES];
//! let mut cursor = 0;
//! frame.encode(&mut buffer, &mut cursor).unwrap();
//! assert_eq!(cursor, StatusFrame::SIZE_BITS);
//! assert_eq!(buffer, [0x0B, 0x5A, 0xA5]);
//!
//! let mut decoded = StatusFrame::default();
//! let mut cursor = 0;
//! decoded.decode(&buffer, &mut cursor).unwrap();
//! assert_eq!(decoded, frame);
//! ```
//!
//! Multi-byte values are copied in host byte order with no conversion; the
//! wire format is only portable between machines of the same endianness.
//! Bit-level encodes OR into the destination, so zero the buffer once per
//! packet when exact byte contents matter.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod codec;
pub mod error;
pub mod field;
pub mod footprint;
pub mod packet;
pub mod scalar;
pub mod width;

mod bits;

pub use bit_math::{bits_to_contain, bytes_to_contain, next_boundary_bit_pos};

pub use codec::{Decode, Encode};
pub use error::CodecError;
pub use field::{Bit, BitField, ConstBit, ConstBitField, Field, PacketField};
pub use footprint::{fits_in, Footprint};
pub use packet::{FieldSeq, Packet};
pub use scalar::Scalar;
pub use width::{BitWidth, SmallestSigned, SmallestUnsigned, Width};
