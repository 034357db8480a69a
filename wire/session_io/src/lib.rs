//! # session_io
//!
//! Typed read/write adapters over byte-oriented session transports.
//!
//! A session is anything that can report its available capacity and move a
//! byte span within a timeout: an [`Inbound`] fills spans, an [`Outbound`]
//! drains them. [`Ingress`] and [`Egress`] bind a value type to a session
//! and carry whole values across it with the packet codec, one transfer per
//! value.
//!
//! The adapters do the bookkeeping the transports should not have to:
//! preflighting capacity, zeroing scratch buffers before bit-level encodes,
//! and deducting encoding time from the caller's timeout.

pub mod egress;
pub mod error;
pub mod ingress;
pub mod session;

pub use egress::Egress;
pub use error::SessionError;
pub use ingress::Ingress;
pub use session::{Inbound, Outbound, Transfer};
