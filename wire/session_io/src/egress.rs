//! Typed write adapter.

use std::marker::PhantomData;
use std::time::{Duration, Instant};

use packet_codec::{Encode, Footprint};

use crate::error::SessionError;
use crate::session::Outbound;

/// Writes whole values of `T` to an [`Outbound`] session.
///
/// Each [`put`](Egress::put) is one transfer: the adapter fails up front if
/// the session cannot take `T::SIZE_BYTES` bytes, encodes into a zeroed
/// scratch buffer, and posts it with whatever remains of the caller's
/// timeout after encoding.
///
/// Egress suits fire-and-forget output: no return data, no failure modes
/// beyond the session refusing the bytes.
#[derive(Debug)]
pub struct Egress<T, S> {
    session: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, S> Egress<T, S>
where
    T: Encode + Footprint,
    S: Outbound,
{
    /// Binds the adapter to an outbound session.
    pub fn new(session: S) -> Self {
        Self {
            session,
            _value: PhantomData,
        }
    }

    /// Releases the underlying session.
    pub fn into_session(self) -> S {
        self.session
    }

    /// Writes one `T` to the session, blocking for at most `timeout`.
    ///
    /// Time spent encoding is deducted from the timeout handed to the
    /// session, clamping at zero.
    pub fn put(&mut self, value: &T, timeout: Duration) -> Result<(), SessionError> {
        let needed = T::SIZE_BYTES;
        let available = self.session.output_bytes_available();
        if available < needed {
            return Err(SessionError::Unavailable { needed, available });
        }

        let started = Instant::now();

        let mut scratch = vec![0u8; needed];
        let mut cursor = 0;
        value.encode(&mut scratch, &mut cursor)?;

        let remaining = timeout.saturating_sub(started.elapsed());
        self.session.post(&scratch, remaining)?;
        Ok(())
    }
}
