use packet_codec::CodecError;
use thiserror::Error;

/// Session and adapter errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The preflight capacity check failed; no transfer was attempted.
    #[error("session has {available} byte(s) available, {needed} needed")]
    Unavailable { needed: usize, available: usize },

    /// The underlying session refused the transfer.
    #[error("session denied the transfer")]
    Denied,

    /// Surfaced unchanged from the codec.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
