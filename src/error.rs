//! Top-level error type for the b58io library.

use std::io;
use std::sync::Arc;

/// Errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The input contained a byte outside the base58 alphabet.
    #[error("invalid base58 character {} at position {}", escape_symbol(.symbol), .position)]
    InvalidCharacter {
        /// The offending input byte.
        symbol: u8,
        /// Zero-based byte offset of `symbol` in the input.
        position: usize,
    },
    /// A write was attempted after the stream encoder was finalized.
    #[error("write to a finalized base58 stream encoder")]
    StreamClosed,
    /// Writing the encoded text to the sink failed.
    #[error("base58 sink write failed: {0}")]
    SinkWrite(#[source] Arc<io::Error>),
    /// Draining the encoded text from the source failed.
    #[error("base58 source read failed: {0}")]
    SourceRead(#[source] Arc<io::Error>),
    /// A failure attached to a codec instance before it was used.
    #[error("{0}")]
    Preexisting(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn escape_symbol(symbol: &u8) -> std::ascii::EscapeDefault {
    std::ascii::escape_default(*symbol)
}

impl Error {
    /// Wraps an external failure so it can poison a codec instance.
    pub fn preexisting<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Preexisting(Arc::new(err))
    }

    /// The [`io::ErrorKind`] this error surfaces as through `std::io`.
    #[must_use]
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => io::ErrorKind::InvalidData,
            Self::StreamClosed => io::ErrorKind::BrokenPipe,
            Self::SinkWrite(err) | Self::SourceRead(err) => err.kind(),
            Self::Preexisting(_) => io::ErrorKind::Other,
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.io_kind(), err)
    }
}
