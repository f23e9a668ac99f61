//! Streaming base58 decoder over a [`std::io::Read`] source.

use std::io::{self, Read};
use std::sync::Arc;

use crate::{Decoder, Error};

/// Serves the decoded bytes of a base58 source through [`Read`].
///
/// Nothing is read at construction. The first read drains the source to end
/// of data and decodes it in one piece; later reads copy out of that buffer.
/// A failed drain or decode is kept and returned from every later read.
///
/// ```
/// use std::io::Read;
///
/// let mut reader = b58io::DecoderReader::new("Cn8eVZg".as_bytes());
/// let mut out = Vec::new();
/// reader.read_to_end(&mut out)?;
/// assert_eq!(out, b"hello");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct DecoderReader<R: Read> {
    source: R,
    decoder: Decoder,
    state: State,
}

#[derive(Debug)]
enum State {
    Pending,
    Decoded { buffer: Vec<u8>, cursor: usize },
    Failed(Error),
}

impl<R: Read> DecoderReader<R> {
    #[must_use]
    pub fn new(source: R) -> Self {
        Self::with_decoder(source, Decoder::new())
    }

    /// Uses `decoder` for the one-time conversion.
    #[must_use]
    pub fn with_decoder(source: R, decoder: Decoder) -> Self {
        Self {
            source,
            decoder,
            state: State::Pending,
        }
    }

    /// Copies decoded bytes into `into`, returning the count. `Ok(0)` with a
    /// non-empty `into` means end of data.
    ///
    /// # Errors
    /// - `SourceRead`: draining the source failed.
    /// - `InvalidCharacter`: the drained text is not base58.
    /// - the error the decoder was poisoned with.
    pub fn read_decoded(&mut self, into: &mut [u8]) -> Result<usize, Error> {
        if matches!(self.state, State::Pending) {
            self.state = match self.drain_and_decode() {
                Ok(buffer) => State::Decoded { buffer, cursor: 0 },
                Err(error) => {
                    tracing::debug!(%error, "base58 stream decode failed");
                    State::Failed(error)
                }
            };
        }
        match &mut self.state {
            State::Pending => unreachable!("pending state is resolved above"),
            State::Failed(err) => Err(err.clone()),
            State::Decoded { buffer, cursor } => {
                let remaining = &buffer[*cursor..];
                let count = remaining.len().min(into.len());
                into[..count].copy_from_slice(&remaining[..count]);
                *cursor += count;
                Ok(count)
            }
        }
    }

    fn drain_and_decode(&mut self) -> Result<Vec<u8>, Error> {
        let mut text = Vec::new();
        self.source
            .read_to_end(&mut text)
            .map_err(|err| Error::SourceRead(Arc::new(err)))?;
        tracing::debug!(input_len = text.len(), "base58 source drained");
        self.decoder.decode(&text)
    }

    /// Bytes decoded but not yet read. `None` before the first read or after
    /// a failure.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        match &self.state {
            State::Decoded { buffer, cursor } => Some(buffer.len() - cursor),
            State::Pending | State::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn get_ref(&self) -> &R {
        &self.source
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: Read> Read for DecoderReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_decoded(buf)?)
    }
}
