//! Streaming base58 encoder over a [`std::io::Write`] sink.
//!
//! Base58 cannot be flushed incrementally: the leading zero count and the
//! magnitude both depend on the whole input. Writes are buffered and the text
//! is produced by one [`EncoderWriter::close`].

use std::io::{self, Write};
use std::sync::Arc;

use crate::{Encoder, Error};

/// Buffers written bytes and writes their base58 text to `W` on close.
///
/// Dropping the writer without closing it discards the buffered bytes.
///
/// ```
/// use std::io::Write;
///
/// let mut writer = b58io::EncoderWriter::new(Vec::new());
/// writer.write_all(b"hel")?;
/// writer.write_all(b"lo")?;
/// assert_eq!(writer.finish()?, b"Cn8eVZg");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct EncoderWriter<W: Write> {
    sink: W,
    encoder: Encoder,
    state: State,
}

#[derive(Debug)]
enum State {
    Open(Vec<u8>),
    /// Outcome of the one and only close.
    Closed(Result<(), Error>),
}

impl<W: Write> EncoderWriter<W> {
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self::with_encoder(sink, Encoder::new())
    }

    /// Uses `encoder` for the final conversion. A poisoned encoder makes
    /// [`close`](Self::close) return its error without touching the sink.
    #[must_use]
    pub fn with_encoder(sink: W, encoder: Encoder) -> Self {
        Self {
            sink,
            encoder,
            state: State::Open(Vec::new()),
        }
    }

    /// Buffers `bytes`, returning how many were taken (all of them).
    ///
    /// # Errors
    /// `StreamClosed` once the writer has been closed.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, Error> {
        match &mut self.state {
            State::Open(buffer) => {
                buffer.extend_from_slice(bytes);
                Ok(bytes.len())
            }
            State::Closed(_) => Err(Error::StreamClosed),
        }
    }

    /// Encodes everything buffered so far and writes it to the sink in one go.
    ///
    /// Only the first call does any work. Later calls return the same outcome,
    /// so a failed close stays failed.
    ///
    /// # Errors
    /// - `SinkWrite`: the sink rejected the encoded text.
    /// - the error the encoder was poisoned with.
    pub fn close(&mut self) -> Result<(), Error> {
        let buffer = match &mut self.state {
            State::Closed(outcome) => return outcome.clone(),
            State::Open(buffer) => std::mem::take(buffer),
        };
        let outcome = self.encoder.encode(&buffer).and_then(|text| {
            self.sink
                .write_all(text.as_bytes())
                .map_err(|err| Error::SinkWrite(Arc::new(err)))?;
            tracing::debug!(input_len = buffer.len(), output_len = text.len(), "base58 stream closed");
            Ok(())
        });
        if let Err(error) = &outcome {
            tracing::debug!(%error, "base58 stream close failed");
        }
        self.state = State::Closed(outcome.clone());
        outcome
    }

    /// Closes the writer and hands back the sink.
    ///
    /// # Errors
    /// As for [`close`](Self::close).
    pub fn finish(mut self) -> Result<W, Error> {
        self.close()?;
        Ok(self.sink)
    }

    /// Whether [`close`](Self::close) has run.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed(_))
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Returns the sink, discarding anything not yet closed.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Write for EncoderWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(buf)?)
    }

    /// Forwards to the sink. Nothing buffered is emitted before close.
    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;

    /// Sink that fails every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_only_on_close() {
        let mut writer = EncoderWriter::new(Vec::new());
        assert_eq!(writer.write_bytes(b"hello").unwrap(), 5);
        writer.flush().unwrap();
        assert!(writer.get_ref().is_empty());
        writer.close().unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"Cn8eVZg");
    }

    #[test]
    fn chunked_matches_whole() {
        let chunks: [&[u8]; 7] = [
            b"Hello, ",
            b"World! ",
            b"This is a ",
            b"test string ",
            b"for streaming ",
            b"base58 encoding ",
            b"benchmark.",
        ];
        let mut writer = EncoderWriter::new(Vec::new());
        for chunk in chunks {
            writer.write_all(chunk).unwrap();
        }
        let out = writer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), encode(&chunks.concat()));
    }

    #[test]
    fn leading_zeros_split_across_writes() {
        let mut writer = EncoderWriter::new(Vec::new());
        writer.write_all(&[0]).unwrap();
        writer.write_all(&[0, 1]).unwrap();
        assert_eq!(writer.finish().unwrap(), b"112");
    }

    #[test]
    fn empty_stream_writes_nothing() {
        let writer = EncoderWriter::new(Vec::new());
        assert!(writer.finish().unwrap().is_empty());
    }

    #[test]
    fn write_after_close_fails() {
        let mut writer = EncoderWriter::new(Vec::new());
        writer.write_all(b"abc").unwrap();
        writer.close().unwrap();
        assert!(writer.is_closed());
        assert!(matches!(writer.write_bytes(b"more"), Err(Error::StreamClosed)));

        let err = writer.write(b"more").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(writer.get_ref().as_slice(), encode(b"abc").as_bytes());
    }

    #[test]
    fn close_is_idempotent() {
        let mut writer = EncoderWriter::new(Vec::new());
        writer.write_all(&[0xFF; 8]).unwrap();
        writer.close().unwrap();
        writer.close().unwrap();
        assert_eq!(writer.into_inner(), b"jpXCZedGfVQ");
    }

    #[test]
    fn sink_failure_is_sticky() {
        let mut writer = EncoderWriter::new(BrokenSink);
        writer.write_all(b"data").unwrap();
        let first = writer.close().unwrap_err();
        assert!(matches!(&first, Error::SinkWrite(err) if err.kind() == io::ErrorKind::BrokenPipe));
        assert!(matches!(writer.close(), Err(Error::SinkWrite(_))));
        assert!(matches!(writer.write_bytes(b"x"), Err(Error::StreamClosed)));
    }

    #[test]
    fn poisoned_encoder_skips_sink() {
        let poison = Error::preexisting(io::Error::new(io::ErrorKind::OutOfMemory, "too large"));
        let mut writer = EncoderWriter::with_encoder(Vec::new(), Encoder::poisoned(poison));
        writer.write_all(b"Hello, World!").unwrap();
        assert!(matches!(writer.close(), Err(Error::Preexisting(_))));
        assert!(writer.get_ref().is_empty());
    }
}
