//! Base58 decoding module for b58io.
//! Input is validated up front (all-or-nothing), then accumulated ten digits
//! per limb pass with a Horner step and serialized big-endian.

use crate::alphabet::value_of;
use crate::encode::Readiness;
use crate::radix::{horner, Limbs, DIGITS_PER_STEP, POW58};
use crate::Error;

/// Whole-buffer base58 decoder.
///
/// Like [`Encoder`](crate::Encoder), either ready or poisoned with an earlier
/// failure that is returned from every call.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: Readiness,
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A decoder that fails every call with `err`.
    #[must_use]
    pub fn poisoned(err: Error) -> Self {
        Self { state: Readiness::Poisoned(err) }
    }

    /// Decodes base58 text to bytes.
    ///
    /// # Errors
    /// - `InvalidCharacter`: a byte outside the alphabet; reports the first one.
    /// - the error this decoder was poisoned with.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        match &self.state {
            Readiness::Poisoned(err) => Err(err.clone()),
            Readiness::Ready => decode_unchecked(input.as_ref()),
        }
    }
}

/// Decodes base58 text to bytes.
///
/// ```
/// assert_eq!(b58io::decode("Cn8eVZg").unwrap(), b"hello");
/// assert!(b58io::decode("0").is_err());
/// ```
///
/// # Errors
/// `InvalidCharacter` at the first byte outside the alphabet.
#[inline]
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    decode_unchecked(input.as_ref())
}

fn decode_unchecked(input: &[u8]) -> Result<Vec<u8>, Error> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    let vals = input
        .iter()
        .enumerate()
        .map(|(position, &symbol)| {
            value_of(symbol).ok_or(Error::InvalidCharacter { symbol, position })
        })
        .collect::<Result<Vec<u8>, _>>()
        .inspect_err(|error| tracing::debug!(%error, "rejected base58 input"))?;

    let zeros = vals.iter().take_while(|&&val| val == 0).count();
    let mut num = Limbs::default();
    for chunk in vals[zeros..].chunks(DIGITS_PER_STEP) {
        num.mul_add(POW58[chunk.len()], horner(chunk));
    }

    let magnitude = num.to_be_bytes();
    let mut output = Vec::with_capacity(zeros + magnitude.len());
    output.resize(zeros, 0);
    output.extend_from_slice(&magnitude);
    tracing::trace!(input_len = input.len(), zeros, output_len = output.len(), "base58 decoded");
    Ok(output)
}
