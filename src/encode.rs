//! Base58 encoding module for b58io.
//! Leading zero bytes are counted separately and emitted as '1's; the rest is
//! one big-endian number, divided by 58^10 per pass (see `radix`).
use crate::alphabet::{symbol_of, ZERO_SYMBOL};
use crate::radix::{push_digits, Limbs, POW58, DIGITS_PER_STEP};
use crate::Error;

/// Whole-buffer base58 encoder.
///
/// An encoder is either ready or poisoned with an earlier failure. A poisoned
/// encoder returns that failure from every call and never reads its input.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    state: Readiness,
}

#[derive(Debug, Clone, Default)]
pub(crate) enum Readiness {
    #[default]
    Ready,
    Poisoned(Error),
}

impl Encoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An encoder that fails every call with `err`.
    #[must_use]
    pub fn poisoned(err: Error) -> Self {
        Self { state: Readiness::Poisoned(err) }
    }

    /// Encodes `input` to base58 text.
    ///
    /// # Errors
    /// Only the error this encoder was poisoned with; encoding itself is total.
    pub fn encode(&self, input: &[u8]) -> Result<String, Error> {
        match &self.state {
            Readiness::Poisoned(err) => Err(err.clone()),
            Readiness::Ready => Ok(encode_unchecked(input)),
        }
    }

    /// Upper bound on the encoded length of `input_len` bytes.
    #[must_use]
    pub fn encoded_len_hint(input_len: usize) -> usize {
        // log(256) / log(58) ~= 1.3657
        input_len.saturating_mul(1366) / 1000 + 1
    }
}

/// Encodes `input` to base58 text.
///
/// ```
/// assert_eq!(b58io::encode(b"hello"), "Cn8eVZg");
/// assert_eq!(b58io::encode(&[0, 0, 1]), "112");
/// ```
#[must_use]
#[inline]
pub fn encode(input: &[u8]) -> String {
    encode_unchecked(input)
}

fn encode_unchecked(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let mut num = Limbs::from_be_bytes(&input[zeros..]);

    // Digit values, least significant first.
    let mut digits = Vec::with_capacity(
        Encoder::encoded_len_hint(input.len() - zeros) + DIGITS_PER_STEP,
    );
    while !num.is_zero() {
        push_digits(num.divmod(POW58[DIGITS_PER_STEP]), &mut digits);
    }
    // The final pass pads with zero digits above the most significant one.
    while digits.last() == Some(&0) {
        digits.pop();
    }

    let mut result = String::with_capacity(zeros + digits.len());
    result.extend(std::iter::repeat_n(char::from(ZERO_SYMBOL), zeros));
    result.extend(digits.iter().rev().map(|&val| char::from(symbol_of(val))));
    tracing::trace!(input_len = input.len(), zeros, output_len = result.len(), "base58 encoded");
    result
}
