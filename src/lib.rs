//! Base58 codec with whole-buffer and `std::io` streaming interfaces.
//!
//! [`encode`]/[`decode`] (and the [`Encoder`]/[`Decoder`] instances behind
//! them) convert complete buffers. [`EncoderWriter`] and [`DecoderReader`]
//! wrap a sink or source; since base58 is a whole-number conversion, both
//! buffer the full input and convert it in one step.

/// The Bitcoin base58 alphabet. Index = digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub mod alphabet;
mod decode;
mod encode;
mod error;
mod radix;
mod read;
mod write;

pub use decode::{decode, Decoder};
pub use encode::{encode, Encoder};
pub use error::Error;
pub use read::DecoderReader;
pub use write::EncoderWriter;
