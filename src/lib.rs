//! Lossless run-length codec for line-oriented ASCII text.
//!
//! Each line is rendered as space-separated `<run><char>` tokens and lines are
//! joined with `\n`. A document whose encoding would be longer than the
//! original is stored verbatim instead (the fallback).

pub mod codec;
pub mod document;
pub mod error;
pub mod rle;

pub use codec::{DocumentCodec, EncodedDocument, FallbackPolicy};
pub use document::{Document, LoadOptions};
pub use error::{Error, Result};
pub use rle::{decode_str, encode_line, runs, Token, TokenScanner};

/// How strictly the token-stream decoder treats its input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Best-effort: an empty run length decodes to nothing, no grammar checks.
    ///
    /// Malformed streams (stray delimiters, missing digits) produce
    /// unspecified output rather than an error. Only a run length that is
    /// not a decimal number is rejected.
    #[default]
    Lenient,
    /// Reject empty, zero and zero-padded run lengths and tokens without a
    /// payload character
    Strict,
}

/// Configuration for decoding
#[derive(Clone, Debug, Default)]
pub struct CodecConfig {
    /// Token-stream validation mode
    pub decode_mode: DecodeMode,
    /// Upper bound on decoded output in bytes (None = unbounded)
    pub max_decoded_len: Option<usize>,
}

/// Statistics from an encoding pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Lines in the source document
    pub lines: usize,
    /// Tokens emitted before the pass finished or was aborted
    pub tokens: usize,
    pub original_len: usize,
    pub encoded_len: usize,
    /// Original text was kept because encoding did not shrink it
    pub used_fallback: bool,
    /// Zero-based line at which the encoded length overran the original
    pub aborted_at_line: Option<usize>,
}

impl EncodeStats {
    /// Encoded size relative to the original (1.0 when the fallback was used)
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 {
            return 1.0;
        }
        self.encoded_len as f64 / self.original_len as f64
    }
}
