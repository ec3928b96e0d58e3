use super::policy::FallbackPolicy;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::rle::token::LINE_SEPARATOR;
use crate::rle::{decode_str, encode_line_into};
use crate::{CodecConfig, EncodeStats};
use std::cell::OnceCell;

/// Result of encoding a document: either the token stream or, when that was
/// longer than the original, the original text itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedDocument {
    text: String,
    stats: EncodeStats,
}

impl EncodedDocument {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The original text was stored instead of its encoding
    pub fn used_fallback(&self) -> bool {
        self.stats.used_fallback
    }

    pub fn stats(&self) -> &EncodeStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Clone, Debug)]
enum CodecState {
    Loaded,
    Encoded(EncodedDocument),
}

/// Run-length codec over a whole document.
///
/// The codec starts in the loaded state. The first call to [`encode`]
/// computes and caches the encoded form; [`decode`] is only valid afterwards.
///
/// [`encode`]: DocumentCodec::encode
/// [`decode`]: DocumentCodec::decode
#[derive(Debug)]
pub struct DocumentCodec {
    document: Document,
    config: CodecConfig,
    state: CodecState,
    decoded: OnceCell<String>,
}

impl DocumentCodec {
    pub fn new(document: Document) -> Self {
        Self::with_config(document, CodecConfig::default())
    }

    pub fn with_config(document: Document, config: CodecConfig) -> Self {
        Self { document, config, state: CodecState::Loaded, decoded: OnceCell::new() }
    }

    /// Create a codec over in-memory text; fails if the text is empty
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Document::from_text(text)?))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// The cached encoding, if [`encode`](DocumentCodec::encode) has run
    pub fn encoded(&self) -> Option<&EncodedDocument> {
        match &self.state {
            CodecState::Loaded => None,
            CodecState::Encoded(encoded) => Some(encoded),
        }
    }

    /// Encode the document, or return the cached encoding
    pub fn encode(&mut self) -> &EncodedDocument {
        match self.state {
            CodecState::Encoded(ref encoded) => encoded,
            CodecState::Loaded => {
                self.state = CodecState::Encoded(encode_document(&self.document));
                self.encode()
            }
        }
    }

    /// Reconstruct the original text from the cached encoding
    pub fn decode(&self) -> Result<&str> {
        let encoded = self.encoded().ok_or(Error::NotEncoded)?;
        if encoded.used_fallback() {
            return Ok(encoded.as_str());
        }
        if let Some(decoded) = self.decoded.get() {
            return Ok(decoded.as_str());
        }
        let decoded = decode_str(encoded.as_str(), &self.config)?;
        Ok(self.decoded.get_or_init(|| decoded).as_str())
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

/// Encode line by line, falling back to the original text as soon as the
/// running encoded length (separators included) exceeds the original length
fn encode_document(document: &Document) -> EncodedDocument {
    let original = document.as_str();
    let mut policy = FallbackPolicy::new(original.len());
    let mut text = String::with_capacity(original.len());
    let mut stats = EncodeStats {
        lines: document.line_count(),
        original_len: original.len(),
        ..Default::default()
    };

    for (index, line) in document.lines().enumerate() {
        let start = text.len();
        if index > 0 {
            text.push(LINE_SEPARATOR);
        }
        stats.tokens += encode_line_into(line, &mut text);

        if !policy.charge(text.len() - start) {
            log::debug!(
                "encoding overran original length {} at line {} ({} bytes); keeping original text",
                policy.limit(),
                index,
                policy.spent()
            );
            stats.used_fallback = true;
            stats.aborted_at_line = Some(index);
            stats.encoded_len = original.len();
            return EncodedDocument { text: original.to_string(), stats };
        }
    }

    stats.encoded_len = text.len();
    log::debug!(
        "encoded {} lines into {} tokens: {} -> {} bytes",
        stats.lines,
        stats.tokens,
        stats.original_len,
        stats.encoded_len
    );
    EncodedDocument { text, stats }
}
