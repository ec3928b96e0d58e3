#![no_main]

use asciirle::{CodecConfig, DecodeMode, Document, DocumentCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(document) = Document::from_text(text) else {
        return;
    };

    let config = CodecConfig { decode_mode: DecodeMode::Strict, ..Default::default() };
    let mut codec = DocumentCodec::with_config(document, config);
    let encoded = codec.encode();
    assert!(encoded.len() <= text.len(), "encoding grew the document");

    let decoded = codec.decode().expect("encoder output must decode");
    assert_eq!(decoded, text, "Round-trip mismatch");
});
