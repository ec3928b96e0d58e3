#![no_main]

use asciirle::{decode_str, CodecConfig, DecodeMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(encoded) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding may fail on malformed input - that's OK
    // We're looking for panics, not errors
    for decode_mode in [DecodeMode::Lenient, DecodeMode::Strict] {
        let config = CodecConfig { decode_mode, max_decoded_len: Some(1 << 20) };
        let _ = decode_str(encoded, &config);
    }
});
