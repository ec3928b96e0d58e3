use super::scanner::{ScannedToken, TokenScanner};
use super::token::LINE_SEPARATOR;
use crate::error::{Error, Result};
use crate::{CodecConfig, DecodeMode};

/// Decode an encoded token stream back into text.
///
/// In [`DecodeMode::Lenient`] malformed input is decoded on a best-effort
/// basis: only a run length that is not a decimal number is an error. The
/// result for other malformed streams is unspecified.
pub fn decode_str(encoded: &str, config: &CodecConfig) -> Result<String> {
    let mut out = String::with_capacity(encoded.len() * 2);

    for token in TokenScanner::new(encoded) {
        let run = run_length(&token, config.decode_mode)?;
        if let Some(payload) = token.payload {
            if run > 0 {
                reserve_run(&mut out, run, payload, config.max_decoded_len, token.offset)?;
                out.extend(std::iter::repeat(payload).take(run));
            }
        }
        if token.ends_line {
            reserve_run(&mut out, 1, LINE_SEPARATOR, config.max_decoded_len, token.offset)?;
            out.push(LINE_SEPARATOR);
        }
    }

    log::debug!("decoded {} encoded bytes into {} bytes", encoded.len(), out.len());
    Ok(out)
}

/// Parse the run length of a scanned token, validating it in strict mode
fn run_length(token: &ScannedToken<'_>, mode: DecodeMode) -> Result<usize> {
    let digits = token.digits;

    if mode == DecodeMode::Strict {
        // An empty line is the only token allowed to carry no payload
        if token.payload.is_none() && !(digits.is_empty() && token.ends_line) {
            return Err(Error::MalformedToken {
                offset: token.offset,
                reason: "token has no payload character",
            });
        }
        if token.payload.is_some() && digits.is_empty() {
            return Err(Error::MalformedToken { offset: token.offset, reason: "missing run length" });
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(Error::MalformedToken {
                offset: token.offset,
                reason: "run length has a leading zero",
            });
        }
    }

    if digits.is_empty() {
        return Ok(0);
    }

    let invalid = || Error::InvalidRunLength { offset: token.offset, digits: digits.to_string() };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let run: usize = digits.parse().map_err(|_| invalid())?;

    if mode == DecodeMode::Strict && run == 0 {
        return Err(Error::MalformedToken { offset: token.offset, reason: "run length is zero" });
    }
    Ok(run)
}

/// Make room for `run` copies of `symbol`, failing instead of aborting when
/// the run exceeds `limit` or cannot be allocated
fn reserve_run(
    out: &mut String,
    run: usize,
    symbol: char,
    limit: Option<usize>,
    offset: usize,
) -> Result<()> {
    let added = run.checked_mul(symbol.len_utf8()).ok_or(Error::RunTooLarge { offset, run })?;
    if let Some(limit) = limit {
        if out.len().checked_add(added).map_or(true, |total| total > limit) {
            return Err(Error::DecodedTooLarge { limit });
        }
    }
    out.try_reserve(added).map_err(|_| Error::RunTooLarge { offset, run })
}
