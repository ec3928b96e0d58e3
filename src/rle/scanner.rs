//! Splits an encoded token stream into raw tokens.
//!
//! A space is both the token separator and a legal payload character, so a
//! space directly after a token's text is ambiguous. The scanner resolves it
//! with one byte of lookahead:
//!
//! - followed by another space, a newline or the end of the text, the space
//!   is the payload (a trailing run of spaces, or a space run followed by the
//!   real separator);
//! - followed by anything else, it is the separator and the payload is the
//!   character just before it.
//!
//! A well-formed stream never has a separator followed by a space, a newline
//! or the end of the text, so the rule is exact for everything the encoder
//! produces.

use super::token::{LINE_SEPARATOR, TOKEN_SEPARATOR};
use memchr::memchr2;

/// A token as it appears in the encoded text, before its run length is parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannedToken<'a> {
    /// Byte offset of the token in the encoded text
    pub offset: usize,
    /// Text preceding the payload (the run length in a well-formed stream)
    pub digits: &'a str,
    /// The repeated character; None for an empty line or an empty span
    pub payload: Option<char>,
    /// A line break follows this token
    pub ends_line: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Looking for the end of the token starting at `start`
    InToken { start: usize },
    /// Token text spans `start..space`; deciding what the space at `space` is
    AtDelimiter { start: usize, space: usize },
    Done,
}

/// Two-state scanner over an encoded token stream
pub struct TokenScanner<'a> {
    text: &'a str,
    state: ScanState,
}

impl<'a> TokenScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, state: ScanState::InToken { start: 0 } }
    }

    /// Token whose payload is the last character of `start..end`
    fn split(&self, start: usize, end: usize, ends_line: bool) -> ScannedToken<'a> {
        let span = &self.text[start..end];
        match span.chars().next_back() {
            Some(payload) => ScannedToken {
                offset: start,
                digits: &span[..span.len() - payload.len_utf8()],
                payload: Some(payload),
                ends_line,
            },
            None => ScannedToken { offset: start, digits: span, payload: None, ends_line },
        }
    }

    /// Token whose payload is the space at `space`
    fn space_payload(&self, start: usize, space: usize, ends_line: bool) -> ScannedToken<'a> {
        ScannedToken {
            offset: start,
            digits: &self.text[start..space],
            payload: Some(TOKEN_SEPARATOR),
            ends_line,
        }
    }
}

impl<'a> Iterator for TokenScanner<'a> {
    type Item = ScannedToken<'a>;

    fn next(&mut self) -> Option<ScannedToken<'a>> {
        let text = self.text;
        let bytes = text.as_bytes();
        loop {
            match self.state {
                ScanState::Done => return None,
                ScanState::InToken { start } => {
                    let boundary =
                        memchr2(TOKEN_SEPARATOR as u8, LINE_SEPARATOR as u8, &bytes[start..])
                            .map(|i| start + i);
                    match boundary {
                        None => {
                            self.state = ScanState::Done;
                            if start == bytes.len() {
                                return None;
                            }
                            return Some(self.split(start, bytes.len(), false));
                        }
                        Some(end) if bytes[end] == LINE_SEPARATOR as u8 => {
                            self.state = ScanState::InToken { start: end + 1 };
                            return Some(self.split(start, end, true));
                        }
                        Some(space) => self.state = ScanState::AtDelimiter { start, space },
                    }
                }
                ScanState::AtDelimiter { start, space } => {
                    let token = match bytes.get(space + 1).copied() {
                        None => {
                            self.state = ScanState::Done;
                            self.space_payload(start, space, false)
                        }
                        Some(b' ') => {
                            self.state = ScanState::InToken { start: space + 2 };
                            self.space_payload(start, space, false)
                        }
                        Some(b'\n') => {
                            self.state = ScanState::InToken { start: space + 2 };
                            self.space_payload(start, space, true)
                        }
                        Some(_) => {
                            self.state = ScanState::InToken { start: space + 1 };
                            self.split(start, space, false)
                        }
                    };
                    return Some(token);
                }
            }
        }
    }
}
