use super::token::{Token, TOKEN_SEPARATOR};
use std::iter::Peekable;
use std::str::Chars;

/// Iterator over the maximal runs of a line
pub struct Runs<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Runs<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let symbol = self.chars.next()?;
        let mut run = 1;
        while self.chars.next_if_eq(&symbol).is_some() {
            run += 1;
        }
        Some(Token::new(run, symbol))
    }
}

/// Split a line into maximal runs of identical characters
pub fn runs(line: &str) -> Runs<'_> {
    Runs { chars: line.chars().peekable() }
}

/// Encode a single line as space-separated `<run><char>` tokens.
///
/// An empty line encodes to an empty string.
pub fn encode_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    encode_line_into(line, &mut out);
    out
}

/// Append the encoding of `line` to `out`, returning the number of tokens written
pub fn encode_line_into(line: &str, out: &mut String) -> usize {
    let mut count = 0;
    for token in runs(line) {
        out.reserve(token.rendered_len() + 1);
        if count > 0 {
            out.push(TOKEN_SEPARATOR);
        }
        out.push_str(&token.run.to_string());
        out.push(token.symbol);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_line("abc"), "1a 1b 1c");
    }

    #[test]
    fn test_encode_trailing_spaces() {
        assert_eq!(encode_line("aaaaabbcdd  "), "5a 2b 1c 2d 2 ");
    }

    #[test]
    fn test_encode_multi_digit_run() {
        assert_eq!(encode_line("ibbbbbbbbbbbbbbbbbbn"), "1i 18b 1n");
    }

    #[test]
    fn test_encode_punctuation() {
        assert_eq!(encode_line("kkeee****````"), "2k 3e 4* 4`");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_line(""), "");
    }

    #[test]
    fn test_encode_digit_payload() {
        assert_eq!(encode_line("111 2"), "31 1  12");
    }

    #[test]
    fn test_case_is_significant() {
        assert_eq!(encode_line("aAa"), "1a 1A 1a");
    }

    #[test]
    fn test_runs_are_maximal() {
        let tokens: Vec<Token> = runs("aabbbaa").collect();
        assert_eq!(
            tokens,
            vec![Token::new(2, 'a'), Token::new(3, 'b'), Token::new(2, 'a')]
        );
        assert!(tokens.windows(2).all(|w| w[0].symbol != w[1].symbol));
    }

    #[test]
    fn test_encoded_length_matches_token_lengths() {
        let line = "ibbbbbbbbbbbbbbbbbbn  éé";
        let tokens: Vec<Token> = runs(line).collect();
        let expected = tokens.iter().map(Token::rendered_len).sum::<usize>() + tokens.len() - 1;
        assert_eq!(encode_line(line).len(), expected);
        assert_eq!(encode_line(line), "1i 18b 1n 2  2é");
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = String::from("xx");
        let count = encode_line_into("zzz", &mut out);
        assert_eq!(count, 1);
        assert_eq!(out, "xx3z");
    }
}
