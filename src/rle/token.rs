use std::fmt;

/// Delimiter between tokens of one encoded line
pub const TOKEN_SEPARATOR: char = ' ';

/// Delimiter between encoded lines
pub const LINE_SEPARATOR: char = '\n';

/// One maximal run of a character within a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    /// Number of repetitions, always >= 1
    pub run: usize,
    /// The repeated character
    pub symbol: char,
}

impl Token {
    pub fn new(run: usize, symbol: char) -> Self {
        debug_assert!(run >= 1, "run length must be positive");
        Self { run, symbol }
    }

    /// Length in bytes of the rendered `<run><symbol>` form
    pub fn rendered_len(&self) -> usize {
        decimal_digits(self.run) + self.symbol.len_utf8()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.run, self.symbol)
    }
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(Token::new(1, 'a').to_string(), "1a");
        assert_eq!(Token::new(18, 'b').to_string(), "18b");
        assert_eq!(Token::new(2, ' ').to_string(), "2 ");
    }

    #[test]
    fn test_rendered_len_matches_display() {
        for run in [1, 9, 10, 99, 100, 12345] {
            let token = Token::new(run, '#');
            assert_eq!(token.rendered_len(), token.to_string().len());
        }
    }
}
