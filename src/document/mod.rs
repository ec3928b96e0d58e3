pub mod loader;

pub use loader::LoadOptions;

use crate::error::{Error, Result};
use crate::rle::token::LINE_SEPARATOR;

/// Non-empty text made of `\n`-separated lines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create a document from already joined text
    pub fn from_text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok(Self { text })
    }

    /// Create a document by joining lines with `\n`
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push(LINE_SEPARATOR);
            }
            text.push_str(line.as_ref());
        }
        Self::from_text(text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the joined text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed document
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.text.split(LINE_SEPARATOR)
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
