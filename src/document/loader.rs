use super::Document;
use crate::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Options for reading a document from a text source
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Drop zero-length lines while reading (default: true)
    pub skip_empty_lines: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { skip_empty_lines: true }
    }
}

impl Document {
    /// Read a document line by line.
    ///
    /// `\n` and `\r\n` terminators are stripped and the lines re-joined with
    /// `\n`, without a trailing newline.
    pub fn from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Self> {
        let mut lines = Vec::new();
        let mut skipped = 0usize;

        for line in reader.lines() {
            let line = line?;
            if line.is_empty() && options.skip_empty_lines {
                skipped += 1;
                continue;
            }
            lines.push(line);
        }

        if skipped > 0 {
            log::debug!("skipped {} empty lines while loading", skipped);
        }
        Self::from_lines(lines)
    }

    /// Read a document from a file
    pub fn from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::debug!("loading document from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;

    #[test]
    fn test_load_drops_empty_lines() {
        let input = "aaa\n\nbbb\n\n\nccc\n";
        let doc = Document::from_reader(Cursor::new(input), &LoadOptions::default()).unwrap();
        assert_eq!(doc.as_str(), "aaa\nbbb\nccc");
    }

    #[test]
    fn test_load_keeps_empty_lines_when_asked() {
        let input = "aaa\n\nbbb\n";
        let options = LoadOptions { skip_empty_lines: false };
        let doc = Document::from_reader(Cursor::new(input), &options).unwrap();
        assert_eq!(doc.as_str(), "aaa\n\nbbb");
    }

    #[test]
    fn test_load_strips_crlf() {
        let doc =
            Document::from_reader(Cursor::new("ab\r\ncd\r\n"), &LoadOptions::default()).unwrap();
        assert_eq!(doc.as_str(), "ab\ncd");
    }

    #[test]
    fn test_load_only_empty_lines_is_empty_document() {
        let result = Document::from_reader(Cursor::new("\n\n\n"), &LoadOptions::default());
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Document::from_path("/nonexistent/asciirle/input.txt", &LoadOptions::default());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
