use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Construction and state errors
    #[error("Document is empty: nothing to encode")]
    EmptyDocument,

    #[error("Document has not been encoded; call encode() before decode()")]
    NotEncoded,

    // Token stream errors
    #[error("Invalid run length {digits:?} at offset {offset}")]
    InvalidRunLength { offset: usize, digits: String },

    #[error("Malformed token at offset {offset}: {reason}")]
    MalformedToken { offset: usize, reason: &'static str },

    #[error("Run of {run} characters at offset {offset} cannot be allocated")]
    RunTooLarge { offset: usize, run: usize },

    #[error("Decoded output exceeds limit of {limit} bytes")]
    DecodedTooLarge { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
