pub mod decoder;
pub mod encoder;
pub mod scanner;
pub mod token;

pub use decoder::decode_str;
pub use encoder::{encode_line, encode_line_into, runs, Runs};
pub use scanner::{ScannedToken, TokenScanner};
pub use token::Token;
