pub mod document;
pub mod policy;

pub use document::{DocumentCodec, EncodedDocument};
pub use policy::FallbackPolicy;
