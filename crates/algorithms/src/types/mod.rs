//! Output types for the primitive layer

mod digest;

pub use digest::Digest;
