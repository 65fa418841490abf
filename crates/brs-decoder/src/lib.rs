#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod options;
pub mod segment;

pub use decoder::BrsDecoder;
pub use error::DecodeError;
pub use options::ReadOptions;
