#![warn(clippy::pedantic)]

pub mod bit_reader;
pub mod byte_reader;
pub mod error;
pub mod header;
pub mod packed;

pub use bit_reader::BitReader;
pub use byte_reader::ByteReader;
pub use error::WireError;
