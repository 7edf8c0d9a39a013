//! Common readers and helpers shared across the container and document formats

pub(crate) mod enums;
pub mod reader;

pub use reader::{EndianReader, Endianness, fourcc_to_string};
