//! glb header and chunk structures

use super::{CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, GLB_MAGIC};
use crate::formats::common::fourcc_to_string;
use std::fmt;

/// The 12-byte glb header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    pub magic: u32,
    pub version: u32,
    /// Declared total length of the file, header included.
    pub length: u32,
}

impl GlbHeader {
    pub fn is_valid(&self) -> bool {
        self.magic == GLB_MAGIC
    }
}

impl fmt::Display for GlbHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[magic:{} version:{} length:{}]",
            fourcc_to_string(self.magic),
            self.version,
            self.length
        )
    }
}

/// Chunk type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkType {
    Json,
    Binary,
    Unknown(u32),
}

impl ChunkType {
    pub fn as_u32(self) -> u32 {
        match self {
            ChunkType::Json => CHUNK_TYPE_JSON,
            ChunkType::Binary => CHUNK_TYPE_BIN,
            ChunkType::Unknown(raw) => raw,
        }
    }
}

impl From<u32> for ChunkType {
    fn from(raw: u32) -> Self {
        match raw {
            CHUNK_TYPE_JSON => ChunkType::Json,
            CHUNK_TYPE_BIN => ChunkType::Binary,
            other => ChunkType::Unknown(other),
        }
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkType::Json => f.write_str("JSON"),
            ChunkType::Binary => f.write_str("BIN"),
            ChunkType::Unknown(raw) => write!(f, "'{}' ({raw:#010X})", fourcc_to_string(*raw)),
        }
    }
}

/// One length-prefixed, type-tagged section of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbChunk {
    /// Declared payload length.
    pub length: u32,
    pub chunk_type: ChunkType,
    pub data: Vec<u8>,
}

impl fmt::Display for GlbChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[length:{}, type:{}]", self.length, self.chunk_type)
    }
}

/// Header plus the two mandatory chunk payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbContainer {
    pub header: GlbHeader,
    pub json: Vec<u8>,
    pub binary: Vec<u8>,
}
