//! glb binary container support
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Layout (all words little-endian):
//! - 12 byte header: magic `glTF`, version, total length
//! - chunk 0: length, type `JSON`, UTF-8 JSON text
//! - chunk 1: length, type `BIN\0`, raw buffer data

mod header;
mod reader;

pub use header::{ChunkType, GlbChunk, GlbContainer, GlbHeader};
pub use reader::{expect_chunk, load_container, parse_glb_bytes, read_chunk, read_glb, read_header};

/// `glTF` as a little-endian `u32`.
pub const GLB_MAGIC: u32 = 0x46546C67;

/// Container version written by glTF 2.0 exporters.
pub const GLB_VERSION: u32 = 2;

/// Type tag of the JSON chunk (`JSON`).
pub const CHUNK_TYPE_JSON: u32 = 0x4E4F534A;

/// Type tag of the binary chunk (`BIN\0`).
pub const CHUNK_TYPE_BIN: u32 = 0x004E4942;

/// Size of the fixed header.
pub const HEADER_SIZE: u64 = 12;
