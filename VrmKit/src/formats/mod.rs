//! File format handlers for VRM avatars
//!
//! A `.vrm` file is a glb container whose JSON chunk is a glTF 2.0 document
//! carrying the `VRM` extension.

pub mod common;
pub mod glb;
pub mod gltf;
pub mod vrm;

// Re-export common types for convenience
pub use common::{EndianReader, Endianness};

// Re-export main container and document types
pub use glb::{GlbContainer, GlbHeader, load_container, read_glb};
pub use gltf::{Document, LoadOptions, parse_document};
pub use vrm::Vrm;
