//! glTF 2.0 document model (the JSON chunk of a glb)
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod document;
mod material;
mod mesh;
mod parser;
mod scene;
mod types;
mod writer;

pub use document::{Accessor, Asset, Buffer, BufferView, Document, Extensions};
pub use material::{Image, Material, NameExtra, PbrMetallicRoughness, Sampler, Texture, TextureInfo};
pub use mesh::{Mesh, MeshExtras, MorphTarget, Primitive, TargetExtra};
pub use parser::{LoadOptions, REQUIRED_SECTIONS, parse_document, parse_document_str};
pub use scene::{Node, NodeExtra, NodeTransform, Scene, Skin};
pub use types::{
    AlphaMode, BufferTarget, ComponentType, ElementType, MagFilter, MinFilter, PrimitiveMode,
    WrappingMode,
};
pub use writer::{serialize_document, serialize_document_compact, write_document_json};
