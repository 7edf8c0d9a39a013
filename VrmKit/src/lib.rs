//! # VrmKit
//!
//! A pure-Rust reader for VRM avatar files (glb containers carrying the VRM
//! glTF extension).
//!
//! ## Supported Formats
//!
//! - **glb** - Binary glTF container framing (header, JSON chunk, BIN chunk)
//! - **glTF 2.0** - Typed document model with serde (de)serialization
//! - **VRM 0.x** - Humanoid, meta, first-person, blend shape, spring bone and
//!   material property extension data
//!
//! ## Quick Start
//!
//! ```no_run
//! use vrmkit::VrmModel;
//!
//! let model = VrmModel::load("AliciaSolid.vrm")?;
//! if let Some(vrm) = model.vrm() {
//!     println!("{} by {}", vrm.meta.title, vrm.meta.author);
//! }
//!
//! // Copy the positions of the first primitive out of the BIN chunk
//! let mesh = &model.document().meshes[0];
//! if let Some(position) = mesh.primitives[0].position() {
//!     let bytes = model.resolve_accessor(position)?;
//!     println!("{} bytes of position data", bytes.len());
//! }
//! # Ok::<(), vrmkit::Error>(())
//! ```
//!
//! ### Lenient Loading
//!
//! ```no_run
//! use vrmkit::prelude::*;
//!
//! // Accept documents without buffers/bufferViews/accessors/scenes/nodes
//! let model = VrmModel::load_with_options("partial.glb", &LoadOptions::lenient())?;
//! # Ok::<(), vrmkit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `vrmkit` command-line binary

pub mod error;
pub mod formats;
pub mod model;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};
pub use model::VrmModel;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::formats::common::{EndianReader, Endianness};
    pub use crate::formats::glb::{GlbContainer, GlbHeader, load_container, read_glb};
    pub use crate::formats::gltf::{
        Accessor, BufferView, ComponentType, Document, ElementType, LoadOptions, Mesh, Node,
        parse_document,
    };
    pub use crate::formats::vrm::{HumanBoneName, Vrm};
    pub use crate::model::{AccessorData, VrmModel, resolve_accessor};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
