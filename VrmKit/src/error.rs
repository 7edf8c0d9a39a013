//! Error types for `VrmKit`

use thiserror::Error;

/// Broad category of an [`Error`].
///
/// Loading is all-or-nothing for every kind except [`ErrorKind::Bounds`],
/// which is only raised when a caller resolves a specific accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The container or a constrained field does not follow the format.
    Format,
    /// The JSON chunk is malformed or misses a required section.
    Parse,
    /// An accessor or buffer view points outside the binary payload.
    Bounds,
    /// The byte source ran out in the middle of a read.
    EndOfData,
    /// The underlying byte source failed.
    Io,
}

/// The error type for `VrmKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected end of data while reading.
    #[error("unexpected end of data")]
    UnexpectedEof,

    // ==================== Container Errors ====================
    /// The file is not a glb container (missing glTF magic).
    #[error("not a valid glb container: expected magic 0x46546C67, found {found:#010X}")]
    InvalidGlbMagic {
        /// The magic value read from the header.
        found: u32,
    },

    /// A chunk appeared with a type tag other than the one required at its position.
    #[error("unexpected chunk type at chunk #{index}: expected {expected}, found {found}")]
    UnexpectedChunkType {
        /// Position of the chunk in the container (0 = first chunk).
        index: usize,
        /// Rendered tag that was required.
        expected: String,
        /// Rendered tag that was found.
        found: String,
    },

    // ==================== Document Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON chunk is not valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The JSON root is not an object.
    #[error("invalid document: {message}")]
    InvalidDocument {
        /// Description of what is invalid.
        message: String,
    },

    /// The JSON root object has no members at all.
    #[error("JSON document does not contain a value")]
    EmptyDocument,

    /// A top-level section required in strict mode is absent.
    #[error("missing required section '{section}'")]
    MissingSection {
        /// The JSON key of the missing section.
        section: &'static str,
    },

    /// An accessor carries an element type tag outside SCALAR/VECn/MATn.
    #[error("accessor #{accessor} has unknown element type '{value}'")]
    UnknownElementType {
        /// Index of the offending accessor.
        accessor: usize,
        /// The tag as found in the JSON.
        value: String,
    },

    // ==================== Accessor Resolution Errors ====================
    /// The requested accessor index does not exist.
    #[error("invalid accessor index: {index} (document has {count})")]
    InvalidAccessorIndex {
        /// Requested index.
        index: usize,
        /// Number of accessors in the document.
        count: usize,
    },

    /// The accessor points at a buffer view index that does not exist.
    #[error("invalid buffer view index: {index} (document has {count})")]
    InvalidBufferViewIndex {
        /// Requested index.
        index: usize,
        /// Number of buffer views in the document.
        count: usize,
    },

    /// The accessor has no buffer view, so there is no data to extract.
    #[error("accessor #{accessor} has no buffer view")]
    AccessorWithoutBufferView {
        /// Index of the accessor.
        accessor: usize,
    },

    /// The component type has no known byte width.
    #[error("unsupported component type: {component_type}")]
    UnsupportedComponentType {
        /// Raw component type value.
        component_type: u32,
    },

    /// An explicit byte stride is not a multiple of the component width.
    #[error("invalid byte stride {stride}: not a multiple of component size {component_size}")]
    InvalidByteStride {
        /// Stride declared by the buffer view.
        stride: usize,
        /// Byte width of one component.
        component_size: usize,
    },

    /// A buffer view range extends past the binary payload.
    #[error("buffer view range {offset}..{end} exceeds binary payload of {len} bytes")]
    BufferViewOutOfBounds {
        /// Start of the view in the payload.
        offset: usize,
        /// End of the view in the payload.
        end: usize,
        /// Length of the binary payload.
        len: usize,
    },

    /// Accessor data extends past its buffer view.
    #[error("accessor range {offset}..{end} exceeds buffer view of {view_len} bytes")]
    AccessorOutOfBounds {
        /// Start of the accessor data relative to the view.
        offset: usize,
        /// End of the accessor data relative to the view.
        end: usize,
        /// Length of the buffer view.
        view_len: usize,
    },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::UnexpectedEof => ErrorKind::EndOfData,
            Error::InvalidGlbMagic { .. }
            | Error::UnexpectedChunkType { .. }
            | Error::UnknownElementType { .. } => ErrorKind::Format,
            Error::Json(_)
            | Error::Utf8(_)
            | Error::InvalidDocument { .. }
            | Error::EmptyDocument
            | Error::MissingSection { .. } => ErrorKind::Parse,
            Error::InvalidAccessorIndex { .. }
            | Error::InvalidBufferViewIndex { .. }
            | Error::AccessorWithoutBufferView { .. }
            | Error::UnsupportedComponentType { .. }
            | Error::InvalidByteStride { .. }
            | Error::BufferViewOutOfBounds { .. }
            | Error::AccessorOutOfBounds { .. } => ErrorKind::Bounds,
        }
    }
}

/// A specialized Result type for `VrmKit` operations.
pub type Result<T> = std::result::Result<T, Error>;
