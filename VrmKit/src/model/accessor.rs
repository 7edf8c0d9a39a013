//! Accessor data extraction from the binary chunk
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! An accessor addresses `count` elements inside a buffer view. Elements are
//! `stride` bytes apart, and each element is `component size * arity` bytes
//! long. Interleaved views (stride larger than the element) are compacted
//! into a tightly packed copy.

use crate::error::{Error, Result};
use crate::formats::gltf::{Accessor, BufferView, ComponentType, ElementType};
use byteorder::{ByteOrder, LittleEndian};

/// Byte width of one component, 0 for unknown types.
pub fn component_size(component_type: ComponentType) -> usize {
    component_type.size()
}

/// Distance in bytes between consecutive elements.
///
/// # Errors
///
/// - [`Error::InvalidByteStride`] if the view declares a stride that is not a
///   multiple of the component width
/// - [`Error::UnsupportedComponentType`] if the element size is unknown and no
///   stride is declared
pub fn effective_stride(accessor: &Accessor, view: &BufferView) -> Result<usize> {
    let size = component_size(accessor.component_type);

    match view.byte_stride {
        None | Some(0) if size == 0 => Err(Error::UnsupportedComponentType {
            component_type: accessor.component_type.as_u32(),
        }),
        None | Some(0) => Ok(accessor.element_size()),
        Some(stride) if size != 0 && stride % size == 0 => Ok(stride),
        Some(stride) => Err(Error::InvalidByteStride { stride, component_size: size }),
    }
}

/// Copy the elements of `accessor` out of `blob` into a tightly packed buffer.
///
/// `view` must be the buffer view the accessor references and `blob` the
/// payload of the BIN chunk. A glb file carries one binary buffer, so views
/// naming any other buffer are still sliced out of `blob` and logged at
/// `warn`.
///
/// # Errors
///
/// - [`Error::BufferViewOutOfBounds`] if the view extends past `blob`
/// - [`Error::AccessorOutOfBounds`] if the accessor start or its last element
///   extends past the view
/// - stride errors from [`effective_stride`]
pub fn resolve_accessor(accessor: &Accessor, view: &BufferView, blob: &[u8]) -> Result<Vec<u8>> {
    if view.buffer != 0 {
        tracing::warn!("buffer view references buffer {}, reading from the BIN chunk", view.buffer);
    }

    let view_start = view.byte_offset;
    let view_end = view.byte_end().unwrap_or(usize::MAX);
    if view_end > blob.len() {
        return Err(Error::BufferViewOutOfBounds {
            offset: view_start,
            end: view_end,
            len: blob.len(),
        });
    }

    let stride = effective_stride(accessor, view)?;
    let tight = accessor.element_size();
    let view_len = view.byte_length;
    let offset = accessor.byte_offset;

    if offset > view_len {
        return Err(Error::AccessorOutOfBounds { offset, end: offset, view_len });
    }
    if accessor.count == 0 {
        return Ok(Vec::new());
    }

    let end = (accessor.count - 1)
        .checked_mul(stride)
        .and_then(|last| last.checked_add(offset))
        .and_then(|last| last.checked_add(tight))
        .unwrap_or(usize::MAX);
    if end > view_len {
        return Err(Error::AccessorOutOfBounds { offset, end, view_len });
    }

    let base = view_start + offset;
    if stride == tight {
        return Ok(blob[base..base + tight * accessor.count].to_vec());
    }

    let mut out = Vec::with_capacity(tight * accessor.count);
    for i in 0..accessor.count {
        let start = base + i * stride;
        out.extend_from_slice(&blob[start..start + tight]);
    }
    Ok(out)
}

/// Tightly packed accessor bytes together with their layout.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorData {
    pub component_type: ComponentType,
    pub element_type: ElementType,
    pub normalized: bool,
    pub count: usize,
    pub bytes: Vec<u8>,
}

impl AccessorData {
    pub fn new(accessor: &Accessor, bytes: Vec<u8>) -> Self {
        Self {
            component_type: accessor.component_type,
            element_type: accessor.element_type,
            normalized: accessor.normalized,
            count: accessor.count,
            bytes,
        }
    }

    pub fn element_size(&self) -> usize {
        self.component_type.size() * self.element_type.arity()
    }

    /// Raw bytes of each element.
    pub fn elements(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(self.element_size().max(1))
    }

    /// Components as `f32`.
    ///
    /// Float data is read as-is; normalized unsigned integers are mapped to
    /// `0.0..=1.0` and normalized signed integers to `-1.0..=1.0`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedComponentType`] for non-normalized integer
    /// or double data.
    pub fn read_f32(&self) -> Result<Vec<f32>> {
        let data = &self.bytes;
        let values = match self.component_type {
            ComponentType::Float => {
                let mut out = vec![0.0; data.len() / 4];
                LittleEndian::read_f32_into(&data[..out.len() * 4], &mut out);
                out
            }
            ComponentType::UnsignedByte if self.normalized => {
                data.iter().map(|&b| f32::from(b) / 255.0).collect()
            }
            ComponentType::Byte if self.normalized => data
                .iter()
                .map(|&b| (f32::from(i8::from_le_bytes([b])) / 127.0).max(-1.0))
                .collect(),
            ComponentType::UnsignedShort if self.normalized => data
                .chunks_exact(2)
                .map(|c| f32::from(LittleEndian::read_u16(c)) / 65535.0)
                .collect(),
            ComponentType::Short if self.normalized => data
                .chunks_exact(2)
                .map(|c| (f32::from(LittleEndian::read_i16(c)) / 32767.0).max(-1.0))
                .collect(),
            other => {
                return Err(Error::UnsupportedComponentType { component_type: other.as_u32() });
            }
        };
        Ok(values)
    }

    /// Components widened to `u32`, as used for index buffers and joints.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedComponentType`] unless the data is
    /// `UNSIGNED_BYTE`, `UNSIGNED_SHORT` or `UNSIGNED_INT`.
    pub fn read_u32(&self) -> Result<Vec<u32>> {
        let data = &self.bytes;
        let values = match self.component_type {
            ComponentType::UnsignedByte => data.iter().map(|&b| u32::from(b)).collect(),
            ComponentType::UnsignedShort => data
                .chunks_exact(2)
                .map(|c| u32::from(LittleEndian::read_u16(c)))
                .collect(),
            ComponentType::UnsignedInt => {
                let mut out = vec![0; data.len() / 4];
                LittleEndian::read_u32_into(&data[..out.len() * 4], &mut out);
                out
            }
            other => {
                return Err(Error::UnsupportedComponentType { component_type: other.as_u32() });
            }
        };
        Ok(values)
    }

    /// Float data grouped into 3-component vectors.
    ///
    /// # Errors
    /// Same as [`AccessorData::read_f32`].
    pub fn read_vec3(&self) -> Result<Vec<glam::Vec3>> {
        Ok(self
            .read_f32()?
            .chunks_exact(3)
            .map(glam::Vec3::from_slice)
            .collect())
    }
}
