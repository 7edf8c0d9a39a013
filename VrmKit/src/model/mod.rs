//! Loaded VRM model
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! [`VrmModel`] owns everything read from a `.vrm` / `.glb` file. Loading
//! is all-or-nothing; accessor data is resolved on demand and each
//! resolution succeeds or fails on its own.

mod accessor;

pub use accessor::{AccessorData, component_size, effective_stride, resolve_accessor};

use crate::error::{Error, Result};
use crate::formats::glb::{GlbContainer, GlbHeader, load_container};
use crate::formats::gltf::{Document, LoadOptions, parse_document};
use crate::formats::vrm::Vrm;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// A parsed glb container: header, typed document and the BIN payload.
#[derive(Debug, Clone, PartialEq)]
pub struct VrmModel {
    header: GlbHeader,
    document: Document,
    binary: Vec<u8>,
}

impl VrmModel {
    /// Load a model from a file using strict section checks.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid glb.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_options(path, &LoadOptions::default())
    }

    /// Load a model from a file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid glb.
    pub fn load_with_options<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), options)
    }

    /// Parse a model held in memory using strict section checks.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a valid glb.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, &LoadOptions::default())
    }

    /// Parse a model held in memory.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a valid glb.
    pub fn from_bytes_with_options(data: &[u8], options: &LoadOptions) -> Result<Self> {
        Self::from_reader(Cursor::new(data), options)
    }

    /// Parse a model from any seekable byte source.
    ///
    /// # Errors
    /// Returns an error if reading fails, the container framing is invalid or
    /// the JSON document cannot be parsed.
    pub fn from_reader<R: Read + Seek>(source: R, options: &LoadOptions) -> Result<Self> {
        let container = load_container(source)?;
        Self::from_container(container, options)
    }

    /// Parse the JSON chunk of an already framed container.
    ///
    /// # Errors
    /// Returns an error if the JSON document cannot be parsed.
    pub fn from_container(container: GlbContainer, options: &LoadOptions) -> Result<Self> {
        let GlbContainer { header, json, binary } = container;
        let document = parse_document(&json, options)?;

        tracing::info!(
            "loaded model: {} meshes, {} nodes, {} accessors, {} byte binary chunk{}",
            document.meshes.len(),
            document.nodes.len(),
            document.accessors.len(),
            binary.len(),
            if document.vrm().is_some() { ", VRM extension" } else { "" }
        );

        Ok(Self { header, document, binary })
    }

    pub fn header(&self) -> &GlbHeader {
        &self.header
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Payload of the BIN chunk.
    pub fn binary(&self) -> &[u8] {
        &self.binary
    }

    /// The VRM extension, if present.
    pub fn vrm(&self) -> Option<&Vrm> {
        self.document.vrm()
    }

    /// Copy the data of accessor `index` out of the binary chunk.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidAccessorIndex`] if `index` is out of range
    /// - [`Error::AccessorWithoutBufferView`] if the accessor has no buffer view
    /// - [`Error::InvalidBufferViewIndex`] if its buffer view does not exist
    /// - any error from [`resolve_accessor`]
    pub fn resolve_accessor(&self, index: usize) -> Result<Vec<u8>> {
        let accessors = &self.document.accessors;
        let accessor = accessors.get(index).ok_or(Error::InvalidAccessorIndex {
            index,
            count: accessors.len(),
        })?;
        let view_index = accessor
            .buffer_view
            .ok_or(Error::AccessorWithoutBufferView { accessor: index })?;
        let views = &self.document.buffer_views;
        let view = views.get(view_index).ok_or(Error::InvalidBufferViewIndex {
            index: view_index,
            count: views.len(),
        })?;

        resolve_accessor(accessor, view, &self.binary)
    }

    /// Resolve accessor `index` and keep its layout for typed reads.
    ///
    /// # Errors
    /// Same as [`VrmModel::resolve_accessor`].
    pub fn accessor_data(&self, index: usize) -> Result<AccessorData> {
        let bytes = self.resolve_accessor(index)?;
        // resolve_accessor has already validated the index
        let accessor = &self.document.accessors[index];
        Ok(AccessorData::new(accessor, bytes))
    }

    /// Resolve every accessor in parallel, one result per accessor.
    pub fn resolve_all(&self) -> Vec<Result<Vec<u8>>> {
        (0..self.document.accessors.len())
            .into_par_iter()
            .map(|index| self.resolve_accessor(index))
            .collect()
    }
}
