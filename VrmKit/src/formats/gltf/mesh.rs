//! Meshes, primitives and morph targets

use super::types::PrimitiveMode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
    /// Default morph weights.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weights: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<MeshExtras>,
}

impl Mesh {
    /// Morph target names from `extras.targetNames`, or the per-target names
    /// of the first primitive that has any.
    pub fn target_names(&self) -> Vec<&str> {
        if let Some(extras) = self.extras.as_ref().filter(|e| !e.target_names.is_empty()) {
            return extras.target_names.iter().map(String::as_str).collect();
        }

        self.primitives
            .iter()
            .find(|p| p.targets.iter().any(|t| t.name().is_some()))
            .map(|p| p.targets.iter().map(|t| t.name().unwrap_or("")).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshExtras {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_names: Vec<String>,
}

/// Geometry drawn with a single material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive {
    /// Attribute semantic (`POSITION`, `NORMAL`, `TEXCOORD_0`, ...) to accessor index.
    #[serde(default)]
    pub attributes: IndexMap<String, usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indices: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<usize>,
    #[serde(default)]
    pub mode: PrimitiveMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<MorphTarget>,
}

impl Primitive {
    pub fn attribute(&self, semantic: &str) -> Option<usize> {
        self.attributes.get(semantic).copied()
    }

    pub fn position(&self) -> Option<usize> {
        self.attribute("POSITION")
    }
}

/// One morph target: attribute semantic to accessor index of the deltas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MorphTarget {
    /// Name written by VRM exporters as `"extra": { "name": ... }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<TargetExtra>,
    #[serde(flatten)]
    pub attributes: IndexMap<String, usize>,
}

impl MorphTarget {
    pub fn name(&self) -> Option<&str> {
        self.extra.as_ref().map(|e| e.name.as_str())
    }

    pub fn attribute(&self, semantic: &str) -> Option<usize> {
        self.attributes.get(semantic).copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetExtra {
    #[serde(default)]
    pub name: String,
}
