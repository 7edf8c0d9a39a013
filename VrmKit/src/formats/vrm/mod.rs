//! VRM 0.x extension (`extensions.VRM`)
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Avatar metadata layered on top of the glTF document: license meta, the
//! humanoid bone map, first-person rendering rules, blend shape groups,
//! spring bone physics and per-material shader properties.

mod blend_shape;
mod first_person;
mod humanoid;
mod material;
mod secondary;

pub use blend_shape::{BlendShapeBind, BlendShapeGroup, BlendShapeMaster, BlendShapePreset, MaterialValueBind};
pub use first_person::{FirstPerson, FirstPersonFlag, LookAtCurve, LookAtType, MeshAnnotation};
pub use humanoid::{HumanBone, HumanBoneName, Humanoid};
pub use material::MaterialProperty;
pub use secondary::{Collider, ColliderGroup, SecondaryAnimation, SpringBoneGroup};

use serde::{Deserialize, Deserializer, Serialize};

/// Root of the VRM extension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vrm {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub exporter_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub spec_version: String,
    /// Legacy version field written by early exporters.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub humanoid: Humanoid,
    #[serde(default)]
    pub first_person: FirstPerson,
    #[serde(default)]
    pub blend_shape_master: BlendShapeMaster,
    #[serde(default)]
    pub secondary_animation: SecondaryAnimation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub material_properties: Vec<MaterialProperty>,
}

impl Vrm {
    /// Shader properties for the material with the given name.
    pub fn material_property(&self, name: &str) -> Option<&MaterialProperty> {
        self.material_properties.iter().find(|p| p.name == name)
    }
}

/// Avatar information and usage permissions.
///
/// Key names follow the format verbatim, including `Ussage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub contact_information: String,
    #[serde(default)]
    pub reference: String,
    /// Thumbnail texture index.
    #[serde(default, deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub texture: Option<usize>,
    #[serde(default)]
    pub allowed_user_name: String,
    #[serde(default)]
    pub violent_ussage_name: String,
    #[serde(default)]
    pub sexual_ussage_name: String,
    #[serde(default)]
    pub commercial_ussage_name: String,
    #[serde(default)]
    pub other_permission_url: String,
    #[serde(default)]
    pub license_name: String,
    #[serde(default)]
    pub other_license_url: String,
}

/// Plain `{x, y, z}` vector as used throughout the extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector3> for glam::Vec3 {
    fn from(v: Vector3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

/// Index reference that exporters write as `-1` when unset.
pub(crate) fn optional_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| usize::try_from(v).ok()))
}
