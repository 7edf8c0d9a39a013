//! Spring bone groups and colliders

use super::{Vector3, optional_index};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecondaryAnimation {
    pub bone_groups: Vec<SpringBoneGroup>,
    pub collider_groups: Vec<ColliderGroup>,
}

impl SecondaryAnimation {
    /// Every node driven by a spring bone group, in group order.
    pub fn spring_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.bone_groups.iter().flat_map(|g| g.bones.iter().copied())
    }
}

/// One spring chain configuration.
///
/// `stiffiness` keeps the exporter's spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpringBoneGroup {
    pub comment: String,
    pub stiffiness: f32,
    pub gravity_power: f32,
    pub gravity_dir: Vector3,
    pub drag_force: f32,
    #[serde(deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub center: Option<usize>,
    pub hit_radius: f32,
    /// Root nodes of the spring chains.
    pub bones: Vec<usize>,
    /// Indices into [`SecondaryAnimation::collider_groups`].
    pub collider_groups: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderGroup {
    #[serde(deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub node: Option<usize>,
    pub colliders: Vec<Collider>,
}

/// Sphere collider relative to its group's node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collider {
    pub offset: Vector3,
    pub radius: f32,
}
