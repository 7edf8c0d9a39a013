//! Scene graph: nodes, scenes and skins

use super::types::{
    IDENTITY_ROTATION, IDENTITY_SCALE, IDENTITY_TRANSLATION, default_rotation, default_scale,
};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<usize>,
    /// Column-major local transform. Takes precedence over TRS when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[f32; 16]>,
    #[serde(default, skip_serializing_if = "is_identity_translation")]
    pub translation: [f32; 3],
    /// Unit quaternion `[x, y, z, w]`.
    #[serde(default = "default_rotation", skip_serializing_if = "is_identity_rotation")]
    pub rotation: [f32; 4],
    #[serde(default = "default_scale", skip_serializing_if = "is_identity_scale")]
    pub scale: [f32; 3],
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weights: Vec<f32>,
    /// VRM exporter data under `"extra"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<NodeExtra>,
    /// Free-form application data under `"extras"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            name: String::new(),
            camera: None,
            mesh: None,
            skin: None,
            children: Vec::new(),
            matrix: None,
            translation: IDENTITY_TRANSLATION,
            rotation: IDENTITY_ROTATION,
            scale: IDENTITY_SCALE,
            weights: Vec::new(),
            extra: None,
            extras: None,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_identity_translation(v: &[f32; 3]) -> bool {
    *v == IDENTITY_TRANSLATION
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_identity_rotation(v: &[f32; 4]) -> bool {
    *v == IDENTITY_ROTATION
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_identity_scale(v: &[f32; 3]) -> bool {
    *v == IDENTITY_SCALE
}

/// Exporter-specific node data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeExtra {
    #[serde(
        default,
        deserialize_with = "crate::formats::vrm::optional_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub skin_root_bone: Option<usize>,
}

/// Local transform of a node in the form it was authored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeTransform {
    Matrix([f32; 16]),
    Decomposed {
        translation: [f32; 3],
        rotation: [f32; 4],
        scale: [f32; 3],
    },
}

impl Node {
    pub fn transform(&self) -> NodeTransform {
        match self.matrix {
            Some(matrix) => NodeTransform::Matrix(matrix),
            None => NodeTransform::Decomposed {
                translation: self.translation,
                rotation: self.rotation,
                scale: self.scale,
            },
        }
    }

    /// Local transform as a matrix, composing TRS when no matrix was given.
    pub fn local_matrix(&self) -> Mat4 {
        match self.transform() {
            NodeTransform::Matrix(m) => Mat4::from_cols_array(&m),
            NodeTransform::Decomposed { translation, rotation, scale } => {
                Mat4::from_scale_rotation_translation(
                    Vec3::from(scale),
                    Quat::from_array(rotation),
                    Vec3::from(translation),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Root node indices.
    #[serde(default)]
    pub nodes: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Accessor holding one MAT4 per joint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverse_bind_matrices: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skeleton: Option<usize>,
    #[serde(default)]
    pub joints: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_defaults_to_identity() {
        let node: Node = serde_json::from_str(r#"{"name":"Root"}"#).unwrap();
        assert_eq!(node.name, "Root");
        assert_eq!(node.mesh, None);
        assert_eq!(node.skin, None);
        assert_eq!(
            node.transform(),
            NodeTransform::Decomposed {
                translation: [0.0, 0.0, 0.0],
                rotation: [0.0, 0.0, 0.0, 1.0],
                scale: [1.0, 1.0, 1.0],
            }
        );
        assert_eq!(node.local_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_matrix_takes_precedence() {
        let node: Node = serde_json::from_str(
            r#"{"matrix":[1,0,0,0, 0,1,0,0, 0,0,1,0, 5,6,7,1],"translation":[1,2,3]}"#,
        )
        .unwrap();
        assert!(matches!(node.transform(), NodeTransform::Matrix(_)));
        assert_eq!(node.local_matrix().w_axis.truncate(), Vec3::new(5.0, 6.0, 7.0));
    }

    #[test]
    fn test_trs_composition() {
        let node: Node =
            serde_json::from_str(r#"{"translation":[1,2,3],"scale":[2,2,2]}"#).unwrap();
        let m = node.local_matrix();
        assert_eq!(m.transform_point3(Vec3::ONE), Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_skin_root_bone_extra() {
        let node: Node = serde_json::from_str(r#"{"extra":{"skinRootBone":12}}"#).unwrap();
        assert_eq!(node.extra.unwrap().skin_root_bone, Some(12));

        let node: Node =
            serde_json::from_str(r#"{"name":"Body","extra":{"skinRootBone":-1}}"#).unwrap();
        assert_eq!(node.extra, Some(NodeExtra { skin_root_bone: None }));
    }

    #[test]
    fn test_extra_and_extras_side_by_side() {
        let node: Node = serde_json::from_str(
            r#"{"name":"Body","extra":{"skinRootBone":3},"extras":{"tool":"blender"}}"#,
        )
        .unwrap();
        assert_eq!(node.extra.as_ref().unwrap().skin_root_bone, Some(3));
        assert_eq!(node.extras, Some(serde_json::json!({"tool": "blender"})));

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(serde_json::from_str::<Node>(&json).unwrap(), node);
    }

    #[test]
    fn test_identity_trs_not_serialized() {
        let json = serde_json::to_string(&Node::default()).unwrap();
        assert_eq!(json, r#"{"name":""}"#);
    }
}
