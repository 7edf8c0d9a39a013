//! First-person view settings and eye look-at curves

use super::{Vector3, optional_index};
use crate::formats::common::enums::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Which camera a mesh is visible from.
    FirstPersonFlag {
        Auto => "Auto",
        Both => "Both",
        ThirdPersonOnly => "ThirdPersonOnly",
        FirstPersonOnly => "FirstPersonOnly",
    }
}

impl Default for FirstPersonFlag {
    fn default() -> Self {
        FirstPersonFlag::Auto
    }
}

string_enum! {
    /// Eye control method.
    LookAtType {
        Bone => "Bone",
        BlendShape => "BlendShape",
    }
}

impl Default for LookAtType {
    fn default() -> Self {
        LookAtType::Bone
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirstPerson {
    #[serde(deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub first_person_bone: Option<usize>,
    pub first_person_bone_offset: Vector3,
    pub mesh_annotations: Vec<MeshAnnotation>,
    pub look_at_type_name: LookAtType,
    pub look_at_horizontal_inner: LookAtCurve,
    pub look_at_horizontal_outer: LookAtCurve,
    pub look_at_vertical_down: LookAtCurve,
    pub look_at_vertical_up: LookAtCurve,
}

impl FirstPerson {
    /// Visibility flag for a mesh, `Auto` when not annotated.
    pub fn mesh_flag(&self, mesh: usize) -> FirstPersonFlag {
        self.mesh_annotations
            .iter()
            .find(|a| a.mesh == Some(mesh))
            .map(|a| a.first_person_flag.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeshAnnotation {
    #[serde(deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
    pub first_person_flag: FirstPersonFlag,
}

/// Input/output range mapping for one look-at direction.
///
/// `curve` holds Unity keyframes flattened as `time, value, inTangent, outTangent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookAtCurve {
    pub curve: Vec<f32>,
    pub x_range: f32,
    pub y_range: f32,
}

impl LookAtCurve {
    /// Map an input angle to an output value, linear over `x_range`.
    pub fn map_linear(&self, degrees: f32) -> f32 {
        if self.x_range <= 0.0 {
            return 0.0;
        }
        (degrees.abs().min(self.x_range) / self.x_range) * self.y_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_person_parse() {
        let fp: FirstPerson = serde_json::from_str(
            r#"{"firstPersonBone":12,"firstPersonBoneOffset":{"x":0,"y":0.06,"z":0},
                "meshAnnotations":[{"mesh":0,"firstPersonFlag":"ThirdPersonOnly"},{"mesh":1,"firstPersonFlag":"Both"}],
                "lookAtTypeName":"BlendShape",
                "lookAtHorizontalOuter":{"curve":[0,0,0,1,1,1,1,0],"xRange":90,"yRange":10}}"#,
        )
        .unwrap();

        assert_eq!(fp.first_person_bone, Some(12));
        assert_eq!(fp.first_person_bone_offset.y, 0.06);
        assert_eq!(fp.mesh_flag(0), FirstPersonFlag::ThirdPersonOnly);
        assert_eq!(fp.mesh_flag(1), FirstPersonFlag::Both);
        assert_eq!(fp.mesh_flag(7), FirstPersonFlag::Auto);
        assert_eq!(fp.look_at_type_name, LookAtType::BlendShape);
        assert_eq!(fp.look_at_horizontal_outer.curve.len(), 8);
        assert_eq!(fp.look_at_vertical_up, LookAtCurve::default());
    }

    #[test]
    fn test_curve_mapping() {
        let curve = LookAtCurve { curve: Vec::new(), x_range: 90.0, y_range: 10.0 };
        assert_eq!(curve.map_linear(45.0), 5.0);
        assert_eq!(curve.map_linear(-180.0), 10.0);
        assert_eq!(LookAtCurve::default().map_linear(30.0), 0.0);
    }
}
