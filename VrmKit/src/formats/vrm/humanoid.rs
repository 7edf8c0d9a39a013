//! Humanoid bone map

use super::optional_index;
use crate::formats::common::enums::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Standard humanoid bone slot.
    HumanBoneName {
        Hips => "hips",
        LeftUpperLeg => "leftUpperLeg",
        RightUpperLeg => "rightUpperLeg",
        LeftLowerLeg => "leftLowerLeg",
        RightLowerLeg => "rightLowerLeg",
        LeftFoot => "leftFoot",
        RightFoot => "rightFoot",
        Spine => "spine",
        Chest => "chest",
        Neck => "neck",
        Head => "head",
        LeftShoulder => "leftShoulder",
        RightShoulder => "rightShoulder",
        LeftUpperArm => "leftUpperArm",
        RightUpperArm => "rightUpperArm",
        LeftLowerArm => "leftLowerArm",
        RightLowerArm => "rightLowerArm",
        LeftHand => "leftHand",
        RightHand => "rightHand",
        LeftToes => "leftToes",
        RightToes => "rightToes",
        LeftEye => "leftEye",
        RightEye => "rightEye",
        Jaw => "jaw",
        LeftThumbProximal => "leftThumbProximal",
        LeftThumbIntermediate => "leftThumbIntermediate",
        LeftThumbDistal => "leftThumbDistal",
        LeftIndexProximal => "leftIndexProximal",
        LeftIndexIntermediate => "leftIndexIntermediate",
        LeftIndexDistal => "leftIndexDistal",
        LeftMiddleProximal => "leftMiddleProximal",
        LeftMiddleIntermediate => "leftMiddleIntermediate",
        LeftMiddleDistal => "leftMiddleDistal",
        LeftRingProximal => "leftRingProximal",
        LeftRingIntermediate => "leftRingIntermediate",
        LeftRingDistal => "leftRingDistal",
        LeftLittleProximal => "leftLittleProximal",
        LeftLittleIntermediate => "leftLittleIntermediate",
        LeftLittleDistal => "leftLittleDistal",
        RightThumbProximal => "rightThumbProximal",
        RightThumbIntermediate => "rightThumbIntermediate",
        RightThumbDistal => "rightThumbDistal",
        RightIndexProximal => "rightIndexProximal",
        RightIndexIntermediate => "rightIndexIntermediate",
        RightIndexDistal => "rightIndexDistal",
        RightMiddleProximal => "rightMiddleProximal",
        RightMiddleIntermediate => "rightMiddleIntermediate",
        RightMiddleDistal => "rightMiddleDistal",
        RightRingProximal => "rightRingProximal",
        RightRingIntermediate => "rightRingIntermediate",
        RightRingDistal => "rightRingDistal",
        RightLittleProximal => "rightLittleProximal",
        RightLittleIntermediate => "rightLittleIntermediate",
        RightLittleDistal => "rightLittleDistal",
        UpperChest => "upperChest",
    }
}

impl Default for HumanBoneName {
    fn default() -> Self {
        HumanBoneName::Other(String::new())
    }
}

impl HumanBoneName {
    /// Bones every conforming avatar must map.
    pub const REQUIRED: [HumanBoneName; 15] = [
        HumanBoneName::Hips,
        HumanBoneName::Spine,
        HumanBoneName::Chest,
        HumanBoneName::Neck,
        HumanBoneName::Head,
        HumanBoneName::LeftUpperArm,
        HumanBoneName::LeftLowerArm,
        HumanBoneName::LeftHand,
        HumanBoneName::RightUpperArm,
        HumanBoneName::RightLowerArm,
        HumanBoneName::RightHand,
        HumanBoneName::LeftUpperLeg,
        HumanBoneName::LeftLowerLeg,
        HumanBoneName::RightUpperLeg,
        HumanBoneName::RightLowerLeg,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanBone {
    #[serde(default)]
    pub bone: HumanBoneName,
    /// Node bound to this slot.
    #[serde(default, deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub node: Option<usize>,
    #[serde(default)]
    pub use_default_values: bool,
}

/// Bone bindings plus the Mecanim muscle settings exported alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Humanoid {
    pub human_bones: Vec<HumanBone>,
    pub arm_stretch: f32,
    pub leg_stretch: f32,
    pub upper_arm_twist: f32,
    pub lower_arm_twist: f32,
    pub upper_leg_twist: f32,
    pub lower_leg_twist: f32,
    pub feet_spacing: f32,
    #[serde(rename = "hasTranslationDoF")]
    pub has_translation_dof: bool,
}

impl Humanoid {
    /// Node bound to `bone`, if mapped.
    pub fn bone_node(&self, bone: &HumanBoneName) -> Option<usize> {
        self.human_bones.iter().find(|b| &b.bone == bone).and_then(|b| b.node)
    }

    /// Required bones with no node binding.
    pub fn missing_required(&self) -> Vec<HumanBoneName> {
        HumanBoneName::REQUIRED
            .into_iter()
            .filter(|bone| self.bone_node(bone).is_none())
            .collect()
    }
}
