//! Blend shape (expression) groups

use super::optional_index;
use crate::formats::common::enums::string_enum;
use serde::{Deserialize, Serialize};

string_enum! {
    /// Well-known expression slot of a group.
    BlendShapePreset {
        Unknown => "unknown",
        Neutral => "neutral",
        A => "a",
        I => "i",
        U => "u",
        E => "e",
        O => "o",
        Blink => "blink",
        Joy => "joy",
        Angry => "angry",
        Sorrow => "sorrow",
        Fun => "fun",
        LookUp => "lookup",
        LookDown => "lookdown",
        LookLeft => "lookleft",
        LookRight => "lookright",
        BlinkL => "blink_l",
        BlinkR => "blink_r",
    }
}

impl Default for BlendShapePreset {
    fn default() -> Self {
        BlendShapePreset::Unknown
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlendShapeMaster {
    pub blend_shape_groups: Vec<BlendShapeGroup>,
}

impl BlendShapeMaster {
    pub fn find_group(&self, name: &str) -> Option<&BlendShapeGroup> {
        self.blend_shape_groups.iter().find(|g| g.name == name)
    }

    pub fn find_preset(&self, preset: &BlendShapePreset) -> Option<&BlendShapeGroup> {
        self.blend_shape_groups.iter().find(|g| &g.preset_name == preset)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlendShapeGroup {
    pub name: String,
    pub preset_name: BlendShapePreset,
    pub binds: Vec<BlendShapeBind>,
    pub material_values: Vec<MaterialValueBind>,
    pub is_binary: bool,
}

/// Morph target driven by a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendShapeBind {
    #[serde(deserialize_with = "optional_index", skip_serializing_if = "Option::is_none")]
    pub mesh: Option<usize>,
    /// Morph target index within the mesh.
    pub index: usize,
    /// Weight in the 0..=100 range.
    pub weight: f32,
}

/// Material property driven by a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialValueBind {
    pub material_name: String,
    pub property_name: String,
    pub target_value: Vec<f32>,
}
