//! glTF enumerations and serde default helpers

use crate::formats::common::enums::{gl_enum, string_enum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

gl_enum! {
    /// Data type of one accessor component.
    ComponentType {
        Byte = 5120 => "GL_BYTE",
        UnsignedByte = 5121 => "GL_UNSIGNED_BYTE",
        Short = 5122 => "GL_SHORT",
        UnsignedShort = 5123 => "GL_UNSIGNED_SHORT",
        Int = 5124 => "GL_INT",
        UnsignedInt = 5125 => "GL_UNSIGNED_INT",
        Float = 5126 => "GL_FLOAT",
        TwoBytes = 5127 => "GL_2_BYTES",
        ThreeBytes = 5128 => "GL_3_BYTES",
        FourBytes = 5129 => "GL_4_BYTES",
        Double = 5130 => "GL_DOUBLE",
    }
}

impl ComponentType {
    /// Byte width of one component, 0 for unknown types.
    pub fn size(self) -> usize {
        match self {
            ComponentType::Byte | ComponentType::UnsignedByte => 1,
            ComponentType::Short | ComponentType::UnsignedShort | ComponentType::TwoBytes => 2,
            ComponentType::ThreeBytes => 3,
            ComponentType::Int
            | ComponentType::UnsignedInt
            | ComponentType::Float
            | ComponentType::FourBytes => 4,
            ComponentType::Double => 8,
            ComponentType::Other(_) => 0,
        }
    }
}

impl Default for ComponentType {
    fn default() -> Self {
        ComponentType::Other(0)
    }
}

gl_enum! {
    /// Topology of a mesh primitive.
    PrimitiveMode {
        Points = 0 => "GL_POINTS",
        Lines = 1 => "GL_LINES",
        LineLoop = 2 => "GL_LINE_LOOP",
        LineStrip = 3 => "GL_LINE_STRIP",
        Triangles = 4 => "GL_TRIANGLES",
        TriangleStrip = 5 => "GL_TRIANGLE_STRIP",
        TriangleFan = 6 => "GL_TRIANGLE_FAN",
    }
}

impl Default for PrimitiveMode {
    fn default() -> Self {
        PrimitiveMode::Triangles
    }
}

gl_enum! {
    /// GPU binding hint of a buffer view.
    BufferTarget {
        ArrayBuffer = 34962 => "GL_ARRAY_BUFFER",
        ElementArrayBuffer = 34963 => "GL_ELEMENT_ARRAY_BUFFER",
    }
}

gl_enum! {
    MagFilter {
        Nearest = 9728 => "GL_NEAREST",
        Linear = 9729 => "GL_LINEAR",
    }
}

gl_enum! {
    MinFilter {
        Nearest = 9728 => "GL_NEAREST",
        Linear = 9729 => "GL_LINEAR",
        NearestMipmapNearest = 9984 => "GL_NEAREST_MIPMAP_NEAREST",
        LinearMipmapNearest = 9985 => "GL_LINEAR_MIPMAP_NEAREST",
        NearestMipmapLinear = 9986 => "GL_NEAREST_MIPMAP_LINEAR",
        LinearMipmapLinear = 9987 => "GL_LINEAR_MIPMAP_LINEAR",
    }
}

gl_enum! {
    WrappingMode {
        ClampToEdge = 33071 => "GL_CLAMP_TO_EDGE",
        MirroredRepeat = 33648 => "GL_MIRRORED_REPEAT",
        Repeat = 10497 => "GL_REPEAT",
    }
}

impl Default for WrappingMode {
    fn default() -> Self {
        WrappingMode::Repeat
    }
}

string_enum! {
    /// How the alpha channel of a material is interpreted.
    AlphaMode {
        Opaque => "OPAQUE",
        Mask => "MASK",
        Blend => "BLEND",
    }
}

impl Default for AlphaMode {
    fn default() -> Self {
        AlphaMode::Opaque
    }
}

/// Shape of one accessor element.
///
/// Unlike the numeric enums this one is closed: an unknown tag makes the
/// element size undefined, so the document is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "SCALAR")]
    Scalar,
    #[serde(rename = "VEC2")]
    Vec2,
    #[serde(rename = "VEC3")]
    Vec3,
    #[serde(rename = "VEC4")]
    Vec4,
    #[serde(rename = "MAT2")]
    Mat2,
    #[serde(rename = "MAT3")]
    Mat3,
    #[serde(rename = "MAT4")]
    Mat4,
}

impl ElementType {
    /// Number of components in one element.
    pub fn arity(self) -> usize {
        match self {
            ElementType::Scalar => 1,
            ElementType::Vec2 => 2,
            ElementType::Vec3 => 3,
            ElementType::Vec4 | ElementType::Mat2 => 4,
            ElementType::Mat3 => 9,
            ElementType::Mat4 => 16,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ElementType::Scalar => "SCALAR",
            ElementType::Vec2 => "VEC2",
            ElementType::Vec3 => "VEC3",
            ElementType::Vec4 => "VEC4",
            ElementType::Mat2 => "MAT2",
            ElementType::Mat3 => "MAT3",
            ElementType::Mat4 => "MAT4",
        }
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCALAR" => Ok(ElementType::Scalar),
            "VEC2" => Ok(ElementType::Vec2),
            "VEC3" => Ok(ElementType::Vec3),
            "VEC4" => Ok(ElementType::Vec4),
            "MAT2" => Ok(ElementType::Mat2),
            "MAT3" => Ok(ElementType::Mat3),
            "MAT4" => Ok(ElementType::Mat4),
            _ => Err(format!("unknown element type '{s}'")),
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Serde defaults
// ============================================================================

pub(crate) fn default_one() -> f32 {
    1.0
}

pub(crate) fn default_alpha_cutoff() -> f32 {
    0.5
}

pub(crate) fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

pub(crate) const IDENTITY_TRANSLATION: [f32; 3] = [0.0, 0.0, 0.0];
pub(crate) const IDENTITY_ROTATION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub(crate) const IDENTITY_SCALE: [f32; 3] = [1.0, 1.0, 1.0];

pub(crate) fn default_rotation() -> [f32; 4] {
    IDENTITY_ROTATION
}

pub(crate) fn default_scale() -> [f32; 3] {
    IDENTITY_SCALE
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &usize) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_sizes() {
        assert_eq!(ComponentType::from(5120).size(), 1);
        assert_eq!(ComponentType::from(5123).size(), 2);
        assert_eq!(ComponentType::from(5125).size(), 4);
        assert_eq!(ComponentType::from(5126).size(), 4);
        assert_eq!(ComponentType::from(5127).size(), 2);
        assert_eq!(ComponentType::from(5128).size(), 3);
        assert_eq!(ComponentType::from(5129).size(), 4);
        assert_eq!(ComponentType::from(5130).size(), 8);
        assert_eq!(ComponentType::from(5131), ComponentType::Other(5131));
        assert_eq!(ComponentType::Other(5131).size(), 0);
    }

    #[test]
    fn test_element_arity() {
        let arities: Vec<usize> = ["SCALAR", "VEC2", "VEC3", "VEC4", "MAT2", "MAT3", "MAT4"]
            .iter()
            .map(|s| s.parse::<ElementType>().unwrap().arity())
            .collect();
        assert_eq!(arities, vec![1, 2, 3, 4, 4, 9, 16]);
        assert!("vec3".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_unknown_values_survive_serde() {
        let mode: PrimitiveMode = serde_json::from_str("9").unwrap();
        assert_eq!(mode, PrimitiveMode::Other(9));
        assert_eq!(serde_json::to_string(&mode).unwrap(), "9");

        let alpha: AlphaMode = serde_json::from_str("\"DITHER\"").unwrap();
        assert_eq!(alpha, AlphaMode::Other("DITHER".to_string()));
        assert_eq!(serde_json::to_string(&alpha).unwrap(), "\"DITHER\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ComponentType::Float.to_string(), "GL_FLOAT");
        assert_eq!(BufferTarget::from(34963).label(), "GL_ELEMENT_ARRAY_BUFFER");
        assert_eq!(MinFilter::Other(1).to_string(), "unknown(1)");
    }
}
