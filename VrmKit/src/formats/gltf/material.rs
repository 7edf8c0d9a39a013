//! Images, samplers, textures and PBR materials

use super::types::{
    AlphaMode, MagFilter, MinFilter, WrappingMode, default_alpha_cutoff, default_color, default_one,
    is_false, is_zero,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Buffer view holding the encoded image (glb embedded images).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_view: Option<usize>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mime_type: String,
    /// Name as written by VRM exporters under `"extra"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<NameExtra>,
}

impl Image {
    /// `name`, falling back to `extra.name`.
    pub fn display_name(&self) -> &str {
        match &self.extra {
            Some(extra) if self.name.is_empty() => &extra.name,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameExtra {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sampler {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mag_filter: Option<MagFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_filter: Option<MinFilter>,
    #[serde(default)]
    pub wrap_s: WrappingMode,
    #[serde(default)]
    pub wrap_t: WrappingMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampler: Option<usize>,
    /// Image index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,
}

/// Reference from a material to a texture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureInfo {
    #[serde(default)]
    pub index: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub tex_coord: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    #[serde(default = "default_color")]
    pub base_color_factor: [f32; 4],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color_texture: Option<TextureInfo>,
    #[serde(default = "default_one")]
    pub metallic_factor: f32,
    #[serde(default = "default_one")]
    pub roughness_factor: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metallic_roughness_texture: Option<TextureInfo>,
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        Self {
            base_color_factor: default_color(),
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pbr_metallic_roughness: PbrMetallicRoughness,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_texture: Option<TextureInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occlusion_texture: Option<TextureInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive_texture: Option<TextureInfo>,
    #[serde(default)]
    pub emissive_factor: [f32; 3],
    #[serde(default)]
    pub alpha_mode: AlphaMode,
    #[serde(default = "default_alpha_cutoff")]
    pub alpha_cutoff: f32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            pbr_metallic_roughness: PbrMetallicRoughness::default(),
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: [0.0; 3],
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: default_alpha_cutoff(),
            double_sided: false,
        }
    }
}

impl Material {
    /// Texture index of the base color map, if any.
    pub fn base_color_texture(&self) -> Option<usize> {
        self.pbr_metallic_roughness.base_color_texture.map(|t| t.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_defaults() {
        let material: Material = serde_json::from_str(r#"{"name":"Body"}"#).unwrap();
        assert_eq!(material, Material { name: "Body".to_string(), ..Material::default() });
        assert_eq!(material.pbr_metallic_roughness.metallic_factor, 1.0);
        assert_eq!(material.base_color_texture(), None);
    }

    #[test]
    fn test_material_texture_reference() {
        let material: Material = serde_json::from_str(
            r#"{"pbrMetallicRoughness":{"baseColorTexture":{"index":2,"texCoord":0},"metallicFactor":0,"roughnessFactor":0.9}}"#,
        )
        .unwrap();
        assert_eq!(material.base_color_texture(), Some(2));
        assert_eq!(material.pbr_metallic_roughness.metallic_factor, 0.0);
        assert_eq!(material.pbr_metallic_roughness.roughness_factor, 0.9);
    }

    #[test]
    fn test_sampler_and_image() {
        let sampler: Sampler = serde_json::from_str(r#"{"magFilter":9729,"minFilter":9999}"#).unwrap();
        assert_eq!(sampler.mag_filter, Some(MagFilter::Linear));
        assert_eq!(sampler.min_filter, Some(MinFilter::Other(9999)));
        assert_eq!(sampler.wrap_s, WrappingMode::Repeat);

        let image: Image = serde_json::from_str(
            r#"{"extra":{"name":"Face"},"bufferView":3,"mimeType":"image/png"}"#,
        )
        .unwrap();
        assert_eq!(image.display_name(), "Face");
        assert_eq!(image.buffer_view, Some(3));
    }
}
