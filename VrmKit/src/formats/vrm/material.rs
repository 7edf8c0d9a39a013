//! Per-material shader properties (MToon and friends)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shader parameters keyed by Unity property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialProperty {
    pub name: String,
    pub shader: String,
    pub render_queue: i32,
    pub float_properties: IndexMap<String, f32>,
    pub vector_properties: IndexMap<String, Vec<f32>>,
    /// Property name to texture index.
    pub texture_properties: IndexMap<String, usize>,
    pub keyword_map: IndexMap<String, bool>,
    pub tag_map: IndexMap<String, String>,
}

impl MaterialProperty {
    pub fn float(&self, property: &str) -> Option<f32> {
        self.float_properties.get(property).copied()
    }

    pub fn texture(&self, property: &str) -> Option<usize> {
        self.texture_properties.get(property).copied()
    }

    pub fn is_mtoon(&self) -> bool {
        self.shader == "VRM/MToon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtoon_properties() {
        let prop: MaterialProperty = serde_json::from_str(
            r#"{"name":"Hair","shader":"VRM/MToon","renderQueue":2450,
                "floatProperties":{"_Cutoff":0.5,"_BlendMode":1},
                "vectorProperties":{"_Color":[1,1,1,1]},
                "textureProperties":{"_MainTex":3,"_ShadeTexture":3},
                "keywordMap":{"_ALPHATEST_ON":true},
                "tagMap":{"RenderType":"TransparentCutout"}}"#,
        )
        .unwrap();

        assert!(prop.is_mtoon());
        assert_eq!(prop.render_queue, 2450);
        assert_eq!(prop.float("_Cutoff"), Some(0.5));
        assert_eq!(prop.float("_Missing"), None);
        assert_eq!(prop.texture("_MainTex"), Some(3));
        assert_eq!(prop.keyword_map.get("_ALPHATEST_ON"), Some(&true));
        assert_eq!(prop.tag_map["RenderType"], "TransparentCutout");
        let keys: Vec<&str> = prop.float_properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["_Cutoff", "_BlendMode"]);
    }
}
