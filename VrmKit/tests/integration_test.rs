use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use vrmkit::formats::gltf::{parse_document_str, serialize_document};
use vrmkit::formats::vrm::{BlendShapePreset, FirstPersonFlag};
use vrmkit::prelude::*;

/// Assemble a glb with the given JSON text and BIN payload.
fn build_glb(json: &str, bin: &[u8], json_tag: &[u8; 4]) -> Vec<u8> {
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let total = 12 + 8 + json.len() + 8 + bin.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(json_tag);
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(bin);
    out
}

fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// A triangle with interleaved position + normal (stride 24), u16 indices and
/// a morph target, plus a small VRM extension.
fn triangle_fixture() -> (String, Vec<u8>) {
    let mut bin = f32_bytes(&[
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
        1.0, 0.0, 0.0, 0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    ]);
    // indices at 72, padded to 80
    for i in [0u16, 1, 2, 0] {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    // morph target deltas at 80
    bin.extend(f32_bytes(&[0.0, 0.1, 0.0, 0.0, 0.1, 0.0, 0.0, 0.1, 0.0]));

    let json = r#"{
        "asset": {"version": "2.0", "generator": "UniGLTF-1.27"},
        "extensionsUsed": ["VRM"],
        "buffers": [{"byteLength": 116}],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 72, "byteStride": 24, "target": 34962},
            {"buffer": 0, "byteOffset": 72, "byteLength": 6, "target": 34963},
            {"buffer": 0, "byteOffset": 80, "byteLength": 36}
        ],
        "accessors": [
            {"bufferView": 0, "byteOffset": 0, "componentType": 5126, "count": 3, "type": "VEC3",
             "min": [0, 0, 0], "max": [1, 1, 0]},
            {"bufferView": 0, "byteOffset": 12, "componentType": 5126, "count": 3, "type": "VEC3"},
            {"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"},
            {"bufferView": 2, "componentType": 5126, "count": 3, "type": "VEC3"}
        ],
        "materials": [{"name": "Face", "pbrMetallicRoughness": {"metallicFactor": 0}}],
        "meshes": [{
            "name": "Face",
            "primitives": [{
                "attributes": {"POSITION": 0, "NORMAL": 1},
                "indices": 2,
                "material": 0,
                "targets": [{"POSITION": 3, "extra": {"name": "Smile"}}]
            }],
            "extras": {"targetNames": ["Smile"]}
        }],
        "nodes": [
            {"name": "Root", "children": [1]},
            {"name": "Head", "mesh": 0, "translation": [0, 1.5, 0]}
        ],
        "scenes": [{"nodes": [0]}],
        "scene": 0,
        "extensions": {"VRM": {
            "exporterVersion": "UniVRM-0.53.0",
            "specVersion": "0.0",
            "meta": {"title": "Triangle", "author": "tests", "texture": -1,
                     "violentUssageName": "Disallow", "licenseName": "CC0"},
            "humanoid": {"humanBones": [{"bone": "head", "node": 1, "useDefaultValues": true}]},
            "firstPerson": {"firstPersonBone": 1, "meshAnnotations": [{"mesh": 0, "firstPersonFlag": "ThirdPersonOnly"}]},
            "blendShapeMaster": {"blendShapeGroups": [
                {"name": "Joy", "presetName": "joy", "binds": [{"mesh": 0, "index": 0, "weight": 100}]}
            ]},
            "secondaryAnimation": {"boneGroups": [], "colliderGroups": []},
            "materialProperties": [{"name": "Face", "shader": "VRM/MToon", "renderQueue": 2000,
                                    "textureProperties": {"_MainTex": 0}}]
        }}
    }"#;

    (json.to_string(), bin)
}

fn triangle_glb() -> Vec<u8> {
    let (json, bin) = triangle_fixture();
    build_glb(&json, &bin, b"JSON")
}

#[test]
fn test_load_and_resolve_every_accessor() {
    let model = VrmModel::from_bytes(&triangle_glb()).unwrap();
    let doc = model.document();

    assert_eq!(model.header().length as usize, triangle_glb().len());
    assert_eq!(doc.asset.generator, "UniGLTF-1.27");
    assert_eq!(doc.accessors.len(), 4);

    for (i, accessor) in doc.accessors.iter().enumerate() {
        let bytes = model.resolve_accessor(i).unwrap();
        assert_eq!(bytes.len(), accessor.count * accessor.element_size(), "accessor {i}");
    }

    let all = model.resolve_all();
    assert!(all.iter().all(|r| r.is_ok()));
}

#[test]
fn test_interleaved_attributes() {
    let model = VrmModel::from_bytes(&triangle_glb()).unwrap();

    let positions = model.accessor_data(0).unwrap().read_vec3().unwrap();
    assert_eq!(
        positions,
        vec![
            glam::Vec3::new(0.0, 0.0, 0.0),
            glam::Vec3::new(1.0, 0.0, 0.0),
            glam::Vec3::new(0.0, 1.0, 0.0),
        ]
    );

    let normals = model.accessor_data(1).unwrap().read_f32().unwrap();
    assert_eq!(normals, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);

    let indices = model.accessor_data(2).unwrap().read_u32().unwrap();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_mesh_and_node_structure() {
    let model = VrmModel::from_bytes(&triangle_glb()).unwrap();
    let doc = model.document();

    let mesh = &doc.meshes[doc.find_mesh("Face").unwrap()];
    let primitive = &mesh.primitives[0];
    assert_eq!(primitive.position(), Some(0));
    assert_eq!(primitive.attribute("NORMAL"), Some(1));
    assert_eq!(primitive.indices, Some(2));
    assert_eq!(primitive.targets[0].name(), Some("Smile"));
    assert_eq!(primitive.targets[0].attribute("POSITION"), Some(3));
    assert_eq!(mesh.target_names(), vec!["Smile"]);

    let head = doc.node(doc.find_node("Head").unwrap()).unwrap();
    assert_eq!(head.mesh, Some(0));
    let moved = head.local_matrix().transform_point3(glam::Vec3::ZERO);
    assert_eq!(moved, glam::Vec3::new(0.0, 1.5, 0.0));

    assert_eq!(doc.materials[0].pbr_metallic_roughness.metallic_factor, 0.0);
    assert_eq!(doc.materials[0].pbr_metallic_roughness.roughness_factor, 1.0);
}

#[test]
fn test_vrm_extension() {
    let model = VrmModel::from_bytes(&triangle_glb()).unwrap();
    let vrm = model.vrm().unwrap();

    assert_eq!(vrm.exporter_version, "UniVRM-0.53.0");
    assert_eq!(vrm.meta.title, "Triangle");
    assert_eq!(vrm.meta.texture, None);
    assert_eq!(vrm.meta.violent_ussage_name, "Disallow");
    assert_eq!(vrm.humanoid.bone_node(&HumanBoneName::Head), Some(1));
    assert_eq!(vrm.first_person.first_person_bone, Some(1));
    assert_eq!(vrm.first_person.mesh_flag(0), FirstPersonFlag::ThirdPersonOnly);

    let joy = vrm.blend_shape_master.find_preset(&BlendShapePreset::Joy).unwrap();
    assert_eq!(joy.binds[0].weight, 100.0);

    let face = vrm.material_property("Face").unwrap();
    assert!(face.is_mtoon());
    assert_eq!(face.texture("_MainTex"), Some(0));
}

#[test]
fn test_bad_magic() {
    let mut data = triangle_glb();
    data[..4].copy_from_slice(b"gltf");

    let err = VrmModel::from_bytes(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, Error::InvalidGlbMagic { .. }));
}

#[test]
fn test_json_chunk_must_come_first() {
    let (json, bin) = triangle_fixture();
    let data = build_glb(&json, &bin, b"BIN\0");

    let err = VrmModel::from_bytes(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(matches!(err, Error::UnexpectedChunkType { index: 0, .. }));
}

#[test]
fn test_truncated_file() {
    let data = triangle_glb();
    let err = VrmModel::from_bytes(&data[..data.len() - 10]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EndOfData);
}

#[test]
fn test_view_past_binary_payload() {
    let (json, bin) = triangle_fixture();
    let data = build_glb(&json, &bin[..100], b"JSON");
    let model = VrmModel::from_bytes(&data).unwrap();

    // the first views still fit
    assert!(model.resolve_accessor(0).is_ok());
    let err = model.resolve_accessor(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bounds);
    assert!(matches!(err, Error::BufferViewOutOfBounds { offset: 80, end: 116, len: 100 }));
}

#[test]
fn test_minimal_document_strict_and_lenient() {
    let data = build_glb(r#"{"asset":{"version":"2.0"}}"#, &[], b"JSON");

    let err = VrmModel::from_bytes(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(matches!(err, Error::MissingSection { .. }));

    let model = VrmModel::from_bytes_with_options(&data, &LoadOptions::lenient()).unwrap();
    assert!(model.document().accessors.is_empty());
    assert!(model.binary().is_empty());
    assert!(model.resolve_all().is_empty());
    assert!(matches!(
        model.resolve_accessor(0),
        Err(Error::InvalidAccessorIndex { index: 0, count: 0 })
    ));
}

#[test]
fn test_document_round_trip() {
    let (json, _) = triangle_fixture();
    let doc = parse_document_str(&json, &LoadOptions::strict()).unwrap();

    let text = serialize_document(&doc).unwrap();
    let reparsed = parse_document_str(&text, &LoadOptions::strict()).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&triangle_glb()).unwrap();
    file.flush().unwrap();

    let model = VrmModel::load(file.path()).unwrap();
    assert_eq!(model.document().nodes.len(), 2);
    assert_eq!(model, VrmModel::from_bytes(&triangle_glb()).unwrap());

    let err = VrmModel::load(file.path().with_extension("missing")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_node_extra_sentinel_and_extras() {
    let json = r#"{"nodes":[
        {"name":"Body","extra":{"skinRootBone":-1}},
        {"name":"Hair","extra":{"skinRootBone":3},"extras":{}}
    ]}"#;
    let doc = parse_document_str(json, &LoadOptions::lenient()).unwrap();

    assert_eq!(doc.nodes[0].extra.as_ref().unwrap().skin_root_bone, None);
    assert_eq!(doc.nodes[1].extra.as_ref().unwrap().skin_root_bone, Some(3));
    assert!(doc.nodes[1].extras.is_some());
}
