//! Inspection CLI commands
//!
//! Commands for dumping the container layout, the document sections and
//! individual accessors.

use crate::formats::glb::read_glb;
use crate::formats::gltf::{ComponentType, Document, LoadOptions};
use crate::formats::vrm::Vrm;
use crate::model::{VrmModel, effective_stride};
use std::path::Path;

/// Number of elements printed by the `accessor` command.
const PREVIEW_ELEMENTS: usize = 8;

fn fmt_index(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |i| i.to_string())
}

/// Print the header, chunk sizes and every document section.
pub fn info(path: &Path, lenient: bool) -> anyhow::Result<()> {
    println!("Inspecting: {}", path.display());
    println!();

    let container = read_glb(path)?;
    println!("== Header ==");
    println!("{}", container.header);
    println!("JSON chunk : {} bytes", container.json.len());
    println!("BIN chunk  : {} bytes", container.binary.len());
    println!();

    let options = if lenient { LoadOptions::lenient() } else { LoadOptions::strict() };
    let model = VrmModel::from_container(container, &options)?;
    let doc = model.document();

    print_document(doc);
    match model.vrm() {
        Some(vrm) => print_vrm(vrm),
        None => println!("(no VRM extension)"),
    }

    Ok(())
}

fn print_document(doc: &Document) {
    println!("== Asset ==");
    println!("copyright  : {}", doc.asset.copyright);
    println!("generator  : {}", doc.asset.generator);
    println!("version    : {}", doc.asset.version);
    println!("minVersion : {}", doc.asset.min_version);
    println!();

    for (i, buffer) in doc.buffers.iter().enumerate() {
        println!("== Buffer #{i:03} ==");
        println!("byteLength : {}", buffer.byte_length);
    }
    for (i, view) in doc.buffer_views.iter().enumerate() {
        println!("== BufferView #{i:03} ==");
        println!("buffer     : {}", view.buffer);
        println!("byteOffset : {}", view.byte_offset);
        println!("byteLength : {}", view.byte_length);
        println!("target     : {}", view.target.map_or_else(|| "other".to_string(), |t| t.to_string()));
        println!("byteStride : {}", view.byte_stride.unwrap_or(0));
    }
    for (i, accessor) in doc.accessors.iter().enumerate() {
        println!("== Accessor #{i:03} ==");
        println!("bufferView    : {}", fmt_index(accessor.buffer_view));
        println!("byteOffset    : {}", accessor.byte_offset);
        println!("type          : {}", accessor.element_type);
        println!("componentType : {}", accessor.component_type);
        println!("count         : {}", accessor.count);
    }
    for (i, image) in doc.images.iter().enumerate() {
        println!("== Image #{i:03} ==");
        println!("name       : {}", image.display_name());
        println!("bufferView : {}", fmt_index(image.buffer_view));
        println!("mimeType   : {}", image.mime_type);
    }
    for (i, sampler) in doc.samplers.iter().enumerate() {
        println!("== Sampler #{i:03} ==");
        println!("magFilter : {}", sampler.mag_filter.map_or_else(|| "-".to_string(), |f| f.to_string()));
        println!("minFilter : {}", sampler.min_filter.map_or_else(|| "-".to_string(), |f| f.to_string()));
        println!("wrapS     : {}", sampler.wrap_s);
        println!("wrapT     : {}", sampler.wrap_t);
    }
    for (i, texture) in doc.textures.iter().enumerate() {
        println!("== Texture #{i:03} ==");
        println!("sampler : {}", fmt_index(texture.sampler));
        println!("source  : {}", fmt_index(texture.source));
    }
    for (i, material) in doc.materials.iter().enumerate() {
        let pbr = &material.pbr_metallic_roughness;
        println!("== Material #{i:03} ==");
        println!("name            : {}", material.name);
        println!("baseColorTex    : {}", fmt_index(material.base_color_texture()));
        println!("metallicFactor  : {}", pbr.metallic_factor);
        println!("roughnessFactor : {}", pbr.roughness_factor);
        println!("alphaMode       : {}", material.alpha_mode);
    }
    for (i, mesh) in doc.meshes.iter().enumerate() {
        println!("== Mesh #{i:03} ==");
        println!("name : {}", mesh.name);
        for (j, primitive) in mesh.primitives.iter().enumerate() {
            println!("-- Primitive #{j:03} --");
            println!("  mode     : {}", primitive.mode);
            println!("  indices  : {}", fmt_index(primitive.indices));
            println!("  material : {}", fmt_index(primitive.material));
            println!("  -- attributes --");
            for (semantic, accessor) in &primitive.attributes {
                println!("    {semantic:<10} : {accessor}");
            }
            for (k, target) in primitive.targets.iter().enumerate() {
                println!("  -- target #{k:03} {} --", target.name().unwrap_or(""));
                for (semantic, accessor) in &target.attributes {
                    println!("    {semantic:<10} : {accessor}");
                }
            }
        }
    }
    for (i, skin) in doc.skins.iter().enumerate() {
        println!("== Skin #{i:03} ==");
        println!("inverseBindMatrices : {}", fmt_index(skin.inverse_bind_matrices));
        println!("joints              : {}", skin.joints.len());
    }
    for (i, node) in doc.nodes.iter().enumerate() {
        println!("== Node #{i:03} ==");
        println!("name        : {}", node.name);
        println!("translation : {:?}", node.translation);
        println!("rotation    : {:?}", node.rotation);
        println!("scale       : {:?}", node.scale);
        println!("mesh        : {}", fmt_index(node.mesh));
        println!("skin        : {}", fmt_index(node.skin));
        println!("children    : {:?}", node.children);
    }
    for (i, scene) in doc.scenes.iter().enumerate() {
        println!("== Scene #{i:03} ==");
        println!("nodes : {:?}", scene.nodes);
    }
    println!();
}

fn print_vrm(vrm: &Vrm) {
    println!("== VRM ==");
    println!("exporterVersion : {}", vrm.exporter_version);
    println!("specVersion     : {}", vrm.spec_version);
    println!("title           : {}", vrm.meta.title);
    println!("author          : {}", vrm.meta.author);
    println!("license         : {}", vrm.meta.license_name);
    println!("humanBones      : {}", vrm.humanoid.human_bones.len());

    let missing = vrm.humanoid.missing_required();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|b| b.as_str()).collect();
        println!("missing bones   : {}", names.join(", "));
    }

    println!("blendShapes     : {}", vrm.blend_shape_master.blend_shape_groups.len());
    for group in &vrm.blend_shape_master.blend_shape_groups {
        println!("  {:<12} [{}] {} binds", group.name, group.preset_name, group.binds.len());
    }
    println!("springGroups    : {}", vrm.secondary_animation.bone_groups.len());
    println!("colliderGroups  : {}", vrm.secondary_animation.collider_groups.len());
    println!("materials       : {}", vrm.material_properties.len());
}

/// Resolve one accessor and either write it out or print a preview.
pub fn accessor(path: &Path, index: usize, output: Option<&Path>) -> anyhow::Result<()> {
    let model = VrmModel::load_with_options(path, &LoadOptions::lenient())?;
    let data = model.accessor_data(index)?;

    if let Some(output) = output {
        std::fs::write(output, &data.bytes)?;
        println!("Written {} bytes to: {}", data.bytes.len(), output.display());
        return Ok(());
    }

    let doc = model.document();
    let accessor = &doc.accessors[index];
    let stride = match accessor.buffer_view.and_then(|v| doc.buffer_view(v)) {
        Some(view) => effective_stride(accessor, view)?,
        None => 0,
    };

    println!("== Accessor #{index:03} ==");
    println!("type          : {} x {}", data.element_type, data.component_type);
    println!("count         : {}", data.count);
    println!("stride        : {stride}");
    println!("bytes         : {}", data.bytes.len());

    let arity = data.element_type.arity();
    let preview = PREVIEW_ELEMENTS * arity;
    match data.component_type {
        ComponentType::UnsignedByte | ComponentType::UnsignedShort | ComponentType::UnsignedInt
            if !data.normalized =>
        {
            for element in data.read_u32()?.chunks(arity).take(PREVIEW_ELEMENTS) {
                println!("  {element:?}");
            }
        }
        _ => match data.read_f32() {
            Ok(values) => {
                for element in values[..preview.min(values.len())].chunks(arity) {
                    println!("  {element:?}");
                }
            }
            Err(_) => {
                for element in data.elements().take(PREVIEW_ELEMENTS) {
                    println!("  {element:02X?}");
                }
            }
        },
    }

    Ok(())
}
