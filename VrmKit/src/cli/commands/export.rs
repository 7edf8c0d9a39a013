//! Export CLI commands
//!
//! Commands for writing the parsed document and the raw BIN chunk to disk.

use crate::formats::gltf::{LoadOptions, serialize_document, serialize_document_compact};
use crate::model::VrmModel;
use std::path::Path;

fn load_options(lenient: bool) -> LoadOptions {
    if lenient { LoadOptions::lenient() } else { LoadOptions::strict() }
}

/// Serialize the parsed document to JSON.
pub fn json(path: &Path, output: Option<&Path>, compact: bool, lenient: bool) -> anyhow::Result<()> {
    let model = VrmModel::load_with_options(path, &load_options(lenient))?;

    let json = if compact {
        serialize_document_compact(model.document())?
    } else {
        serialize_document(model.document())?
    };

    match output {
        Some(output) => {
            std::fs::write(output, json)?;
            println!("Written to: {}", output.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Write the BIN chunk payload as-is.
pub fn binary(path: &Path, output: &Path) -> anyhow::Result<()> {
    let model = VrmModel::load_with_options(path, &LoadOptions::lenient())?;
    std::fs::write(output, model.binary())?;

    println!("Written {} bytes to: {}", model.binary().len(), output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_options_flag() {
        assert!(load_options(false).strict);
        assert!(!load_options(true).strict);
    }
}
