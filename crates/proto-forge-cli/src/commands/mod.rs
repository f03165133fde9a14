pub mod check;
pub mod completions;
pub mod emit;

use std::path::{Path, PathBuf};

use proto_forge_core::types::ProtoFile;

use crate::error::CliError;

/// Discover tree documents from a list of paths.
///
/// Paths can be files (used directly) or directories (searched with
/// `pattern`, e.g. `**/*.json`). The result is sorted and deduplicated so
/// output order never depends on directory iteration order.
pub fn discover_tree_files(paths: &[PathBuf], pattern: &str) -> Result<Vec<PathBuf>, CliError> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let pattern = format!("{}/{pattern}", path.display());
            let entries = glob::glob(&pattern).map_err(|e| CliError::Other(e.to_string()))?;
            for entry in entries {
                let entry = entry.map_err(|e| CliError::Other(e.to_string()))?;
                if entry.is_file() {
                    files.push(entry);
                }
            }
        } else {
            return Err(CliError::NoTreeFiles { path: path.clone() });
        }
    }

    if files.is_empty() {
        let display_path = paths
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("trees/"));
        return Err(CliError::NoTreeFiles { path: display_path });
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read and decode one tree document.
pub fn load_tree(path: &Path) -> Result<ProtoFile, CliError> {
    let source_text = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    match ProtoFile::from_json(&source_text) {
        Ok(tree) => {
            tracing::debug!(
                file = %path.display(),
                declarations = tree.declarations.len(),
                "decoded tree"
            );
            Ok(tree)
        }
        Err(error) => Err(CliError::Decode {
            file: path.to_path_buf(),
            source_text,
            error,
        }),
    }
}
