// Source files module: turns the entries of the local source directory into
// the `{name, type, source}` descriptors the Apps Script API expects.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DeployError, Result};

/// Local file name of the project manifest.
pub const MANIFEST_FILE: &str = "appsscript.json";
/// Descriptor name the remote project uses for the manifest.
pub const MANIFEST_NAME: &str = "appsscript";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
    Json,
    ServerJs,
}

/// One file as understood by the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub source: String,
}

/// Build the descriptor for a single file.
///
/// Only the manifest is typed as JSON. Everything else becomes SERVER_JS no
/// matter its extension, so a stray `notes.txt` is uploaded as script `notes`.
pub fn descriptor_for(file_name: &str, source: String) -> ScriptFile {
    if file_name == MANIFEST_FILE {
        return ScriptFile {
            name: MANIFEST_NAME.to_string(),
            file_type: FileType::Json,
            source,
        };
    }
    let name = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    ScriptFile {
        name: name.to_string(),
        file_type: FileType::ServerJs,
        source,
    }
}

/// Read every direct entry of `dir` into a descriptor, ordered by file name.
pub fn collect_files(dir: &Path) -> Result<Vec<ScriptFile>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| DeployError::io(dir, e))? {
        let entry = entry.map_err(|e| DeployError::io(dir, e))?;
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| DeployError::InvalidFileName { path: entry.path() })?;
        names.push(name);
    }
    names.sort();

    let mut files = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        // Invalid UTF-8 is replaced rather than rejected.
        let bytes = fs::read(&path).map_err(|e| DeployError::io(&path, e))?;
        let source = String::from_utf8_lossy(&bytes).into_owned();
        let file = descriptor_for(&name, source);
        debug!(file = %name, name = %file.name, kind = ?file.file_type, "collected");
        files.push(file);
    }
    Ok(files)
}

/// Whether `file` is the project manifest. `appsscript.js` shares the name
/// but is a script, so the type is checked too.
pub fn is_manifest(file: &ScriptFile) -> bool {
    file.name == MANIFEST_NAME && file.file_type == FileType::Json
}

/// Fail unless the manifest descriptor is among `files`.
pub fn ensure_manifest(files: &[ScriptFile], dir: &Path) -> Result<()> {
    if files.iter().any(is_manifest) {
        Ok(())
    } else {
        Err(DeployError::MissingManifest {
            dir: dir.to_path_buf(),
        })
    }
}
