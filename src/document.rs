use crate::domain::{Folder, Note};
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root is not a JSON object")]
    NotAnObject,

    #[error("folder {0:?} does not hold an array of notes")]
    NotAnArray(String),
}

/// Conventional file name for the persisted document.
pub const DEFAULT_FILE_NAME: &str = "notes.json";

/// Resolves the conventional document location under the user's documents
/// directory, or `None` if that directory cannot be determined.
pub fn default_path() -> Option<PathBuf> {
    dirs::document_dir().map(|docs| docs.join(DEFAULT_FILE_NAME))
}

/// Reads and parses the document at `path`.
///
/// # Errors
/// Returns [`DocumentError::Io`] if the file cannot be read, or a parse
/// error per [`parse`].
pub fn read(path: &Path) -> Result<Vec<Folder>, DocumentError> {
    let data = fs::read_to_string(path)?;
    parse(&data)
}

/// Parses a document into folders, preserving the key order of the source.
///
/// The root must be a JSON object mapping folder names to arrays of note
/// objects. A non-object root or a non-array folder value rejects the
/// whole document; nothing is partially loaded. Individual note entries
/// are lenient: missing or malformed `title`/`content` fields degrade to
/// empty strings.
pub fn parse(data: &str) -> Result<Vec<Folder>, DocumentError> {
    let root: Value = serde_json::from_str(data)?;
    let Value::Object(entries) = root else {
        return Err(DocumentError::NotAnObject);
    };

    let mut folders = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let Value::Array(items) = value else {
            return Err(DocumentError::NotAnArray(name));
        };

        let notes = items
            .into_iter()
            .map(|item| serde_json::from_value::<Note>(item).unwrap_or_default())
            .collect();

        folders.push(Folder { name, notes });
    }

    Ok(folders)
}

/// Serializes the folders and writes them to `path`.
///
/// The output is a pretty-printed object keyed by folder name, one
/// `{title, content}` entry per note, empty folders included as empty
/// arrays. The write goes through a temporary file and a rename so a
/// crash mid-write never corrupts the previous document.
///
/// # Errors
/// Returns [`DocumentError::Io`] if the destination cannot be written.
pub fn write(path: &Path, folders: &[Folder]) -> Result<(), DocumentError> {
    let mut root = Map::new();
    for folder in folders {
        root.insert(folder.name.clone(), serde_json::to_value(&folder.notes)?);
    }

    let data = serde_json::to_string_pretty(&Value::Object(root))?;
    write_atomic(path, data.as_bytes())
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), DocumentError> {
    // A bare file name has an empty parent; fall back to the working directory.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| DocumentError::Io(e.error))?;
    Ok(())
}
