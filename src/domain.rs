use serde::{Deserialize, Serialize};

/// A single note: a display title plus the body text shown in the editor.
///
/// A note has no identity of its own; it is addressed by its position in
/// its parent folder's note sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Creates a note with the given title and empty content.
    pub fn new(title: impl Into<String>) -> Note {
        Note {
            title: title.into(),
            content: String::new(),
        }
    }
}

/// A named, ordered collection of notes.
///
/// The name doubles as the folder's key in the persisted document, so it
/// must be unique within a [`Store`](crate::store::Store); the store
/// enforces this at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub notes: Vec<Note>,
}

impl Folder {
    /// Creates an empty folder with the given name.
    pub fn new(name: impl Into<String>) -> Folder {
        Folder {
            name: name.into(),
            notes: Vec::new(),
        }
    }
}
