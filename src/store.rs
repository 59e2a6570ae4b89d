use crate::document::{self, DocumentError};
use crate::domain::{Folder, Note};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid name")]
    InvalidName,

    #[error("folder already exists: {0}")]
    DuplicateFolder(String),

    #[error("no folder at index {0}")]
    FolderIndex(usize),

    #[error("no note at index {0}")]
    NoteIndex(usize),
}

/// The in-memory folder/note collection plus the two selection indices.
///
/// Selection is `None` where the original UI used row -1. Two invariants
/// hold after every operation:
///
/// - the selected folder index, if present, is valid for the folder
///   sequence, and is clamped whenever the sequence shrinks;
/// - the selected note index, if present, is valid for the *selected*
///   folder's notes, and changing the folder selection always clears it.
///
/// Every mutation either fully applies or leaves the store untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    folders: Vec<Folder>,
    current_folder: Option<usize>,
    current_note: Option<usize>,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn current_folder(&self) -> Option<usize> {
        self.current_folder
    }

    pub fn current_note(&self) -> Option<usize> {
        self.current_note
    }

    /// The folder the selection points at, if any.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.current_folder.map(|i| &self.folders[i])
    }

    /// The note the selection points at, if any.
    pub fn selected_note(&self) -> Option<&Note> {
        let folder = self.selected_folder()?;
        self.current_note.map(|i| &folder.notes[i])
    }

    /// Selects a folder by index; out-of-range becomes no selection.
    /// The note selection never carries across folders.
    pub fn select_folder(&mut self, index: Option<usize>) {
        self.current_folder = index.filter(|&i| i < self.folders.len());
        self.current_note = None;
    }

    /// Selects a note in the current folder; out-of-range or no current
    /// folder becomes no selection.
    pub fn select_note(&mut self, index: Option<usize>) {
        let notes = self.selected_folder().map_or(0, |f| f.notes.len());
        self.current_note = index.filter(|&i| i < notes);
    }

    /// Appends an empty folder and selects it, returning its index.
    ///
    /// The name is trimmed. Returns [`StoreError::InvalidName`] for an
    /// empty name and [`StoreError::DuplicateFolder`] if a folder with the
    /// same name exists, since the name keys the persisted document.
    pub fn add_folder(&mut self, name: &str) -> Result<usize, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        if self.folders.iter().any(|f| f.name == name) {
            return Err(StoreError::DuplicateFolder(name.to_owned()));
        }

        self.folders.push(Folder::new(name));
        let index = self.folders.len() - 1;
        self.current_folder = Some(index);
        self.current_note = None;
        Ok(index)
    }

    /// Removes the folder at `index`, clamping the folder selection to the
    /// new last index (or clearing it when no folders remain). The note
    /// selection is cleared.
    pub fn delete_folder(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.folders.len() {
            return Err(StoreError::FolderIndex(index));
        }

        self.folders.remove(index);
        let last = self.folders.len().checked_sub(1);
        self.current_folder = match (self.current_folder, last) {
            (Some(current), Some(last)) => Some(current.min(last)),
            _ => None,
        };
        self.current_note = None;
        Ok(())
    }

    /// Appends a note with empty content to the given folder and selects
    /// it, returning its index within the folder.
    pub fn add_note(&mut self, folder: usize, title: &str) -> Result<usize, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let notes = &mut self.folder_mut(folder)?.notes;
        notes.push(Note::new(title));
        let index = notes.len() - 1;
        self.current_folder = Some(folder);
        self.current_note = Some(index);
        Ok(index)
    }

    /// Removes a note, clamping the note selection when the mutated folder
    /// is the selected one.
    pub fn delete_note(&mut self, folder: usize, note: usize) -> Result<(), StoreError> {
        let notes = &mut self.folder_mut(folder)?.notes;
        if note >= notes.len() {
            return Err(StoreError::NoteIndex(note));
        }

        notes.remove(note);
        if self.current_folder == Some(folder) {
            let last = self.folders[folder].notes.len().checked_sub(1);
            self.current_note = match (self.current_note, last) {
                (Some(current), Some(last)) => Some(current.min(last)),
                _ => None,
            };
        }
        Ok(())
    }

    /// Overwrites a note's content in place. No history, no undo.
    pub fn set_note_content(
        &mut self,
        folder: usize,
        note: usize,
        text: &str,
    ) -> Result<(), StoreError> {
        let notes = &mut self.folder_mut(folder)?.notes;
        let entry = notes.get_mut(note).ok_or(StoreError::NoteIndex(note))?;
        entry.content = text.to_owned();
        Ok(())
    }

    /// Replaces the folder sequence from the document at `path` and resets
    /// both selections.
    ///
    /// On any read or parse failure the store is left exactly as it was.
    pub fn reload(&mut self, path: &Path) -> Result<(), DocumentError> {
        let folders = document::read(path)?;
        self.folders = folders;
        self.current_folder = None;
        self.current_note = None;
        Ok(())
    }

    /// Baseline-parity load: a missing or malformed document leaves the
    /// store in its prior state (empty at startup) instead of surfacing an
    /// error. The failure is logged rather than silently dropped.
    pub fn reload_lenient(&mut self, path: &Path) {
        if let Err(err) = self.reload(path) {
            warn!(path = %path.display(), %err, "could not load note document, keeping current state");
        }
    }

    /// Serializes the folder sequence to the document at `path`.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        document::write(path, &self.folders)
    }

    fn folder_mut(&mut self, index: usize) -> Result<&mut Folder, StoreError> {
        self.folders
            .get_mut(index)
            .ok_or(StoreError::FolderIndex(index))
    }
}
