use crate::document::DocumentError;
use crate::error::MemoResult;
use crate::store::{Store, StoreError};
use std::path::PathBuf;
use tracing::debug;

/// Which displays must redraw after an event.
///
/// Apply in field order: folder list first, then note list, then editor.
/// The note list can only be derived once the (possibly just-clamped)
/// folder selection is known, and the editor depends on both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Refresh {
    pub folders: bool,
    pub notes: bool,
    pub editor: bool,
}

impl Refresh {
    pub const NONE: Refresh = Refresh {
        folders: false,
        notes: false,
        editor: false,
    };

    pub const ALL: Refresh = Refresh {
        folders: true,
        notes: true,
        editor: true,
    };

    pub const EDITOR: Refresh = Refresh {
        folders: false,
        notes: false,
        editor: true,
    };
}

/// The three selection states the UI can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    NoFolder,
    FolderOnly(usize),
    FolderAndNote(usize, usize),
}

/// A summarization target captured at request time.
///
/// Holding the indices alongside the text lets the completion check
/// whether the same note is still selected before touching anything, so a
/// late result never lands on a note the user has since switched to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub folder: usize,
    pub note: usize,
    pub text: String,
}

/// Mediates UI events against the [`Store`] and reports what to redraw.
///
/// The controller owns the store and the document path; the UI shell feeds
/// it selection changes and action triggers and redraws whatever the
/// returned [`Refresh`] asks for. It has no knowledge of any widget
/// toolkit, which is what makes the selection logic testable headless.
pub struct Controller {
    store: Store,
    doc_path: PathBuf,
}

impl Controller {
    /// Creates a controller backed by the document at `doc_path`, loading
    /// it leniently: a missing or unparseable document starts empty.
    pub fn new(doc_path: impl Into<PathBuf>) -> Controller {
        let doc_path = doc_path.into();
        let mut store = Store::new();
        store.reload_lenient(&doc_path);
        Controller { store, doc_path }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn selection(&self) -> Selection {
        match (self.store.current_folder(), self.store.current_note()) {
            (Some(folder), Some(note)) => Selection::FolderAndNote(folder, note),
            (Some(folder), None) => Selection::FolderOnly(folder),
            _ => Selection::NoFolder,
        }
    }

    /// A folder row was highlighted (or -1 for none). Resets the note
    /// selection unconditionally; selection never carries across folders.
    pub fn on_folder_selected(&mut self, row: isize) -> Refresh {
        self.store.select_folder(usize::try_from(row).ok());
        Refresh::ALL
    }

    /// A note row was highlighted (or -1 for none).
    pub fn on_note_selected(&mut self, row: isize) -> Refresh {
        self.store.select_note(usize::try_from(row).ok());
        Refresh::EDITOR
    }

    pub fn add_folder(&mut self, name: &str) -> Result<Refresh, StoreError> {
        self.store.add_folder(name)?;
        Ok(Refresh::ALL)
    }

    /// Deletes the selected folder; without a selection the action is
    /// ignored, matching the original UI where the button does nothing.
    pub fn delete_folder(&mut self) -> Result<Refresh, StoreError> {
        let Some(index) = self.store.current_folder() else {
            return Ok(Refresh::NONE);
        };
        self.store.delete_folder(index)?;
        Ok(Refresh::ALL)
    }

    pub fn add_note(&mut self, title: &str) -> Result<Refresh, StoreError> {
        let Some(folder) = self.store.current_folder() else {
            return Ok(Refresh::NONE);
        };
        self.store.add_note(folder, title)?;
        Ok(Refresh::ALL)
    }

    pub fn delete_note(&mut self) -> Result<Refresh, StoreError> {
        let (Some(folder), Some(note)) = (self.store.current_folder(), self.store.current_note())
        else {
            return Ok(Refresh::NONE);
        };
        self.store.delete_note(folder, note)?;
        Ok(Refresh::ALL)
    }

    /// Commits the editor's text to the selected note and persists the
    /// document. Edits reach the store only through this action; without a
    /// selected note it is ignored.
    pub fn save_note(&mut self, text: &str) -> MemoResult<Refresh> {
        let (Some(folder), Some(note)) = (self.store.current_folder(), self.store.current_note())
        else {
            return Ok(Refresh::NONE);
        };
        self.store.set_note_content(folder, note, text)?;
        self.store.save(&self.doc_path)?;
        Ok(Refresh::NONE)
    }

    /// Persists the document on exit.
    pub fn shutdown(&self) -> Result<(), DocumentError> {
        self.store.save(&self.doc_path)
    }

    /// Captures a summarization request for the selected note.
    ///
    /// Returns `None` when no note is selected or its content is empty; no
    /// outbound call should be made in either case.
    pub fn begin_summarize(&self) -> Option<SummarizeRequest> {
        let folder = self.store.current_folder()?;
        let note = self.store.current_note()?;
        let text = &self.store.folders()[folder].notes[note].content;
        if text.is_empty() {
            return None;
        }
        Some(SummarizeRequest {
            folder,
            note,
            text: text.clone(),
        })
    }

    /// Delivers a completed summary for a previously captured request.
    ///
    /// The summary replaces the note's content only if the captured target
    /// is still the selected note; otherwise it is dropped. The replacement
    /// is not persisted until the next save action.
    pub fn apply_summary(
        &mut self,
        request: &SummarizeRequest,
        summary: &str,
    ) -> Result<Refresh, StoreError> {
        let selected = self.store.current_folder() == Some(request.folder)
            && self.store.current_note() == Some(request.note);
        if !selected {
            debug!(
                folder = request.folder,
                note = request.note,
                "summary arrived for a note that is no longer selected, dropping"
            );
            return Ok(Refresh::NONE);
        }

        self.store
            .set_note_content(request.folder, request.note, summary)?;
        Ok(Refresh::EDITOR)
    }
}
