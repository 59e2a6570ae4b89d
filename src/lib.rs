//! # memo_core
//!
//! The headless core of a folder-based note manager: an in-memory
//! folder/note store with selection invariants, a JSON document for
//! persistence, and an async client for an external summarization service.
//! The graphical shell stays outside this crate; it feeds selection changes
//! and action triggers into the [`controller`] and redraws whatever the
//! returned [`Refresh`](controller::Refresh) asks for.
//!
//! ## Features
//!
//! - **Folder/Note Store**: ordered folders of ordered notes with clamped,
//!   always-valid selection indices
//! - **JSON Persistence**: a folder-name-keyed document, read once at
//!   startup and written atomically on save and shutdown, with key order
//!   preserved across round-trips
//! - **Selection Controller**: translates list-row events and button
//!   actions into store updates plus explicit render requests
//! - **Summarization Client**: a single non-blocking HTTP call per
//!   request, with completions applied only if the summarized note is
//!   still selected
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use memo_core::controller::Controller;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = Controller::new("notes.json");
//!
//! app.add_folder("Work")?;
//! app.add_note("Standup")?;
//! app.save_note("Discuss blockers")?;
//!
//! // On exit, persist once more.
//! app.shutdown()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Summarization
//!
//! The request target is captured up front so a slow completion never
//! overwrites a note the user has since navigated away from:
//!
//! ```rust,no_run
//! use memo_core::controller::Controller;
//! use memo_core::summarize::Summarizer;
//!
//! # async fn run(app: &mut Controller) -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(request) = app.begin_summarize() {
//!     let summarizer = Summarizer::default();
//!     match summarizer.summarize(&request.text).await {
//!         Ok(summary) => {
//!             app.apply_summary(&request, &summary)?;
//!         }
//!         Err(err) => eprintln!("summarization failed: {err}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Operations return typed errors ([`MemoError`] unifies them with
//! automatic conversions for the `?` operator) instead of the original
//! design's silent no-ops. The one deliberate exception is
//! [`Store::reload_lenient`](store::Store::reload_lenient), which keeps
//! the legacy startup behavior of falling back to an empty store when the
//! document is missing or malformed.

pub mod controller;
pub mod document;
pub mod domain;
pub mod error;
pub mod store;
pub mod summarize;

/// Re-exports the most commonly used types for convenience.
pub use error::{MemoError, MemoResult};
