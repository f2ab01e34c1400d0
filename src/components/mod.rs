//! UI Components
//!
//! Leptos components for the notes and action items panels.

mod note_row;
mod notes_panel;
mod action_items_panel;
mod prompt_dialog;

pub use note_row::NoteRow;
pub use notes_panel::NotesPanel;
pub use action_items_panel::ActionItemsPanel;
pub use prompt_dialog::{DialogPrompter, PromptDialog};
