//! Frontend Models
//!
//! Data structures matching the remote service's payloads.

use serde::{Deserialize, Serialize};

/// Note data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: String,
}

impl Note {
    /// Text shown for the note's list entry
    pub fn label(&self) -> String {
        format!("{}: {}", self.title, self.content)
    }
}

/// Action item data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: u32,
    pub description: String,
    pub completed: bool,
}

impl ActionItem {
    pub fn status_token(&self) -> &'static str {
        if self.completed { "done" } else { "open" }
    }

    /// Text shown for the item's list entry
    pub fn label(&self) -> String {
        format!("{} [{}]", self.description, self.status_token())
    }

    /// Completion is one-way, so only open items offer the control
    pub fn can_complete(&self) -> bool {
        !self.completed
    }
}

/// Body for note create and replace requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// Body for action item create requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItemDraft {
    pub description: String,
}

/// Notes returned by one fetch, with the filter that fetch was made for
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotesListing {
    pub filter: Option<String>,
    pub notes: Vec<Note>,
}

impl NotesListing {
    /// Entries paired with the filter their row handlers re-render with
    pub fn entries(&self) -> Vec<(Note, Option<String>)> {
        self.notes
            .iter()
            .map(|note| (note.clone(), self.filter.clone()))
            .collect()
    }
}
