//! View Controllers
//!
//! Turn user gestures into requests and keep each list a projection of the
//! most recent successful fetch. Every mutation is followed by a full
//! re-fetch; nothing is patched locally.

mod notes;
mod action_items;

pub use notes::{NoteInputs, NotesController};
pub use action_items::ActionItemsController;
