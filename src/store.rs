//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the view
//! models the controllers render into; each render overwrites its field
//! wholesale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ActionItem, NotesListing};
use crate::view::ListView;

/// What the page currently shows
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Last successful notes fetch and its filter
    pub notes: NotesListing,
    /// Last successful action items fetch
    pub action_items: Vec<ActionItem>,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

/// Notes list target
#[derive(Clone, Copy)]
pub struct NotesTarget(pub PageStore);

impl ListView<NotesListing> for NotesTarget {
    fn replace(&self, listing: NotesListing) {
        *self.0.notes().write() = listing;
    }
}

/// Action items list target
#[derive(Clone, Copy)]
pub struct ActionItemsTarget(pub PageStore);

impl ListView<Vec<ActionItem>> for ActionItemsTarget {
    fn replace(&self, items: Vec<ActionItem>) {
        *self.0.action_items().write() = items;
    }
}
