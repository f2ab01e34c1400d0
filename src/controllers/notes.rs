//! Notes Controller
//!
//! Renders the notes list, optionally scoped by a search term, and handles
//! edit, delete, extract, creation and the search controls.

use std::rc::Rc;

use crate::api::{self, ApiClient, ApiResult};
use crate::controllers::ActionItemsController;
use crate::models::{Note, NoteDraft, NotesListing};
use crate::view::{ListView, Prompter, TextInput};

/// Page fields the notes controller reads and clears
#[derive(Clone)]
pub struct NoteInputs {
    pub title: Rc<dyn TextInput>,
    pub content: Rc<dyn TextInput>,
    pub search: Rc<dyn TextInput>,
}

#[derive(Clone)]
pub struct NotesController {
    client: ApiClient,
    view: Rc<dyn ListView<NotesListing>>,
    prompter: Rc<dyn Prompter>,
    inputs: NoteInputs,
    action_items: ActionItemsController,
}

impl NotesController {
    pub fn new(
        client: ApiClient,
        view: Rc<dyn ListView<NotesListing>>,
        prompter: Rc<dyn Prompter>,
        inputs: NoteInputs,
        action_items: ActionItemsController,
    ) -> Self {
        Self { client, view, prompter, inputs, action_items }
    }

    /// Fetch notes and replace the list with them.
    ///
    /// An empty or absent `filter` lists everything, anything else goes to
    /// the search endpoint as is. The list is only touched once the fetch
    /// has succeeded.
    pub async fn render(&self, filter: Option<&str>) -> ApiResult<()> {
        let filter = filter.filter(|term| !term.is_empty());
        let notes = match filter {
            Some(term) => api::search_notes(&self.client, term).await?,
            None => api::list_notes(&self.client).await?,
        };
        tracing::debug!(count = notes.len(), filter = ?filter, "rendering notes");
        self.view.replace(NotesListing {
            filter: filter.map(str::to_string),
            notes,
        });
        Ok(())
    }

    /// Ask for a new title then new content and replace both.
    ///
    /// `filter` is the one the note's listing was fetched with. Cancelling
    /// either prompt drops the whole edit without sending anything.
    pub async fn edit(&self, note: &Note, filter: Option<&str>) -> ApiResult<()> {
        let Some(title) = self.prompter.prompt("New title", &note.title).await else {
            tracing::debug!(id = note.id, "edit cancelled at title");
            return Ok(());
        };
        let Some(content) = self.prompter.prompt("New content", &note.content).await else {
            tracing::debug!(id = note.id, "edit cancelled at content");
            return Ok(());
        };
        api::update_note(&self.client, note.id, &NoteDraft { title, content }).await?;
        self.render(filter).await
    }

    pub async fn delete(&self, id: u32, filter: Option<&str>) -> ApiResult<()> {
        api::delete_note(&self.client, id).await?;
        self.render(filter).await
    }

    /// Create action items from a note, then refresh the action items list
    pub async fn extract(&self, id: u32) -> ApiResult<()> {
        let created = api::extract_action_items(&self.client, id).await?;
        tracing::debug!(id, created = created.len(), "extracted action items");
        self.action_items.render().await
    }

    /// Creation form submit. The new note is shown only if the active
    /// search matches it.
    pub async fn submit_note(&self) -> ApiResult<()> {
        let draft = NoteDraft {
            title: self.inputs.title.value(),
            content: self.inputs.content.value(),
        };
        api::create_note(&self.client, &draft).await?;
        self.inputs.title.clear();
        self.inputs.content.clear();
        self.render_search().await
    }

    /// Search form submit
    pub async fn submit_search(&self) -> ApiResult<()> {
        self.render_search().await
    }

    pub async fn clear_search(&self) -> ApiResult<()> {
        self.inputs.search.clear();
        self.render(None).await
    }

    async fn render_search(&self) -> ApiResult<()> {
        let term = self.inputs.search.value();
        self.render(Some(term.trim())).await
    }
}
