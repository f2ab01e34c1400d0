//! Notes Desk App
//!
//! Bootstrap: builds the transport and controllers, binds them to the page
//! and performs the initial render of both lists.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{ApiClient, BrowserFetch};
use crate::components::{ActionItemsPanel, DialogPrompter, NotesPanel, PromptDialog};
use crate::config::ClientConfig;
use crate::context::{spawn_handler, AppContext, FormFields};
use crate::controllers::{ActionItemsController, NoteInputs, NotesController};
use crate::store::{ActionItemsTarget, NotesTarget, PageState};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(PageState::default());
    let fields = FormFields::new();
    let prompter = DialogPrompter::new();

    let client = ApiClient::new(Rc::new(BrowserFetch::new(&config)));
    let action_items = ActionItemsController::new(
        client.clone(),
        Rc::new(ActionItemsTarget(store)),
        Rc::new(fields.action_description),
    );
    let notes = NotesController::new(
        client,
        Rc::new(NotesTarget(store)),
        Rc::new(prompter),
        NoteInputs {
            title: Rc::new(fields.note_title),
            content: Rc::new(fields.note_content),
            search: Rc::new(fields.note_search),
        },
        action_items.clone(),
    );

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(fields, notes, action_items);
    provide_context(ctx);

    // Initial unfiltered render of both lists
    Effect::new(move |_| {
        tracing::info!(api = %config.api_base_url, "loading notes and action items");
        let notes = ctx.notes();
        spawn_handler("initial notes render", async move { notes.render(None).await });
        let action_items = ctx.action_items();
        spawn_handler("initial action items render", async move { action_items.render().await });
    });

    view! {
        <div class="app-layout">
            <h1>"Notes Desk"</h1>
            <main class="main-content">
                <NotesPanel />
                <ActionItemsPanel />
            </main>
            <PromptDialog prompter=prompter />
        </div>
    }
}
