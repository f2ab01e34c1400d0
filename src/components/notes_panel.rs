//! Notes Panel Component
//!
//! Search form, creation form and the notes list.

use leptos::prelude::*;

use crate::components::NoteRow;
use crate::context::{spawn_handler, use_app_context};
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn NotesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();
    let fields = ctx.fields;

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let notes = ctx.notes();
        spawn_handler("search notes", async move { notes.submit_search().await });
    };

    let clear_search = move |_| {
        let notes = ctx.notes();
        spawn_handler("clear note search", async move { notes.clear_search().await });
    };

    let create_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let notes = ctx.notes();
        spawn_handler("create note", async move { notes.submit_note().await });
    };

    let entries = move || store.notes().with(|listing| listing.entries());

    view! {
        <section class="notes-panel">
            <h2>"Notes"</h2>

            <form id="note-search-form" class="search-form" on:submit=search>
                <input
                    id="note-search"
                    type="text"
                    placeholder="Search notes..."
                    prop:value=move || fields.note_search.get()
                    on:input=move |ev| fields.note_search.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
                <button id="note-search-clear" type="button" on:click=clear_search>"Clear"</button>
            </form>

            <form id="note-form" class="new-note-form" on:submit=create_note>
                <input
                    id="note-title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || fields.note_title.get()
                    on:input=move |ev| fields.note_title.set(event_target_value(&ev))
                />
                <textarea
                    id="note-content"
                    placeholder="Content"
                    prop:value=move || fields.note_content.get()
                    on:input=move |ev| fields.note_content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit">"Add"</button>
            </form>

            <ul id="notes" class="notes-list">
                <For
                    each=entries
                    // Every field is in the key so a refetch rebuilds changed rows
                    key=|(note, filter)| (note.id, note.title.clone(), note.content.clone(), filter.clone())
                    children=move |(note, filter)| view! { <NoteRow note=note filter=filter /> }
                />
            </ul>

            <p class="item-count">{move || format!("{} notes", store.notes().with(|listing| listing.notes.len()))}</p>
        </section>
    }
}
