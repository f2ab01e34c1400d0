//! Note Row Component
//!
//! One note entry with its Edit, Delete and Extract controls.

use leptos::prelude::*;

use crate::context::{spawn_handler, use_app_context};
use crate::models::Note;

/// A single note entry.
///
/// `filter` is the search the row's listing was fetched with; edit and
/// delete re-render with it.
#[component]
pub fn NoteRow(note: Note, filter: Option<String>) -> impl IntoView {
    let ctx = use_app_context();

    let id = note.id;
    let label = note.label();
    let delete_filter = filter.clone();

    let edit = move |_| {
        let notes = ctx.notes();
        let note = note.clone();
        let filter = filter.clone();
        spawn_handler("edit note", async move { notes.edit(&note, filter.as_deref()).await });
    };

    let delete = move |_| {
        let notes = ctx.notes();
        let filter = delete_filter.clone();
        spawn_handler("delete note", async move { notes.delete(id, filter.as_deref()).await });
    };

    let extract = move |_| {
        let notes = ctx.notes();
        spawn_handler("extract action items", async move { notes.extract(id).await });
    };

    view! {
        <li class="note-row">
            <span class="note-text">{label}</span>
            <button class="edit-btn" on:click=edit>"Edit"</button>
            <button class="delete-btn" on:click=delete>"Delete"</button>
            <button class="extract-btn" on:click=extract>"Extract"</button>
        </li>
    }
}
