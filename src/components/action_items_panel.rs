//! Action Items Panel Component
//!
//! Creation form and the action items list.

use leptos::prelude::*;

use crate::context::{spawn_handler, use_app_context};
use crate::models::ActionItem;
use crate::store::{use_page_store, PageStateStoreFields};

/// A single action item entry; open items get a Complete button
#[component]
fn ActionItemRow(item: ActionItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;

    let complete = move |_| {
        let action_items = ctx.action_items();
        spawn_handler("complete action item", async move { action_items.complete(id).await });
    };

    view! {
        <li class=if item.completed { "action-row completed" } else { "action-row" }>
            <span class="action-text">{item.label()}</span>
            {item.can_complete().then(|| view! {
                <button class="complete-btn" on:click=complete>"Complete"</button>
            })}
        </li>
    }
}

#[component]
pub fn ActionItemsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();
    let description = ctx.fields.action_description;

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let action_items = ctx.action_items();
        spawn_handler("create action item", async move { action_items.submit_item().await });
    };

    view! {
        <section class="actions-panel">
            <h2>"Action Items"</h2>

            <form id="action-form" class="new-action-form" on:submit=create_item>
                <input
                    id="action-desc"
                    type="text"
                    placeholder="Describe the action..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <ul id="actions" class="actions-list">
                <For
                    each=move || store.action_items().get()
                    key=|item| (item.id, item.description.clone(), item.completed)
                    children=move |item| view! { <ActionItemRow item=item /> }
                />
            </ul>

            <p class="item-count">{move || format!("{} action items", store.action_items().with(|items| items.len()))}</p>
        </section>
    }
}
