//! Application Context
//!
//! Controllers and form fields provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::api::ApiResult;
use crate::controllers::{ActionItemsController, NotesController};
use crate::view::TextInput;

impl TextInput for RwSignal<String> {
    fn value(&self) -> String {
        self.get_untracked()
    }

    fn set_value(&self, value: &str) {
        self.set(value.to_string());
    }
}

/// Form field signals, bound to the page inputs
#[derive(Clone, Copy)]
pub struct FormFields {
    pub note_title: RwSignal<String>,
    pub note_content: RwSignal<String>,
    pub note_search: RwSignal<String>,
    pub action_description: RwSignal<String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self {
            note_title: RwSignal::new(String::new()),
            note_content: RwSignal::new(String::new()),
            note_search: RwSignal::new(String::new()),
            action_description: RwSignal::new(String::new()),
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub fields: FormFields,
    notes: StoredValue<NotesController, LocalStorage>,
    action_items: StoredValue<ActionItemsController, LocalStorage>,
}

impl AppContext {
    pub fn new(fields: FormFields, notes: NotesController, action_items: ActionItemsController) -> Self {
        Self {
            fields,
            notes: StoredValue::new_local(notes),
            action_items: StoredValue::new_local(action_items),
        }
    }

    pub fn notes(&self) -> NotesController {
        self.notes.get_value()
    }

    pub fn action_items(&self) -> ActionItemsController {
        self.action_items.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Run a UI handler on the event loop.
///
/// A failed handler is logged and then surfaces as an unhandled promise
/// rejection. Nothing retries it and the page shows no error.
pub fn spawn_handler<F>(name: &'static str, handler: F)
where
    F: Future<Output = ApiResult<()>> + 'static,
{
    let _ = wasm_bindgen_futures::future_to_promise(async move {
        match handler.await {
            Ok(()) => Ok(JsValue::UNDEFINED),
            Err(err) => {
                tracing::error!(handler = name, error = %err, "handler failed");
                Err(JsValue::from_str(&err.diagnostic()))
            }
        }
    });
}
