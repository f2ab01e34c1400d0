//! Prompt Dialog Component
//!
//! Modal text prompt. The edit handler awaits the answer instead of
//! blocking the page.

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;

use crate::view::Prompter;

/// A question waiting for the user
pub struct PendingPrompt {
    pub message: String,
    reply: oneshot::Sender<Option<String>>,
}

/// [`Prompter`] backed by the modal. Opening a prompt while another is
/// showing cancels the earlier one.
#[derive(Clone, Copy)]
pub struct DialogPrompter {
    pending: RwSignal<Option<PendingPrompt>>,
    draft: RwSignal<String>,
}

impl DialogPrompter {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
            draft: RwSignal::new(String::new()),
        }
    }

    fn answer(&self, value: Option<String>) {
        // Release the write guard before resuming the waiting handler
        let taken = self.pending.write().take();
        if let Some(prompt) = taken {
            let _ = prompt.reply.send(value);
        }
    }

    /// OK: answer with whatever is in the input
    pub fn confirm(&self) {
        self.answer(Some(self.draft.get_untracked()));
    }

    pub fn cancel(&self) {
        self.answer(None);
    }

    pub fn set_draft(&self, value: String) {
        self.draft.set(value);
    }

    /// Question currently shown, if any
    pub fn message(&self) -> Option<String> {
        self.pending.with(|p| p.as_ref().map(|p| p.message.clone()))
    }
}

#[async_trait(?Send)]
impl Prompter for DialogPrompter {
    async fn prompt(&self, message: &str, initial: &str) -> Option<String> {
        let (reply, answer) = oneshot::channel();
        self.draft.set(initial.to_string());
        // Replacing drops the previous sender, which resolves its prompt as cancelled
        self.pending.set(Some(PendingPrompt {
            message: message.to_string(),
            reply,
        }));
        answer.await.ok().flatten()
    }
}

/// Renders the pending prompt, if any
#[component]
pub fn PromptDialog(prompter: DialogPrompter) -> impl IntoView {
    let is_open = move || prompter.pending.with(|p| p.is_some());
    let message = move || prompter.message().unwrap_or_default();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        prompter.confirm();
    };

    view! {
        <Show when=is_open>
            <div class="prompt-backdrop">
                <form class="prompt-dialog" on:submit=submit>
                    <label class="prompt-message">{message}</label>
                    <input
                        type="text"
                        autofocus=true
                        prop:value=move || prompter.draft.get()
                        on:input=move |ev| prompter.set_draft(event_target_value(&ev))
                    />
                    <div class="prompt-actions">
                        <button type="submit">"OK"</button>
                        <button type="button" on:click=move |_| prompter.cancel()>"Cancel"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
