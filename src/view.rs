//! Rendering Seams
//!
//! What the controllers need from a page, kept abstract so the sync rules
//! run the same against Leptos state and against test doubles.

use async_trait::async_trait;

/// A list container. Each call replaces everything shown before.
pub trait ListView<T> {
    fn replace(&self, rows: T);
}

/// A single text field
pub trait TextInput {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn clear(&self) {
        self.set_value("");
    }
}

/// Asks the user for a line of text.
///
/// Suspends the caller until the user answers; `None` means cancelled.
#[async_trait(?Send)]
pub trait Prompter {
    async fn prompt(&self, message: &str, initial: &str) -> Option<String>;
}
