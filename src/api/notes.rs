//! Note Endpoints

use super::{encode_query_component, fetch_json, fetch_required, ApiClient, ApiResult, HttpRequest};
use crate::models::{ActionItem, Note, NoteDraft};

const NOTES: &str = "/notes/";

fn note_path(id: u32) -> String {
    format!("/notes/{}", id)
}

pub fn search_path(term: &str) -> String {
    format!("/notes/search/?q={}", encode_query_component(term))
}

pub async fn list_notes(client: &ApiClient) -> ApiResult<Vec<Note>> {
    fetch_required(client.backend(), HttpRequest::get(NOTES)).await
}

pub async fn search_notes(client: &ApiClient, term: &str) -> ApiResult<Vec<Note>> {
    fetch_required(client.backend(), HttpRequest::get(search_path(term))).await
}

/// Returns the created note, or `None` when the service answers 204
pub async fn create_note(client: &ApiClient, draft: &NoteDraft) -> ApiResult<Option<Note>> {
    fetch_json(client.backend(), HttpRequest::post(NOTES).json(draft)?).await
}

/// Replace both fields of a note
pub async fn update_note(client: &ApiClient, id: u32, draft: &NoteDraft) -> ApiResult<Option<Note>> {
    fetch_json(client.backend(), HttpRequest::put(note_path(id)).json(draft)?).await
}

pub async fn delete_note(client: &ApiClient, id: u32) -> ApiResult<()> {
    fetch_json::<serde_json::Value>(client.backend(), HttpRequest::delete(note_path(id))).await?;
    Ok(())
}

/// Ask the service to turn a note's content into action items
pub async fn extract_action_items(client: &ApiClient, id: u32) -> ApiResult<Vec<ActionItem>> {
    let path = format!("/notes/{}/extract", id);
    Ok(fetch_json(client.backend(), HttpRequest::post(path)).await?.unwrap_or_default())
}
