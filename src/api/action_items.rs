//! Action Item Endpoints

use super::{fetch_json, fetch_required, ApiClient, ApiResult, HttpRequest};
use crate::models::{ActionItem, ActionItemDraft};

const ACTION_ITEMS: &str = "/action-items/";

pub async fn list_action_items(client: &ApiClient) -> ApiResult<Vec<ActionItem>> {
    fetch_required(client.backend(), HttpRequest::get(ACTION_ITEMS)).await
}

pub async fn create_action_item(client: &ApiClient, draft: &ActionItemDraft) -> ApiResult<Option<ActionItem>> {
    fetch_json(client.backend(), HttpRequest::post(ACTION_ITEMS).json(draft)?).await
}

/// Mark an item completed. The response is not trusted as final state.
pub async fn complete_action_item(client: &ApiClient, id: u32) -> ApiResult<Option<ActionItem>> {
    let path = format!("/action-items/{}/complete", id);
    fetch_json(client.backend(), HttpRequest::put(path)).await
}
