//! Action Items Controller

use std::rc::Rc;

use crate::api::{self, ApiClient, ApiResult};
use crate::models::{ActionItem, ActionItemDraft};
use crate::view::{ListView, TextInput};

/// Renders the action items list and handles complete/create
#[derive(Clone)]
pub struct ActionItemsController {
    client: ApiClient,
    view: Rc<dyn ListView<Vec<ActionItem>>>,
    description: Rc<dyn TextInput>,
}

impl ActionItemsController {
    pub fn new(
        client: ApiClient,
        view: Rc<dyn ListView<Vec<ActionItem>>>,
        description: Rc<dyn TextInput>,
    ) -> Self {
        Self { client, view, description }
    }

    /// Fetch the whole collection and replace the list with it
    pub async fn render(&self) -> ApiResult<()> {
        let items = api::list_action_items(&self.client).await?;
        tracing::debug!(count = items.len(), "rendering action items");
        self.view.replace(items);
        Ok(())
    }

    pub async fn complete(&self, id: u32) -> ApiResult<()> {
        api::complete_action_item(&self.client, id).await?;
        self.render().await
    }

    /// Creation form submit
    pub async fn submit_item(&self) -> ApiResult<()> {
        let draft = ActionItemDraft { description: self.description.value() };
        api::create_action_item(&self.client, &draft).await?;
        self.description.clear();
        self.render().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Method};
    use crate::testing::{MemoryInput, MockBackend, RecordingView};
    use futures::executor::block_on;

    struct Fixture {
        backend: Rc<MockBackend>,
        view: Rc<RecordingView<Vec<ActionItem>>>,
        description: Rc<MemoryInput>,
        controller: ActionItemsController,
    }

    fn fixture(description: &str) -> Fixture {
        let backend = MockBackend::new();
        let view: Rc<RecordingView<Vec<ActionItem>>> = RecordingView::new();
        let description = MemoryInput::new(description);
        let controller = ActionItemsController::new(backend.client(), view.clone(), description.clone());
        Fixture { backend, view, description, controller }
    }

    #[test]
    fn test_render_shows_status_and_controls() {
        let f = fixture("");
        f.backend.respond(
            Method::Get,
            "/action-items/",
            200,
            r#"[{"id":1,"description":"Call Bob","completed":false},
                {"id":2,"description":"File taxes","completed":true}]"#,
        );

        block_on(f.controller.render()).unwrap();

        let items = f.view.current().unwrap();
        let labels: Vec<String> = items.iter().map(ActionItem::label).collect();
        assert_eq!(labels, vec!["Call Bob [open]", "File taxes [done]"]);
        assert!(items[0].can_complete());
        assert!(!items[1].can_complete());
    }

    #[test]
    fn test_no_content_list_is_missing_body() {
        let f = fixture("");
        f.backend.respond(Method::Get, "/action-items/", 200, r#"[{"id":1,"description":"Call Bob","completed":false}]"#);
        f.backend.respond(Method::Get, "/action-items/", 204, "");

        block_on(f.controller.render()).unwrap();
        let err = block_on(f.controller.render()).unwrap_err();

        assert!(matches!(err, ApiError::MissingBody { method: Method::Get, ref path } if path == "/action-items/"));
        assert_eq!(f.view.renders(), 1);
        assert_eq!(f.view.current().unwrap()[0].label(), "Call Bob [open]");
    }

    #[test]
    fn test_complete_with_no_content_refetches() {
        let f = fixture("");
        f.backend.respond(Method::Get, "/action-items/", 200, r#"[{"id":1,"description":"Call Bob","completed":false}]"#);
        f.backend.respond(Method::Put, "/action-items/1/complete", 204, "");
        f.backend.respond(Method::Get, "/action-items/", 200, r#"[{"id":1,"description":"Call Bob","completed":true}]"#);

        block_on(f.controller.render()).unwrap();
        block_on(f.controller.complete(1)).unwrap();

        assert_eq!(
            f.backend.calls(),
            vec!["GET /action-items/", "PUT /action-items/1/complete", "GET /action-items/"]
        );
        let items = f.view.current().unwrap();
        assert_eq!(items[0].label(), "Call Bob [done]");
        assert!(!items[0].can_complete());
        assert!(f.backend.requests()[1].body.is_none());
    }

    #[test]
    fn test_complete_response_is_not_rendered() {
        let f = fixture("");
        // Mutation response claims done; the refetch is what gets shown
        f.backend.respond(Method::Put, "/action-items/4/complete", 200, r#"{"id":4,"description":"x","completed":true}"#);
        f.backend.respond(Method::Get, "/action-items/", 200, r#"[{"id":4,"description":"x","completed":false}]"#);

        block_on(f.controller.complete(4)).unwrap();

        assert_eq!(f.view.renders(), 1);
        assert!(!f.view.current().unwrap()[0].completed);
    }

    #[test]
    fn test_submit_posts_description_and_clears() {
        let f = fixture("Write report");
        f.backend.respond(Method::Post, "/action-items/", 201, r#"{"id":9,"description":"Write report","completed":false}"#);
        f.backend.respond(Method::Get, "/action-items/", 200, r#"[{"id":9,"description":"Write report","completed":false}]"#);

        block_on(f.controller.submit_item()).unwrap();

        let requests = f.backend.requests();
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"description":"Write report"}"#));
        assert_eq!(f.description.value(), "");
        assert_eq!(f.view.current().unwrap().len(), 1);
    }

    #[test]
    fn test_failed_create_keeps_form_and_list() {
        let f = fixture("Write report");
        f.backend.respond(Method::Get, "/action-items/", 200, r#"[]"#);
        f.backend.respond(Method::Post, "/action-items/", 422, "description required");

        block_on(f.controller.render()).unwrap();
        let err = block_on(f.controller.submit_item()).unwrap_err();

        assert!(matches!(err, ApiError::RequestFailed { status: 422, .. }));
        assert_eq!(f.description.value(), "Write report");
        assert_eq!(f.view.renders(), 1);
        assert_eq!(f.backend.calls(), vec!["GET /action-items/", "POST /action-items/"]);
    }
}
