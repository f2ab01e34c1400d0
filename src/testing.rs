//! Test doubles for the transport and rendering seams

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::{ApiClient, ApiError, ApiResult, HttpBackend, HttpRequest, HttpResponse, Method};
use crate::view::{ListView, Prompter, TextInput};

/// Answers requests from per-route queues and records everything it is sent
#[derive(Default)]
pub struct MockBackend {
    routes: RefCell<HashMap<(Method, String), VecDeque<HttpResponse>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn client(self: &Rc<Self>) -> ApiClient {
        ApiClient::new(self.clone())
    }

    /// Queue one response for `method path`
    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(HttpResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// `"METHOD path"` for each request sent so far
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }
}

#[async_trait(?Send)]
impl HttpBackend for MockBackend {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let key = (request.method, request.path.clone());
        self.requests.borrow_mut().push(request);
        self.routes
            .borrow_mut()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| ApiError::Network(format!("no response scripted for {} {}", key.0, key.1)))
    }
}

/// Keeps every value it was asked to show
pub struct RecordingView<T> {
    history: RefCell<Vec<T>>,
}

impl<T: Clone> RecordingView<T> {
    pub fn new() -> Rc<Self> {
        Rc::new(Self { history: RefCell::new(Vec::new()) })
    }

    pub fn renders(&self) -> usize {
        self.history.borrow().len()
    }

    pub fn current(&self) -> Option<T> {
        self.history.borrow().last().cloned()
    }
}

impl<T> ListView<T> for RecordingView<T> {
    fn replace(&self, rows: T) {
        self.history.borrow_mut().push(rows);
    }
}

/// Answers prompts from a script and records the questions
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[Option<&str>]) -> Rc<Self> {
        Rc::new(Self {
            answers: RefCell::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            asked: RefCell::new(Vec::new()),
        })
    }

    /// `(message, initial)` for each prompt shown
    pub fn asked(&self) -> Vec<(String, String)> {
        self.asked.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Prompter for ScriptedPrompter {
    async fn prompt(&self, message: &str, initial: &str) -> Option<String> {
        self.asked.borrow_mut().push((message.to_string(), initial.to_string()));
        self.answers.borrow_mut().pop_front().flatten()
    }
}

/// In-memory text field
#[derive(Default)]
pub struct MemoryInput(RefCell<String>);

impl MemoryInput {
    pub fn new(value: &str) -> Rc<Self> {
        Rc::new(Self(RefCell::new(value.to_string())))
    }
}

impl TextInput for MemoryInput {
    fn value(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

/// Holds every request open until the test releases it, so responses can
/// be delivered in any order
#[derive(Default)]
pub struct GatedBackend {
    pending: RefCell<Vec<(String, oneshot::Sender<HttpResponse>)>>,
}

impl GatedBackend {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn client(self: &Rc<Self>) -> ApiClient {
        ApiClient::new(self.clone())
    }

    /// `"METHOD path"` of the requests still waiting
    pub fn waiting(&self) -> Vec<String> {
        self.pending.borrow().iter().map(|(call, _)| call.clone()).collect()
    }

    /// Answer the waiting request at `index`
    pub fn release(&self, index: usize, status: u16, body: &str) {
        let (_, reply) = self.pending.borrow_mut().remove(index);
        let _ = reply.send(HttpResponse::new(status, body));
    }
}

#[async_trait(?Send)]
impl HttpBackend for GatedBackend {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let (reply, response) = oneshot::channel();
        self.pending
            .borrow_mut()
            .push((format!("{} {}", request.method, request.path), reply));
        response
            .await
            .map_err(|_| ApiError::Network("request abandoned".to_string()))
    }
}
