//! Scripted transport and recording hooks shared by unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::middleware::{Hooks, Navigator, Notice, Notifier};
use crate::session::{MemorySessionStore, SessionStore, StoredSession};
use crate::types::{Role, User};

pub enum Scripted {
    Respond(u16, String),
    Fail(String),
}

/// Returns scripted outcomes in order and records every request it sees.
/// Once the script runs out it answers `200 []`.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    pub requests: Arc<Mutex<Vec<ApiRequest>>>,
    script: Arc<Mutex<VecDeque<Scripted>>>,
}

impl ScriptedTransport {
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Respond(status, body.to_string()));
        self
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Respond(status, body.to_owned()));
        self
    }

    pub fn fail(self, detail: &str) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Fail(detail.to_owned()));
        self
    }

    pub fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> ApiRequest {
        self.recorded().last().cloned().expect("no request recorded")
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Respond(status, body)) => Ok(ApiResponse { status, body }),
            Some(Scripted::Fail(detail)) => Err(ApiError::Transport(detail)),
            None => Ok(ApiResponse { status: 200, body: "[]".to_owned() }),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.notices.lock().unwrap().iter().map(|n| n.message.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub redirects: Mutex<usize>,
}

impl RecordingNavigator {
    pub fn count(&self) -> usize {
        *self.redirects.lock().unwrap()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        *self.redirects.lock().unwrap() += 1;
    }
}

pub struct Harness {
    pub client: ApiClient,
    pub transport: ScriptedTransport,
    pub session: Arc<MemorySessionStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn sample_user() -> User {
    User { id: 1, username: "admin".to_owned(), role: Role::Admin, is_active: Some(true), created_at: None }
}

pub fn harness(transport: ScriptedTransport) -> Harness {
    harness_with_session(transport, None)
}

pub fn signed_in(transport: ScriptedTransport, token: &str) -> Harness {
    harness_with_session(transport, Some(StoredSession { token: token.to_owned(), user: Some(sample_user()) }))
}

fn harness_with_session(transport: ScriptedTransport, session: Option<StoredSession>) -> Harness {
    let store = Arc::new(session.map(MemorySessionStore::with_session).unwrap_or_default());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let hooks = Hooks {
        session: store.clone() as Arc<dyn SessionStore>,
        notifier: notifier.clone(),
        navigator: navigator.clone(),
    };
    let config = ApiConfig { base_url: "http://api.test/v1".to_owned(), ..ApiConfig::default() };
    let client = ApiClient::new(&config, transport.clone(), hooks);
    Harness { client, transport, session: store, notifier, navigator }
}
