//! Shared test doubles for the view-model tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{ApiRequest, ApiResponse, ApiTransport};
use crate::confirm::ConfirmPrompt;
use crate::error::{ApiError, ApiResult};
use crate::notify::Notifier;

/// Scripted transport: responses are consumed in FIFO order and every
/// executed request is recorded for assertions.
pub struct FakeTransport {
    responses: Mutex<VecDeque<ApiResult<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_network_error(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network(reason.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiTransport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

/// Records every notification the view model emits.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<(NotificationKind, String)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == NotificationKind::Error)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(kind, _)| *kind == NotificationKind::Success)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((NotificationKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((NotificationKind::Error, message.to_string()));
    }
}

/// Scripted confirmation prompt.
pub struct ScriptedConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}
