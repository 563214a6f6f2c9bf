use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::transport::{Method, Transport};

/// A request captured by [`ScriptedTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Body as UTF-8 text (lossy)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// In-memory transport replaying queued responses
///
/// Each `send` consumes the next queued entry in order and records the
/// request. Sending past the end of the script fails.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body
    pub fn respond(&self, body: impl Into<String>) -> &Self {
        lock(&self.replies).push_back(Ok(body.into()));
        self
    }

    /// Queue a transport failure
    pub fn fail(&self, error: Error) -> &Self {
        lock(&self.replies).push_back(Err(error));
        self
    }

    /// Requests sent so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Number of queued replies not yet consumed
    pub fn remaining(&self) -> usize {
        lock(&self.replies).len()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, method: Method, url: &str, body: Vec<u8>) -> Result<String> {
        lock(&self.requests).push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });

        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Err(Error::custom("Scripted transport has no reply left")))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
