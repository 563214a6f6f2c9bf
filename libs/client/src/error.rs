use thiserror::Error;

use crate::protocol::{RequestEnvelope, ResponseEnvelope};

#[derive(Error, Debug)]
pub enum Error {
    /// The transport failed; passed through untouched
    #[error(transparent)]
    Transport(#[from] ankiconnect_fabric::Error),

    /// The remote answered with a non-null `error`
    #[error(
        "API error: {}: {}",
        .request.action,
        .response.error.as_deref().unwrap_or_default()
    )]
    Api {
        request: Box<RequestEnvelope>,
        response: Box<ResponseEnvelope>,
    },

    /// The remote answered without error but the result has the wrong shape
    #[error("Unexpected result: {}: {}", .request.action, .response.result)]
    UnexpectedResult {
        request: Box<RequestEnvelope>,
        response: Box<ResponseEnvelope>,
    },

    #[error("{kind} not found: {}", .missing.join(", "))]
    NotFound {
        kind: &'static str,
        missing: Vec<String>,
    },

    /// The remote signalled failure through `false` or `null`
    #[error("Action failed: {action}{}", subject_suffix(.subject))]
    ActionFailed {
        action: &'static str,
        subject: String,
    },

    /// The remote speaks an older protocol than this client was built for
    #[error("Unsupported version: AnkiConnect v{remote} (client requires v{required})")]
    UnsupportedVersion { required: u32, remote: u32 },

    #[error(transparent)]
    Validation(#[from] ankiconnect_core::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl Error {
    /// The request that produced this error, when the remote was reached
    pub fn request(&self) -> Option<&RequestEnvelope> {
        match self {
            Error::Api { request, .. } | Error::UnexpectedResult { request, .. } => Some(request),
            _ => None,
        }
    }

    /// The parsed response behind this error, when the remote was reached
    pub fn response(&self) -> Option<&ResponseEnvelope> {
        match self {
            Error::Api { response, .. } | Error::UnexpectedResult { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

fn subject_suffix(subject: &str) -> String {
    if subject.is_empty() {
        String::new()
    } else {
        format!(": {subject}")
    }
}
