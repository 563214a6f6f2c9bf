//! Request and response envelopes of the AnkiConnect JSON protocol

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// Parameters object of a request
pub type Params = Map<String, Value>;

/// `{action, version, params?}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub action: String,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

impl RequestEnvelope {
    /// Build an envelope; an empty params object is left out entirely
    pub fn new(action: impl Into<String>, version: u32, params: Option<Params>) -> Self {
        Self {
            action: action.into(),
            version,
            params: params.filter(|params| !params.is_empty()),
        }
    }
}

/// `{result, error}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<String>,
}

/// A completed round trip whose response carried no error
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub request: RequestEnvelope,
    pub response: ResponseEnvelope,
}

impl Exchange {
    pub fn result(&self) -> &Value {
        &self.response.result
    }

    pub fn into_result(self) -> Value {
        self.response.result
    }

    /// Deserialize the result; a result that does not fit `T` is unexpected
    pub fn decode<T>(&self) -> Result<T, Error>
    where
        T: for<'de> Deserialize<'de>,
    {
        T::deserialize(&self.response.result).map_err(|_| self.unexpected())
    }

    /// The error reported when this result cannot be used
    pub fn unexpected(&self) -> Error {
        Error::UnexpectedResult {
            request: Box::new(self.request.clone()),
            response: Box::new(self.response.clone()),
        }
    }
}

/// Turn a `json!` object into params; anything else means no params
pub fn params(value: Value) -> Option<Params> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
