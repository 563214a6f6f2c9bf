use std::sync::Arc;

use crate::error::Result;

pub mod http;
pub mod scripted;

pub use self::http::{HttpTransport, HttpTransportBuilder};
pub use self::scripted::{RecordedRequest, ScriptedTransport};
pub use reqwest::Method;

/// Transport trait for one request/response exchange
///
/// Implementations carry the body to `url` and hand back the raw response
/// body. Failures are reported as transport errors and are never
/// reinterpreted by higher layers.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` with `method` to `url` and return the response body as text
    async fn send(&self, method: Method, url: &str, body: Vec<u8>) -> Result<String>;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, method: Method, url: &str, body: Vec<u8>) -> Result<String> {
        (**self).send(method, url, body).await
    }
}
