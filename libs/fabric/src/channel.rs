use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::codec::Codec;
use crate::error::Result;
use crate::transport::{HttpTransport, Method, Transport};

/// High-level channel for request/response exchanges with one endpoint
///
/// Combines a transport, a codec and the endpoint URL
pub struct Channel<C> {
    endpoint: Url,
    transport: Box<dyn Transport>,
    codec: C,
}

impl<C: Codec> Channel<C> {
    /// Create a channel from an existing transport
    pub fn from_transport(endpoint: Url, transport: impl Transport + 'static, codec: C) -> Self {
        Self {
            endpoint,
            transport: Box::new(transport),
            codec,
        }
    }

    /// Open an HTTP channel with the default transport
    pub fn http(endpoint: Url, codec: C) -> Self {
        Self::from_transport(endpoint, HttpTransport::new(), codec)
    }

    /// Replace the transport, keeping endpoint and codec
    pub fn with_transport(self, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            ..self
        }
    }

    /// Endpoint every request is posted to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Encode `request`, post it, and decode the response body
    pub async fn request<Req, Res>(&self, request: &Req) -> Result<Res>
    where
        Req: Serialize,
        Res: for<'de> Deserialize<'de>,
    {
        let body = self.codec.encode(request)?;
        trace!(body = %String::from_utf8_lossy(&body), "channel request");

        let text = self
            .transport
            .send(Method::POST, self.endpoint.as_str(), body)
            .await?;
        trace!(body = %text, "channel response");

        self.codec.decode(text.as_bytes())
    }
}
