//! Protocol client: envelope construction, error classification and
//! result-shape validation over a pluggable transport.

use ankiconnect_fabric::codec::JsonCodec;
use ankiconnect_fabric::{Channel, HttpTransport, Transport};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::protocol::{Exchange, Params, RequestEnvelope, ResponseEnvelope};
use crate::shape::Validate;

/// Low-level AnkiConnect client
///
/// Host, port and protocol version are fixed at construction. The transport
/// can be swapped with [`Client::with_transport`]; the default one posts over
/// HTTP with `reqwest`.
pub struct Client {
    host: String,
    port: u16,
    version: u32,
    channel: Channel<JsonCodec>,
}

impl Client {
    /// Client for `http://{host}:{port}/` speaking protocol `version`
    pub fn new(host: impl Into<String>, port: u16, version: u32) -> Result<Self> {
        let host = host.into();
        let endpoint = endpoint(&host, port)?;

        Ok(Self {
            host,
            port,
            version,
            channel: Channel::http(endpoint, JsonCodec),
        })
    }

    /// Client with the AnkiConnect defaults: `127.0.0.1:8765`, version 6
    pub fn local() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Client built from configuration, including transport timeouts
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = HttpTransport::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }
        let transport = builder.build()?;

        Ok(Self::new(config.host(), config.port(), config.version())?.with_transport(transport))
    }

    /// Replace the transport every later call goes through
    pub fn with_transport(self, transport: impl Transport + 'static) -> Self {
        Self {
            channel: self.channel.with_transport(transport),
            ..self
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Protocol version sent with every request
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn endpoint(&self) -> &Url {
        self.channel.endpoint()
    }

    /// Call `action` and return its raw result
    ///
    /// Fails with [`Error::Api`] when the remote reports an error and with
    /// [`Error::UnexpectedResult`] when `expect` rejects the result.
    pub async fn call(
        &self,
        action: impl AsRef<str>,
        params: Option<Params>,
        expect: Option<&dyn Validate>,
    ) -> Result<Value> {
        let exchange = match expect {
            Some(expect) => self.call_checked(action, params, expect).await?,
            None => self.exchange(action, params).await?,
        };
        Ok(exchange.into_result())
    }

    /// Like [`Client::call`] with a mandatory check, keeping both envelopes
    pub async fn call_checked(
        &self,
        action: impl AsRef<str>,
        params: Option<Params>,
        expect: &dyn Validate,
    ) -> Result<Exchange> {
        let exchange = self.exchange(action, params).await?;

        if !expect.validate(exchange.result()) {
            warn!(
                action = %exchange.request.action,
                result = %exchange.response.result,
                "unexpected result"
            );
            return Err(exchange.unexpected());
        }

        Ok(exchange)
    }

    async fn exchange(&self, action: impl AsRef<str>, params: Option<Params>) -> Result<Exchange> {
        let request = RequestEnvelope::new(action.as_ref(), self.version, params);
        debug!(action = %request.action, version = request.version, "calling AnkiConnect");

        let response: ResponseEnvelope = self.channel.request(&request).await?;

        if let Some(error) = &response.error {
            warn!(action = %request.action, error = %error, "AnkiConnect reported an error");
            return Err(Error::Api {
                request: Box::new(request),
                response: Box::new(response),
            });
        }

        Ok(Exchange { request, response })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint().as_str())
            .field("version", &self.version)
            .finish()
    }
}

fn endpoint(host: &str, port: u16) -> Result<Url> {
    let endpoint = format!("http://{host}:{port}/");
    Url::parse(&endpoint).map_err(|e| Error::InvalidEndpoint(format!("{endpoint}: {e}")))
}
