//! AnkiConnect Fabric - Low-level transport and codec layer
//!
//! Provides the pluggable transport abstraction (HTTP by default, scripted
//! replies for tests) and the JSON codec used to talk to an AnkiConnect
//! endpoint.
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect_fabric::{Channel, codec::JsonCodec};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize)]
//! struct Envelope { action: String, version: u32 }
//!
//! #[derive(Deserialize)]
//! struct Reply { result: serde_json::Value, error: Option<String> }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = "http://127.0.0.1:8765/".parse()?;
//! let channel = Channel::http(endpoint, JsonCodec);
//! let req = Envelope { action: "version".to_string(), version: 6 };
//! let reply: Reply = channel.request(&req).await?;
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod codec;
pub mod error;
pub mod transport;

// Re-exports for convenience
pub use channel::Channel;
pub use error::{Error, Result};
pub use transport::{HttpTransport, Method, ScriptedTransport, Transport};
pub use url::Url;
