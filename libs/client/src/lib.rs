//! Typed client for the AnkiConnect bridge
//!
//! Three layers, leaf first:
//!
//! - transport and codec, from `ankiconnect-fabric`
//! - [`Client`]: builds `{action, version, params}` requests, classifies the
//!   `{result, error}` response and checks the result's [`Shape`]
//! - [`Anki`]: one typed method per remote action
//!
//! ```no_run
//! use ankiconnect::{Anki, Client, Note};
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let anki = Anki::new(Client::new("127.0.0.1", 8765, 6)?).await?;
//!
//! let note = Note::new("Default", "Basic", [("Front", "front"), ("Back", "back")])
//!     .with_tags(["vocab"]);
//! let id = anki.add_note(&note).await?;
//! anki.add_tags("reviewed", &[id]).await?;
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod anki;
pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod shape;

pub use action::{Action, Outcome};
pub use anki::{interval_seconds, Anki, Ease, Info};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use protocol::{Exchange, Params, RequestEnvelope, ResponseEnvelope};
pub use shape::{Shape, Validate};

pub use ankiconnect_core::{
    Audio, CardId, Config, ConfigId, DeckId, DuplicateScope, Model, ModelId, Note, NoteId, Review,
    Template,
};
pub use ankiconnect_fabric::{HttpTransport, ScriptedTransport, Transport};
