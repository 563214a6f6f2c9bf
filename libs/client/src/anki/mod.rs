//! Typed façade over the AnkiConnect actions
//!
//! One method per remote action. Methods that only have a side effect return
//! `&Self` so calls can be chained:
//!
//! ```no_run
//! # async fn example() -> ankiconnect::Result<()> {
//! let anki = ankiconnect::Anki::connect().await?;
//! anki.sync().await?.reload_collection().await?;
//! # Ok(())
//! # }
//! ```

use ankiconnect_core::CardId;
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::action::{Action, Outcome};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::protocol::{Exchange, Params};

mod cards;
mod collection;
mod decks;
mod gui;
mod media;
mod models;
mod notes;
mod reviews;

pub use cards::interval_seconds;
pub use gui::Ease;

/// Raw object returned by info lookups, keyed by the remote's field names
pub type Info = Map<String, Value>;

/// AnkiConnect façade
///
/// Construction queries the remote version and refuses to build when the
/// remote is older than the protocol version the client is configured for.
#[derive(Debug)]
pub struct Anki {
    client: Client,
}

impl Anki {
    /// Wrap `client` after checking the remote protocol version
    pub async fn new(client: Client) -> Result<Self> {
        let anki = Self { client };
        anki.check_version().await?;
        Ok(anki)
    }

    /// Connect to `127.0.0.1:8765` with protocol version 6
    pub async fn connect() -> Result<Self> {
        Self::new(Client::local()?).await
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn into_client(self) -> Client {
        self.client
    }

    /// Protocol version reported by the remote
    pub async fn api_version(&self) -> Result<u32> {
        self.perform(Action::Version, None, String::new).await
    }

    async fn check_version(&self) -> Result<()> {
        let remote = self.api_version().await?;
        let required = self.client.version();

        if required > remote {
            error!(required, remote, "AnkiConnect is older than the client protocol");
            return Err(Error::UnsupportedVersion { required, remote });
        }

        info!(required, remote, endpoint = %self.client.endpoint(), "AnkiConnect ready");
        Ok(())
    }

    /// Call `action` and check its result against the action's shape
    async fn exchange(&self, action: Action, params: Option<Params>) -> Result<Exchange> {
        self.client.call_checked(action, params, &action.shape()).await
    }

    /// Call `action` and apply its outcome table
    ///
    /// `subject` names what the call was about and is only rendered on failure.
    async fn settle<S>(
        &self,
        action: Action,
        params: Option<Params>,
        subject: S,
    ) -> Result<Exchange>
    where
        S: FnOnce() -> String,
    {
        let exchange = self.exchange(action, params).await?;

        match action.outcome(exchange.result()) {
            Outcome::Success => Ok(exchange),
            Outcome::ActionFailed => {
                let subject = subject();
                warn!(%action, %subject, "action failed");
                Err(Error::ActionFailed {
                    action: action.as_str(),
                    subject,
                })
            }
            Outcome::NotFound { kind } => Err(Error::NotFound {
                kind,
                missing: vec![subject()],
            }),
        }
    }

    /// [`Anki::settle`], then decode the result
    async fn perform<T, S>(&self, action: Action, params: Option<Params>, subject: S) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
        S: FnOnce() -> String,
    {
        self.settle(action, params, subject).await?.decode()
    }

    /// [`Anki::settle`] for actions called for their effect
    async fn run<S>(&self, action: Action, params: Option<Params>, subject: S) -> Result<&Self>
    where
        S: FnOnce() -> String,
    {
        self.perform::<IgnoredAny, _>(action, params, subject).await?;
        Ok(self)
    }

    /// Send card IDs and pair them with the same-length array the remote returns
    ///
    /// A `null` slot marks a card the remote does not know.
    async fn zip<T>(
        &self,
        action: Action,
        cards: &[CardId],
        extra: Params,
    ) -> Result<IndexMap<CardId, T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let mut params = Params::new();
        params.insert("cards".to_string(), Value::from(cards.to_vec()));
        params.extend(extra);

        let exchange = self.exchange(action, Some(params)).await?;
        let values: Vec<Option<T>> = exchange.decode()?;

        if values.len() != cards.len() {
            warn!(%action, sent = cards.len(), received = values.len(), "result length mismatch");
            return Err(exchange.unexpected());
        }

        let mut found = IndexMap::with_capacity(values.len());
        let mut missing = Vec::new();
        for (card, value) in cards.iter().copied().zip(values) {
            match value {
                Some(value) => {
                    found.insert(card, value);
                }
                None => missing.push(card),
            }
        }
        if !missing.is_empty() {
            return Err(not_found("Card", &missing));
        }

        Ok(found)
    }

    /// Fetch info objects for `ids`; every requested ID must come back
    async fn lookup(
        &self,
        action: Action,
        key: &str,
        id_field: &str,
        kind: &'static str,
        ids: &[i64],
    ) -> Result<IndexMap<i64, Info>> {
        let mut params = Params::new();
        params.insert(key.to_string(), Value::from(ids.to_vec()));

        let exchange = self.exchange(action, Some(params)).await?;
        let entries: Vec<Info> = exchange.decode()?;

        // `{}` placeholders carry no ID and leave theirs missing
        let mut found = IndexMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(id) = entry.get(id_field).and_then(Value::as_i64) {
                found.insert(id, entry);
            }
        }

        let missing: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !found.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(not_found(kind, &missing));
        }

        Ok(found)
    }
}

/// `NotFound` naming each ID once, in request order
fn not_found(kind: &'static str, ids: &[i64]) -> Error {
    let mut missing: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.to_string();
        if !missing.contains(&id) {
            missing.push(id);
        }
    }
    Error::NotFound { kind, missing }
}

/// The single entry of a one-ID batch result
fn single<V>(map: IndexMap<i64, V>, id: i64, kind: &'static str) -> Result<V> {
    map.into_values().next().ok_or_else(|| Error::NotFound {
        kind,
        missing: vec![id.to_string()],
    })
}
