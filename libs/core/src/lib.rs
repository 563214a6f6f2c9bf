//! AnkiConnect Core - value types shared by the client
//!
//! Small immutable records with their wire serialization: [`Note`],
//! [`Model`], [`Template`], [`Review`] and [`Config`].

pub mod config;
pub mod error;
pub mod model;
pub mod note;
pub mod review;

pub use config::{Config, ConfigPayload};
pub use error::{Error, Result};
pub use model::{Model, Template};
pub use note::{Audio, DuplicateScope, Note};
pub use review::Review;

pub type CardId = i64;
pub type NoteId = i64;
pub type DeckId = i64;
pub type ModelId = i64;
pub type ConfigId = i64;
