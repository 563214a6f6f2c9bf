use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Media the remote downloads and attaches to a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audio {
    pub url: String,
    pub filename: String,
    /// Skip the download when its MD5 matches (filters out error pages and stubs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_hash: Option<String>,
    /// Fields that play the audio
    #[serde(default)]
    pub fields: Vec<String>,
}

impl Audio {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
            skip_hash: None,
            fields: Vec::new(),
        }
    }

    pub fn skip_hash(mut self, hash: impl Into<String>) -> Self {
        self.skip_hash = Some(hash.into());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }
}

/// Where the remote looks for duplicates of a new note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateScope {
    Deck,
    Collection,
}

impl DuplicateScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deck => "deck",
            Self::Collection => "collection",
        }
    }
}

/// A note to be added: target deck and model, field values and extras
///
/// Only non-empty attributes reach the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip_serializing_if = "String::is_empty")]
    deck_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    model_name: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    fields: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    options: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    audio: Vec<Audio>,
}

impl Note {
    pub fn new<K, V>(
        deck_name: impl Into<String>,
        model_name: impl Into<String>,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            deck_name: deck_name.into(),
            model_name: model_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            options: Map::new(),
            tags: Vec::new(),
            audio: Vec::new(),
        }
    }

    /// Replace the tag set; repeated tags are kept once
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    /// Set an option; unrecognized keys are passed through as given
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn allow_duplicate(self, allow: bool) -> Self {
        self.with_option("allowDuplicate", allow)
    }

    pub fn duplicate_scope(self, scope: DuplicateScope) -> Self {
        self.with_option("duplicateScope", scope.as_str())
    }

    pub fn close_after_adding(self, close: bool) -> Self {
        self.with_option("closeAfterAdding", close)
    }

    pub fn with_audio(mut self, audio: impl IntoIterator<Item = Audio>) -> Self {
        self.audio = audio.into_iter().collect();
        self
    }

    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn audio(&self) -> &[Audio] {
        &self.audio
    }
}
