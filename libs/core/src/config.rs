use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::ConfigId;

/// A deck configuration group
///
/// Holds the full payload returned by the remote so that it can be sent back
/// unchanged (apart from edits made through [`Config::config_mut`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    id: ConfigId,
    config: Value,
}

impl Config {
    /// Wrap a configuration object; it must carry an integer `id`
    pub fn new(config: Value) -> Result<Self> {
        let id = config
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::validation(format!("Invalid config: {config}")))?;

        Ok(Self { id, config })
    }

    pub fn id(&self) -> ConfigId {
        self.id
    }

    pub fn config(&self) -> &Value {
        &self.config
    }

    /// Mutable access to the payload, excluding the `id`
    pub fn config_mut(&mut self) -> ConfigPayload<'_> {
        ConfigPayload { config: self }
    }

    pub fn into_inner(self) -> Value {
        self.config
    }
}

/// Mutable view over a [`Config`] payload that keeps its `id` intact
pub struct ConfigPayload<'a> {
    config: &'a mut Config,
}

impl ConfigPayload<'_> {
    /// Set a top-level key; `id` cannot be replaced
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        if key == "id" {
            return Err(Error::validation("Config id is immutable"));
        }
        if let Value::Object(map) = &mut self.config.config {
            map.insert(key.to_string(), value);
        }
        Ok(())
    }

    /// Mutable access to a top-level key other than `id`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        if key == "id" {
            return None;
        }
        self.config.config.get_mut(key)
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.config.serialize(serializer)
    }
}

impl TryFrom<Value> for Config {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(value)
    }
}
