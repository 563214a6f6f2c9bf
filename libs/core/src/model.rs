use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};

/// A card template: front and back markup under a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Front")]
    front: String,
    #[serde(rename = "Back")]
    back: String,
}

impl Template {
    pub fn new(name: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    /// Build from the `{Front, Back}` pair the remote keys by template name
    pub fn from_sides(name: impl Into<String>, sides: &Value) -> Result<Self> {
        let name = name.into();
        let side = |key: &str| {
            sides
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| Error::validation(format!("Template {name:?} has no {key} side")))
        };

        Ok(Self {
            front: side("Front")?,
            back: side("Back")?,
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    /// The `{Front, Back}` object used when templates are keyed by name
    pub fn sides(&self) -> Value {
        json!({ "Front": self.front, "Back": self.back })
    }
}

impl TryFrom<&Value> for Template {
    type Error = Error;

    /// Parse a `{Name, Front, Back}` object
    fn try_from(value: &Value) -> Result<Self> {
        let name = value
            .get("Name")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::validation(format!("Not a template: {value}")))?;

        Self::from_sides(name, value)
    }
}

/// A note type: ordered fields, card templates and optional styling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    name: String,
    fields: Vec<String>,
    templates: Vec<Template>,
    css: Option<String>,
}

impl Model {
    /// Build a model, checking that every template is usable
    ///
    /// Template names must be non-empty and unique within the model since
    /// the remote addresses templates by name.
    pub fn new(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
        templates: impl IntoIterator<Item = Template>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation("Model name must not be empty"));
        }

        let templates: Vec<Template> = templates.into_iter().collect();
        let mut seen = HashSet::new();
        for template in &templates {
            if template.name.is_empty() {
                return Err(Error::validation(format!(
                    "Model {name:?} has a template without a name"
                )));
            }
            if !seen.insert(template.name.as_str()) {
                return Err(Error::validation(format!(
                    "Model {name:?} has duplicate template {:?}",
                    template.name
                )));
            }
        }

        Ok(Self {
            name,
            fields: fields.into_iter().map(Into::into).collect(),
            templates,
            css: None,
        })
    }

    /// Build a model from template objects of unknown shape
    pub fn from_values<'a>(
        name: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
        templates: impl IntoIterator<Item = &'a Value>,
    ) -> Result<Self> {
        let templates = templates
            .into_iter()
            .map(Template::try_from)
            .collect::<Result<Vec<_>>>()?;

        Self::new(name, fields, templates)
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = Some(css.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Params for the `createModel` action
    pub fn to_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("modelName".to_string(), json!(self.name));
        params.insert("inOrderFields".to_string(), json!(self.fields));
        if let Some(css) = self.css.as_deref().filter(|css| !css.is_empty()) {
            params.insert("css".to_string(), json!(css));
        }
        params.insert("cardTemplates".to_string(), json!(self.templates));
        params
    }
}
