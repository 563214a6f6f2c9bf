use ankiconnect_core::{Model, ModelId, Template};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::action::Action;
use crate::anki::Anki;
use crate::error::Result;
use crate::protocol::params;
use crate::shape::numeric_id;

#[derive(Deserialize)]
struct Styling {
    css: String,
}

impl Anki {
    /// Names of every model
    pub async fn model_names(&self) -> Result<Vec<String>> {
        self.perform(Action::ModelNames, None, String::new).await
    }

    /// Field names of `model`, in order
    pub async fn model_field_names(&self, model: &str) -> Result<Vec<String>> {
        let params = params(json!({ "modelName": model }));
        self.perform(Action::ModelFieldNames, params, String::new).await
    }

    /// CSS shared by the cards of `model`
    pub async fn model_styling(&self, model: &str) -> Result<String> {
        let params = params(json!({ "modelName": model }));
        let styling: Styling = self.perform(Action::ModelStyling, params, String::new).await?;
        Ok(styling.css)
    }

    /// Card templates of `model`, in the order the remote lists them
    pub async fn model_templates(&self, model: &str) -> Result<Vec<Template>> {
        let params = params(json!({ "modelName": model }));
        let exchange = self.exchange(Action::ModelTemplates, params).await?;

        let Some(templates) = exchange.result().as_object() else {
            return Err(exchange.unexpected());
        };

        templates
            .iter()
            .map(|(name, sides)| {
                Template::from_sides(name.as_str(), sides).map_err(|_| exchange.unexpected())
            })
            .collect()
    }

    pub async fn update_model_styling(&self, model: &str, css: &str) -> Result<&Self> {
        let params = params(json!({
            "model": { "name": model, "css": css },
        }));
        self.run(Action::UpdateModelStyling, params, String::new).await
    }

    /// Replace the front and back of one template of `model`
    pub async fn update_model_template(&self, model: &str, template: &Template) -> Result<&Self> {
        self.update_model_templates(model, std::slice::from_ref(template))
            .await
    }

    /// Replace several templates of `model` in one call
    pub async fn update_model_templates(
        &self,
        model: &str,
        templates: &[Template],
    ) -> Result<&Self> {
        let templates: Map<String, Value> = templates
            .iter()
            .map(|template| (template.name().to_string(), template.sides()))
            .collect();

        let params = params(json!({
            "model": { "name": model, "templates": templates },
        }));
        self.run(Action::UpdateModelTemplates, params, String::new).await
    }

    /// Create `model` and return the ID the remote assigned to it
    pub async fn create_model(&self, model: &Model) -> Result<ModelId> {
        let exchange = self
            .exchange(Action::CreateModel, Some(model.to_params()))
            .await?;

        exchange
            .result()
            .get("id")
            .and_then(numeric_id)
            .ok_or_else(|| exchange.unexpected())
    }
}
