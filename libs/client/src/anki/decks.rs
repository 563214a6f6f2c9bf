use ankiconnect_core::{CardId, Config, ConfigId, DeckId};
use serde_json::json;

use crate::action::Action;
use crate::anki::Anki;
use crate::error::Result;
use crate::protocol::params;
use crate::shape::numeric_id;

impl Anki {
    /// Names of every deck
    pub async fn deck_names(&self) -> Result<Vec<String>> {
        self.perform(Action::DeckNames, None, String::new).await
    }

    /// Create `deck` (no-op when it exists) and return its ID
    pub async fn create_deck(&self, deck: &str) -> Result<DeckId> {
        let exchange = self
            .exchange(Action::CreateDeck, params(json!({ "deck": deck })))
            .await?;

        numeric_id(exchange.result()).ok_or_else(|| exchange.unexpected())
    }

    /// Move `cards` into `deck`, creating the deck if needed
    pub async fn change_deck(&self, cards: &[CardId], deck: &str) -> Result<&Self> {
        let params = params(json!({ "cards": cards, "deck": deck }));
        self.run(Action::ChangeDeck, params, String::new).await
    }

    pub async fn delete_deck(&self, deck: &str, cards_too: bool) -> Result<&Self> {
        self.delete_decks(&[deck], cards_too).await
    }

    /// Delete `decks`; `cards_too` also deletes the cards they contain
    pub async fn delete_decks(&self, decks: &[&str], cards_too: bool) -> Result<&Self> {
        let params = params(json!({ "decks": decks, "cardsToo": cards_too }));
        self.run(Action::DeleteDecks, params, String::new).await
    }

    /// Configuration group used by `deck`
    pub async fn deck_config(&self, deck: &str) -> Result<Config> {
        let exchange = self
            .exchange(Action::GetDeckConfig, params(json!({ "deck": deck })))
            .await?;

        Ok(Config::new(exchange.into_result())?)
    }

    /// Assign configuration group `config_id` to `deck`
    pub async fn set_deck_config(&self, deck: &str, config_id: ConfigId) -> Result<&Self> {
        let params = params(json!({ "decks": [deck], "configId": config_id }));
        self.run(Action::SetDeckConfigId, params, || format!("{deck}: {config_id}"))
            .await
    }

    /// Write back a configuration group, usually one read with [`Anki::deck_config`]
    pub async fn save_deck_config(&self, config: &Config) -> Result<&Self> {
        let params = params(json!({ "config": config }));
        self.run(Action::SaveDeckConfig, params, || config.id().to_string())
            .await
    }

    /// Copy configuration group `config_id` under `name`; returns the new group's ID
    pub async fn clone_deck_config(&self, config_id: ConfigId, name: &str) -> Result<ConfigId> {
        let params = params(json!({ "name": name, "cloneFrom": config_id }));
        self.perform(Action::CloneDeckConfigId, params, || config_id.to_string())
            .await
    }

    /// Delete configuration group `config_id`
    pub async fn remove_deck_config(&self, config_id: ConfigId) -> Result<&Self> {
        let params = params(json!({ "configId": config_id }));
        self.run(Action::RemoveDeckConfigId, params, || config_id.to_string())
            .await
    }
}
