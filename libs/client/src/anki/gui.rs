use ankiconnect_core::{CardId, Note, NoteId};
use serde::Serialize;
use serde_json::json;

use crate::action::Action;
use crate::anki::{Anki, Info};
use crate::error::Result;
use crate::protocol::params;

/// Answer button of the reviewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Again = 1,
    Hard = 2,
    Good = 3,
    Easy = 4,
}

impl Serialize for Ease {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

impl Anki {
    /// Open the card browser on `query`; returns the matching cards
    pub async fn gui_browse(&self, query: &str) -> Result<Vec<CardId>> {
        let params = params(json!({ "query": query }));
        self.perform(Action::GuiBrowse, params, String::new).await
    }

    /// Open the Add Cards dialog prefilled with `note`
    pub async fn gui_add_cards(&self, note: &Note) -> Result<NoteId> {
        let params = params(json!({ "note": note }));
        self.perform(Action::GuiAddCards, params, String::new).await
    }

    /// Card under review, or `None` when the reviewer is not open
    pub async fn gui_current_card(&self) -> Result<Option<Info>> {
        self.perform(Action::GuiCurrentCard, None, String::new)
            .await
    }

    pub async fn gui_show_question(&self) -> Result<&Self> {
        self.run(Action::GuiShowQuestion, None, String::new).await
    }

    pub async fn gui_show_answer(&self) -> Result<&Self> {
        self.run(Action::GuiShowAnswer, None, String::new).await
    }

    /// Answer the current card; the answer must be showing
    pub async fn gui_answer_card(&self, ease: Ease) -> Result<&Self> {
        let params = params(json!({ "ease": ease }));
        self.run(Action::GuiAnswerCard, params, || format!("{ease:?}"))
            .await
    }

    /// Close Anki; the remote answers before it exits
    pub async fn gui_exit_anki(&self) -> Result<&Self> {
        self.run(Action::GuiExitAnki, None, String::new).await
    }
}
