use ankiconnect_core::CardId;
use indexmap::IndexMap;
use serde_json::json;

use crate::action::Action;
use crate::anki::{single, Anki, Info};
use crate::error::Result;
use crate::protocol::{params, Params};

const SECONDS_PER_DAY: u64 = 86_400;

/// Convert a raw interval to seconds
///
/// The remote reports learning intervals as negative seconds and review
/// intervals as positive days.
pub fn interval_seconds(raw: i64) -> u64 {
    if raw < 0 {
        raw.unsigned_abs()
    } else {
        (raw as u64).saturating_mul(SECONDS_PER_DAY)
    }
}

impl Anki {
    /// Ease factor of each card
    pub async fn ease_factors(&self, cards: &[CardId]) -> Result<IndexMap<CardId, i64>> {
        self.zip(Action::GetEaseFactors, cards, Params::new()).await
    }

    pub async fn ease_factor(&self, card: CardId) -> Result<i64> {
        single(self.ease_factors(&[card]).await?, card, "Card")
    }

    /// Set the ease factor of each card; `factors[i]` applies to `cards[i]`
    pub async fn set_ease_factors(&self, cards: &[CardId], factors: &[i64]) -> Result<&Self> {
        if cards.len() != factors.len() {
            return Err(ankiconnect_core::Error::validation(format!(
                "{} cards but {} ease factors",
                cards.len(),
                factors.len()
            ))
            .into());
        }

        let params = params(json!({ "cards": cards, "easeFactors": factors }));
        self.run(Action::SetEaseFactors, params, String::new).await
    }

    pub async fn set_ease_factor(&self, card: CardId, factor: i64) -> Result<&Self> {
        self.set_ease_factors(&[card], &[factor]).await
    }

    pub async fn suspend(&self, cards: &[CardId]) -> Result<&Self> {
        self.run(Action::Suspend, params(json!({ "cards": cards })), String::new)
            .await
    }

    pub async fn unsuspend(&self, cards: &[CardId]) -> Result<&Self> {
        self.run(Action::Unsuspend, params(json!({ "cards": cards })), String::new)
            .await
    }

    /// Whether each card is suspended
    pub async fn are_suspended(&self, cards: &[CardId]) -> Result<IndexMap<CardId, bool>> {
        self.zip(Action::AreSuspended, cards, Params::new()).await
    }

    pub async fn is_suspended(&self, card: CardId) -> Result<bool> {
        single(self.are_suspended(&[card]).await?, card, "Card")
    }

    /// Whether each card is due
    pub async fn are_due(&self, cards: &[CardId]) -> Result<IndexMap<CardId, bool>> {
        self.zip(Action::AreDue, cards, Params::new()).await
    }

    pub async fn is_due(&self, card: CardId) -> Result<bool> {
        single(self.are_due(&[card]).await?, card, "Card")
    }

    /// Complete interval history of each card, in seconds
    pub async fn intervals(&self, cards: &[CardId]) -> Result<IndexMap<CardId, Vec<u64>>> {
        let mut params = Params::new();
        params.insert("complete".to_string(), true.into());

        let raw: IndexMap<CardId, Vec<i64>> = self.zip(Action::GetIntervals, cards, params).await?;

        Ok(raw
            .into_iter()
            .map(|(card, intervals)| {
                let seconds = intervals.into_iter().map(interval_seconds).collect();
                (card, seconds)
            })
            .collect())
    }

    pub async fn card_intervals(&self, card: CardId) -> Result<Vec<u64>> {
        single(self.intervals(&[card]).await?, card, "Card")
    }

    /// IDs of the cards matching a search query
    pub async fn find_cards(&self, query: &str) -> Result<Vec<CardId>> {
        let params = params(json!({ "query": query }));
        self.perform(Action::FindCards, params, String::new).await
    }

    /// Info objects keyed by card ID; fails when any card does not exist
    pub async fn cards_info(&self, cards: &[CardId]) -> Result<IndexMap<CardId, Info>> {
        self.lookup(Action::CardsInfo, "cards", "cardId", "Card", cards)
            .await
    }

    pub async fn card_info(&self, card: CardId) -> Result<Info> {
        single(self.cards_info(&[card]).await?, card, "Card")
    }
}
