use ankiconnect_core::Review;
use serde_json::json;

use crate::action::Action;
use crate::anki::Anki;
use crate::error::Result;
use crate::protocol::params;

impl Anki {
    /// Number of cards reviewed today
    pub async fn num_cards_reviewed_today(&self) -> Result<u64> {
        self.perform(Action::GetNumCardsReviewedToday, None, String::new)
            .await
    }

    /// Reviews of `deck` logged after `start_id` (a millisecond timestamp)
    pub async fn card_reviews(&self, deck: &str, start_id: i64) -> Result<Vec<Review>> {
        let params = params(json!({ "deck": deck, "startID": start_id }));
        self.perform(Action::CardReviews, params, String::new).await
    }

    /// Timestamp of the most recent review of `deck`, 0 when there is none
    pub async fn latest_review_id(&self, deck: &str) -> Result<i64> {
        let params = params(json!({ "deck": deck }));
        self.perform(Action::GetLatestReviewId, params, String::new)
            .await
    }

    /// Append entries to the review log, in order
    pub async fn insert_reviews(&self, reviews: &[Review]) -> Result<&Self> {
        let params = params(json!({ "reviews": reviews }));
        self.run(Action::InsertReviews, params, String::new).await
    }
}
