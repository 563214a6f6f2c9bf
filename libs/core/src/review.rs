use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::CardId;

/// Number of positions in the wire form of a review
pub const REVIEW_LEN: usize = 9;

/// One entry of a card's review log
///
/// On the wire a review is a positional array in exactly this field order:
/// `[reviewTime, cardId, usn, buttonPressed, newInterval, previousInterval,
/// newFactor, reviewDuration, reviewType]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Review {
    /// Review timestamp in milliseconds, also the review ID
    pub review_time: i64,
    pub card_id: CardId,
    pub usn: i64,
    pub button_pressed: i64,
    /// Negative values are seconds, positive values days
    pub new_interval: i64,
    pub previous_interval: i64,
    pub new_factor: i64,
    /// Milliseconds spent on the review
    pub review_duration: i64,
    pub review_type: i64,
}

impl Review {
    /// Build from the positional wire order
    pub fn from_array(values: [i64; REVIEW_LEN]) -> Self {
        let [
            review_time,
            card_id,
            usn,
            button_pressed,
            new_interval,
            previous_interval,
            new_factor,
            review_duration,
            review_type,
        ] = values;

        Self {
            review_time,
            card_id,
            usn,
            button_pressed,
            new_interval,
            previous_interval,
            new_factor,
            review_duration,
            review_type,
        }
    }

    /// The positional wire order
    pub fn to_array(&self) -> [i64; REVIEW_LEN] {
        [
            self.review_time,
            self.card_id,
            self.usn,
            self.button_pressed,
            self.new_interval,
            self.previous_interval,
            self.new_factor,
            self.review_duration,
            self.review_type,
        ]
    }
}

impl From<[i64; REVIEW_LEN]> for Review {
    fn from(values: [i64; REVIEW_LEN]) -> Self {
        Self::from_array(values)
    }
}

impl Serialize for Review {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(REVIEW_LEN))?;
        for value in self.to_array() {
            seq.serialize_element(&value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Review {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReviewVisitor;

        impl<'de> Visitor<'de> for ReviewVisitor {
            type Value = Review;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "an array of {REVIEW_LEN} integers")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Review, A::Error> {
                let mut values = [0i64; REVIEW_LEN];
                for (index, slot) in values.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(index, &self))?;
                }
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(REVIEW_LEN + 1, &self));
                }
                Ok(Review::from_array(values))
            }
        }

        deserializer.deserialize_seq(ReviewVisitor)
    }
}
