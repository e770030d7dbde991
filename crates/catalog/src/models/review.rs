//! Customer reviews.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefinder_core::{ReviewId, UserId};

/// A customer review of a product or store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review ID.
    pub id: ReviewId,
    /// Author of the review.
    pub user_id: UserId,
    /// The author's display name, snapshotted at submission time.
    ///
    /// Never re-synced if the user later renames themselves.
    pub user_name: String,
    /// Star rating. Seeded history may carry fractional values; new
    /// submissions are whole stars (see `storefinder_core::StarRating`).
    pub rating: Decimal,
    /// Free-text comment, possibly empty.
    pub comment: String,
    /// Submission timestamp.
    pub date: DateTime<Utc>,
}

/// Arithmetic mean of a review list's ratings.
///
/// `None` for an empty list: an entity without reviews has a "no reviews"
/// display state rather than a defined numeric mean.
#[must_use]
pub fn mean_rating(reviews: &[Review]) -> Option<Decimal> {
    if reviews.is_empty() {
        return None;
    }
    let sum: Decimal = reviews.iter().map(|r| r.rating).sum();
    Some(sum / Decimal::from(reviews.len()))
}
