//! Review submission and rating aggregation.
//!
//! Reviews can be written for products and stores alike; [`Reviewable`]
//! abstracts over the two. Submission prepends (newest first) and the
//! derived mean rating reflects the new review immediately. Reviews are
//! never edited or deleted.

use chrono::Utc;
use tracing::info;

use storefinder_core::{ReviewId, StarRating};

use crate::models::{Product, Review, Store};
use crate::session::CurrentUser;

/// An entity that carries customer reviews.
pub trait Reviewable {
    /// Reviews, most recent first.
    fn reviews(&self) -> &[Review];

    /// Mutable review list, for submission only.
    fn reviews_mut(&mut self) -> &mut Vec<Review>;
}

impl Reviewable for Product {
    fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    fn reviews_mut(&mut self) -> &mut Vec<Review> {
        &mut self.reviews
    }
}

impl Reviewable for Store {
    fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    fn reviews_mut(&mut self) -> &mut Vec<Review> {
        &mut self.reviews
    }
}

/// Submit a review to a product or store.
///
/// Builds a [`Review`] with a fresh identifier, the current timestamp, and a
/// snapshot of the author's display name, then prepends it so the newest
/// review is always first. The single synchronous `&mut` mutation keeps the
/// read-modify-write of the rating mean atomic per entity.
///
/// The rating arrives pre-validated as a [`StarRating`]; the comment may be
/// empty. Returns the new review's ID.
pub fn submit_review<T: Reviewable>(
    target: &mut T,
    rating: StarRating,
    comment: impl Into<String>,
    author: &CurrentUser,
) -> ReviewId {
    let review = Review {
        id: ReviewId::generate(),
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        rating: rating.as_decimal(),
        comment: comment.into(),
        date: Utc::now(),
    };
    let id = review.id.clone();

    info!(
        review = %id,
        author = %author.id,
        stars = rating.stars(),
        "Review submitted"
    );

    target.reviews_mut().insert(0, review);
    id
}
