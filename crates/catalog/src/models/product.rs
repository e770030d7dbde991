//! Products listed by local stores.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefinder_core::{Price, ProductId, StoreId};

use super::review::{Review, mean_rating};

/// A product stocked by a local store.
///
/// `store_id` is the authoritative product-to-store association; the reverse
/// direction is derived by the query layer rather than stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Listed price.
    pub price: Price,
    /// Free-text category label (e.g., "Electronics").
    pub category: String,
    /// Optional product image URL.
    pub image: Option<String>,
    /// Units currently in stock.
    pub in_stock: u32,
    /// The store this product belongs to.
    pub store_id: StoreId,
    /// Reviews, most recent first.
    pub reviews: Vec<Review>,
}

impl Product {
    /// Derived rating: the arithmetic mean of all review ratings, or `None`
    /// when the product has no reviews yet.
    #[must_use]
    pub fn rating(&self) -> Option<Decimal> {
        mean_rating(&self.reviews)
    }

    /// Whether at least one unit is in stock.
    #[must_use]
    pub const fn is_in_stock(&self) -> bool {
        self.in_stock > 0
    }
}
