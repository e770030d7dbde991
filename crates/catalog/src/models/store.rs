//! Local stores in the directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefinder_core::{Email, StoreId};

use super::review::{Review, mean_rating};

/// A local store.
///
/// Which products a store carries is not stored here; it is derived from
/// `Product::store_id` by the query layer, so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Display name.
    pub name: String,
    /// Short blurb shown on store cards.
    pub description: String,
    /// Optional logo image URL.
    pub logo: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
    /// Contact phone number, free-form.
    pub phone: String,
    /// Contact email.
    pub email: Email,
    /// Optional website, without scheme.
    pub website: Option<String>,
    /// Reviews, most recent first.
    pub reviews: Vec<Review>,
    /// Precomputed distance from the user in km. Not derived in-system.
    pub distance_km: Option<f64>,
}

impl Store {
    /// Derived rating: the arithmetic mean of all review ratings, or `None`
    /// when the store has no reviews yet.
    #[must_use]
    pub fn rating(&self) -> Option<Decimal> {
        mean_rating(&self.reviews)
    }

    /// "City, ST" label shown on store cards.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_location_label() {
        let store = Store {
            id: StoreId::new("store-test"),
            name: "Test Store".to_owned(),
            description: String::new(),
            logo: None,
            address: "1 Test Way".to_owned(),
            city: "Austin".to_owned(),
            state: "TX".to_owned(),
            zip_code: "78701".to_owned(),
            phone: "(512) 555-0000".to_owned(),
            email: Email::parse("test@example.com").unwrap(),
            website: None,
            reviews: Vec::new(),
            distance_km: None,
        };
        assert_eq!(store.location(), "Austin, TX");
        assert_eq!(store.rating(), None);
    }
}
