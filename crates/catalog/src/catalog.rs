//! The in-memory catalog store.
//!
//! A [`Catalog`] owns the full entity set for one page session. It is seeded
//! with the fixed corpus at construction; there is no persistence, so
//! constructing a fresh catalog is the "page reload" that reverts every
//! mutation back to the baseline.

use tracing::info;

use storefinder_core::{Email, ProductId, StoreId, UserId};

use crate::models::{Product, Store, User};
use crate::{query, seed};

/// The full in-memory set of users, stores, and products.
///
/// Collections keep their seed insertion order; filter results are expected
/// to preserve it.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    stores: Vec<Store>,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog populated with the fixed seed corpus.
    #[must_use]
    pub fn seeded() -> Self {
        let catalog = Self {
            users: seed::users(),
            stores: seed::stores(),
            products: seed::products(),
        };
        info!(
            users = catalog.users.len(),
            stores = catalog.stores.len(),
            products = catalog.products.len(),
            "Seeded catalog"
        );
        catalog
    }

    /// All users, in seed order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All stores, in seed order.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID. Missing IDs are an expected outcome (e.g., a
    /// deep link to a removed product), not an error.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        query::find_by_id(&self.products, id)
    }

    /// Look up a store by ID.
    #[must_use]
    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        query::find_by_id(&self.stores, id)
    }

    /// Look up a user by ID.
    #[must_use]
    pub fn user(&self, id: &UserId) -> Option<&User> {
        query::find_by_id(&self.users, id)
    }

    /// Look up a user by email, the sign-in identity key.
    #[must_use]
    pub fn user_by_email(&self, email: &Email) -> Option<&User> {
        self.users.iter().find(|u| &u.email == email)
    }

    /// Mutable product lookup, for review submission.
    #[must_use]
    pub fn product_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| &p.id == id)
    }

    /// Mutable store lookup, for review submission.
    #[must_use]
    pub fn store_mut(&mut self, id: &StoreId) -> Option<&mut Store> {
        self.stores.iter_mut().find(|s| &s.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
