//! Pure query operations over a catalog snapshot.
//!
//! Everything here is deterministic on the current catalog state and free of
//! side effects. Filters preserve catalog insertion order; ranked views use
//! a stable sort, so ties also resolve to insertion order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{Product, Review, Store, User};

/// An entity addressable by a typed ID.
///
/// Lets collection scans share one lookup implementation instead of
/// repeating the `find` per entity type.
pub trait Entity {
    /// The ID type of this entity.
    type Id: PartialEq;

    /// The entity's unique ID.
    fn id(&self) -> &Self::Id;
}

impl Entity for User {
    type Id = storefinder_core::UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Store {
    type Id = storefinder_core::StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Product {
    type Id = storefinder_core::ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Review {
    type Id = storefinder_core::ReviewId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Linear scan for an entity by ID.
///
/// A miss is a valid, expected outcome and yields `None`, never an error.
#[must_use]
pub fn find_by_id<'a, E: Entity>(collection: &'a [E], id: &E::Id) -> Option<&'a E> {
    collection.iter().find(|entity| entity.id() == id)
}

/// A category label with the number of products carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The category label, exactly as products carry it.
    pub name: String,
    /// How many products are in this category.
    pub product_count: usize,
}

impl Catalog {
    /// All products belonging to a store, in catalog insertion order.
    ///
    /// This is the derived store-to-products direction; `Product::store_id`
    /// is the authoritative association.
    #[must_use]
    pub fn products_by_store(&self, store_id: &storefinder_core::StoreId) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| &p.store_id == store_id)
            .collect()
    }

    /// All products with an exactly matching category label.
    ///
    /// Matching is case-sensitive: category labels come from the catalog
    /// itself (see [`Catalog::categories`]), not from free-text input.
    #[must_use]
    pub fn products_by_category(&self, category: &str) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Unique category labels, lexicographically sorted, with product counts.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for product in self.products() {
            *counts.entry(product.category.as_str()).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(name, product_count)| CategorySummary {
                name: name.to_owned(),
                product_count,
            })
            .collect()
    }

    /// The `limit` highest-rated stores.
    ///
    /// Stable sort on the derived rating, descending; stores without reviews
    /// rank last and ties keep seed order.
    #[must_use]
    pub fn top_rated_stores(&self, limit: usize) -> Vec<&Store> {
        let mut ranked: Vec<&Store> = self.stores().iter().collect();
        ranked.sort_by(|a, b| b.rating().cmp(&a.rating()));
        ranked.truncate(limit);
        ranked
    }

    /// The `limit` highest-rated products ("trending" on the home page).
    #[must_use]
    pub fn trending_products(&self, limit: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products().iter().collect();
        ranked.sort_by(|a, b| b.rating().cmp(&a.rating()));
        ranked.truncate(limit);
        ranked
    }
}
