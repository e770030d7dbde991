//! Free-text search across products and stores.
//!
//! Search is substring containment, not tokenized or ranked: the query and
//! every haystack field are lowercased and results keep catalog order.
//! Products match on name, description, or category; stores match on name,
//! description, city, or state. The two entity types match independently:
//! a store can match without any of its products matching, and vice versa.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{Product, Store};

/// Products and stores matching a search query, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching products.
    pub products: Vec<Product>,
    /// Matching stores.
    pub stores: Vec<Store>,
}

impl SearchResults {
    /// Apply refinement filters to the product half of the results.
    ///
    /// Stores are passed through untouched; the refinement panel only
    /// narrows products.
    #[must_use]
    pub fn refine(self, filters: &SearchFilters) -> Self {
        let products = self
            .products
            .into_iter()
            .filter(|p| filters.matches(p))
            .collect();
        Self {
            products,
            stores: self.stores,
        }
    }
}

/// Post-search refinement over product results.
///
/// The default filter admits everything; each populated field narrows the
/// result set further.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Lower price bound, inclusive.
    pub min_price: Option<Decimal>,
    /// Upper price bound, inclusive.
    pub max_price: Option<Decimal>,
    /// Admit only these category labels (exact match). `None` admits all.
    pub categories: Option<Vec<String>>,
    /// Admit only products with stock on hand.
    pub in_stock_only: bool,
}

impl SearchFilters {
    /// Whether a product passes every populated filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = self.min_price
            && product.price.amount < min
        {
            return false;
        }
        if let Some(max) = self.max_price
            && product.price.amount > max
        {
            return false;
        }
        if let Some(categories) = &self.categories
            && !categories.iter().any(|c| c == &product.category)
        {
            return false;
        }
        if self.in_stock_only && !product.is_in_stock() {
            return false;
        }
        true
    }
}

fn product_matches(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
        || product.category.to_lowercase().contains(term)
}

fn store_matches(store: &Store, term: &str) -> bool {
    store.name.to_lowercase().contains(term)
        || store.description.to_lowercase().contains(term)
        || store.city.to_lowercase().contains(term)
        || store.state.to_lowercase().contains(term)
}

impl Catalog {
    /// Search products and stores for a free-text query.
    ///
    /// An empty or whitespace-only query returns the full unfiltered catalog
    /// for both entity types. That is the deliberate browse-everything
    /// default, not a "no results" case.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults {
        let term = query.trim().to_lowercase();

        if term.is_empty() {
            return SearchResults {
                products: self.products().to_vec(),
                stores: self.stores().to_vec(),
            };
        }

        let products: Vec<Product> = self
            .products()
            .iter()
            .filter(|p| product_matches(p, &term))
            .cloned()
            .collect();
        let stores: Vec<Store> = self
            .stores()
            .iter()
            .filter(|s| store_matches(s, &term))
            .cloned()
            .collect();

        debug!(
            query = %term,
            products = products.len(),
            stores = stores.len(),
            "Catalog search"
        );

        SearchResults { products, stores }
    }
}
