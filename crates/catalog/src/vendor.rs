//! Vendor dashboard: session-scoped catalog editing.
//!
//! A dashboard is opened from a signed-in vendor session and works on its
//! own copy of the vendor's product list. Creates, updates, and deletes are
//! visible only through the dashboard and evaporate with it; the seeded
//! catalog baseline is never modified.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use storefinder_core::{Price, ProductId, StoreId};

use crate::catalog::Catalog;
use crate::models::{Product, Store};
use crate::session::Session;

/// Errors from vendor dashboard operations.
#[derive(Debug, Error)]
pub enum VendorError {
    /// The session is anonymous or the user is not a vendor.
    #[error("vendor dashboard requires a signed-in vendor")]
    NotVendor,

    /// The vendor has no store assigned.
    #[error("vendor has no store assigned")]
    NoStoreAssigned,

    /// The vendor's store ID does not exist in the catalog.
    #[error("store not found: {0}")]
    StoreNotFound(StoreId),

    /// The product is not in this dashboard's working list.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

/// Editable product fields, as captured by the dashboard form.
///
/// Identity, store association, and review history are never part of the
/// draft; they are assigned by the dashboard itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Listed price.
    pub price: Price,
    /// Free-text category label.
    pub category: String,
    /// Units in stock.
    pub in_stock: u32,
    /// Optional product image URL.
    pub image: Option<String>,
}

/// Overview numbers for the dashboard's stat cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Products in the working list.
    pub total_products: usize,
    /// Products with stock on hand.
    pub in_stock_products: usize,
    /// Σ price × units in stock, in the catalog currency.
    pub inventory_value: Decimal,
    /// Review count of the vendor's store.
    pub store_review_count: usize,
}

/// A vendor's catalog-editing session.
#[derive(Debug, Clone)]
pub struct VendorDashboard {
    store: Store,
    products: Vec<Product>,
}

impl VendorDashboard {
    /// Open the dashboard for the signed-in vendor.
    ///
    /// Snapshots the vendor's store and its products out of the catalog;
    /// subsequent edits touch only this snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::NotVendor`] for anonymous or non-vendor
    /// sessions, [`VendorError::NoStoreAssigned`] for a vendor without a
    /// store, and [`VendorError::StoreNotFound`] if the assignment points at
    /// a store the catalog does not have.
    pub fn open(session: &Session, catalog: &Catalog) -> Result<Self, VendorError> {
        let user = session.current_user().ok_or(VendorError::NotVendor)?;
        if !user.role.is_vendor() {
            return Err(VendorError::NotVendor);
        }
        let store_id = user.store_id.as_ref().ok_or(VendorError::NoStoreAssigned)?;
        let store = catalog
            .store(store_id)
            .ok_or_else(|| VendorError::StoreNotFound(store_id.clone()))?
            .clone();

        let products: Vec<Product> = catalog
            .products_by_store(store_id)
            .into_iter()
            .cloned()
            .collect();

        info!(store = %store.id, products = products.len(), "Opened vendor dashboard");
        Ok(Self { store, products })
    }

    /// The vendor's store, as snapshotted at open time.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The working product list, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Add a new product from a draft.
    ///
    /// The product gets a freshly minted ID, is associated to the vendor's
    /// store, and starts with no reviews. Returns the new ID.
    pub fn create_product(&mut self, draft: ProductDraft) -> ProductId {
        let id = ProductId::generate();
        self.products.push(Product {
            id: id.clone(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            image: draft.image,
            in_stock: draft.in_stock,
            store_id: self.store.id.clone(),
            reviews: Vec::new(),
        });
        info!(product = %id, store = %self.store.id, "Created product");
        id
    }

    /// Replace a product's draft fields, keeping its identity, store
    /// association, and review history (and therefore its derived rating).
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::ProductNotFound`] if the ID is not in the
    /// working list.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<(), VendorError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| VendorError::ProductNotFound(id.clone()))?;

        product.name = draft.name;
        product.description = draft.description;
        product.price = draft.price;
        product.category = draft.category;
        product.image = draft.image;
        product.in_stock = draft.in_stock;

        info!(product = %id, "Updated product");
        Ok(())
    }

    /// Remove a product after interactive confirmation.
    ///
    /// `confirm` is the blocking yes/no prompt collaborator; it receives the
    /// product about to be removed. Declining leaves the list unchanged and
    /// returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::ProductNotFound`] if the ID is not in the
    /// working list.
    pub fn delete_product(
        &mut self,
        id: &ProductId,
        confirm: impl FnOnce(&Product) -> bool,
    ) -> Result<bool, VendorError> {
        let index = self
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| VendorError::ProductNotFound(id.clone()))?;

        match self.products.get(index) {
            Some(product) if confirm(product) => {
                self.products.remove(index);
                info!(product = %id, "Deleted product");
                Ok(true)
            }
            _ => {
                info!(product = %id, "Delete declined");
                Ok(false)
            }
        }
    }

    /// Overview numbers for the dashboard's stat cards.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        let inventory_value = self
            .products
            .iter()
            .map(|p| p.price.amount * Decimal::from(p.in_stock))
            .sum();

        DashboardStats {
            total_products: self.products.len(),
            in_stock_products: self.products.iter().filter(|p| p.is_in_stock()).count(),
            inventory_value,
            store_review_count: self.store.reviews.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn vendor_session(catalog: &Catalog, email: &str) -> Session {
        let mut session = Session::anonymous();
        assert!(session.login(catalog, email));
        session
    }

    fn draft(name: &str, cents: i64, in_stock: u32) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            description: String::new(),
            price: Price::from_cents(cents),
            category: "Electronics".to_owned(),
            in_stock,
            image: None,
        }
    }

    #[test]
    fn test_open_requires_a_vendor() {
        let catalog = Catalog::seeded();

        let anonymous = Session::anonymous();
        assert!(matches!(
            VendorDashboard::open(&anonymous, &catalog),
            Err(VendorError::NotVendor)
        ));

        let customer = vendor_session(&catalog, "john@example.com");
        assert!(matches!(
            VendorDashboard::open(&customer, &catalog),
            Err(VendorError::NotVendor)
        ));
    }

    #[test]
    fn test_open_snapshots_store_products() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "bob@example.com");

        let dashboard = VendorDashboard::open(&session, &catalog).unwrap();
        assert_eq!(dashboard.store().id, StoreId::new("store-2"));
        let ids: Vec<&str> = dashboard.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["product-3", "product-4"]);
    }

    #[test]
    fn test_create_associates_vendor_store() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "jane@example.com");
        let mut dashboard = VendorDashboard::open(&session, &catalog).unwrap();

        let before = dashboard.products().len();
        let id = dashboard.create_product(draft("USB-C Hub", 4999, 6));

        let created = dashboard.products().last().unwrap();
        assert_eq!(dashboard.products().len(), before + 1);
        assert_eq!(created.id, id);
        assert_eq!(created.store_id, StoreId::new("store-1"));
        assert!(created.reviews.is_empty());
        assert_eq!(created.rating(), None);
    }

    #[test]
    fn test_update_keeps_reviews_and_rating() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "bob@example.com");
        let mut dashboard = VendorDashboard::open(&session, &catalog).unwrap();

        let id = ProductId::new("product-3");
        let rating_before = dashboard.products()[0].rating();
        dashboard
            .update_product(&id, draft("Modern Sofa XL", 99999, 2))
            .unwrap();

        let updated = dashboard.products().iter().find(|p| p.id == id).unwrap();
        assert_eq!(updated.name, "Modern Sofa XL");
        assert_eq!(updated.price, Price::from_cents(99999));
        assert_eq!(updated.reviews.len(), 1);
        assert_eq!(updated.rating(), rating_before);
    }

    #[test]
    fn test_update_unknown_product() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "bob@example.com");
        let mut dashboard = VendorDashboard::open(&session, &catalog).unwrap();

        assert!(matches!(
            dashboard.update_product(&ProductId::new("product-999"), draft("X", 1, 1)),
            Err(VendorError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_delete_honors_confirmation() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "bob@example.com");
        let mut dashboard = VendorDashboard::open(&session, &catalog).unwrap();

        let id = ProductId::new("product-4");

        // Declined: nothing happens.
        assert!(!dashboard.delete_product(&id, |_| false).unwrap());
        assert_eq!(dashboard.products().len(), 2);

        // Confirmed: removed from the working list only.
        assert!(dashboard.delete_product(&id, |_| true).unwrap());
        assert_eq!(dashboard.products().len(), 1);
        assert!(matches!(
            dashboard.delete_product(&id, |_| true),
            Err(VendorError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_dashboard_never_touches_catalog_baseline() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "bob@example.com");
        let mut dashboard = VendorDashboard::open(&session, &catalog).unwrap();

        dashboard.create_product(draft("Bookshelf", 12999, 4));
        dashboard
            .delete_product(&ProductId::new("product-3"), |_| true)
            .unwrap();

        // The catalog still has exactly the seeded associations.
        assert_eq!(
            catalog.products_by_store(&StoreId::new("store-2")).len(),
            2
        );
        assert!(catalog.product(&ProductId::new("product-3")).is_some());
    }

    #[test]
    fn test_stats() {
        let catalog = Catalog::seeded();
        let session = vendor_session(&catalog, "bob@example.com");
        let dashboard = VendorDashboard::open(&session, &catalog).unwrap();

        let stats = dashboard.stats();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.in_stock_products, 2);
        // 899.99 * 3 + 249.99 * 7 = 2699.97 + 1749.93 = 4449.90
        assert_eq!(stats.inventory_value, Decimal::new(444990, 2));
        assert_eq!(stats.store_review_count, 2);
    }
}
