//! Vendor catalog editing lifecycle.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use storefinder_catalog::{ProductDraft, VendorDashboard, VendorError};
use storefinder_core::{Price, ProductId, StoreId};
use storefinder_integration_tests::TestContext;

fn draft(name: &str, cents: i64, category: &str, in_stock: u32) -> ProductDraft {
    ProductDraft {
        name: name.to_owned(),
        description: format!("{name} description"),
        price: Price::from_cents(cents),
        category: category.to_owned(),
        in_stock,
        image: None,
    }
}

#[test]
fn dashboard_requires_a_signed_in_vendor() {
    let ctx = TestContext::new();
    assert!(matches!(
        VendorDashboard::open(&ctx.session, &ctx.catalog),
        Err(VendorError::NotVendor)
    ));

    let mut ctx = TestContext::new();
    ctx.login("john@example.com");
    assert!(matches!(
        VendorDashboard::open(&ctx.session, &ctx.catalog),
        Err(VendorError::NotVendor)
    ));
}

#[test]
fn full_product_lifecycle() {
    let mut ctx = TestContext::new();
    ctx.login("jane@example.com");
    let mut dashboard = VendorDashboard::open(&ctx.session, &ctx.catalog).unwrap();

    // Jane manages Tech Haven, which seeds three products.
    assert_eq!(dashboard.store().id, StoreId::new("store-1"));
    assert_eq!(dashboard.products().len(), 3);

    // Create: the listing joins the working list with a fresh identity.
    let id = dashboard.create_product(draft("Mechanical Keyboard", 12999, "Electronics", 10));
    assert_eq!(dashboard.products().len(), 4);
    let created = dashboard.products().last().unwrap();
    assert_eq!(created.store_id, StoreId::new("store-1"));
    assert!(created.reviews.is_empty());

    // Update: drafts replace fields but never the review history.
    dashboard
        .update_product(&id, draft("Mechanical Keyboard TKL", 11999, "Electronics", 8))
        .unwrap();
    let updated = dashboard.products().iter().find(|p| p.id == id).unwrap();
    assert_eq!(updated.name, "Mechanical Keyboard TKL");
    assert_eq!(updated.in_stock, 8);

    // Delete goes through the confirmation prompt.
    let mut prompted_for = None;
    let removed = dashboard
        .delete_product(&id, |p| {
            prompted_for = Some(p.name.clone());
            true
        })
        .unwrap();
    assert!(removed);
    assert_eq!(prompted_for.as_deref(), Some("Mechanical Keyboard TKL"));
    assert_eq!(dashboard.products().len(), 3);
}

#[test]
fn declining_the_confirmation_keeps_the_product() {
    let mut ctx = TestContext::new();
    ctx.login("bob@example.com");
    let mut dashboard = VendorDashboard::open(&ctx.session, &ctx.catalog).unwrap();

    let id = ProductId::new("product-3");
    assert!(!dashboard.delete_product(&id, |_| false).unwrap());
    assert!(dashboard.products().iter().any(|p| p.id == id));
}

#[test]
fn dashboard_edits_never_reach_the_catalog_baseline() {
    let mut ctx = TestContext::new();
    ctx.login("bob@example.com");
    let mut dashboard = VendorDashboard::open(&ctx.session, &ctx.catalog).unwrap();

    dashboard.create_product(draft("Standing Desk", 39999, "Furniture", 2));
    dashboard
        .delete_product(&ProductId::new("product-4"), |_| true)
        .unwrap();

    // The catalog still serves the seeded association for store-2.
    let baseline: Vec<&str> = ctx
        .catalog
        .products_by_store(&StoreId::new("store-2"))
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(baseline, vec!["product-3", "product-4"]);
}

#[test]
fn stats_summarize_the_working_list() {
    let mut ctx = TestContext::new();
    ctx.login("jane@example.com");
    let mut dashboard = VendorDashboard::open(&ctx.session, &ctx.catalog).unwrap();

    let stats = dashboard.stats();
    assert_eq!(stats.total_products, 3);
    // Smart Watch is seeded out of stock.
    assert_eq!(stats.in_stock_products, 2);
    // 799.99 * 15 + 149.99 * 8 + 199.99 * 0 = 11999.85 + 1199.92 = 13199.77
    assert_eq!(stats.inventory_value, Decimal::new(1_319_977, 2));
    assert_eq!(stats.store_review_count, 3);

    dashboard.create_product(draft("Webcam", 4999, "Electronics", 2));
    let stats = dashboard.stats();
    assert_eq!(stats.total_products, 4);
    assert_eq!(stats.in_stock_products, 3);
    assert_eq!(stats.inventory_value, Decimal::new(1_329_975, 2));
}
