//! The fixed seed corpus.
//!
//! Every catalog starts from this baseline: three users, three historical
//! reviews distributed across stores and products, five stores, and twelve
//! products. Entity IDs (`store-1`..`store-5`, `product-1`..`product-12`,
//! `user-1`..`user-3`) are referenced directly by tests and by consumers
//! deep-linking into the directory, so they are stable identifiers, not
//! incidental values.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use storefinder_core::{Email, Price, ProductId, ReviewId, StoreId, UserId, UserRole};

use crate::models::{Product, Review, Store, User};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("seed timestamp is valid RFC 3339")
}

fn email(s: &str) -> Email {
    Email::parse(s).expect("seed email is well-formed")
}

/// The three directory users.
pub(crate) fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("user-1"),
            name: "John Doe".to_owned(),
            email: email("john@example.com"),
            role: UserRole::Customer,
            store_id: None,
        },
        User {
            id: UserId::new("user-2"),
            name: "Jane Smith".to_owned(),
            email: email("jane@example.com"),
            role: UserRole::Vendor,
            store_id: Some(StoreId::new("store-1")),
        },
        User {
            id: UserId::new("user-3"),
            name: "Bob Johnson".to_owned(),
            email: email("bob@example.com"),
            role: UserRole::Vendor,
            store_id: Some(StoreId::new("store-2")),
        },
    ]
}

/// The three historical reviews shared across the corpus.
///
/// Stores and products carry overlapping slices of this list, so each entity
/// gets its own clone of the review values.
fn baseline_reviews() -> Vec<Review> {
    vec![
        Review {
            id: ReviewId::new("review-1"),
            user_id: UserId::new("user-1"),
            user_name: "John Doe".to_owned(),
            rating: Decimal::new(45, 1),
            comment: "Great product, works as expected!".to_owned(),
            date: ts("2023-05-15T10:30:00Z"),
        },
        Review {
            id: ReviewId::new("review-2"),
            user_id: UserId::new("user-3"),
            user_name: "Bob Johnson".to_owned(),
            rating: Decimal::from(5),
            comment: "Excellent quality and fast shipping.".to_owned(),
            date: ts("2023-06-20T14:45:00Z"),
        },
        Review {
            id: ReviewId::new("review-3"),
            user_id: UserId::new("user-1"),
            user_name: "John Doe".to_owned(),
            rating: Decimal::from(3),
            comment: "Decent product but a bit overpriced.".to_owned(),
            date: ts("2023-07-05T09:15:00Z"),
        },
    ]
}

/// A contiguous slice of the baseline reviews, cloned.
fn reviews(range: std::ops::Range<usize>) -> Vec<Review> {
    baseline_reviews()
        .get(range)
        .map(<[Review]>::to_vec)
        .unwrap_or_default()
}

/// The five local stores.
pub(crate) fn stores() -> Vec<Store> {
    vec![
        Store {
            id: StoreId::new("store-1"),
            name: "Tech Haven".to_owned(),
            description: "Your one-stop shop for all electronics and gadgets.".to_owned(),
            logo: Some(
                "https://images.unsplash.com/photo-1563013544-824ae1b704d3?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"
                    .to_owned(),
            ),
            address: "123 Main St".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            zip_code: "94105".to_owned(),
            phone: "(415) 555-1234".to_owned(),
            email: email("info@techhaven.com"),
            website: Some("techhaven.com".to_owned()),
            reviews: reviews(0..3),
            distance_km: Some(2.3),
        },
        Store {
            id: StoreId::new("store-2"),
            name: "Furniture World".to_owned(),
            description: "Quality furniture for your home and office.".to_owned(),
            logo: Some(
                "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"
                    .to_owned(),
            ),
            address: "456 Oak Ave".to_owned(),
            city: "Los Angeles".to_owned(),
            state: "CA".to_owned(),
            zip_code: "90001".to_owned(),
            phone: "(213) 555-6789".to_owned(),
            email: email("sales@furnitureworld.com"),
            website: None,
            reviews: reviews(0..2),
            distance_km: Some(5.1),
        },
        Store {
            id: StoreId::new("store-3"),
            name: "Fashion Forward".to_owned(),
            description: "Trendy clothing and accessories for all seasons.".to_owned(),
            logo: Some(
                "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"
                    .to_owned(),
            ),
            address: "789 Pine St".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            zip_code: "10001".to_owned(),
            phone: "(212) 555-4321".to_owned(),
            email: email("hello@fashionforward.com"),
            website: Some("fashionforward.com".to_owned()),
            reviews: reviews(1..3),
            distance_km: Some(10.7),
        },
        Store {
            id: StoreId::new("store-4"),
            name: "Healthy Harvest".to_owned(),
            description: "Organic groceries and health foods for conscious consumers.".to_owned(),
            logo: None,
            address: "321 Maple Rd".to_owned(),
            city: "Chicago".to_owned(),
            state: "IL".to_owned(),
            zip_code: "60601".to_owned(),
            phone: "(312) 555-8765".to_owned(),
            email: email("contact@healthyharvest.com"),
            website: None,
            reviews: reviews(0..1),
            distance_km: Some(3.8),
        },
        Store {
            id: StoreId::new("store-5"),
            name: "Sports Central".to_owned(),
            description: "Everything you need for sports and outdoor activities.".to_owned(),
            logo: Some(
                "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"
                    .to_owned(),
            ),
            address: "555 River Dr".to_owned(),
            city: "Austin".to_owned(),
            state: "TX".to_owned(),
            zip_code: "78701".to_owned(),
            phone: "(512) 555-2468".to_owned(),
            email: email("info@sportscentral.com"),
            website: Some("sportscentral.com".to_owned()),
            reviews: reviews(2..3),
            distance_km: Some(7.2),
        },
    ]
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: &'static str,
    image: Option<&'static str>,
    in_stock: u32,
    store_id: &'static str,
    reviews: std::ops::Range<usize>,
}

const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "product-1",
        name: "Smartphone X",
        description: "Latest smartphone with advanced camera and long battery life.",
        price_cents: 79999,
        category: "Electronics",
        image: Some("https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 15,
        store_id: "store-1",
        reviews: 0..2,
    },
    ProductSeed {
        id: "product-2",
        name: "Wireless Earbuds",
        description: "True wireless earbuds with noise cancellation and water resistance.",
        price_cents: 14999,
        category: "Electronics",
        image: Some("https://images.unsplash.com/photo-1572569511254-d8f925fe2cbb?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 8,
        store_id: "store-1",
        reviews: 1..3,
    },
    ProductSeed {
        id: "product-3",
        name: "Modern Sofa",
        description: "Comfortable 3-seater sofa with premium fabric upholstery.",
        price_cents: 89999,
        category: "Furniture",
        image: Some("https://images.unsplash.com/photo-1555041469-a586c61ea9bc?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 3,
        store_id: "store-2",
        reviews: 0..1,
    },
    ProductSeed {
        id: "product-4",
        name: "Coffee Table",
        description: "Elegant coffee table with glass top and wooden legs.",
        price_cents: 24999,
        category: "Furniture",
        image: Some("https://images.unsplash.com/photo-1532372320572-cda25653a694?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 7,
        store_id: "store-2",
        reviews: 1..2,
    },
    ProductSeed {
        id: "product-5",
        name: "Smart Watch",
        description: "Fitness tracker and smartwatch with heart rate monitoring.",
        price_cents: 19999,
        category: "Electronics",
        image: Some("https://images.unsplash.com/photo-1523275335684-37898b6baf30?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 0,
        store_id: "store-1",
        reviews: 2..3,
    },
    ProductSeed {
        id: "product-6",
        name: "Summer Dress",
        description: "Light and comfortable dress for summer days.",
        price_cents: 5999,
        category: "Fashion",
        image: Some("https://images.unsplash.com/photo-1496747611176-843222e1e57c?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 12,
        store_id: "store-3",
        reviews: 0..2,
    },
    ProductSeed {
        id: "product-7",
        name: "Leather Jacket",
        description: "Classic leather jacket for men with multiple pockets.",
        price_cents: 19999,
        category: "Fashion",
        image: Some("https://images.unsplash.com/photo-1551028719-00167b16eac5?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 5,
        store_id: "store-3",
        reviews: 1..3,
    },
    ProductSeed {
        id: "product-8",
        name: "Designer Sunglasses",
        description: "UV protection sunglasses with stylish frames.",
        price_cents: 12999,
        category: "Fashion",
        image: Some("https://images.unsplash.com/photo-1511499767150-a48a237f0083?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 9,
        store_id: "store-3",
        reviews: 0..1,
    },
    ProductSeed {
        id: "product-9",
        name: "Organic Quinoa",
        description: "Premium organic quinoa, high in protein and fiber.",
        price_cents: 1299,
        category: "Groceries",
        image: Some("https://images.unsplash.com/photo-1586201375761-83865001e8ac?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 20,
        store_id: "store-4",
        reviews: 2..3,
    },
    ProductSeed {
        id: "product-10",
        name: "Vitamin Supplement",
        description: "Daily multivitamin supplement for overall health.",
        price_cents: 2499,
        category: "Health",
        image: Some("https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 15,
        store_id: "store-4",
        reviews: 1..3,
    },
    ProductSeed {
        id: "product-11",
        name: "Running Shoes",
        description: "Lightweight running shoes with cushioned soles.",
        price_cents: 8999,
        category: "Sports",
        image: Some("https://images.unsplash.com/photo-1542291026-7eec264c27ff?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 7,
        store_id: "store-5",
        reviews: 0..2,
    },
    ProductSeed {
        id: "product-12",
        name: "Yoga Mat",
        description: "Non-slip yoga mat with carrying strap.",
        price_cents: 2999,
        category: "Sports",
        image: Some("https://images.unsplash.com/photo-1545205597-3d9d02c29597?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80"),
        in_stock: 10,
        store_id: "store-5",
        reviews: 1..3,
    },
];

/// The twelve seeded products, in catalog insertion order.
pub(crate) fn products() -> Vec<Product> {
    PRODUCT_SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId::new(seed.id),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            price: Price::from_cents(seed.price_cents),
            category: seed.category.to_owned(),
            image: seed.image.map(str::to_owned),
            in_stock: seed.in_stock,
            store_id: StoreId::new(seed.store_id),
            reviews: reviews(seed.reviews.clone()),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_sizes() {
        assert_eq!(users().len(), 3);
        assert_eq!(stores().len(), 5);
        assert_eq!(products().len(), 12);
    }

    #[test]
    fn test_every_product_references_a_seeded_store() {
        let stores = stores();
        for product in products() {
            assert!(
                stores.iter().any(|s| s.id == product.store_id),
                "{} points at missing {}",
                product.id,
                product.store_id
            );
        }
    }

    #[test]
    fn test_every_vendor_references_a_seeded_store() {
        let stores = stores();
        for user in users() {
            if let Some(store_id) = &user.store_id {
                assert!(stores.iter().any(|s| &s.id == store_id));
            }
        }
    }

    #[test]
    fn test_review_slices_match_corpus() {
        let stores = stores();
        let store_1 = stores.iter().find(|s| s.id.as_str() == "store-1").unwrap();
        assert_eq!(store_1.reviews.len(), 3);

        let store_5 = stores.iter().find(|s| s.id.as_str() == "store-5").unwrap();
        assert_eq!(store_5.reviews.len(), 1);
        assert_eq!(store_5.reviews[0].id.as_str(), "review-3");

        let products = products();
        let smartphone = products.iter().find(|p| p.id.as_str() == "product-1").unwrap();
        let ratings: Vec<_> = smartphone.reviews.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![Decimal::new(45, 1), Decimal::from(5)]);
    }
}
