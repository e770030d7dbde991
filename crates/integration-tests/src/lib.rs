//! Integration tests for Storefinder.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storefinder-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `search_and_browse` - Query layer and search properties
//! - `review_flow` - Sign-in and review submission scenarios
//! - `vendor_dashboard` - Vendor catalog editing lifecycle
//!
//! Every scenario runs against a freshly seeded catalog; there is no shared
//! state between tests and nothing to start or tear down.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Once;

use storefinder_catalog::{Catalog, Session};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A page session against a freshly seeded catalog.
pub struct TestContext {
    /// The session's catalog snapshot.
    pub catalog: Catalog,
    /// The session identity context.
    pub session: Session,
}

impl TestContext {
    /// Fresh anonymous context on the seed baseline.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        Self {
            catalog: Catalog::seeded(),
            session: Session::anonymous(),
        }
    }

    /// Sign in as a seeded user.
    ///
    /// # Panics
    ///
    /// Panics if the email is not in the seed corpus; tests always sign in
    /// with known fixtures.
    pub fn login(&mut self, email: &str) {
        assert!(
            self.session.login(&self.catalog, email),
            "seed user {email} should exist"
        );
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
