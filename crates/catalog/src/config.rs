//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFINDER_TOP_STORES` - Top-rated stores shown on the home page (default: 3)
//! - `STOREFINDER_TRENDING_PRODUCTS` - Trending products shown on the home page (default: 4)

use thiserror::Error;

/// Default number of top-rated stores on the home page.
const DEFAULT_TOP_STORES: usize = 3;

/// Default number of trending products on the home page.
const DEFAULT_TRENDING_PRODUCTS: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog tunables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// How many top-rated stores the home page highlights.
    pub top_store_count: usize,
    /// How many trending products the home page highlights.
    pub trending_product_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            top_store_count: DEFAULT_TOP_STORES,
            trending_product_count: DEFAULT_TRENDING_PRODUCTS,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            top_store_count: optional_count("STOREFINDER_TOP_STORES", DEFAULT_TOP_STORES)?,
            trending_product_count: optional_count(
                "STOREFINDER_TRENDING_PRODUCTS",
                DEFAULT_TRENDING_PRODUCTS,
            )?,
        })
    }
}

/// Read an optional positive count, falling back to a default when unset.
fn optional_count(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(value) => {
            let count: usize = value.parse().map_err(|_| {
                ConfigError::InvalidEnvVar(name.to_owned(), format!("not a count: {value}"))
            })?;
            if count == 0 {
                return Err(ConfigError::InvalidEnvVar(
                    name.to_owned(),
                    "must be at least 1".to_owned(),
                ));
            }
            Ok(count)
        }
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.top_store_count, 3);
        assert_eq!(config.trending_product_count, 4);
    }

    #[test]
    fn test_optional_count_parsing() {
        // Single test to avoid parallel env races.
        unsafe {
            std::env::set_var("STOREFINDER_TEST_COUNT", "7");
        }
        assert_eq!(optional_count("STOREFINDER_TEST_COUNT", 3).unwrap(), 7);

        unsafe {
            std::env::set_var("STOREFINDER_TEST_COUNT", "zero");
        }
        assert!(matches!(
            optional_count("STOREFINDER_TEST_COUNT", 3),
            Err(ConfigError::InvalidEnvVar(..))
        ));

        unsafe {
            std::env::set_var("STOREFINDER_TEST_COUNT", "0");
        }
        assert!(optional_count("STOREFINDER_TEST_COUNT", 3).is_err());

        unsafe {
            std::env::remove_var("STOREFINDER_TEST_COUNT");
        }
        assert_eq!(optional_count("STOREFINDER_TEST_COUNT", 3).unwrap(), 3);
    }
}
