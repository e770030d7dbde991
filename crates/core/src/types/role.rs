//! User roles.

use serde::{Deserialize, Serialize};

/// Role of a directory user.
///
/// A closed enumeration: customers browse and review, vendors additionally
/// manage the catalog of the store they are assigned to, admins are reserved
/// for moderation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    Vendor,
    Admin,
}

impl UserRole {
    /// Lowercase label, as stored in the seed corpus.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Vendor => "vendor",
            Self::Admin => "admin",
        }
    }

    /// Whether this role may open the vendor dashboard.
    #[must_use]
    pub const fn is_vendor(self) -> bool {
        matches!(self, Self::Vendor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&UserRole::Vendor).unwrap(), "\"vendor\"");
        let parsed: UserRole = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(parsed, UserRole::Customer);
    }

    #[test]
    fn test_only_vendor_is_vendor() {
        assert!(UserRole::Vendor.is_vendor());
        assert!(!UserRole::Customer.is_vendor());
        assert!(!UserRole::Admin.is_vendor());
    }
}
