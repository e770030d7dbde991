//! Directory users.

use serde::{Deserialize, Serialize};

use storefinder_core::{Email, StoreId, UserId, UserRole};

/// A directory user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address; also the sign-in identity key.
    pub email: Email,
    /// Role in the directory.
    pub role: UserRole,
    /// The store a vendor manages. Meaningful only for vendors.
    pub store_id: Option<StoreId>,
}
