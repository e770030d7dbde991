//! Per-page-session identity context.
//!
//! A [`Session`] is an explicit value handed to operations that need the
//! current identity; there is no ambient global user. It lives exactly as
//! long as its owner keeps it; dropping it is the reset on page reload.
//!
//! Sign-in here is placeholder identity selection for a directory of mock
//! data: the email is looked up in the catalog and no credential of any kind
//! is checked. It must not be mistaken for (or grown into) authentication.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use storefinder_core::{Email, StoreId, UserId, UserRole};

use crate::catalog::Catalog;
use crate::models::User;

/// Minimal identity snapshot of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's ID.
    pub id: UserId,
    /// Display name, used as the snapshot on submitted reviews.
    pub name: String,
    /// Email the user signed in with.
    pub email: Email,
    /// Role in the directory.
    pub role: UserRole,
    /// The store a vendor manages.
    pub store_id: Option<StoreId>,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            store_id: user.store_id.clone(),
        }
    }
}

/// The current session: anonymous, or signed in as one catalog user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    current: Option<CurrentUser>,
}

impl Session {
    /// A fresh anonymous session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { current: None }
    }

    /// Select the session identity by email lookup.
    ///
    /// Returns `true` and signs in if a catalog user has this email;
    /// otherwise returns `false` and leaves the session unchanged. No
    /// credential is validated: this is identity selection over mock data,
    /// not authentication.
    pub fn login(&mut self, catalog: &Catalog, email: &str) -> bool {
        let Ok(email) = Email::parse(email) else {
            debug!(email, "Sign-in rejected: malformed email");
            return false;
        };

        match catalog.user_by_email(&email) {
            Some(user) => {
                info!(user = %user.id, role = user.role.as_str(), "Signed in");
                self.current = Some(CurrentUser::from(user));
                true
            }
            None => {
                debug!(email = %email, "Sign-in rejected: unknown email");
                false
            }
        }
    }

    /// Clear the session back to anonymous.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!(user = %user.id, "Signed out");
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&CurrentUser> {
        self.current.as_ref()
    }

    /// Whether the signed-in user's role is exactly `Vendor`.
    #[must_use]
    pub fn is_vendor(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|user| user.role.is_vendor())
    }
}
