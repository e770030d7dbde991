//! Star rating selected when submitting a review.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a [`StarRating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// No star was selected (the zero state of the rating widget).
    #[error("a star rating must be selected")]
    NotSelected,
    /// The value is above the five-star maximum.
    #[error("star rating must be at most {max}")]
    TooHigh {
        /// Maximum allowed stars.
        max: u8,
    },
}

/// A whole-star rating between 1 and 5.
///
/// New review submissions always carry a whole number of stars; selecting
/// zero stars is not a valid submission, so construction of a zero rating
/// fails rather than producing a sentinel. Seeded historical reviews may
/// carry fractional ratings and bypass this type.
///
/// ```
/// use storefinder_core::StarRating;
///
/// assert!(StarRating::new(5).is_ok());
/// assert!(StarRating::new(0).is_err());
/// assert!(StarRating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    /// Maximum number of stars.
    pub const MAX: u8 = 5;

    /// Validate a star count.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NotSelected`] for zero and
    /// [`RatingError::TooHigh`] for values above five.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        match stars {
            0 => Err(RatingError::NotSelected),
            1..=Self::MAX => Ok(Self(stars)),
            _ => Err(RatingError::TooHigh { max: Self::MAX }),
        }
    }

    /// The number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }

    /// The rating as an exact decimal, for averaging with review history.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
