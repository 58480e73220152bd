//! Rating value object for self-assessment answers (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Agreement with a statement: 1 (disagree) to 5 (agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a Rating, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ))
        }
    }

    /// Creates a Rating from any integer, rejecting values outside 1..=5.
    pub fn try_from_i32(value: i32) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Self::try_new(v).ok())
            .ok_or_else(|| {
                ValidationError::out_of_range("rating", Self::MIN as i32, Self::MAX as i32, value)
            })
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_try_new_accepts_one_through_five() {
        for v in 1..=5 {
            assert_eq!(Rating::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn rating_try_new_rejects_out_of_range() {
        assert!(Rating::try_new(0).is_err());
        assert!(Rating::try_new(6).is_err());
        assert!(Rating::try_new(255).is_err());
    }

    #[test]
    fn rating_try_from_i32_rejects_negative_and_large() {
        assert!(Rating::try_from_i32(-1).is_err());
        assert!(Rating::try_from_i32(1000).is_err());
        assert_eq!(Rating::try_from_i32(3).unwrap().value(), 3);
    }

    #[test]
    fn rating_error_carries_actual_value() {
        let err = Rating::try_from_i32(-4).unwrap_err();
        assert_eq!(err, ValidationError::out_of_range("rating", 1, 5, -4));
    }

    #[test]
    fn rating_serializes_as_number() {
        let json = serde_json::to_string(&Rating::try_new(4).unwrap()).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn rating_deserialization_validates_range() {
        assert!(serde_json::from_str::<Rating>("5").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
