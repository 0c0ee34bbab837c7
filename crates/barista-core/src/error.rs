//! # Error Types
//!
//! Domain-specific error types for barista-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barista-core errors (this file)                                        │
//! │  ├── BrewError        - Order/brew rejections                           │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  barista-engine errors (separate crate)                                 │
//! │  └── EngineError      - Configuration load/save failures                │
//! │                                                                         │
//! │  Every BrewError is a user-correctable rejection: add funds, refill     │
//! │  a resource, pick another drink, or wait for the current brew. None     │
//! │  is fatal, none triggers a retry, and a rejected request leaves all     │
//! │  state untouched.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (price, balance, resource labels)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::menu::Resource;
use crate::money::Money;

/// Joins resource labels for the insufficient-resource message.
fn join_labels(resources: &[Resource]) -> String {
    resources
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Brew Error
// =============================================================================

/// Rejections raised while placing an order or starting a brew.
///
/// ## Where Each Variant Comes From
/// ```text
/// place_order ──► NoCustomerName / NoTableNumber
///      │
///      ▼
/// start_brewing ──► AlreadyBrewing      (brew slot occupied)
///               ──► NoDrinkSelected     (request without a drink)
///               ──► InsufficientFunds   (balance < discounted price)
///               ──► InsufficientResource(ingredients below demand)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrewError {
    /// A brew is already in progress; there is no queueing.
    #[error("coffee is being prepared, please wait")]
    AlreadyBrewing,

    /// The request carried no drink selection.
    #[error("please select a coffee")]
    NoDrinkSelected,

    /// The order form was submitted without a customer name.
    #[error("please enter customer name")]
    NoCustomerName,

    /// The order form was submitted without a table number.
    #[error("please enter table number")]
    NoTableNumber,

    /// Balance is below the computed charge.
    #[error("insufficient balance: {price} required, {balance} available")]
    InsufficientFunds { price: Money, balance: Money },

    /// One or more ingredients are below the brew's demand.
    #[error("insufficient {}", join_labels(.0))]
    InsufficientResource(Vec<Resource>),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller-supplied values don't meet requirements, before
/// any business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },
}

/// Convenience type alias for Results with BrewError.
pub type BrewResult<T> = Result<T, BrewError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_resource_message_joins_labels() {
        let err = BrewError::InsufficientResource(vec![Resource::Water, Resource::CoffeeBeans]);
        assert_eq!(err.to_string(), "insufficient water, coffee beans");
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = BrewError::InsufficientFunds {
            price: Money::from_cents(1500),
            balance: Money::from_cents(1000),
        };
        assert_eq!(
            err.to_string(),
            "insufficient balance: $15.00 required, $10.00 available"
        );
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::Required {
            field: "customer name",
        };
        assert_eq!(err.to_string(), "customer name is required");

        let err = ValidationError::OutOfRange {
            field: "temperature",
            min: 65,
            max: 95,
        };
        assert_eq!(err.to_string(), "temperature must be between 65 and 95");
    }
}
