//! # Validation Module
//!
//! Input validation for caller-supplied values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (excluded from this workspace)                   │
//! │  ├── Basic format checks, immediate user feedback                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (order form fields, settings ranges)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Business rules (funds and resources, in start_brewing)        │
//! │                                                                         │
//! │  Defense in depth: each layer catches different mistakes                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{BrewError, ValidationError};
use crate::money::Money;
use crate::order::BrewRequest;
use crate::{TEMPERATURE_MAX, TEMPERATURE_MIN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order Form Validators
// =============================================================================

/// Validates the order-form fields of a request.
///
/// ## Rules
/// - Customer name must not be blank
/// - Table number must not be blank
///
/// Notes are optional and never validated; the engine treats all metadata
/// as opaque text.
pub fn validate_order_form(request: &BrewRequest) -> Result<(), BrewError> {
    if request.customer_name.trim().is_empty() {
        return Err(BrewError::NoCustomerName);
    }

    if request.table_number.trim().is_empty() {
        return Err(BrewError::NoTableNumber);
    }

    Ok(())
}

// =============================================================================
// Settings Validators
// =============================================================================

/// Validates a brew temperature in °C.
///
/// ## Rules
/// - Must be within [65, 95], the range the boiler supports
///
/// ## Example
/// ```rust
/// use barista_core::validation::validate_temperature;
///
/// assert!(validate_temperature(90).is_ok());
/// assert!(validate_temperature(64).is_err());
/// assert!(validate_temperature(96).is_err());
/// ```
pub fn validate_temperature(degrees: u32) -> ValidationResult<()> {
    if degrees < TEMPERATURE_MIN || degrees > TEMPERATURE_MAX {
        return Err(ValidationError::OutOfRange {
            field: "temperature",
            min: TEMPERATURE_MIN as i64,
            max: TEMPERATURE_MAX as i64,
        });
    }

    Ok(())
}

/// Validates a deposit amount.
///
/// ## Rules
/// - Must be positive (> 0); the machine never dispenses change here
pub fn validate_deposit(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive { field: "deposit" });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Drink, Size};

    fn valid_request() -> BrewRequest {
        BrewRequest {
            drink: Some(Drink::Latte),
            size: Size::Medium,
            extras: vec![],
            customer_name: "Ada".into(),
            table_number: "4".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_validate_order_form() {
        assert!(validate_order_form(&valid_request()).is_ok());

        let mut request = valid_request();
        request.customer_name = "   ".into();
        assert_eq!(
            validate_order_form(&request),
            Err(BrewError::NoCustomerName)
        );

        let mut request = valid_request();
        request.table_number = String::new();
        assert_eq!(validate_order_form(&request), Err(BrewError::NoTableNumber));
    }

    #[test]
    fn test_validate_temperature_bounds() {
        assert!(validate_temperature(65).is_ok());
        assert!(validate_temperature(90).is_ok());
        assert!(validate_temperature(95).is_ok());

        assert!(validate_temperature(64).is_err());
        assert!(validate_temperature(96).is_err());
    }

    #[test]
    fn test_validate_deposit() {
        assert!(validate_deposit(Money::from_cents(100)).is_ok());
        assert!(validate_deposit(Money::zero()).is_err());
        assert!(validate_deposit(Money::from_cents(-100)).is_err());
    }
}
