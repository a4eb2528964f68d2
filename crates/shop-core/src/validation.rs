//! # Validation Module
//!
//! Argument checks shared by the item and cart repositories.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (HTTP handler, RPC service)                            │
//! │  ├── Type decoding (offset is an integer, price is a number)           │
//! │  └── May already reject obvious garbage                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Repository operation                                         │
//! │  └── THIS MODULE: preconditions enforced regardless of the caller      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart::add_unit                                               │
//! │  └── Overflow checks on the running total                              │
//! │                                                                         │
//! │  Every check here runs BEFORE any state is touched.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//! use shop_core::validation::{validate_limit, validate_price};
//!
//! assert!(validate_price(Money::from_cents(150)).is_ok());
//! assert!(validate_limit(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Entity Fields
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shop_core::money::Money;
/// use shop_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::negative("price"));
    }

    Ok(())
}

// =============================================================================
// Pagination
// =============================================================================

/// Validates a page offset. Zero is the first element.
pub fn validate_offset(offset: i64) -> ValidationResult<()> {
    if offset < 0 {
        return Err(ValidationError::negative("offset"));
    }

    Ok(())
}

/// Validates a page size. An empty page is never a meaningful request.
pub fn validate_limit(limit: i64) -> ValidationResult<()> {
    if limit <= 0 {
        return Err(ValidationError::not_positive("limit"));
    }

    Ok(())
}

// =============================================================================
// Filter Bounds
// =============================================================================

/// Validates an optional price bound of a list filter.
///
/// `None` means "unbounded" and is always valid.
pub fn validate_price_bound(field: &str, bound: Option<Money>) -> ValidationResult<()> {
    match bound {
        Some(value) if value.is_negative() => Err(ValidationError::negative(field)),
        _ => Ok(()),
    }
}

/// Validates an optional quantity bound of a cart filter.
pub fn validate_quantity_bound(field: &str, bound: Option<i64>) -> ValidationResult<()> {
    match bound {
        Some(value) if value < 0 => Err(ValidationError::negative(field)),
        _ => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
