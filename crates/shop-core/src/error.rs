//! # Error Types
//!
//! Domain error types for shop-core and every repository built on it.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── ShopError        - What every operation returns                   │
//! │  │   ├── InvalidArgument(ValidationError)                              │
//! │  │   └── NotFound { entity, id }                                       │
//! │  └── ValidationError  - Which precondition was violated                │
//! │                                                                         │
//! │  Caller (HTTP handler, RPC service, ...)                                │
//! │  └── matches on ShopError::kind() and picks its own status code        │
//! │                                                                         │
//! │  Flow: ValidationError → ShopError → caller's boundary type            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, entity id)
//! 3. Errors are enum variants, never String
//! 4. Failures are returned, never logged here: the caller decides

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Shop Error
// =============================================================================

/// Failure of a repository operation.
#[derive(Debug, Error)]
pub enum ShopError {
    /// A caller-supplied argument broke a precondition.
    ///
    /// ## When This Occurs
    /// - Negative price on create / replace / patch
    /// - Negative offset, non-positive limit, negative filter bound
    /// - A cart total or quantity that would overflow
    ///
    /// Always detected before any mutation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// A referenced entity does not exist.
    ///
    /// ## When This Occurs
    /// - Item or cart id was never assigned
    /// - Item is soft-deleted and the operation mutates it
    /// - `add_item` could not resolve the cart or the item
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl ShopError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        ShopError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns the category of this error.
    ///
    /// ## Usage
    /// ```rust
    /// use shop_core::{ErrorKind, ShopError};
    ///
    /// let err = ShopError::not_found("Item", 7);
    /// let status = match err.kind() {
    ///     ErrorKind::InvalidArgument => 422,
    ///     ErrorKind::NotFound => 404,
    /// };
    /// assert_eq!(status, 404);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShopError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ShopError::NotFound { .. } => ErrorKind::NotFound,
        }
    }
}

/// Error categories a caller maps onto its own protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Maps to a client-error response.
    InvalidArgument,
    /// Maps to a not-found response.
    NotFound,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Argument validation errors.
///
/// These describe *which* precondition failed; they always reach the caller
/// wrapped in [`ShopError::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// The result of an aggregation does not fit.
    #[error("{field} would overflow")]
    Overflow { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Shorthand for [`ValidationError::MustBeNonNegative`].
    pub fn negative(field: impl Into<String>) -> Self {
        ValidationError::MustBeNonNegative {
            field: field.into(),
        }
    }

    /// Shorthand for [`ValidationError::MustBePositive`].
    pub fn not_positive(field: impl Into<String>) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
        }
    }

    /// Shorthand for [`ValidationError::Overflow`].
    pub fn overflow(field: impl Into<String>) -> Self {
        ValidationError::Overflow {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

// =============================================================================
// Unit Tests
// =============================================================================
