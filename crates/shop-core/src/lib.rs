//! # shop-core: Pure Domain Logic for the Shop Store
//!
//! Entities, money, query parameters and validation rules for the item and
//! cart repositories. Nothing in here locks, allocates ids, or does I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Caller (HTTP router, RPC service, CLI, ...)            │   │
//! │  │    decodes input, maps ErrorKind to its own status codes        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shop-store (repositories, ids, locks)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   query   │  │ validation│  │   │
//! │  │   │   Item    │  │   Money   │  │   Page    │  │   rules   │  │   │
//! │  │   │   Cart    │  │  (cents)  │  │  Filters  │  │   checks  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO SHARED STATE                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Ids, `Item`, `Cart`, `CartLineEntry`, `AvailabilityPolicy`
//! - [`money`] - Money type with integer arithmetic
//! - [`query`] - `Page`, `ItemFilter`, `CartFilter`
//! - [`error`] - `ShopError` and `ValidationError`
//! - [`validation`] - Argument checks
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::{Cart, CartId, Item, ItemId, Money};
//!
//! let pen = Item::new(ItemId::new(0), "pen", Money::from_cents(150));
//! let cup = Item::new(ItemId::new(1), "cup", Money::from_cents(300));
//!
//! let mut cart = Cart::new(CartId::new(0));
//! cart.add_unit(&pen, true).unwrap();
//! cart.add_unit(&pen, true).unwrap();
//! cart.add_unit(&cup, true).unwrap();
//!
//! assert_eq!(cart.price().to_string(), "$6.00");
//! assert_eq!(cart.total_quantity(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ErrorKind, ShopError, ShopResult, ValidationError};
pub use money::Money;
pub use query::{CartFilter, ItemFilter, Page};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page size used when a caller does not pick one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
