//! # shop-store: In-Memory Repositories for the Shop Store
//!
//! Owns every piece of shared mutable state: the item catalog, the carts,
//! and the id sequences behind them. Domain rules live in `shop-core`; this
//! crate decides who may touch which entity, and when.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Store Data Flow                             │
//! │                                                                         │
//! │  Caller (add_item handler)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shop-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │ IdSequence   │  │   │
//! │  │   │  (store.rs)   │    │               │    │ (per kind)   │  │   │
//! │  │   │               │    │ ItemRepo      │    │              │  │   │
//! │  │   │ StoreConfig   │───►│ CartRepo      │───►│ 0, 1, 2, ... │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           shop-core: Cart::add_unit, filters, validation        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `Store` handle bundling both repositories
//! - [`config`] - `StoreConfig` (defaults, builder, environment)
//! - [`repository`] - `ItemRepository` and `CartRepository`
//! - [`sequence`] - Atomic per-kind id counter
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::from_env());
//!
//! let pen = store.items().create("pen", Money::from_cents(150)).await?;
//! let cup = store.items().create("cup", Money::from_cents(300)).await?;
//!
//! let cart = store.carts().create().await;
//! store.carts().add_item(cart.id(), pen.id()).await?;
//! store.carts().add_item(cart.id(), pen.id()).await?;
//! let cart = store.carts().add_item(cart.id(), cup.id()).await?;
//!
//! assert_eq!(cart.price(), Money::from_cents(600));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod repository;
pub mod sequence;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use store::Store;

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::item::ItemRepository;
