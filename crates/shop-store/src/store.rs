//! # Store Handle
//!
//! Bundles the two repositories behind one cloneable handle.
//!
//! ```text
//! StoreConfig::from_env()
//!        │
//!        ▼
//! Store::new(config)
//!        │
//!        ├── items()  ──► ItemRepository ◄──┐
//!        │                                  │ shared handle
//!        └── carts()  ──► CartRepository ───┘
//! ```
//!
//! Cloning a `Store` (or a repository it hands out) yields another handle to
//! the same data. Each `Store::new` call starts from an empty catalog with
//! both id sequences at 0.

use tracing::info;

use crate::config::StoreConfig;
use crate::repository::cart::CartRepository;
use crate::repository::item::ItemRepository;

/// Main store handle providing repository access.
///
/// ## Usage
/// ```rust,ignore
/// let store = Store::new(StoreConfig::from_env());
///
/// let pen = store.items().create("pen", Money::from_cents(150)).await?;
/// let cart = store.carts().create().await;
/// store.carts().add_item(cart.id(), pen.id()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,
    items: ItemRepository,
    carts: CartRepository,
}

impl Store {
    /// Creates an empty store.
    pub fn new(config: StoreConfig) -> Self {
        info!(
            default_limit = config.default_limit,
            availability = ?config.availability,
            "Initializing store"
        );

        let items = ItemRepository::new();
        let carts = CartRepository::new(items.clone(), config.availability);

        Store {
            config,
            items,
            carts,
        }
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the item repository.
    pub fn items(&self) -> ItemRepository {
        self.items.clone()
    }

    /// Returns the cart repository.
    pub fn carts(&self) -> CartRepository {
        self.carts.clone()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(StoreConfig::default())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{AvailabilityPolicy, CartId, ErrorKind, ItemFilter, ItemId, Money};

    #[tokio::test]
    async fn test_repositories_share_data() {
        let store = Store::default();
        let other = store.clone();

        let pen = store
            .items()
            .create("pen", Money::from_cents(150))
            .await
            .unwrap();
        let cart = other.carts().create().await;

        // The cart repository resolves items created through another handle
        let cart = store.carts().add_item(cart.id(), pen.id()).await.unwrap();
        assert_eq!(cart.price(), Money::from_cents(150));
        assert_eq!(other.items().count().await, 1);
    }

    #[tokio::test]
    async fn test_stores_are_independent() {
        let first = Store::default();
        let second = Store::default();

        first.items().create("pen", Money::from_cents(150)).await.unwrap();
        first.carts().create().await;

        assert_eq!(second.items().count().await, 0);
        assert_eq!(second.carts().count().await, 0);

        // Id sequences are per store and per kind
        let cup = second.items().create("cup", Money::from_cents(300)).await.unwrap();
        assert_eq!(cup.id(), ItemId::new(0));
        assert_eq!(second.carts().create().await.id(), CartId::new(0));
    }

    #[tokio::test]
    async fn test_config_reaches_cart_repository() {
        let store = Store::new(StoreConfig::new().availability(AvailabilityPolicy::Snapshot));

        assert_eq!(store.carts().availability(), AvailabilityPolicy::Snapshot);
        assert_eq!(store.config().availability, AvailabilityPolicy::Snapshot);
    }

    #[tokio::test]
    async fn test_default_page_uses_configured_limit() {
        let store = Store::new(StoreConfig::new().default_limit(3));
        let items = store.items();
        for i in 0..5 {
            items.create(format!("item-{i}"), Money::from_cents(i)).await.unwrap();
        }

        let filter = ItemFilter {
            page: store.config().default_page(),
            ..Default::default()
        };
        assert_eq!(items.list(&filter).await.unwrap().len(), 3);
    }

    /// Unknown cart with a real item: NotFound, nothing created.
    #[tokio::test]
    async fn test_add_to_unknown_cart() {
        let store = Store::default();
        let pen = store
            .items()
            .create("pen", Money::from_cents(150))
            .await
            .unwrap();

        let err = store
            .carts()
            .add_item(CartId::new(999), pen.id())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(store.carts().count().await, 0);
    }
}
