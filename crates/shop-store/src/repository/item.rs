//! # Item Repository
//!
//! The catalog: create, read, list, update and soft-delete items.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ItemRepository (cheap to clone)                      │
//! │                                                                         │
//! │  Arc<ItemTable>                                                         │
//! │  ├── ids: IdSequence               0, 1, 2, ...                        │
//! │  └── items: RwLock<BTreeMap<ItemId, Arc<RwLock<Item>>>>                │
//! │                    │                        │                           │
//! │                    │                        └── one lock per item       │
//! │                    └── table lock: insert (write) / lookup, scan (read) │
//! │                                                                         │
//! │  Lock order is always table → item, never the reverse.                 │
//! │  Ids are allocated under the table write lock, so BTreeMap order       │
//! │  equals creation order.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! ```text
//! create ──► active ──replace/patch──► active
//!              │
//!              └──soft_delete──► deleted (terminal, record kept)
//! ```
//! `get` returns deleted items too; only `list` hides them by default and
//! only the mutations refuse them.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use shop_core::validation::validate_price;
use shop_core::{Item, ItemFilter, ItemId, ItemPatch, Money, ShopError, ShopResult};

use crate::sequence::IdSequence;

type ItemSlot = Arc<RwLock<Item>>;

#[derive(Debug, Default)]
struct ItemTable {
    ids: IdSequence,
    items: RwLock<BTreeMap<ItemId, ItemSlot>>,
}

/// Repository for items.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new();
///
/// let pen = repo.create("pen", Money::from_cents(150)).await?;
/// assert_eq!(pen.id().location(), "/item/0");
///
/// let visible = repo.list(&ItemFilter::default()).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemRepository {
    table: Arc<ItemTable>,
}

impl ItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an active item with a fresh id.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The stored item
    /// * `Err(InvalidArgument)` - `price` is negative
    pub async fn create(&self, name: impl Into<String>, price: Money) -> ShopResult<Item> {
        validate_price(price)?;

        let mut items = self.table.items.write().await;
        let id = ItemId::new(self.table.ids.next());
        let item = Item::new(id, name, price);

        debug!(id = %id, name = %item.name, price = %item.price, "Creating item");

        items.insert(id, Arc::new(RwLock::new(item.clone())));
        Ok(item)
    }

    /// Gets an item by id, deleted or not.
    ///
    /// ## Returns
    /// * `Ok(Item)` - Snapshot of the item
    /// * `Err(NotFound)` - The id was never assigned
    pub async fn get(&self, id: ItemId) -> ShopResult<Item> {
        let slot = self.slot(id).await?;
        let item = slot.read().await;
        Ok(item.clone())
    }

    /// Gets an item under the default listing visibility.
    ///
    /// Same as [`ItemRepository::get`], except a soft-deleted item is
    /// reported as missing, matching what `list` shows without
    /// `show_deleted`.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The active item
    /// * `Err(NotFound)` - Never assigned, or soft-deleted
    pub async fn get_visible(&self, id: ItemId) -> ShopResult<Item> {
        let item = self.get(id).await?;
        if item.is_deleted() {
            return Err(ShopError::not_found("Item", id));
        }
        Ok(item)
    }

    /// Lists items in creation order.
    ///
    /// Deleted items are skipped unless `filter.show_deleted`. Price bounds
    /// are inclusive. `offset`/`limit` apply after filtering.
    ///
    /// ## Returns
    /// * `Ok(Vec<Item>)` - Possibly empty
    /// * `Err(InvalidArgument)` - Negative offset, non-positive limit or a
    ///   negative price bound
    pub async fn list(&self, filter: &ItemFilter) -> ShopResult<Vec<Item>> {
        filter.validate()?;

        let items = self.table.items.read().await;
        let mut matching = Vec::new();
        for slot in items.values() {
            let item = slot.read().await;
            if filter.matches(&item) {
                matching.push(item.clone());
            }
        }

        Ok(filter.page.slice(matching.into_iter()).collect())
    }

    /// Overwrites both name and price of an active item.
    ///
    /// Same rules as [`ItemRepository::patch`] with both fields given.
    pub async fn replace(
        &self,
        id: ItemId,
        name: impl Into<String>,
        price: Money,
    ) -> ShopResult<Item> {
        self.patch(id, ItemPatch::replace(name, price)).await
    }

    /// Overwrites only the fields present in `patch`.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The updated item
    /// * `Err(InvalidArgument)` - Negative price (checked before the lookup)
    /// * `Err(NotFound)` - Missing or soft-deleted item
    pub async fn patch(&self, id: ItemId, patch: ItemPatch) -> ShopResult<Item> {
        if let Some(price) = patch.price {
            validate_price(price)?;
        }

        let slot = self.slot(id).await?;
        let mut item = slot.write().await;
        if item.is_deleted() {
            return Err(ShopError::not_found("Item", id));
        }

        debug!(
            id = %id,
            name = ?patch.name,
            price = ?patch.price.map(|p| p.cents()),
            "Updating item"
        );

        item.apply(patch);
        Ok(item.clone())
    }

    /// Soft-deletes an item. Deleting twice is not an error.
    ///
    /// The record stays, so carts that reference it and `get` keep working.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item, now deleted
    /// * `Err(NotFound)` - The id was never assigned
    pub async fn soft_delete(&self, id: ItemId) -> ShopResult<Item> {
        let slot = self.slot(id).await?;
        let mut item = slot.write().await;

        debug!(id = %id, "Soft-deleting item");

        item.mark_deleted();
        Ok(item.clone())
    }

    /// Counts stored items, deleted ones included (for diagnostics).
    pub async fn count(&self) -> usize {
        self.table.items.read().await.len()
    }

    /// Resolves an id to its slot, releasing the table lock before return.
    async fn slot(&self, id: ItemId) -> ShopResult<ItemSlot> {
        self.table
            .items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| ShopError::not_found("Item", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
