//! # Cart Repository
//!
//! Carts and the one operation that mutates them: adding an item.
//!
//! ## add_item Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item(cart_id, item_id)                                             │
//! │                                                                         │
//! │  1. resolve cart slot            ─┐                                     │
//! │  2. ItemRepository::get(item_id) ─┴─► either missing ──► NotFound       │
//! │                                                                         │
//! │  3. lock cart (Mutex, exclusive)                                        │
//! │  4. Cart::add_unit(&item, policy.available_for(&item))                  │
//! │     ├── line exists  ──► quantity += 1                                  │
//! │     ├── no line      ──► push { id, name, quantity: 1, available }      │
//! │     └── price += item.price                                             │
//! │  5. unlock, return snapshot                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps 2 and 4 are not atomic with respect to the item repository: a
//! concurrent reprice between them means the older price is the one added.
//! Two `add_item` calls on the same cart never interleave inside step 4.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use shop_core::{AvailabilityPolicy, Cart, CartFilter, CartId, ItemId, ShopError, ShopResult};

use crate::repository::item::ItemRepository;
use crate::sequence::IdSequence;

type CartSlot = Arc<Mutex<Cart>>;

#[derive(Debug, Default)]
struct CartTable {
    ids: IdSequence,
    carts: RwLock<BTreeMap<CartId, CartSlot>>,
}

/// Repository for carts.
///
/// Holds a handle to the [`ItemRepository`] it reads items from, and the
/// [`AvailabilityPolicy`] used for new line entries.
///
/// ## Usage
/// ```rust,ignore
/// let items = ItemRepository::new();
/// let carts = CartRepository::new(items.clone(), AvailabilityPolicy::default());
///
/// let pen = items.create("pen", Money::from_cents(150)).await?;
/// let cart = carts.create().await;
/// let cart = carts.add_item(cart.id(), pen.id()).await?;
/// assert_eq!(cart.price(), Money::from_cents(150));
/// ```
#[derive(Debug, Clone)]
pub struct CartRepository {
    table: Arc<CartTable>,
    items: ItemRepository,
    availability: AvailabilityPolicy,
}

impl CartRepository {
    /// Creates an empty repository reading items from `items`.
    pub fn new(items: ItemRepository, availability: AvailabilityPolicy) -> Self {
        CartRepository {
            table: Arc::default(),
            items,
            availability,
        }
    }

    /// The policy applied to new line entries.
    pub fn availability(&self) -> AvailabilityPolicy {
        self.availability
    }

    /// Creates an empty cart with a fresh id and a zero total. Never fails.
    pub async fn create(&self) -> Cart {
        let mut carts = self.table.carts.write().await;
        let id = CartId::new(self.table.ids.next());

        debug!(id = %id, "Creating cart");

        let cart = Cart::new(id);
        carts.insert(id, Arc::new(Mutex::new(cart.clone())));
        cart
    }

    /// Gets a cart by id.
    ///
    /// ## Returns
    /// * `Ok(Cart)` - Snapshot of the cart
    /// * `Err(NotFound)` - The id was never assigned
    pub async fn get(&self, id: CartId) -> ShopResult<Cart> {
        let slot = self
            .slot(id)
            .await
            .ok_or_else(|| ShopError::not_found("Cart", id))?;
        let cart = slot.lock().await;
        Ok(cart.clone())
    }

    /// Lists carts in creation order.
    ///
    /// Price bounds compare the cached total, quantity bounds the sum of
    /// line quantities. All bounds are inclusive. `offset`/`limit` apply
    /// after filtering. No match is an empty `Vec`, not an error.
    ///
    /// ## Returns
    /// * `Ok(Vec<Cart>)` - Possibly empty
    /// * `Err(InvalidArgument)` - Negative offset, non-positive limit or a
    ///   negative bound
    pub async fn list(&self, filter: &CartFilter) -> ShopResult<Vec<Cart>> {
        filter.validate()?;

        let carts = self.table.carts.read().await;
        let mut matching = Vec::new();
        for slot in carts.values() {
            let cart = slot.lock().await;
            if filter.matches(&cart) {
                matching.push(cart.clone());
            }
        }

        Ok(filter.page.slice(matching.into_iter()).collect())
    }

    /// Adds one unit of an item to a cart.
    ///
    /// A soft-deleted item can still be added. Under
    /// [`AvailabilityPolicy::TrackDeleted`] its new line is marked
    /// unavailable.
    ///
    /// ## Returns
    /// * `Ok(Cart)` - The cart after the add
    /// * `Err(NotFound)` - The cart or the item does not exist
    /// * `Err(InvalidArgument)` - The total or a quantity would overflow
    pub async fn add_item(&self, cart_id: CartId, item_id: ItemId) -> ShopResult<Cart> {
        let slot = self.slot(cart_id).await;
        let item = self.items.get(item_id).await.ok();

        let (slot, item) = match (slot, item) {
            (Some(slot), Some(item)) => (slot, item),
            _ => {
                return Err(ShopError::not_found(
                    "Cart or item",
                    format!("cart {cart_id}, item {item_id}"),
                ))
            }
        };

        let available = self.availability.available_for(&item);

        let mut cart = slot.lock().await;
        cart.add_unit(&item, available)?;

        debug!(
            cart_id = %cart_id,
            item_id = %item_id,
            price = %item.price,
            total = %cart.price(),
            "Added item to cart"
        );

        Ok(cart.clone())
    }

    /// Counts stored carts (for diagnostics).
    pub async fn count(&self) -> usize {
        self.table.carts.read().await.len()
    }

    async fn slot(&self, id: CartId) -> Option<CartSlot> {
        self.table.carts.read().await.get(&id).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
