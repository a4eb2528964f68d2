//! # Domain Types
//!
//! The two entity kinds of the store and their identifiers.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌──────────────────────────────────┐     │
//! │  │      Item       │          │              Cart                │     │
//! │  │  ─────────────  │  weak    │  ──────────────────────────────  │     │
//! │  │  id (ItemId)    │◄─────────┤  id (CartId)                     │     │
//! │  │  name           │  ref     │  items: Vec<CartLineEntry>       │     │
//! │  │  price (Money)  │          │    ├── item_id, name (snapshot)  │     │
//! │  │  deleted        │          │    ├── quantity (>= 1)           │     │
//! │  └─────────────────┘          │    └── available (snapshot)      │     │
//! │                               │  price (cached running total)    │     │
//! │                               └──────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A cart line copies the item's name when the item is first added, and the
//! cart total grows by the item's price *at the time of each add*. Later
//! changes to the item (rename, reprice, soft delete) never reach back into
//! existing carts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ShopResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of an [`Item`]. Assigned from a per-kind sequence starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw sequence value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    /// Returns the raw sequence value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Resource path a caller can hand out after creating the item.
    pub fn location(&self) -> String {
        format!("/item/{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`Cart`]. Carts have their own sequence, independent of
/// items, so item 0 and cart 0 coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(u64);

impl CartId {
    /// Wraps a raw sequence value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        CartId(raw)
    }

    /// Returns the raw sequence value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Resource path a caller can hand out after creating the cart.
    pub fn location(&self) -> String {
        format!("/cart/{}", self.0)
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A sellable unit.
///
/// `id` and `deleted` are private: the id never changes after creation and
/// the deleted flag can only move from `false` to `true`
/// (see [`Item::mark_deleted`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,

    /// Display name.
    pub name: String,

    /// Unit price, never negative once stored.
    pub price: Money,

    deleted: bool,

    /// When the item was created.
    pub created_at: DateTime<Utc>,

    /// When the item was last replaced, patched or deleted.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Creates an active item. Price validation is the repository's job.
    pub fn new(id: ItemId, name: impl Into<String>, price: Money) -> Self {
        let now = Utc::now();
        Item {
            id,
            name: name.into(),
            price,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// The item's identifier.
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Whether the item has been soft-deleted.
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Soft-deletes the item. Calling it again is a no-op.
    pub fn mark_deleted(&mut self) {
        if !self.deleted {
            self.deleted = true;
            self.updated_at = Utc::now();
        }
    }

    /// Overwrites the fields present in `patch`, leaving the others alone.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update of an [`Item`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
}

impl ItemPatch {
    /// A patch that overwrites both fields (full replace).
    pub fn replace(name: impl Into<String>, price: Money) -> Self {
        ItemPatch {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Only renames.
    pub fn name(name: impl Into<String>) -> Self {
        ItemPatch {
            name: Some(name.into()),
            price: None,
        }
    }

    /// Only reprices.
    pub fn price(price: Money) -> Self {
        ItemPatch {
            name: None,
            price: Some(price),
        }
    }
}

// =============================================================================
// Availability Policy
// =============================================================================

/// How a new cart line's `available` flag is computed.
///
/// ```text
/// Snapshot      ──► always true
/// TrackDeleted  ──► !item.is_deleted() at the moment the line is created
/// ```
///
/// Either way the flag is a snapshot: it is never re-synchronized when the
/// item changes afterwards, and re-adding an existing line leaves it alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityPolicy {
    /// Every new line is marked available.
    Snapshot,
    /// A line created from a soft-deleted item is marked unavailable.
    #[default]
    TrackDeleted,
}

impl AvailabilityPolicy {
    /// The `available` flag for a line created from `item`.
    pub fn available_for(&self, item: &Item) -> bool {
        match self {
            AvailabilityPolicy::Snapshot => true,
            AvailabilityPolicy::TrackDeleted => !item.is_deleted(),
        }
    }
}

impl FromStr for AvailabilityPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snapshot" => Ok(AvailabilityPolicy::Snapshot),
            "track-deleted" | "track_deleted" => Ok(AvailabilityPolicy::TrackDeleted),
            _ => Err(ValidationError::NotAllowed {
                field: "availability".to_string(),
                allowed: vec!["snapshot".to_string(), "track-deleted".to_string()],
            }),
        }
    }
}

// =============================================================================
// Cart Line Entry
// =============================================================================

/// One item's record inside a cart.
///
/// ## Design Notes
/// - `item_id`: weak reference, the item may be deleted later
/// - `name`: frozen copy of the item name at first add
/// - `quantity`: number of successful adds for this item, always >= 1
///
/// Serialized with `id` as the key of the item reference, matching the
/// shape callers already expose for line entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineEntry {
    #[serde(rename = "id")]
    pub item_id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub available: bool,
    pub added_at: DateTime<Utc>,
}

// =============================================================================
// Cart
// =============================================================================

/// An aggregating container of items.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item bumps quantity)
/// - Lines keep the order in which items were first added
/// - `price` equals Σ quantity × item price at the time of each add; it is
///   a cached aggregate updated in [`Cart::add_unit`], never recomputed
///
/// All three are guarded by keeping the fields private: `add_unit` is the
/// only mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    items: Vec<CartLineEntry>,
    price: Money,

    /// When the cart was created.
    pub created_at: DateTime<Utc>,

    /// When an item was last added.
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart with a zero total.
    pub fn new(id: CartId) -> Self {
        let now = Utc::now();
        Cart {
            id,
            items: Vec::new(),
            price: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The cart's identifier.
    #[inline]
    pub fn id(&self) -> CartId {
        self.id
    }

    /// Line entries in first-added order.
    #[inline]
    pub fn lines(&self) -> &[CartLineEntry] {
        &self.items
    }

    /// Cached running total.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// The line for `item_id`, if the item was ever added.
    pub fn line(&self, item_id: ItemId) -> Option<&CartLineEntry> {
        self.items.iter().find(|line| line.item_id == item_id)
    }

    /// Total number of units across all lines, computed on demand.
    ///
    /// Saturates at `i64::MAX` rather than overflowing.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, line| total.saturating_add(line.quantity))
    }

    /// Checks if no item was ever added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `item` to the cart.
    ///
    /// ## Behavior
    /// - Item already has a line: its quantity goes up by one, `name` and
    ///   `available` keep their original snapshot
    /// - Otherwise: a new line is appended with quantity 1, the item's
    ///   current name and the given `available` flag
    /// - In both cases the cart total grows by the item's current price
    ///
    /// ## Errors
    /// `InvalidArgument` if the total or the line quantity would overflow.
    /// Both are checked before anything changes.
    pub fn add_unit(&mut self, item: &Item, available: bool) -> ShopResult<()> {
        let price = self
            .price
            .checked_add(item.price)
            .ok_or_else(|| ValidationError::overflow("cart price"))?;

        match self.items.iter_mut().find(|line| line.item_id == item.id()) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .ok_or_else(|| ValidationError::overflow("quantity"))?;
            }
            None => self.items.push(CartLineEntry {
                item_id: item.id(),
                name: item.name.clone(),
                quantity: 1,
                available,
                added_at: Utc::now(),
            }),
        }

        self.price = price;
        self.updated_at = Utc::now();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
