//! # Query Types
//!
//! Pagination and filter parameters for the two `list` operations.
//!
//! ## Evaluation Order
//! ```text
//! all entities (insertion order)
//!        │
//!        ▼
//!  validate()  ──► InvalidArgument, nothing read
//!        │
//!        ▼
//!  matches()   ──► visibility, price bounds, quantity bounds
//!        │
//!        ▼
//!  Page::slice ──► skip(offset).take(limit)
//! ```
//!
//! Bounds are inclusive. A bound left as `None` does not filter. A lower
//! bound above its upper bound is valid and simply matches nothing.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Cart, Item};
use crate::validation::{
    validate_limit, validate_offset, validate_price_bound, validate_quantity_bound,
    ValidationResult,
};
use crate::DEFAULT_PAGE_LIMIT;

// =============================================================================
// Page
// =============================================================================

/// An `offset`/`limit` window over a filtered sequence.
///
/// Missing fields decode to the first page of [`DEFAULT_PAGE_LIMIT`] items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl Page {
    pub fn new(offset: i64, limit: i64) -> Self {
        Page { offset, limit }
    }

    /// Rejects a negative offset or a non-positive limit.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_offset(self.offset)?;
        validate_limit(self.limit)?;
        Ok(())
    }

    /// Applies the window to an iterator. Assumes [`Page::validate`] passed.
    ///
    /// An offset past the end yields nothing.
    pub fn slice<I: Iterator>(&self, iter: I) -> impl Iterator<Item = I::Item> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(0);
        iter.skip(skip).take(take)
    }
}

/// Checks `min <= value <= max`, treating a missing bound as open.
fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

// =============================================================================
// Item Filter
// =============================================================================

/// Parameters of `ItemRepository::list`.
///
/// ## Example
/// ```rust
/// use shop_core::money::Money;
/// use shop_core::query::{ItemFilter, Page};
///
/// let filter = ItemFilter {
///     page: Page::new(0, 20),
///     min_price: Some(Money::from_cents(100)),
///     ..Default::default()
/// };
/// assert!(filter.validate().is_ok());
/// assert!(!filter.show_deleted);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
    #[serde(flatten)]
    pub page: Page,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub show_deleted: bool,
}

impl ItemFilter {
    pub fn validate(&self) -> ValidationResult<()> {
        self.page.validate()?;
        validate_price_bound("min_price", self.min_price)?;
        validate_price_bound("max_price", self.max_price)?;
        Ok(())
    }

    /// Whether `item` passes visibility and price bounds.
    pub fn matches(&self, item: &Item) -> bool {
        if item.is_deleted() && !self.show_deleted {
            return false;
        }
        within(item.price, self.min_price, self.max_price)
    }
}

// =============================================================================
// Cart Filter
// =============================================================================

/// Parameters of `CartRepository::list`.
///
/// Price bounds compare against the cached cart total; quantity bounds
/// against [`Cart::total_quantity`], computed per cart at query time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartFilter {
    #[serde(flatten)]
    pub page: Page,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
}

impl CartFilter {
    pub fn validate(&self) -> ValidationResult<()> {
        self.page.validate()?;
        validate_price_bound("min_price", self.min_price)?;
        validate_price_bound("max_price", self.max_price)?;
        validate_quantity_bound("min_quantity", self.min_quantity)?;
        validate_quantity_bound("max_quantity", self.max_quantity)?;
        Ok(())
    }

    pub fn matches(&self, cart: &Cart) -> bool {
        within(cart.price(), self.min_price, self.max_price)
            && within(cart.total_quantity(), self.min_quantity, self.max_quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{CartId, ItemId};

    fn item(id: u64, cents: i64) -> Item {
        Item::new(ItemId::new(id), format!("item-{id}"), Money::from_cents(cents))
    }

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::new(0, 10));
    }

    #[test]
    fn test_filters_decode_with_default_page() {
        let filter: ItemFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, ItemFilter::default());
        assert_eq!(filter.page, Page::new(0, 10));

        let filter: ItemFilter = serde_json::from_str(r#"{"min_price": 100}"#).unwrap();
        assert_eq!(filter.page, Page::new(0, 10));
        assert_eq!(filter.min_price, Some(Money::from_cents(100)));
        assert!(!filter.show_deleted);

        let filter: CartFilter = serde_json::from_str(r#"{"offset": 5, "min_quantity": 2}"#).unwrap();
        assert_eq!(filter.page, Page::new(5, 10));
        assert_eq!(filter.min_quantity, Some(2));

        let filter: CartFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, CartFilter::default());
    }

    #[test]
    fn test_page_validate() {
        assert!(Page::new(0, 1).validate().is_ok());
        assert_eq!(
            Page::new(-1, 10).validate(),
            Err(ValidationError::negative("offset"))
        );
        assert_eq!(
            Page::new(0, 0).validate(),
            Err(ValidationError::not_positive("limit"))
        );
    }

    #[test]
    fn test_page_slice() {
        let window: Vec<_> = Page::new(2, 3).slice(0..10).collect();
        assert_eq!(window, vec![2, 3, 4]);

        let tail: Vec<_> = Page::new(8, 5).slice(0..10).collect();
        assert_eq!(tail, vec![8, 9]);

        assert_eq!(Page::new(50, 5).slice(0..10).count(), 0);
    }

    #[test]
    fn test_item_filter_visibility() {
        let mut gone = item(0, 100);
        gone.mark_deleted();

        assert!(!ItemFilter::default().matches(&gone));

        let filter = ItemFilter {
            show_deleted: true,
            ..Default::default()
        };
        assert!(filter.matches(&gone));
    }

    #[test]
    fn test_item_filter_bounds_are_inclusive() {
        let filter = ItemFilter {
            min_price: Some(Money::from_cents(150)),
            max_price: Some(Money::from_cents(300)),
            ..Default::default()
        };

        assert!(!filter.matches(&item(0, 149)));
        assert!(filter.matches(&item(1, 150)));
        assert!(filter.matches(&item(2, 300)));
        assert!(!filter.matches(&item(3, 301)));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let filter = ItemFilter {
            min_price: Some(Money::from_cents(500)),
            max_price: Some(Money::from_cents(100)),
            ..Default::default()
        };

        assert!(filter.validate().is_ok());
        assert!(!filter.matches(&item(0, 300)));
    }

    #[test]
    fn test_item_filter_rejects_negative_bound() {
        let filter = ItemFilter {
            max_price: Some(Money::from_cents(-1)),
            ..Default::default()
        };
        assert_eq!(filter.validate(), Err(ValidationError::negative("max_price")));
    }

    #[test]
    fn test_cart_filter() {
        let mut cart = Cart::new(CartId::new(0));
        let pen = item(0, 150);
        cart.add_unit(&pen, true).unwrap();
        cart.add_unit(&pen, true).unwrap();

        let by_quantity = CartFilter {
            min_quantity: Some(2),
            max_quantity: Some(2),
            ..Default::default()
        };
        assert!(by_quantity.matches(&cart));

        let by_price = CartFilter {
            max_price: Some(Money::from_cents(299)),
            ..Default::default()
        };
        assert!(!by_price.matches(&cart));

        assert!(CartFilter::default().matches(&Cart::new(CartId::new(1))));
    }

    #[test]
    fn test_cart_filter_rejects_negative_quantity() {
        let filter = CartFilter {
            min_quantity: Some(-3),
            ..Default::default()
        };
        assert_eq!(
            filter.validate(),
            Err(ValidationError::negative("min_quantity"))
        );
    }
}
