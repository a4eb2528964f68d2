//! Property tests for the repository invariants.
//!
//! Each case builds a fresh `Store`, drives it with a generated sequence of
//! operations on a current-thread runtime, and checks the result against a
//! plain model computed alongside.

use std::collections::HashMap;
use std::future::Future;

use proptest::prelude::*;

use shop_core::{CartFilter, ItemFilter, ItemId, ItemPatch, Money, Page};
use shop_store::Store;

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

/// One step of a cart scenario.
#[derive(Debug, Clone)]
enum Step {
    /// Add item `n % item_count` to the cart.
    Add(usize),
    /// Reprice item `n % item_count` (ignored if it is deleted).
    Reprice(usize, i64),
    /// Soft-delete item `n % item_count`.
    Delete(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => any::<usize>().prop_map(Step::Add),
        1 => (any::<usize>(), 0i64..10_000).prop_map(|(n, p)| Step::Reprice(n, p)),
        1 => any::<usize>().prop_map(Step::Delete),
    ]
}

// ============================================================================
// Id uniqueness
// ============================================================================

proptest! {
    #[test]
    fn ids_are_sequential_per_kind(items in 0usize..40, carts in 0usize..40) {
        let (item_ids, cart_ids) = block_on(async {
            let store = Store::default();
            let mut item_ids = Vec::new();
            for n in 0..items {
                let item = store.items().create(format!("item-{n}"), Money::from_cents(n as i64)).await.unwrap();
                item_ids.push(item.id().get());
            }
            let mut cart_ids = Vec::new();
            for _ in 0..carts {
                cart_ids.push(store.carts().create().await.id().get());
            }
            (item_ids, cart_ids)
        });

        prop_assert_eq!(item_ids, (0..items as u64).collect::<Vec<_>>());
        prop_assert_eq!(cart_ids, (0..carts as u64).collect::<Vec<_>>());
    }
}

// ============================================================================
// Cart price and line invariants
// ============================================================================

proptest! {
    #[test]
    fn cart_totals_match_price_at_add_time(
        prices in prop::collection::vec(0i64..10_000, 1..8),
        steps in prop::collection::vec(step(), 0..60),
    ) {
        let item_count = prices.len();

        let (cart, expected_total, expected_adds, first_seen) = block_on(async {
            let store = Store::default();
            let items = store.items();
            let carts = store.carts();

            let mut current: Vec<i64> = Vec::new();
            for (n, cents) in prices.iter().enumerate() {
                items.create(format!("item-{n}"), Money::from_cents(*cents)).await.unwrap();
                current.push(*cents);
            }
            let cart_id = carts.create().await.id();

            let mut expected_total = 0i64;
            let mut expected_adds: HashMap<u64, i64> = HashMap::new();
            let mut first_seen: Vec<u64> = Vec::new();

            for step in &steps {
                match *step {
                    Step::Add(n) => {
                        let idx = n % item_count;
                        let id = ItemId::new(idx as u64);
                        carts.add_item(cart_id, id).await.unwrap();

                        expected_total += current[idx];
                        let adds = expected_adds.entry(idx as u64).or_insert(0);
                        if *adds == 0 {
                            first_seen.push(idx as u64);
                        }
                        *adds += 1;
                    }
                    Step::Reprice(n, cents) => {
                        let idx = n % item_count;
                        let id = ItemId::new(idx as u64);
                        if items.patch(id, ItemPatch::price(Money::from_cents(cents))).await.is_ok() {
                            current[idx] = cents;
                        }
                    }
                    Step::Delete(n) => {
                        let id = ItemId::new((n % item_count) as u64);
                        items.soft_delete(id).await.unwrap();
                    }
                }
            }

            let cart = carts.get(cart_id).await.unwrap();
            (cart, expected_total, expected_adds, first_seen)
        });

        // Price invariant
        prop_assert_eq!(cart.price(), Money::from_cents(expected_total));

        // Lines are unique, ordered by first add, quantity == number of adds
        let line_ids: Vec<u64> = cart.lines().iter().map(|l| l.item_id.get()).collect();
        prop_assert_eq!(&line_ids, &first_seen);
        for line in cart.lines() {
            prop_assert!(line.quantity >= 1);
            prop_assert_eq!(Some(&line.quantity), expected_adds.get(&line.item_id.get()));
        }
        prop_assert_eq!(cart.total_quantity(), expected_adds.values().sum::<i64>());
    }
}

// ============================================================================
// Soft-delete monotonicity
// ============================================================================

proptest! {
    #[test]
    fn deleted_items_stay_deleted(
        names in prop::collection::vec("[a-z]{1,8}", 1..6),
        patches in prop::collection::vec((any::<usize>(), 0i64..500), 0..20),
    ) {
        let deleted = block_on(async {
            let store = Store::default();
            let items = store.items();
            for name in &names {
                items.create(name.clone(), Money::from_cents(100)).await.unwrap();
            }

            items.soft_delete(ItemId::new(0)).await.unwrap();

            for (n, cents) in &patches {
                let id = ItemId::new((n % names.len()) as u64);
                let _ = items.patch(id, ItemPatch::price(Money::from_cents(*cents))).await;
                let _ = items.replace(id, "renamed", Money::from_cents(*cents)).await;
                if n % 3 == 0 {
                    items.soft_delete(id).await.unwrap();
                }
            }

            items.get(ItemId::new(0)).await.unwrap()
        });

        prop_assert!(deleted.is_deleted());
        prop_assert_eq!(deleted.price, Money::from_cents(100));
        prop_assert_eq!(&deleted.name, &names[0]);
    }
}

// ============================================================================
// Pagination stability
// ============================================================================

proptest! {
    #[test]
    fn item_pages_are_windows_of_the_full_listing(
        prices in prop::collection::vec(0i64..1_000, 0..30),
        deleted in prop::collection::vec(any::<bool>(), 30),
        min_price in prop::option::of(0i64..1_000),
        offset in 0i64..35,
        limit in 1i64..12,
    ) {
        let (full, page, walked) = block_on(async {
            let store = Store::default();
            let items = store.items();
            for (n, cents) in prices.iter().enumerate() {
                let item = items.create(format!("item-{n}"), Money::from_cents(*cents)).await.unwrap();
                if deleted[n] {
                    items.soft_delete(item.id()).await.unwrap();
                }
            }

            let base = ItemFilter {
                min_price: min_price.map(Money::from_cents),
                ..Default::default()
            };

            let full = items
                .list(&ItemFilter { page: Page::new(0, 1_000), ..base.clone() })
                .await
                .unwrap();
            let page = items
                .list(&ItemFilter { page: Page::new(offset, limit), ..base.clone() })
                .await
                .unwrap();

            // Walk every page until one comes back short
            let mut walked = Vec::new();
            let mut at = 0;
            loop {
                let chunk = items
                    .list(&ItemFilter { page: Page::new(at, limit), ..base.clone() })
                    .await
                    .unwrap();
                let done = (chunk.len() as i64) < limit;
                walked.extend(chunk);
                if done {
                    break;
                }
                at += limit;
            }

            (full, page, walked)
        });

        let window: Vec<_> = full
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        prop_assert_eq!(&page, &window);
        prop_assert_eq!(&walked, &full);

        for item in &full {
            prop_assert!(!item.is_deleted());
            if let Some(min) = min_price {
                prop_assert!(item.price.cents() >= min);
            }
        }
    }

    #[test]
    fn cart_pages_are_windows_of_the_full_listing(
        adds in prop::collection::vec(0usize..6, 0..20),
        min_quantity in prop::option::of(0i64..6),
        offset in 0i64..25,
        limit in 1i64..8,
    ) {
        let (full, page) = block_on(async {
            let store = Store::default();
            let pen = store.items().create("pen", Money::from_cents(150)).await.unwrap();
            let carts = store.carts();
            for count in &adds {
                let cart = carts.create().await;
                for _ in 0..*count {
                    carts.add_item(cart.id(), pen.id()).await.unwrap();
                }
            }

            let base = CartFilter {
                min_quantity,
                ..Default::default()
            };
            let full = carts
                .list(&CartFilter { page: Page::new(0, 1_000), ..base.clone() })
                .await
                .unwrap();
            let page = carts
                .list(&CartFilter { page: Page::new(offset, limit), ..base.clone() })
                .await
                .unwrap();
            (full, page)
        });

        let window: Vec<_> = full
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        prop_assert_eq!(&page, &window);

        let expected = adds
            .iter()
            .filter(|count| min_quantity.map_or(true, |min| **count as i64 >= min))
            .count();
        prop_assert_eq!(full.len(), expected);
        for cart in &full {
            prop_assert_eq!(cart.price(), Money::from_cents(150) * cart.total_quantity());
        }
    }
}
