//! # Repository Module
//!
//! In-memory repositories for items and carts.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Caller                                                                 │
//! │       │                                                                 │
//! │       │  store.carts().add_item(cart_id, item_id)                       │
//! │       ▼                                                                 │
//! │  CartRepository ───────── reads ─────────► ItemRepository               │
//! │  ├── create()                              ├── create(name, price)      │
//! │  ├── get(id)                               ├── get(id)                  │
//! │  ├── list(&CartFilter)                     ├── list(&ItemFilter)        │
//! │  └── add_item(cart, item)                  ├── replace / patch          │
//! │                                            └── soft_delete(id)          │
//! │       │                                          │                      │
//! │       ▼                                          ▼                      │
//! │  BTreeMap<CartId, Mutex<Cart>>     BTreeMap<ItemId, RwLock<Item>>       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Item catalog and lifecycle
//! - [`CartRepository`](cart::CartRepository) - Carts and line aggregation

pub mod cart;
pub mod item;
