//! Catalog core for the Word Treasury bookstore: an on-device catalog with
//! filtering/search/sort, validated admin CRUD, and key-value persistence.
//! The UI layer owns all view state and drives this crate through plain
//! function calls; everything here is synchronous and single-writer.

pub mod defaults;
pub mod editor;
pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod store;

pub use defaults::{DefaultSource, FixedDefaults, RandomDefaults};
pub use editor::{BookInput, CatalogEditor};
pub use error::{CatalogError, StoreError};
pub use models::{Book, Order, PaymentMethod, Review};
pub use query::{advanced_search, visible_books, AdvancedQuery, FilterSpec, SortBy};
pub use store::{CatalogStore, KeyValue, MemoryStore, SqliteStore};
