use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::defaults::DefaultSource;
use crate::error::StoreError;
use crate::models::{Book, Order, PaymentMethod, Review};
use crate::seed;

pub const BOOKS_KEY: &str = "books";
pub const ORDERS_KEY: &str = "orders";
pub const PAYMENTS_KEY: &str = "payments";

/// Publication year assigned to migrated records with no seed counterpart.
const MIGRATION_FALLBACK_YEAR: i32 = 2020;

/// Minimal key-value persistence contract the catalog sits on. Backends are
/// interchangeable: a SQLite file for the app, a hash map for tests.
pub trait KeyValue {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// SQLite-backed key-value store. One `kv` table, one row per collection.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    fn init(conn: &Connection) -> Result<(), StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl KeyValue for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock();
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory backend for tests and ephemeral embedding.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let data = match self.data.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut data = match self.data.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Numeric field as persisted by earlier versions, which wrote some numbers
/// as decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Num(f64),
    Text(String),
}

impl LenientNumber {
    fn coerce(self) -> Option<f64> {
        match self {
            LenientNumber::Num(value) => Some(value),
            LenientNumber::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Book record as it may exist on disk, with every later-added field
/// optional so old payloads still parse.
#[derive(Deserialize)]
struct StoredBook {
    id: i64,
    title: String,
    author: String,
    #[serde(default)]
    genre: Option<String>,
    #[serde(default)]
    price: Option<LenientNumber>,
    #[serde(default)]
    rating: Option<LenientNumber>,
    #[serde(default)]
    isbn: Option<String>,
    #[serde(default)]
    year: Option<i32>,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    reviews: Option<Vec<Review>>,
}

/// Owner of the persisted catalog and the two display-only collections.
/// Load-side it seeds on first run and backfills fields added after a
/// record was written; save-side it replaces the whole collection.
pub struct CatalogStore<S: KeyValue> {
    kv: S,
    defaults: Box<dyn DefaultSource>,
}

impl<S: KeyValue> CatalogStore<S> {
    pub fn new(kv: S, defaults: Box<dyn DefaultSource>) -> Self {
        CatalogStore { kv, defaults }
    }

    /// Generator shared with the editor so created and migrated records get
    /// their defaults from one policy.
    pub(crate) fn defaults(&self) -> &dyn DefaultSource {
        self.defaults.as_ref()
    }

    /// Load the catalog, seeding on first run. Pre-existing records missing
    /// later-added fields are backfilled (per-field presence check, so a
    /// second load over complete records changes nothing). An unreadable
    /// payload counts as no data.
    pub fn load_books(&self) -> Result<Vec<Book>, StoreError> {
        let raw = match self.kv.get(BOOKS_KEY)? {
            Some(raw) => raw,
            None => return self.seed_books(),
        };

        let stored: Vec<StoredBook> = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("stored books unreadable, reseeding: {}", err);
                return self.seed_books();
            }
        };

        let seeds = seed::books();
        let mut migrated = 0usize;
        let books: Vec<Book> = stored
            .into_iter()
            .map(|record| {
                let (book, touched) = self.upgrade_record(record, &seeds);
                if touched {
                    migrated += 1;
                }
                book
            })
            .collect();

        if migrated > 0 {
            log::info!("backfilled {} book records on load", migrated);
            self.save_books(&books)?;
        }
        Ok(books)
    }

    /// Replace the persisted catalog. Subsequent loads return exactly what
    /// was saved.
    pub fn save_books(&self, books: &[Book]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(books)?;
        self.kv.set(BOOKS_KEY, &raw)
    }

    pub fn load_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.load_readonly(ORDERS_KEY, seed::orders)
    }

    pub fn load_payments(&self) -> Result<Vec<PaymentMethod>, StoreError> {
        self.load_readonly(PAYMENTS_KEY, seed::payments)
    }

    fn seed_books(&self) -> Result<Vec<Book>, StoreError> {
        let books = seed::books();
        self.save_books(&books)?;
        log::info!("seeded {} books", books.len());
        Ok(books)
    }

    fn load_readonly<T>(&self, key: &str, seed_fn: fn() -> Vec<T>) -> Result<Vec<T>, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.kv.get(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(err) => {
                    log::warn!("stored {} unreadable, reseeding: {}", key, err);
                    self.seed_readonly(key, seed_fn)
                }
            },
            None => self.seed_readonly(key, seed_fn),
        }
    }

    fn seed_readonly<T>(&self, key: &str, seed_fn: fn() -> Vec<T>) -> Result<Vec<T>, StoreError>
    where
        T: Serialize,
    {
        let items = seed_fn();
        let raw = serde_json::to_string(&items)?;
        self.kv.set(key, &raw)?;
        log::info!("seeded {} {}", items.len(), key);
        Ok(items)
    }

    /// Fill in fields a stored record predates. ISBN, year and reviews come
    /// from the seed record with the same title when one exists; price and
    /// rating get generated plausible values.
    fn upgrade_record(&self, record: StoredBook, seed_books: &[Book]) -> (Book, bool) {
        let seed_match = seed_books.iter().find(|s| s.title == record.title);
        let mut touched = false;

        let price = match record.price.and_then(LenientNumber::coerce) {
            Some(price) => price,
            None => {
                touched = true;
                self.defaults.price()
            }
        };
        let rating = match record.rating.and_then(LenientNumber::coerce) {
            Some(rating) => rating,
            None => {
                touched = true;
                self.defaults.rating()
            }
        };
        let isbn = match record.isbn {
            Some(isbn) => isbn,
            None => {
                touched = true;
                match seed_match {
                    Some(seed) => seed.isbn.clone(),
                    None => self.defaults.isbn(),
                }
            }
        };
        let year = match record.year {
            Some(year) => year,
            None => {
                touched = true;
                seed_match
                    .map(|seed| seed.year)
                    .unwrap_or(MIGRATION_FALLBACK_YEAR)
            }
        };
        let reviews = match record.reviews {
            Some(reviews) => reviews,
            None => {
                touched = true;
                seed_match
                    .map(|seed| seed.reviews.clone())
                    .unwrap_or_default()
            }
        };

        let book = Book {
            id: record.id,
            title: record.title,
            author: record.author,
            genre: record.genre,
            price,
            rating,
            isbn,
            year,
            desc: record.desc,
            cover: record.cover,
            reviews,
        };
        (book, touched)
    }
}
