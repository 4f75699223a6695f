use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Datelike, Utc};

use crate::error::CatalogError;
use crate::models::Book;
use crate::store::{CatalogStore, KeyValue};

/// User-editable fields, as gathered from the admin form. Everything else on
/// a record is owned by the system and assigned at creation time.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub cover: String,
    pub desc: String,
}

/// Highest id issued by this process. Ids are millisecond timestamps;
/// the guard keeps them strictly increasing when creates land within the
/// same millisecond.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);
    now.max(prev + 1)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn validated(input: &BookInput) -> Result<(String, String), CatalogError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(CatalogError::Validation { field: "title" });
    }
    let author = input.author.trim();
    if author.is_empty() {
        return Err(CatalogError::Validation { field: "author" });
    }
    Ok((title.to_string(), author.to_string()))
}

/// Validated create/update/delete over the catalog. Each operation is a
/// full read-mutate-save cycle against the store; nothing is cached across
/// calls, and a failed save is never reported as committed.
pub struct CatalogEditor<'a, S: KeyValue> {
    store: &'a CatalogStore<S>,
}

impl<'a, S: KeyValue> CatalogEditor<'a, S> {
    pub fn new(store: &'a CatalogStore<S>) -> Self {
        CatalogEditor { store }
    }

    /// Create a book from form input and insert it at the front of the
    /// catalog. Price, rating and ISBN come from the store's default
    /// generator; the year is the current one.
    pub fn create(&self, input: &BookInput) -> Result<Book, CatalogError> {
        let (title, author) = validated(input)?;
        let mut books = self.store.load_books()?;

        let defaults = self.store.defaults();
        let book = Book {
            id: next_id(),
            title,
            author,
            genre: optional(&input.genre),
            price: defaults.price(),
            rating: defaults.rating(),
            isbn: defaults.isbn(),
            year: Utc::now().year(),
            desc: optional(&input.desc),
            cover: optional(&input.cover),
            reviews: Vec::new(),
        };

        books.insert(0, book.clone());
        self.store.save_books(&books)?;
        log::info!("created book {} ({})", book.id, book.title);
        Ok(book)
    }

    /// Merge form input over an existing record. Price, rating, ISBN and
    /// reviews are carried from the pre-edit record no matter what: those
    /// fields stand in for data a real backend would own, so the edit path
    /// never touches them. The record keeps its position in the sequence.
    pub fn update(&self, id: i64, input: &BookInput) -> Result<Book, CatalogError> {
        let (title, author) = validated(input)?;
        let mut books = self.store.load_books()?;

        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::NotFound { id })?;

        let merged = Book {
            id: slot.id,
            title,
            author,
            genre: optional(&input.genre),
            price: slot.price,
            rating: slot.rating,
            isbn: slot.isbn.clone(),
            year: slot.year,
            desc: optional(&input.desc),
            cover: optional(&input.cover),
            reviews: slot.reviews.clone(),
        };
        *slot = merged.clone();

        self.store.save_books(&books)?;
        log::info!("updated book {} ({})", merged.id, merged.title);
        Ok(merged)
    }

    /// Remove a book. No soft-delete, no cascading effects.
    pub fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let mut books = self.store.load_books()?;
        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::NotFound { id })?;
        books.remove(index);
        self.store.save_books(&books)?;
        log::info!("deleted book {}", id);
        Ok(())
    }
}
