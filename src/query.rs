//! Pure filtering/search/sort over the catalog. No storage, no rendering:
//! the caller owns the filter state and passes it in per query.

use serde::{Deserialize, Serialize};

use crate::models::Book;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Newest,
    Price,
}

/// Active browse filters. Ephemeral and caller-owned; `Default` is the
/// cleared state (everything visible, newest first).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FilterSpec {
    pub search_query: String,
    /// Selected genres. Empty means no restriction; otherwise a book is
    /// visible when its genre matches any entry.
    pub categories: Vec<String>,
    /// Inclusive upper price bound.
    pub max_price: f64,
    /// Inclusive lower rating bound.
    pub min_rating: f64,
    pub sort_by: SortBy,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec {
            search_query: String::new(),
            categories: Vec::new(),
            max_price: 100.0,
            min_rating: 0.0,
            sort_by: SortBy::Newest,
        }
    }
}

/// Advanced search criteria. Each field is independent; blank fields are
/// not applied, provided fields must all hold.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AdvancedQuery {
    pub query: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn provided(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Compute the visible subset for the browse view. Predicates run before the
/// sort; the sort sees only surviving records. Total over any input: records
/// with non-finite price or rating simply fail the bound checks and drop out.
pub fn visible_books(books: &[Book], filter: &FilterSpec) -> Vec<Book> {
    let mut result: Vec<Book> = books
        .iter()
        .filter(|b| {
            if filter.search_query.is_empty() {
                return true;
            }
            let q = filter.search_query.as_str();
            contains_ci(&b.title, q) || contains_ci(&b.author, q) || contains_ci(&b.isbn, q)
        })
        .filter(|b| {
            filter.categories.is_empty()
                || b.genre
                    .as_deref()
                    .map(|genre| filter.categories.iter().any(|c| c == genre))
                    .unwrap_or(false)
        })
        .filter(|b| b.price <= filter.max_price)
        .filter(|b| b.rating >= filter.min_rating)
        .cloned()
        .collect();

    match filter.sort_by {
        SortBy::Price => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::Newest => result.sort_by(|a, b| b.id.cmp(&a.id)),
    }
    result
}

/// Advanced search: AND-combined independent criteria, no price/rating
/// bounds, no sort (catalog order preserved).
pub fn advanced_search(books: &[Book], query: &AdvancedQuery) -> Vec<Book> {
    books
        .iter()
        .filter(|b| match provided(&query.query) {
            Some(q) => {
                contains_ci(&b.title, q)
                    || b.desc
                        .as_deref()
                        .map(|desc| contains_ci(desc, q))
                        .unwrap_or(false)
            }
            None => true,
        })
        .filter(|b| match provided(&query.author) {
            Some(author) => contains_ci(&b.author, author),
            None => true,
        })
        .filter(|b| match provided(&query.isbn) {
            Some(isbn) => contains_ci(&b.isbn, isbn),
            None => true,
        })
        .filter(|b| match provided(&query.genre) {
            Some(genre) => b.genre.as_deref() == Some(genre),
            None => true,
        })
        .filter(|b| match query.year {
            Some(year) => b.year == year,
            None => true,
        })
        .cloned()
        .collect()
}

/// Distinct author names, sorted, with the number of books each has in the
/// catalog. Backs the author directory view.
pub fn unique_authors(books: &[Book]) -> Vec<(String, usize)> {
    let mut authors: Vec<String> = books.iter().map(|b| b.author.clone()).collect();
    authors.sort();
    authors.dedup();
    authors
        .into_iter()
        .map(|author| {
            let count = books.iter().filter(|b| b.author == author).count();
            (author, count)
        })
        .collect()
}

/// First `limit` books of an exact genre, in catalog order. Backs the
/// curated collection shelves.
pub fn collection(books: &[Book], genre: &str, limit: usize) -> Vec<Book> {
    books
        .iter()
        .filter(|b| b.genre.as_deref() == Some(genre))
        .take(limit)
        .cloned()
        .collect()
}

/// Leading slice of the catalog; the front of the sequence is the most
/// recently created.
pub fn new_arrivals(books: &[Book], limit: usize) -> Vec<Book> {
    books.iter().take(limit).cloned().collect()
}
