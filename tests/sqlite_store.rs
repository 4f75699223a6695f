//! End-to-end checks over the SQLite backend: the same store contract the
//! in-memory backend satisfies, exercised against a real database file.

use word_treasury::{
    BookInput, CatalogEditor, CatalogStore, FilterSpec, FixedDefaults, SqliteStore,
};

fn open_store(path: &std::path::Path) -> CatalogStore<SqliteStore> {
    let kv = SqliteStore::open(path).unwrap();
    CatalogStore::new(kv, Box::new(FixedDefaults::default()))
}

#[test]
fn seeds_once_and_round_trips_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("treasury.db");

    let store = open_store(&path);
    let books = store.load_books().unwrap();
    assert_eq!(books.len(), 8);
    drop(store);

    // A fresh connection sees the persisted catalog, not a new seed.
    let store = open_store(&path);
    let reloaded = store.load_books().unwrap();
    assert_eq!(reloaded, books);

    let orders = store.load_orders().unwrap();
    let payments = store.load_payments().unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(payments.len(), 2);
}

#[test]
fn edits_survive_a_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("treasury.db");

    let store = open_store(&path);
    let editor = CatalogEditor::new(&store);

    let created = editor
        .create(&BookInput {
            title: "The Left Hand of Darkness".to_string(),
            author: "Ursula K. Le Guin".to_string(),
            genre: "Sci-Fi".to_string(),
            ..BookInput::default()
        })
        .unwrap();

    let dune_id = store
        .load_books()
        .unwrap()
        .iter()
        .find(|b| b.title == "Dune")
        .unwrap()
        .id;
    editor.delete(dune_id).unwrap();
    drop(store);

    let store = open_store(&path);
    let books = store.load_books().unwrap();
    assert_eq!(books[0], created);
    assert!(books.iter().all(|b| b.id != dune_id));
    assert_eq!(books.len(), 8); // 8 seeded - 1 deleted + 1 created
}

#[test]
fn query_engine_sees_the_persisted_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("treasury.db");

    let store = open_store(&path);
    let books = store.load_books().unwrap();

    let filter = FilterSpec {
        categories: vec!["Sci-Fi".to_string()],
        ..FilterSpec::default()
    };
    let visible = word_treasury::visible_books(&books, &filter);
    assert_eq!(visible.len(), 2);
    for pair in visible.windows(2) {
        assert!(pair[0].id >= pair[1].id);
    }
}

#[test]
fn in_memory_connection_works_for_ephemeral_use() {
    let kv = SqliteStore::open_in_memory().unwrap();
    let store = CatalogStore::new(kv, Box::new(FixedDefaults::default()));
    let books = store.load_books().unwrap();
    assert_eq!(books.len(), 8);

    let editor = CatalogEditor::new(&store);
    let err = editor.delete(1).unwrap_err();
    assert!(matches!(err, word_treasury::CatalogError::NotFound { id: 1 }));
}
