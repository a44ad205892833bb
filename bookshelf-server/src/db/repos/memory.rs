//! In-process book store
//!
//! Mirrors the `books` table semantics: ids start at 1, increase
//! monotonically and are never reused after a delete.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{BookStore, StoreError};
use crate::models::{Book, BookId, NewBook};

#[derive(Default)]
struct Table {
    rows: BTreeMap<BookId, Book>,
    last_id: i64,
}

/// Book store kept in memory, with optional failure injection
#[derive(Default)]
pub struct MemoryBookStore {
    table: Mutex<Table>,
    failing: AtomicBool,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn create(&self, book: NewBook) -> Result<Book, StoreError> {
        self.check()?;
        let mut table = self.lock();
        table.last_id += 1;
        let id = BookId(table.last_id);
        let book = book.into_book(id);
        table.rows.insert(id, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: BookId) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.lock().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn get(&self, id: BookId) -> Result<Book, StoreError> {
        self.check()?;
        self.lock()
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        self.check()?;
        Ok(self.lock().rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> NewBook {
        NewBook {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryBookStore::new();
        let a = store.create(book("a")).await.unwrap();
        let b = store.create(book("b")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete() {
        let store = MemoryBookStore::new();
        let a = store.create(book("a")).await.unwrap();
        assert_eq!(store.delete(a.book_id()).await.unwrap(), 1);
        let b = store.create(book("b")).await.unwrap();
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_is_not_an_error() {
        let store = MemoryBookStore::new();
        assert_eq!(store.delete(BookId(99)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryBookStore::new();
        let err = store.get(BookId(5)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: BookId(5) }));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let store = MemoryBookStore::new();
        for title in ["c", "a", "b"] {
            store.create(book(title)).await.unwrap();
        }
        let ids: Vec<i64> = store.list().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn failing_store_rejects_everything() {
        let store = MemoryBookStore::new();
        store.set_failing(true);
        assert!(matches!(
            store.create(book("x")).await,
            Err(StoreError::Unavailable)
        ));
        assert!(matches!(store.list().await, Err(StoreError::Unavailable)));
        assert!(store.is_empty());
    }
}
