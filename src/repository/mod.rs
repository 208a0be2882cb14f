//! Repository layer for book storage

pub mod books;
pub mod memory;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Book, BookChanges},
};

pub use books::BooksRepository;
pub use memory::MemoryBookStore;

/// Data access for book records.
///
/// Absence is reported through `Option`/`bool` rather than an error so the
/// caller decides what a missing record means for its route.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, newest `created_at` first (ties broken by id, descending)
    async fn list_all(&self) -> AppResult<Vec<Book>>;

    /// Insert a record, stamping both timestamps
    async fn create(&self, data: &BookChanges) -> AppResult<Book>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;

    /// Replace every editable field and refresh `updated_at`
    async fn update(&self, id: i32, data: &BookChanges) -> AppResult<Option<Book>>;

    /// Returns `false` when no record had this id
    async fn delete(&self, id: i32) -> AppResult<bool>;

    /// Connectivity probe for the readiness endpoint
    async fn ping(&self) -> AppResult<()>;
}
