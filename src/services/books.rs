//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookChanges, BookForm},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// All books, newest first
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list_all().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Book> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, form: &BookForm) -> AppResult<Book> {
        let changes = validated(form)?;
        let book = self.store.create(&changes).await?;
        tracing::info!("Book created: id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Full replace of the submitted fields.
    ///
    /// The record must exist before the submission is validated, so a bad
    /// form aimed at a missing id still reports `NotFound`.
    pub async fn update(&self, id: i32, form: &BookForm) -> AppResult<Book> {
        self.get(id).await?;
        let changes = validated(form)?;
        let book = self
            .store
            .update(id, &changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!("Book updated: id={}", book.id);
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

fn validated(form: &BookForm) -> AppResult<BookChanges> {
    form.to_changes().map_err(|errors| {
        tracing::debug!("Book submission rejected: {:?}", errors);
        AppError::Validation(errors)
    })
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::repository::MockBookStore;

    fn book(id: i32, title: &str) -> Book {
        let now = Utc::now();
        Book {
            id,
            title: title.to_string(),
            author: "Toni Morrison".to_string(),
            genre: None,
            year: Some(1987),
            created_at: now,
            updated_at: now,
        }
    }

    fn form(title: &str) -> BookForm {
        BookForm {
            title: title.to_string(),
            author: "Toni Morrison".to_string(),
            genre: String::new(),
            year: "1987".to_string(),
        }
    }

    fn service(store: MockBookStore) -> BooksService {
        BooksService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_create_persists_valid_form() {
        let mut store = MockBookStore::new();
        store
            .expect_create()
            .withf(|c: &BookChanges| c.title == "Beloved" && c.year == Some(1987))
            .times(1)
            .returning(|_| Ok(book(1, "Beloved")));

        let created = service(store).create(&form("Beloved")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_invalid_never_touches_store() {
        let mut store = MockBookStore::new();
        store.expect_create().never();

        let err = service(store).create(&form("  ")).await.unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors[0].field, "title"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_missing_book_is_not_found_even_if_invalid() {
        let mut store = MockBookStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store.expect_update().never();

        let err = service(store).update(9, &form("")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_invalid_existing_book() {
        let mut store = MockBookStore::new();
        store
            .expect_find_by_id()
            .returning(|id| Ok(Some(book(id, "Beloved"))));
        store.expect_update().never();

        let err = service(store).update(4, &form("")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let mut store = MockBookStore::new();
        store
            .expect_find_by_id()
            .returning(|id| Ok(Some(book(id, "Beloved"))));
        store
            .expect_update()
            .withf(|id, c| *id == 4 && c.title == "Jazz")
            .times(1)
            .returning(|id, _| Ok(Some(book(id, "Jazz"))));

        let updated = service(store).update(4, &form("Jazz")).await.unwrap();
        assert_eq!(updated.title, "Jazz");
    }

    #[tokio::test]
    async fn test_delete_missing_book() {
        let mut store = MockBookStore::new();
        store.expect_delete().returning(|_| Ok(false));

        let err = service(store).delete(3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockBookStore::new();
        store
            .expect_list_all()
            .returning(|| Err(AppError::Internal("connection refused".to_string())));

        let err = service(store).list().await.unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
