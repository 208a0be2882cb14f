//! In-process book storage, selected with `database.backend = "memory"`

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{
    error::AppResult,
    models::{Book, BookChanges},
};

#[derive(Default)]
struct State {
    next_id: i32,
    books: BTreeMap<i32, Book>,
}

#[derive(Default)]
pub struct MemoryBookStore {
    state: RwLock<State>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let state = self.state.read().await;
        let mut books: Vec<Book> = state.books.values().cloned().collect();
        books.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(books)
    }

    async fn create(&self, data: &BookChanges) -> AppResult<Book> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let now = Utc::now();
        let book = Book {
            id: state.next_id,
            title: data.title.clone(),
            author: data.author.clone(),
            genre: data.genre.clone(),
            year: data.year,
            created_at: now,
            updated_at: now,
        };
        state.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.state.read().await.books.get(&id).cloned())
    }

    async fn update(&self, id: i32, data: &BookChanges) -> AppResult<Option<Book>> {
        let mut state = self.state.write().await;
        let Some(book) = state.books.get_mut(&id) else {
            return Ok(None);
        };
        book.title = data.title.clone();
        book.author = data.author.clone();
        book.genre = data.genre.clone();
        book.year = data.year;
        book.updated_at = Utc::now();
        Ok(Some(book.clone()))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.state.write().await.books.remove(&id).is_some())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
