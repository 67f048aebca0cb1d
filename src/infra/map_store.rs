use std::collections::BTreeMap;

use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, BookPatch, NewBook};
use crate::domain::model::id::BookId;
use crate::domain::store::CatalogStore;

/// ID → Book のマップによるCatalogStore実装。
/// IDは件数から採番されるため、キー順 = 挿入順になる。
#[derive(Debug, Default)]
pub struct MapCatalogStore {
    books: BTreeMap<BookId, Book>,
}

impl MapCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogStore for MapCatalogStore {
    fn list(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    fn get(&self, id: BookId) -> Result<Book, DomainError> {
        self.books
            .get(&id)
            .cloned()
            .ok_or(DomainError::BookNotFound(id))
    }

    fn add(&mut self, new: NewBook) -> Book {
        let id = BookId::from_count(self.books.len());
        let book = Book::new(id, new);
        self.books.insert(id, book.clone());
        book
    }

    fn update(&mut self, id: BookId, patch: BookPatch) -> Result<Book, DomainError> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or(DomainError::BookNotFound(id))?;
        book.apply(patch);
        Ok(book.clone())
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
