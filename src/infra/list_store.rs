use crate::domain::error::DomainError;
use crate::domain::model::book::{Book, BookPatch, NewBook};
use crate::domain::model::id::BookId;
use crate::domain::store::CatalogStore;

/// 挿入順のVecによるCatalogStore実装。検索はIDの線形走査。
#[derive(Debug, Default)]
pub struct ListCatalogStore {
    books: Vec<Book>,
}

impl ListCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id() == id)
    }
}

impl CatalogStore for ListCatalogStore {
    fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn get(&self, id: BookId) -> Result<Book, DomainError> {
        self.books
            .iter()
            .find(|b| b.id() == id)
            .cloned()
            .ok_or(DomainError::BookNotFound(id))
    }

    fn add(&mut self, new: NewBook) -> Book {
        let book = Book::new(BookId::from_count(self.books.len()), new);
        self.books.push(book.clone());
        book
    }

    fn update(&mut self, id: BookId, patch: BookPatch) -> Result<Book, DomainError> {
        let pos = self.position(id).ok_or(DomainError::BookNotFound(id))?;
        let book = &mut self.books[pos];
        book.apply(patch);
        Ok(book.clone())
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
