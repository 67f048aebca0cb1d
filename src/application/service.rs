use parking_lot::RwLock;

use crate::domain::model::book::{seed_books, Book, BookPatch, NewBook};
use crate::domain::model::id::BookId;
use crate::domain::store::CatalogStore;

use super::error::AppError;

/// Catalogに対するユースケース。
/// 1操作 = 1回のロック取得で、add/updateの check → mutate が競合しない。
pub struct CatalogService {
    store: RwLock<Box<dyn CatalogStore>>,
}

impl CatalogService {
    pub fn new(store: impl CatalogStore + 'static) -> Self {
        Self {
            store: RwLock::new(Box::new(store)),
        }
    }

    /// seedの2冊を投入した状態で作成する。
    pub fn seeded(store: impl CatalogStore + 'static) -> Self {
        let service = Self::new(store);
        for new in seed_books() {
            service.add_book(new);
        }
        service
    }

    pub fn books(&self) -> Vec<Book> {
        let books = self.store.read().list();
        log::debug!("listed {} books", books.len());
        books
    }

    pub fn book(&self, id: BookId) -> Result<Book, AppError> {
        self.store.read().get(id).map_err(|e| {
            log::debug!("lookup failed: {e}");
            AppError::from(e)
        })
    }

    /// 文字列IDで検索する。BookIdとして不正なら`UnknownId`。
    pub fn book_by_ref(&self, raw: &str) -> Result<Book, AppError> {
        let id = Self::parse_id(raw)?;
        self.book(id)
    }

    pub fn add_book(&self, new: NewBook) -> Book {
        let book = self.store.write().add(new);
        log::info!(
            "added book {}: {:?} by {:?}",
            book.id(),
            book.title(),
            book.author()
        );
        book
    }

    pub fn update_book(&self, id: BookId, patch: BookPatch) -> Result<Book, AppError> {
        let book = self.store.write().update(id, patch).map_err(|e| {
            log::debug!("update failed: {e}");
            AppError::from(e)
        })?;
        log::info!("updated book {}", book.id());
        Ok(book)
    }

    pub fn update_book_by_ref(&self, raw: &str, patch: BookPatch) -> Result<Book, AppError> {
        let id = Self::parse_id(raw)?;
        self.update_book(id, patch)
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- private ---

    fn parse_id(raw: &str) -> Result<BookId, AppError> {
        raw.parse().map_err(|_| {
            log::debug!("rejected malformed book id {raw:?}");
            AppError::UnknownId(raw.to_string())
        })
    }
}
