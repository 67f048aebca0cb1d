use super::error::DomainError;
use super::model::book::{Book, BookPatch, NewBook};
use super::model::id::BookId;

/// Catalogの保持方式の抽象。Infra層が実装する。
///
/// 実装は同期・インメモリで、排他制御は呼び出し側（`CatalogService`）が持つ。
pub trait CatalogStore: Send + Sync {
    /// 挿入順の全件。
    fn list(&self) -> Vec<Book>;

    fn get(&self, id: BookId) -> Result<Book, DomainError>;

    /// 現在の件数をIDとして採番し、保存したレコードを返す。
    fn add(&mut self, new: NewBook) -> Book;

    /// 指定フィールドのみ上書きする。存在しなければ何も変更しない。
    fn update(&mut self, id: BookId, patch: BookPatch) -> Result<Book, DomainError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
