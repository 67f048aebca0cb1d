use serde::Serialize;

use super::id::BookId;

/// 追加リクエスト。省略されたフィールドは未設定のまま保存する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}

/// 部分更新リクエスト（Noneのフィールドは変更しない、Some(None)でクリア）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<Option<String>>,
    pub author: Option<Option<String>>,
}

impl BookPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(Some(title.into())),
            ..Self::default()
        }
    }

    pub fn author(author: impl Into<String>) -> Self {
        Self {
            author: Some(Some(author.into())),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

/// Catalog上の1冊。Storeが所有し、呼び出し側にはcloneを返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: Option<String>,
    author: Option<String>,
}

impl Book {
    pub(crate) fn new(id: BookId, new: NewBook) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// 指定されたフィールドだけを上書きする。
    pub(crate) fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
    }
}

/// 起動時に投入する2冊。
pub fn seed_books() -> Vec<NewBook> {
    vec![
        NewBook::new("The Awakening", "Kate Chopin"),
        NewBook::new("City of Glass", "Paul Auster"),
    ]
}
