//! GraphQL schema for books-graphql
//!
//! async-graphql executor <-> application::CatalogService
//!
//! Query: books, book(id) / Mutation: addBook, updateBook

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, ErrorExtensions, InputObject, MaybeUndefined, Object, Result,
    Schema, SimpleObject, ID,
};

use crate::application::error::AppError;
use crate::application::service::CatalogService;
use crate::domain::model::book::{Book, BookPatch, NewBook};

pub type BooksSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

// =============================================================================
// Schema construction
// =============================================================================

/// Serviceをcontext dataとして注入したSchemaを作る。
pub fn build_schema(service: Arc<CatalogService>) -> BooksSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// SchemaのSDL表現。
pub fn sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn catalog<'a>(ctx: &Context<'a>) -> Result<&'a Arc<CatalogService>> {
    ctx.data::<Arc<CatalogService>>()
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

// =============================================================================
// Object types
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Book")]
pub struct BookObject {
    pub id: ID,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl From<Book> for BookObject {
    fn from(book: Book) -> Self {
        Self {
            id: ID(book.id().to_string()),
            title: book.title().map(String::from),
            author: book.author().map(String::from),
        }
    }
}

/// Fields to change. Omitted fields are kept, `null` clears the field.
#[derive(Debug, Default, InputObject)]
pub struct UpdateBookInput {
    pub title: MaybeUndefined<String>,
    pub author: MaybeUndefined<String>,
}

impl From<UpdateBookInput> for BookPatch {
    fn from(input: UpdateBookInput) -> Self {
        Self {
            title: field_patch(input.title),
            author: field_patch(input.author),
        }
    }
}

fn field_patch(value: MaybeUndefined<String>) -> Option<Option<String>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

// =============================================================================
// Resolvers
// =============================================================================

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All books in insertion order.
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<BookObject>> {
        let svc = catalog(ctx)?;
        Ok(svc.books().into_iter().map(BookObject::from).collect())
    }

    /// A single book. Resolves to null with a NOT_FOUND error when absent.
    async fn book(&self, ctx: &Context<'_>, id: ID) -> Result<Option<BookObject>> {
        let svc = catalog(ctx)?;
        svc.book_by_ref(&id)
            .map(|book| Some(book.into()))
            .map_err(|e| e.extend())
    }
}

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book. Its id is the number of books before insertion.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: Option<String>,
        author: Option<String>,
    ) -> Result<BookObject> {
        let svc = catalog(ctx)?;
        Ok(svc.add_book(NewBook { title, author }).into())
    }

    /// Merge `input` over an existing book.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<UpdateBookInput>,
    ) -> Result<Option<BookObject>> {
        let svc = catalog(ctx)?;
        let patch = input.map(BookPatch::from).unwrap_or_default();
        svc.update_book_by_ref(&id, patch)
            .map(|book| Some(book.into()))
            .map_err(|e| e.extend())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::id::BookId;

    #[test]
    fn book_object_renders_id_as_string() {
        let svc = CatalogService::seeded(crate::infra::map_store::MapCatalogStore::new());
        let book = svc.book(BookId::new(1)).unwrap();

        let obj = BookObject::from(book);
        assert_eq!(obj.id, ID::from("1"));
        assert_eq!(obj.title.as_deref(), Some("City of Glass"));
    }

    #[test]
    fn update_input_three_states() {
        let input = UpdateBookInput {
            title: MaybeUndefined::Null,
            author: MaybeUndefined::Value("P. Auster".into()),
        };
        let patch = BookPatch::from(input);
        assert_eq!(patch.title, Some(None));
        assert_eq!(patch.author, Some(Some("P. Auster".into())));

        let empty = BookPatch::from(UpdateBookInput::default());
        assert!(empty.is_empty());
    }

    #[test]
    fn not_found_carries_code_extension() {
        let err = AppError::UnknownId("x".into()).extend();
        assert_eq!(err.message, "book not found: x");

        let ext = err.extensions.expect("extensions set");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("NOT_FOUND"))
        );
    }

    #[test]
    fn sdl_declares_fields() {
        let sdl = sdl();
        assert!(sdl.contains("type Book"));
        assert!(sdl.contains("input UpdateBookInput"));
        assert!(sdl.contains("addBook("));
        assert!(sdl.contains("updateBook("));
    }
}
