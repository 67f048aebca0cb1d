//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_graphql::{Request, Response, Variables};

use books_graphql::application::service::CatalogService;
use books_graphql::domain::store::CatalogStore;
use books_graphql::infra::list_store::ListCatalogStore;
use books_graphql::infra::map_store::MapCatalogStore;
use books_graphql::interface::graphql::{build_schema, BooksSchema};

// =============================================================================
// Store variants
// =============================================================================

pub type StoreFactory = fn() -> Box<dyn CatalogStore>;

/// 両方の保持方式で同じテストを回すための一覧。
pub fn store_variants() -> Vec<(&'static str, StoreFactory)> {
    vec![
        ("map", map_store as StoreFactory),
        ("list", list_store as StoreFactory),
    ]
}

fn map_store() -> Box<dyn CatalogStore> {
    Box::new(MapCatalogStore::new())
}

fn list_store() -> Box<dyn CatalogStore> {
    Box::new(ListCatalogStore::new())
}

/// seed済みServiceを両方式分返す。
pub fn seeded_services() -> Vec<(&'static str, CatalogService)> {
    vec![
        ("map", CatalogService::seeded(MapCatalogStore::new())),
        ("list", CatalogService::seeded(ListCatalogStore::new())),
    ]
}

// =============================================================================
// TestApi — GraphQL schema over a seeded catalog
// =============================================================================

pub struct TestApi {
    pub service: Arc<CatalogService>,
    pub schema: BooksSchema,
}

impl TestApi {
    pub fn seeded() -> Self {
        Self::with_service(CatalogService::seeded(MapCatalogStore::new()))
    }

    pub fn seeded_list() -> Self {
        Self::with_service(CatalogService::seeded(ListCatalogStore::new()))
    }

    pub fn with_service(service: CatalogService) -> Self {
        let service = Arc::new(service);
        let schema = build_schema(service.clone());
        Self { service, schema }
    }

    pub async fn execute(&self, query: &str) -> Response {
        self.schema.execute(query).await
    }

    pub async fn execute_with(&self, query: &str, variables: serde_json::Value) -> Response {
        let request = Request::new(query).variables(Variables::from_json(variables));
        self.schema.execute(request).await
    }

    /// エラーなしを確認してdataをJSONで返す。
    pub async fn data(&self, query: &str) -> serde_json::Value {
        let response = self.execute(query).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// Responseが1件のNOT_FOUNDエラーを持つことをassert。
pub fn assert_not_found(response: &Response, field: &str) {
    assert_eq!(response.errors.len(), 1, "errors: {:?}", response.errors);
    let err = &response.errors[0];
    assert!(
        err.message.starts_with("book not found"),
        "unexpected message: {}",
        err.message
    );

    let code = err
        .extensions
        .as_ref()
        .and_then(|ext| ext.get("code"))
        .cloned();
    assert_eq!(code, Some(async_graphql::Value::from("NOT_FOUND")));

    let path = serde_json::to_value(&err.path).unwrap();
    assert_eq!(path, serde_json::json!([field]));
}
