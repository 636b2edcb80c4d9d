// src/api/mod.rs
//! hacoCMS API interaction: the ability to retrieve records from a project.
//!
//! I/O lives in `client`, response decoding in `parser`, and page iteration
//! in `pagination`. Sourcing code depends on [`HacoCmsRepository`] only.

pub mod client;
pub mod pagination;
pub mod parser;

use crate::error::AppError;
use crate::model::{ListQuery, PageResponse, RemoteRecord};
use crate::types::Endpoint;

/// The ability to retrieve records from a hacoCMS project.
///
/// Business logic depends on this trait, never on HTTP details.
#[async_trait::async_trait]
pub trait HacoCmsRepository: Send + Sync {
    /// Fetch one page of a list API.
    async fn get_list(
        &self,
        endpoint: &Endpoint,
        query: &ListQuery,
    ) -> Result<PageResponse, AppError>;

    /// Fetch the record behind a single-item API.
    async fn get_single(&self, endpoint: &Endpoint) -> Result<RemoteRecord, AppError>;
}

#[async_trait::async_trait]
impl<T: HacoCmsRepository + ?Sized> HacoCmsRepository for std::sync::Arc<T> {
    async fn get_list(
        &self,
        endpoint: &Endpoint,
        query: &ListQuery,
    ) -> Result<PageResponse, AppError> {
        (**self).get_list(endpoint, query).await
    }

    async fn get_single(&self, endpoint: &Endpoint) -> Result<RemoteRecord, AppError> {
        (**self).get_single(endpoint).await
    }
}

pub use client::HacoCmsHttpClient;
pub use pagination::{list_pages, PageCursor};
