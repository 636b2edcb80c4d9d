// src/source/mod.rs
//! Materialization of hacoCMS records into host nodes.
//!
//! Both entry points take the host capability and the repository as explicit
//! parameters. Work is strictly sequential: one request in flight at most,
//! and every node of a page is created before the next page is requested.
//! The first error aborts; nodes created before it stay registered.

mod convert;

pub use convert::{convert_record, node_type_name, NodeIdScheme};

use crate::algebras::NodeHost;
use crate::api::{list_pages, HacoCmsRepository};
use crate::constants::HACOCMS_PAGE_LIMIT;
use crate::error::AppError;
use crate::types::{Endpoint, ValidationError};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Knobs shared by all sourcing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    page_limit: u32,
    id_scheme: NodeIdScheme,
}

impl SourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records requested per page; hacoCMS accepts 1..=100.
    pub fn with_page_limit(self, page_limit: u32) -> Result<Self, ValidationError> {
        if page_limit == 0 || page_limit > HACOCMS_PAGE_LIMIT {
            return Err(ValidationError::OutOfBounds {
                value: page_limit,
                min: 1,
                max: HACOCMS_PAGE_LIMIT,
            });
        }
        Ok(Self { page_limit, ..self })
    }

    pub fn with_id_scheme(self, id_scheme: NodeIdScheme) -> Self {
        Self { id_scheme, ..self }
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn id_scheme(&self) -> &NodeIdScheme {
        &self.id_scheme
    }
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            page_limit: HACOCMS_PAGE_LIMIT,
            id_scheme: NodeIdScheme::default(),
        }
    }
}

/// Shape of a hacoCMS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    /// Paginated collection of records
    List,
    /// Exactly one record
    Single,
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Single => write!(f, "single"),
        }
    }
}

/// An endpoint to source, with its shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSchema {
    pub endpoint: Endpoint,
    pub kind: ApiKind,
}

impl ApiSchema {
    pub fn list(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            kind: ApiKind::List,
        }
    }

    pub fn single(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            kind: ApiKind::Single,
        }
    }
}

/// What one sourcing run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub endpoint: Endpoint,
    pub kind: ApiKind,
    pub pages_fetched: usize,
    pub nodes_created: usize,
}

impl SourceReport {
    fn new(endpoint: &Endpoint, kind: ApiKind) -> Self {
        Self {
            endpoint: endpoint.clone(),
            kind,
            pages_fetched: 0,
            nodes_created: 0,
        }
    }
}

/// Creates one node per record of the list API `endpoint`, across all pages.
pub async fn source_list_api_nodes<H, R>(
    host: &H,
    client: &R,
    endpoint: &Endpoint,
) -> Result<SourceReport, AppError>
where
    H: NodeHost + ?Sized,
    R: HacoCmsRepository + ?Sized,
{
    source_list_api_nodes_with(host, client, endpoint, &SourceOptions::default()).await
}

/// [`source_list_api_nodes`] with explicit options.
pub async fn source_list_api_nodes_with<H, R>(
    host: &H,
    client: &R,
    endpoint: &Endpoint,
    options: &SourceOptions,
) -> Result<SourceReport, AppError>
where
    H: NodeHost + ?Sized,
    R: HacoCmsRepository + ?Sized,
{
    let mut report = SourceReport::new(endpoint, ApiKind::List);
    let mut pages = std::pin::pin!(list_pages(client, endpoint, options.page_limit));

    while let Some(page) = pages.try_next().await? {
        report.pages_fetched += 1;
        log::debug!(
            "{}: page {} with {} records (offset {}, total {})",
            endpoint,
            report.pages_fetched,
            page.data.len(),
            page.meta.offset,
            page.meta.total
        );

        for record in page.data {
            let node = convert_record(host, endpoint, &options.id_scheme, record)?;
            host.create_node(node)?;
            report.nodes_created += 1;
        }
    }

    log::info!(
        "Sourced {} nodes from list API '{}' in {} page(s)",
        report.nodes_created,
        endpoint,
        report.pages_fetched
    );
    Ok(report)
}

/// Creates the node for the single-item API `endpoint`.
pub async fn source_single_api_nodes<H, R>(
    host: &H,
    client: &R,
    endpoint: &Endpoint,
) -> Result<SourceReport, AppError>
where
    H: NodeHost + ?Sized,
    R: HacoCmsRepository + ?Sized,
{
    source_single_api_nodes_with(host, client, endpoint, &SourceOptions::default()).await
}

/// [`source_single_api_nodes`] with explicit options.
pub async fn source_single_api_nodes_with<H, R>(
    host: &H,
    client: &R,
    endpoint: &Endpoint,
    options: &SourceOptions,
) -> Result<SourceReport, AppError>
where
    H: NodeHost + ?Sized,
    R: HacoCmsRepository + ?Sized,
{
    let mut report = SourceReport::new(endpoint, ApiKind::Single);

    let record = client.get_single(endpoint).await?;
    report.pages_fetched = 1;

    let node = convert_record(host, endpoint, &options.id_scheme, record)?;
    host.create_node(node)?;
    report.nodes_created = 1;

    log::info!("Sourced node from single API '{}'", endpoint);
    Ok(report)
}

/// Sources every API in `apis`, one after another, in the given order.
pub async fn source_nodes<H, R>(
    host: &H,
    client: &R,
    apis: &[ApiSchema],
    options: &SourceOptions,
) -> Result<Vec<SourceReport>, AppError>
where
    H: NodeHost + ?Sized,
    R: HacoCmsRepository + ?Sized,
{
    let mut reports = Vec::with_capacity(apis.len());
    for api in apis {
        let report = match api.kind {
            ApiKind::List => {
                source_list_api_nodes_with(host, client, &api.endpoint, options).await
            }
            ApiKind::Single => {
                source_single_api_nodes_with(host, client, &api.endpoint, options).await
            }
        }?;
        reports.push(report);
    }
    Ok(reports)
}
