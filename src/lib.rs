// src/lib.rs
//! hacocms-source library: sources hacoCMS content into a host's node graph.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Sourcing**: `source_list_api_nodes`, `source_single_api_nodes`, `source_nodes`
//! - **Host capability**: `NodeHost`, `HostError`, `MemoryNodeStore`
//! - **API client**: `HacoCmsRepository`, `HacoCmsHttpClient`, `list_pages`
//! - **Domain model**: `RemoteRecord`, `HostNode`, `PageResponse`
//! - **Error handling**: `AppError`, `HacoCmsErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `SourceConfig`

mod algebras;
mod api;
pub mod config;
mod constants;
mod error;
mod host;
mod model;
pub mod output;
mod source;
mod types;

#[cfg(test)]
mod testing;

// --- Error Handling ---
pub use crate::error::{AppError, HacoCmsErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, SourceConfig};
pub use crate::constants::{HACOCMS_PAGE_LIMIT, NODE_OWNER, RECORD_ID_FIELD};

// --- Domain Model ---
pub use crate::model::{HostNode, ListQuery, NodeInternal, PageMeta, PageResponse, RemoteRecord};

// --- Domain Types ---
pub use crate::types::{AccessToken, ContentDigest, Endpoint, NodeId, RecordId, ValidatedUrl};

// --- Host Capability ---
pub use crate::algebras::{HostError, NodeHost};
pub use crate::host::MemoryNodeStore;

// --- API Client ---
pub use crate::api::{
    client::{extract_response_text, ApiResponse},
    list_pages,
    parser::{parse_page_response, parse_record_response},
    HacoCmsHttpClient, HacoCmsRepository, PageCursor,
};

// --- Sourcing ---
pub use crate::source::{
    convert_record, node_type_name, source_list_api_nodes, source_list_api_nodes_with,
    source_nodes, source_single_api_nodes, source_single_api_nodes_with, ApiKind, ApiSchema,
    NodeIdScheme, SourceOptions, SourceReport,
};
