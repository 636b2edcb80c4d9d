//! Test doubles shared by unit tests: an in-memory repository and a host
//! that records every callback.

use crate::algebras::{HostError, NodeHost};
use crate::api::HacoCmsRepository;
use crate::error::{AppError, HacoCmsErrorCode};
use crate::model::{HostNode, ListQuery, PageMeta, PageResponse, RemoteRecord};
use crate::types::{ContentDigest, Endpoint, NodeId};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;

/// A record shaped like hacoCMS content, with a fixed timestamp set.
pub fn record(id: &str) -> RemoteRecord {
    serde_json::from_value(json!({
        "id": id,
        "createdAt": "2022-01-01T00:00:00.000Z",
        "updatedAt": "2022-01-02T00:00:00.000Z",
        "publishedAt": "2022-01-03T00:00:00.000Z",
        "closedAt": null,
    }))
    .expect("test record must decode")
}

/// `count` records with ids `start`, `start + 1`, ...
pub fn records(count: usize, start: usize) -> Vec<RemoteRecord> {
    (start..start + count).map(|i| record(&i.to_string())).collect()
}

/// In-memory [`HacoCmsRepository`] that slices a fixed record list by offset.
#[derive(Default)]
pub struct MockRepository {
    lists: HashMap<String, Vec<RemoteRecord>>,
    singles: HashMap<String, RemoteRecord>,
    fail_at_offset: Option<u64>,
    queries: Mutex<Vec<ListQuery>>,
    single_calls: Mutex<usize>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `all` from the list API `endpoint`.
    pub fn paged(endpoint: &Endpoint, all: Vec<RemoteRecord>) -> Self {
        Self::new().with_list(endpoint, all)
    }

    pub fn with_list(mut self, endpoint: &Endpoint, all: Vec<RemoteRecord>) -> Self {
        self.lists.insert(endpoint.as_str().to_string(), all);
        self
    }

    pub fn with_single(mut self, endpoint: &Endpoint, record: RemoteRecord) -> Self {
        self.singles.insert(endpoint.as_str().to_string(), record);
        self
    }

    /// Makes the page request at `offset` fail with a server error.
    pub fn fail_at_offset(mut self, offset: u64) -> Self {
        self.fail_at_offset = Some(offset);
        self
    }

    pub fn requested_offsets(&self) -> Vec<u64> {
        self.queries.lock().iter().map(|q| q.offset).collect()
    }

    pub fn requested_limits(&self) -> Vec<u32> {
        self.queries.lock().iter().map(|q| q.limit).collect()
    }

    pub fn single_calls(&self) -> usize {
        *self.single_calls.lock()
    }
}

fn not_found(endpoint: &Endpoint) -> AppError {
    AppError::HacoCmsService {
        code: HacoCmsErrorCode::NotFound,
        message: format!("no such endpoint: {}", endpoint),
        status: reqwest::StatusCode::NOT_FOUND,
    }
}

#[async_trait::async_trait]
impl HacoCmsRepository for MockRepository {
    async fn get_list(
        &self,
        endpoint: &Endpoint,
        query: &ListQuery,
    ) -> Result<PageResponse, AppError> {
        self.queries.lock().push(*query);

        if self.fail_at_offset == Some(query.offset) {
            return Err(AppError::HacoCmsService {
                code: HacoCmsErrorCode::ServerError(500),
                message: "simulated failure".to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }

        let all = self
            .lists
            .get(endpoint.as_str())
            .ok_or_else(|| not_found(endpoint))?;
        let data = all
            .iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .cloned()
            .collect();

        Ok(PageResponse {
            data,
            meta: PageMeta {
                total: all.len() as u64,
                limit: u64::from(query.limit),
                offset: query.offset,
            },
        })
    }

    async fn get_single(&self, endpoint: &Endpoint) -> Result<RemoteRecord, AppError> {
        *self.single_calls.lock() += 1;
        self.singles
            .get(endpoint.as_str())
            .cloned()
            .ok_or_else(|| not_found(endpoint))
    }
}

/// [`NodeHost`] that keeps every call, with identity node ids.
///
/// `create_node_id` returns the seed itself, so tests can assert on the
/// seed composition directly.
#[derive(Default)]
pub struct RecordingHost {
    pub created: Mutex<Vec<HostNode>>,
    pub id_seeds: Mutex<Vec<String>>,
    pub digested: Mutex<Vec<Value>>,
    reject_after: Option<usize>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects every `create_node` call after the first `count`.
    pub fn rejecting_after(count: usize) -> Self {
        Self {
            reject_after: Some(count),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<HostNode> {
        self.created.lock().clone()
    }

    pub fn id_calls(&self) -> usize {
        self.id_seeds.lock().len()
    }
}

impl NodeHost for RecordingHost {
    fn create_node(&self, node: HostNode) -> Result<(), HostError> {
        let mut created = self.created.lock();
        if self.reject_after.is_some_and(|max| created.len() >= max) {
            return Err(HostError::NodeRejected {
                node_id: node.id.to_string(),
                reason: "store is full".to_string(),
            });
        }
        created.push(node);
        Ok(())
    }

    fn create_content_digest(&self, content: &Value) -> Result<ContentDigest, HostError> {
        self.digested.lock().push(content.clone());
        let serialized = serde_json::to_string(content).map_err(|e| HostError::DigestFailed {
            reason: e.to_string(),
        })?;
        Ok(ContentDigest::new(format!(
            "{:x}",
            md5::compute(serialized.as_bytes())
        )))
    }

    fn create_node_id(&self, seed: &str) -> Result<NodeId, HostError> {
        self.id_seeds.lock().push(seed.to_string());
        Ok(NodeId::new(seed))
    }
}
