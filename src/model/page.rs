use super::RemoteRecord;
use serde::{Deserialize, Serialize};

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

/// One paginated batch of records from a list API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    pub data: Vec<RemoteRecord>,
    pub meta: PageMeta,
}

impl PageResponse {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Query parameters of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u64,
}

impl ListQuery {
    pub fn new(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }
}
