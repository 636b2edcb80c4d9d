// src/host/memory.rs
//! In-process node store implementing the host capability.
//!
//! Stands in for a build framework's node store: ids are UUID v5 values
//! namespaced by the owner name, digests are hex MD5 of the JSON value.

use crate::algebras::{HostError, NodeHost};
use crate::constants::NODE_OWNER;
use crate::model::HostNode;
use crate::types::{ContentDigest, NodeId};
use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

/// Node store that keeps every created node in insertion order.
pub struct MemoryNodeStore {
    namespace: Uuid,
    nodes: Mutex<IndexMap<NodeId, HostNode>>,
}

impl MemoryNodeStore {
    /// Creates a store whose ids are namespaced by this crate's owner tag.
    pub fn new() -> Self {
        Self::with_owner(NODE_OWNER)
    }

    /// Creates a store whose ids are namespaced by `owner`.
    ///
    /// Two stores with different owners never hand out the same id for the
    /// same seed.
    pub fn with_owner(owner: &str) -> Self {
        Self {
            namespace: Uuid::new_v5(&Uuid::NAMESPACE_URL, owner.as_bytes()),
            nodes: Mutex::new(IndexMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.lock().is_empty()
    }

    pub fn get(&self, id: &NodeId) -> Option<HostNode> {
        self.nodes.lock().get(id).cloned()
    }

    /// Snapshot of all nodes, in the order they were first created.
    pub fn nodes(&self) -> Vec<HostNode> {
        self.nodes.lock().values().cloned().collect()
    }

    /// All nodes as a JSON array.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.nodes())
    }
}

impl Default for MemoryNodeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeHost for MemoryNodeStore {
    fn create_node(&self, node: HostNode) -> Result<(), HostError> {
        let mut nodes = self.nodes.lock();
        if nodes.contains_key(&node.id) {
            log::debug!("Replacing node {} ({})", node.id, node.internal.type_name);
        }
        nodes.insert(node.id.clone(), node);
        Ok(())
    }

    fn create_content_digest(&self, content: &Value) -> Result<ContentDigest, HostError> {
        let serialized = serde_json::to_string(content).map_err(|e| HostError::DigestFailed {
            reason: e.to_string(),
        })?;
        Ok(ContentDigest::new(format!(
            "{:x}",
            md5::compute(serialized.as_bytes())
        )))
    }

    fn create_node_id(&self, seed: &str) -> Result<NodeId, HostError> {
        Ok(NodeId::new(
            Uuid::new_v5(&self.namespace, seed.as_bytes()).to_string(),
        ))
    }
}
