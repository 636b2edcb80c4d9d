//! Node-creation capability of the host build framework.
//!
//! This module defines the [`NodeHost`] capability trait. The host owns the
//! node store, the digest function and the id function; sourcing code only
//! ever reaches them through this trait, passed in explicitly.

use crate::model::HostNode;
use crate::types::{ContentDigest, NodeId};
use serde_json::Value;

use super::error::HostError;

/// The callbacks a host framework hands to a source during node creation.
///
/// This trait is **object-safe** and can be used as `&dyn NodeHost`. Its
/// methods are synchronous: the sourcing flow calls them one at a time,
/// strictly after the page that produced the record has resolved.
///
/// # Laws
///
/// - **L1 (Id-Determinism)**: the same seed always yields the same node id.
///   ```text
///   create_node_id(s) == create_node_id(s)
///   ```
///
/// - **L2 (Id-Separation)**: different seeds yield different node ids.
///   ```text
///   s1 != s2  =>  create_node_id(s1) != create_node_id(s2)
///   ```
///
/// - **L3 (Digest-Determinism)**: equal values hash to equal digests, and a
///   changed value changes the digest.
///   ```text
///   create_content_digest(v) == create_content_digest(v)
///   ```
///
/// - **L4 (Create-Visibility)**: a node passed to `create_node` is
///   registered under its `id`; creating the same id again replaces it.
pub trait NodeHost: Send + Sync {
    /// Register a node in the host's content graph.
    fn create_node(&self, node: HostNode) -> Result<(), HostError>;

    /// Deterministic hash of `content`, used by the host for change detection.
    fn create_content_digest(&self, content: &Value) -> Result<ContentDigest, HostError>;

    /// Deterministic, namespaced node id derived from `seed`.
    fn create_node_id(&self, seed: &str) -> Result<NodeId, HostError>;
}

impl<T: NodeHost + ?Sized> NodeHost for std::sync::Arc<T> {
    fn create_node(&self, node: HostNode) -> Result<(), HostError> {
        (**self).create_node(node)
    }

    fn create_content_digest(&self, content: &Value) -> Result<ContentDigest, HostError> {
        (**self).create_content_digest(content)
    }

    fn create_node_id(&self, seed: &str) -> Result<NodeId, HostError> {
        (**self).create_node_id(seed)
    }
}
