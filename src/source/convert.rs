// src/source/convert.rs
//! Conversion of remote records into host nodes.

use crate::algebras::NodeHost;
use crate::constants::{NODE_OWNER, NODE_TYPE_PREFIX, RECORD_ID_FIELD};
use crate::error::AppError;
use crate::model::{HostNode, NodeInternal, RemoteRecord};
use crate::types::{Endpoint, RecordId};
use serde_json::{Map, Value};

/// Node fields the host owns; record fields with these names are dropped.
const RESERVED_NODE_FIELDS: &[&str] = &[RECORD_ID_FIELD, "parent", "children", "internal"];

/// How the seed passed to `create_node_id` is composed.
///
/// The seed always combines endpoint and record id, so equal record ids under
/// different endpoints never collide. An optional namespace is prepended for
/// hosts that share one id space between several sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIdScheme {
    namespace: Option<String>,
}

impl NodeIdScheme {
    /// `{endpoint}-{id}`
    pub fn new() -> Self {
        Self::default()
    }

    /// `{namespace}-{endpoint}-{id}`
    pub fn namespaced(namespace: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
        }
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn seed(&self, endpoint: &Endpoint, id: &RecordId) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}-{}-{}", namespace, endpoint, id),
            None => format!("{}-{}", endpoint, id),
        }
    }
}

/// Host node type for records of `endpoint`, e.g. `HacocmsBlogEntries`.
pub fn node_type_name(endpoint: &Endpoint) -> String {
    format!("{}{}", NODE_TYPE_PREFIX, endpoint.to_pascal_case())
}

/// Converts one record of `endpoint` into a host node.
///
/// Calls `create_node_id` once, then `create_content_digest` once over the
/// node's own fields (record fields plus `hacocmsId`). Does not register the
/// node.
pub fn convert_record<H>(
    host: &H,
    endpoint: &Endpoint,
    scheme: &NodeIdScheme,
    record: RemoteRecord,
) -> Result<HostNode, AppError>
where
    H: NodeHost + ?Sized,
{
    let (hacocms_id, mut fields) = record.into_parts();

    for reserved in RESERVED_NODE_FIELDS {
        if fields.shift_remove(*reserved).is_some() {
            log::warn!(
                "Record {} of {} has a field named '{}', which is reserved on nodes; dropped",
                hacocms_id,
                endpoint,
                reserved
            );
        }
    }

    let id = host.create_node_id(&scheme.seed(endpoint, &hacocms_id))?;

    let mut content: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    content.insert(
        RECORD_ID_FIELD.to_string(),
        Value::String(hacocms_id.as_str().to_string()),
    );
    let content_digest = host.create_content_digest(&Value::Object(content))?;

    Ok(HostNode {
        fields,
        hacocms_id,
        id,
        parent: None,
        children: Vec::new(),
        internal: NodeInternal {
            type_name: node_type_name(endpoint),
            content_digest,
            owner: NODE_OWNER.to_string(),
        },
    })
}
