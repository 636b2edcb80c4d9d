use crate::types::{ContentDigest, NodeId, RecordId};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A record as registered in the host's content graph.
///
/// Serializes to a flat object: the record's own fields, `hacocmsId`, then
/// the host bookkeeping fields `id`, `parent`, `children` and `internal`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostNode {
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
    #[serde(rename = "hacocmsId")]
    pub hacocms_id: RecordId,
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub internal: NodeInternal,
}

/// Host-required metadata describing where a node came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInternal {
    #[serde(rename = "type")]
    pub type_name: String,
    pub content_digest: ContentDigest,
    pub owner: String,
}

impl HostNode {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_with_renamed_fields() {
        let mut fields = IndexMap::new();
        fields.insert("title".to_string(), json!("Hello"));
        fields.insert("closedAt".to_string(), Value::Null);

        let node = HostNode {
            fields,
            hacocms_id: RecordId::new("abcdef"),
            id: NodeId::new("node-1"),
            parent: None,
            children: vec![],
            internal: NodeInternal {
                type_name: "HacocmsEntries".to_string(),
                content_digest: ContentDigest::new("d1g35t"),
                owner: "hacocms-source".to_string(),
            },
        };

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Hello",
                "closedAt": null,
                "hacocmsId": "abcdef",
                "id": "node-1",
                "parent": null,
                "children": [],
                "internal": {
                    "type": "HacocmsEntries",
                    "contentDigest": "d1g35t",
                    "owner": "hacocms-source",
                },
            })
        );
    }
}
