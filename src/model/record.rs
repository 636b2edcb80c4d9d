use crate::constants::REMOTE_ID_FIELD;
use crate::types::RecordId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One content item as returned by the hacoCMS API.
///
/// Fields other than `id` are opaque to this crate and kept in the order the
/// API returned them. A record is never mutated after it is received.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRecord {
    id: RecordId,
    fields: IndexMap<String, Value>,
}

impl RemoteRecord {
    /// Builds a record from a decoded JSON object, splitting off `id`.
    pub fn from_fields(mut fields: IndexMap<String, Value>) -> Result<Self, String> {
        let id = match fields.shift_remove(REMOTE_ID_FIELD) {
            Some(Value::String(id)) => RecordId::new(id),
            Some(other) => {
                return Err(format!(
                    "record field '{}' must be a string, got {}",
                    REMOTE_ID_FIELD, other
                ))
            }
            None => return Err(format!("record is missing '{}' field", REMOTE_ID_FIELD)),
        };
        Ok(Self { id, fields })
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Every field except `id`, in API order.
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Splits the record into its id and remaining fields.
    pub fn into_parts(self) -> (RecordId, IndexMap<String, Value>) {
        (self.id, self.fields)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("createdAt")
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updatedAt")
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("publishedAt")
    }

    /// `None` while the record is open (hacoCMS sends `null`).
    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("closedAt")
    }

    fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        let raw = self.fields.get(name)?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Serialize for RemoteRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(REMOTE_ID_FIELD, &self.id)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RemoteRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = IndexMap::<String, Value>::deserialize(deserializer)?;
        RemoteRecord::from_fields(fields).map_err(D::Error::custom)
    }
}
