use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

/// Top-level JSON object returned by the book catalog
///
/// A missing or `null` `docs` is a valid empty catalog page, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub docs: Option<Vec<UpstreamBookRecord>>,
}

/// A book as described by the catalog
///
/// Every field other than `name` (`_id`, `author`, `year`, ...) is dropped while decoding.
/// A `name` that is not a string is read as a missing name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamBookRecord {
    #[serde(default, deserialize_with = "deserialize_lenient_name")]
    pub name: Option<String>,
}

fn deserialize_lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = match Option::<JsonValue>::deserialize(deserializer)? {
        Some(JsonValue::String(name)) => Some(name),
        Some(other) => {
            warn!(name = %other, "Book name is not a string, projecting it as null");
            None
        }
        None => None,
    };
    Ok(name)
}

/// The only representation of a book the gateway exposes
///
/// A record without a name is kept, with `"name": null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedBook {
    pub name: Option<String>,
}

impl UpstreamEnvelope {
    /// Reduces each catalog record to its name, in the catalog order
    pub fn project(self) -> Vec<ProjectedBook> {
        self.docs
            .unwrap_or_default()
            .into_iter()
            .map(ProjectedBook::from)
            .collect()
    }
}

impl From<UpstreamBookRecord> for ProjectedBook {
    fn from(record: UpstreamBookRecord) -> Self {
        Self { name: record.name }
    }
}
