use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single record kind held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Validated input for an insert; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Fields stay loosely typed so that `false`, `0` or `5` are judged by
/// [`field_text`] instead of failing to decode.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItem {
    pub name: Option<Value>,
    pub description: Option<Value>,
}

impl CreateItem {
    /// Returns `None` when no usable name was supplied.
    pub fn into_new_item(self) -> Option<NewItem> {
        let name = field_text(self.name.as_ref())?;
        Some(NewItem {
            name,
            description: field_text(self.description.as_ref()).unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateItem {
    pub name: Option<Value>,
    pub description: Option<Value>,
}

impl UpdateItem {
    /// Overwrites only the fields that carry a usable value.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = field_text(self.name.as_ref()) {
            item.name = name;
        }
        if let Some(description) = field_text(self.description.as_ref()) {
            item.description = description;
        }
    }
}

/// Text of a body field under JavaScript truthiness: a missing key, `null`,
/// `false`, `0` and `""` all count as not supplied. Any other non-string
/// value is kept as its JSON text.
pub fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
