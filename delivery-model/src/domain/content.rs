use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw payload of a content item.
///
/// The structure depends on the item type and is left to the rendering
/// layer; this type only carries it. A null payload counts as missing
/// content: fragments refuse to build with it, matching how a decoded
/// `"content": null` is treated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(Value);

impl Content {
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    /// An empty JSON object.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn data(&self) -> &Value {
        &self.0
    }

    pub fn into_data(self) -> Value {
        self.0
    }

    /// JSON-pointer lookup into the payload, e.g. `/fields/headline`.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        self.0.pointer(path)
    }

    /// True for null, `""`, `[]` and `{}`.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Content {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}
