use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A restaurant record as stored in the backing table.
///
/// The table schema is not fixed, so a record is an open mapping from
/// attribute name to JSON value. It serializes transparently as a plain
/// JSON object, which is exactly what the listing endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Restaurant(pub Map<String, Value>);

impl Restaurant {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }
}

impl From<Map<String, Value>> for Restaurant {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
