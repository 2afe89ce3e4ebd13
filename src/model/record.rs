//! Record — an opaque domain object with named properties.

use serde::{Deserialize, Serialize};
use super::{PropertyMap, Value};

/// A structured record in the value graph.
///
/// Records are neither maps nor lists: they carry a label naming their
/// domain type and a bag of named properties. Properties are addressable by
/// key path. A sealed record still reads normally but refuses every write,
/// including the creation of new properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub label: String,
    pub properties: PropertyMap,
    #[serde(default)]
    pub sealed: bool,
}

impl Record {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            properties: PropertyMap::new(),
            sealed: false,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Freeze the record's property set.
    pub fn sealed(mut self) -> Self {
        self.sealed = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.properties.get_mut(key)
    }

    /// Store a property unless the record is sealed. The value is handed
    /// back on refusal.
    pub fn try_set(&mut self, key: &str, value: Value) -> Result<(), Value> {
        if self.sealed {
            return Err(value);
        }
        self.properties.insert(key.to_owned(), value);
        Ok(())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(Box::new(record))
    }
}
