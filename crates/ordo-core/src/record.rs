//! Record: a guid plus a bag of attributes
use crate::access::FieldAccess;
use crate::error::OrdoError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name under which a record exposes its guid.
pub const GUID_FIELD: &str = "guid";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Primary key (ex: `1`, `"contact-42"`)
    pub guid: Value,
    /// Every other attribute, as loaded
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Record {
    pub fn new(guid: impl Into<Value>) -> Self {
        Self {
            guid: guid.into(),
            attributes: Map::new(),
        }
    }

    /// Set an attribute
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        if field == GUID_FIELD {
            self.guid = value;
        } else {
            self.attributes.insert(field, value);
        }
    }

    /// Build a record from a JSON object carrying a `guid` key
    pub fn from_json(value: Value) -> Result<Self, OrdoError> {
        match &value {
            Value::Object(map) if map.contains_key(GUID_FIELD) => {}
            Value::Object(_) => {
                return Err(OrdoError::InvalidRecord(format!(
                    "missing '{}' in {}",
                    GUID_FIELD, value
                )))
            }
            other => {
                return Err(OrdoError::InvalidRecord(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        }
        serde_json::from_value(value).map_err(|e| OrdoError::InvalidRecord(e.to_string()))
    }

    /// Load a JSON array of records
    pub fn load_many(json: &str) -> Result<Vec<Self>, OrdoError> {
        let values: Vec<Value> =
            serde_json::from_str(json).map_err(|e| OrdoError::InvalidRecord(e.to_string()))?;
        values.into_iter().map(Self::from_json).collect()
    }
}

impl FieldAccess for Record {
    fn value_of(&self, field: &str) -> Option<&Value> {
        if field == GUID_FIELD {
            Some(&self.guid)
        } else {
            self.attributes.get(field)
        }
    }
}
