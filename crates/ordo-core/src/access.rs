//! Field Access: the capability every ordered entity exposes
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

/// Read access to a named field of an entity.
///
/// `None` means the field is absent, which the default order sorts before
/// every concrete value, `null` included.
pub trait FieldAccess {
    fn value_of(&self, field: &str) -> Option<&Value>;

    /// The entity as a single comparable value, for ordering without a key.
    /// Entities that are not plain values have none.
    fn as_value(&self) -> Option<&Value> {
        None
    }
}

impl FieldAccess for Value {
    fn value_of(&self, field: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(field),
            _ => None,
        }
    }

    fn as_value(&self) -> Option<&Value> {
        Some(self)
    }
}

impl FieldAccess for Map<String, Value> {
    fn value_of(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl<S: BuildHasher> FieldAccess for HashMap<String, Value, S> {
    fn value_of(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn value_of(&self, field: &str) -> Option<&Value> {
        (**self).value_of(field)
    }

    fn as_value(&self) -> Option<&Value> {
        (**self).as_value()
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Box<T> {
    fn value_of(&self, field: &str) -> Option<&Value> {
        (**self).value_of(field)
    }

    fn as_value(&self) -> Option<&Value> {
        (**self).as_value()
    }
}

impl<T: FieldAccess + ?Sized> FieldAccess for Arc<T> {
    fn value_of(&self, field: &str) -> Option<&Value> {
        (**self).value_of(field)
    }

    fn as_value(&self) -> Option<&Value> {
        (**self).as_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_object_access() {
        let value = json!({ "firstName": "John", "active": null });
        assert_eq!(value.value_of("firstName"), Some(&json!("John")));
        assert_eq!(value.value_of("active"), Some(&Value::Null));
        assert_eq!(value.value_of("missing"), None);
    }

    #[test]
    fn test_non_object_has_no_fields() {
        assert_eq!(json!("John").value_of("length"), None);
        assert_eq!(json!([1, 2]).value_of("0"), None);
    }

    #[test]
    fn test_as_value() {
        let value = json!("Jane");
        assert_eq!(value.as_value(), Some(&value));
        assert_eq!(Arc::new(value.clone()).as_value(), Some(&value));

        let map: Map<String, Value> = Map::new();
        assert_eq!(map.as_value(), None);
    }

    #[test]
    fn test_hash_map_and_smart_pointers() {
        let mut map = HashMap::new();
        map.insert("year".to_string(), json!(1974));

        assert_eq!(map.value_of("year"), Some(&json!(1974)));
        assert_eq!((&map).value_of("year"), Some(&json!(1974)));

        let shared = Arc::new(json!({ "year": 1975 }));
        assert_eq!(shared.value_of("year"), Some(&json!(1975)));
    }
}
