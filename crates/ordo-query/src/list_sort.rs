//! Ordering of candidate lists (menu entries, pickers)
//!
//! Candidates are sorted by `sort_key` when set, else by `name_key`, else
//! by the candidate values themselves. `disable_sort` keeps the order they
//! were supplied in.

use crate::sort::try_sort_by;
use ordo_core::{compare_values, FieldAccess};
use ordo_registry::{ComparatorError, ComparisonRegistry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSort {
    /// Field used for ordering; overrides `name_key`
    #[serde(default)]
    pub sort_key: Option<String>,

    /// Field holding the display name
    #[serde(default)]
    pub name_key: Option<String>,

    #[serde(default)]
    pub disable_sort: bool,
}

impl ListSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort_key(mut self, key: impl Into<String>) -> Self {
        self.sort_key = Some(key.into());
        self
    }

    pub fn with_name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = Some(key.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disable_sort = true;
        self
    }

    /// The field candidates are ordered by, if any
    pub fn key(&self) -> Option<&str> {
        non_empty(&self.sort_key).or_else(|| non_empty(&self.name_key))
    }

    /// Order `items` in place; a registered comparison for the key is
    /// honoured. Without a key, items are ordered by their own value and
    /// entities that have none keep their input order.
    pub fn sort<T: FieldAccess>(
        &self,
        registry: &ComparisonRegistry,
        items: &mut [T],
    ) -> Result<(), ComparatorError> {
        if self.disable_sort {
            return Ok(());
        }

        match self.key() {
            Some(key) => {
                let comparator = registry.resolve(key);
                try_sort_by(items, |a, b| {
                    comparator.compare(a.value_of(key), b.value_of(key))
                })
            }
            None => try_sort_by(items, |a, b| Ok(compare_values(a.as_value(), b.as_value()))),
        }
    }

    pub fn sort_values(
        &self,
        registry: &ComparisonRegistry,
        mut items: Vec<Value>,
    ) -> Result<Vec<Value>, ComparatorError> {
        self.sort(registry, &mut items)?;
        Ok(items)
    }
}

fn non_empty(key: &Option<String>) -> Option<&str> {
    key.as_deref().filter(|k| !k.is_empty())
}
