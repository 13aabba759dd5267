//! Comparison Registry
//!
//! Maps a field name to the comparator used to order that field. Lookups
//! for unregistered fields fall back to the default order, so callers can
//! always go through [`ComparisonRegistry::compare`].

use crate::builtin::builtin_names;
use crate::comparator::Comparator;
use crate::config::{ComparatorSpec, RegistryConfig};
use crate::error::{ComparatorError, RegistryError};
use ordo_core::FieldAccess;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Registry shared between the components that sort
pub type SharedRegistry = Arc<ComparisonRegistry>;

#[derive(Default)]
pub struct ComparisonRegistry {
    comparisons: RwLock<HashMap<String, Comparator>>,
}

impl ComparisonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding every comparison of `config`
    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let registry = Self::new();
        registry.apply_config(config)?;
        Ok(registry)
    }

    /// Build a registry from a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let config = RegistryConfig::load(path)?;
        Self::from_config(&config)
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(self)
    }

    /// Register every comparison of `config`.
    ///
    /// All specs are resolved before anything is stored: a config naming an
    /// unknown comparator leaves the registry untouched.
    pub fn apply_config(&self, config: &RegistryConfig) -> Result<(), RegistryError> {
        let mut resolved = Vec::with_capacity(config.comparisons.len());
        for (field, spec) in &config.comparisons {
            validate_field(field)?;
            resolved.push((field.clone(), build_spec(field, spec)?));
        }

        let mut comparisons = self.write();
        for (field, comparator) in resolved {
            tracing::debug!(field = %field, comparator = comparator.name(), "registered comparison from config");
            comparisons.insert(field, comparator);
        }
        Ok(())
    }

    /// Register `comparator` for `field`, replacing any earlier one
    pub fn register(
        &self,
        field: impl Into<String>,
        comparator: Comparator,
    ) -> Result<(), RegistryError> {
        let field = field.into();
        validate_field(&field)?;

        let name = comparator.name().to_string();
        let previous = self.write().insert(field.clone(), comparator);
        tracing::debug!(
            field = %field,
            comparator = %name,
            replaced = previous.is_some(),
            "registered comparison"
        );
        Ok(())
    }

    /// Register a plain closure under the field's own name
    pub fn register_fn<F>(&self, field: impl Into<String>, compare: F) -> Result<(), RegistryError>
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Ordering + Send + Sync + 'static,
    {
        let field = field.into();
        let comparator = Comparator::new(field.clone(), compare);
        self.register(field, comparator)
    }

    /// Register a built-in comparator by name.
    ///
    /// An unknown name fails with [`RegistryError::InvalidComparator`] and
    /// keeps whatever was registered for `field` before.
    pub fn register_spec(
        &self,
        field: impl Into<String>,
        spec: &ComparatorSpec,
    ) -> Result<(), RegistryError> {
        let field = field.into();
        validate_field(&field)?;
        let comparator = build_spec(&field, spec)?;
        self.register(field, comparator)
    }

    /// Drop the comparator for `field`. Returns whether one was registered.
    pub fn unregister(&self, field: &str) -> bool {
        let removed = self.write().remove(field).is_some();
        if removed {
            tracing::debug!(field = %field, "unregistered comparison");
        }
        removed
    }

    /// The comparator for `field`, or the default order
    pub fn resolve(&self, field: &str) -> Comparator {
        match self.read().get(field) {
            Some(comparator) => comparator.clone(),
            None => {
                tracing::trace!(field = %field, "no comparison registered, using default order");
                Comparator::default_order()
            }
        }
    }

    /// Order two entities by `field`.
    ///
    /// Errors from the comparator are returned as-is.
    pub fn compare<A, B>(&self, field: &str, a: &A, b: &B) -> Result<Ordering, ComparatorError>
    where
        A: FieldAccess + ?Sized,
        B: FieldAccess + ?Sized,
    {
        // Resolved outside the lock so comparators may call back into the registry
        let comparator = self.resolve(field);
        comparator.compare(a.value_of(field), b.value_of(field))
    }

    /// Resolve each of `fields` once, under a single read lock
    pub fn snapshot<I, S>(&self, fields: I) -> OrderingPlan
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let comparisons = self.read();
        let entries = fields
            .into_iter()
            .map(|field| {
                let field = field.as_ref();
                let comparator = comparisons
                    .get(field)
                    .cloned()
                    .unwrap_or_else(Comparator::default_order);
                PlannedField {
                    field: field.to_string(),
                    comparator,
                }
            })
            .collect();
        OrderingPlan { entries }
    }

    pub fn is_registered(&self, field: &str) -> bool {
        self.read().contains_key(field)
    }

    /// Registered field names, sorted
    pub fn fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self.read().keys().cloned().collect();
        fields.sort();
        fields
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Comparator>> {
        self.comparisons.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Comparator>> {
        self.comparisons.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ComparisonRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonRegistry")
            .field("fields", &self.fields())
            .finish()
    }
}

fn validate_field(field: &str) -> Result<(), RegistryError> {
    if field.trim().is_empty() {
        return Err(RegistryError::InvalidFieldName(field.to_string()));
    }
    Ok(())
}

fn build_spec(field: &str, spec: &ComparatorSpec) -> Result<Comparator, RegistryError> {
    spec.build().ok_or_else(|| RegistryError::InvalidComparator {
        field: field.to_string(),
        reason: format!(
            "unknown comparator '{}' (known: {})",
            spec.name,
            builtin_names().join(", ")
        ),
    })
}

/// One field of an [`OrderingPlan`]
#[derive(Debug, Clone)]
pub struct PlannedField {
    pub field: String,
    pub comparator: Comparator,
}

/// Comparators resolved once for a sequence of fields.
///
/// A sort driven by a plan keeps using the same comparators even if the
/// registry changes while it runs.
#[derive(Debug, Clone)]
pub struct OrderingPlan {
    entries: Vec<PlannedField>,
}

impl OrderingPlan {
    pub fn iter(&self) -> std::slice::Iter<'_, PlannedField> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare field by field; the first non-equal field decides
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Result<Ordering, ComparatorError>
    where
        A: FieldAccess + ?Sized,
        B: FieldAccess + ?Sized,
    {
        for planned in &self.entries {
            let order = planned
                .comparator
                .compare(a.value_of(&planned.field), b.value_of(&planned.field))?;
            if order != Ordering::Equal {
                return Ok(order);
            }
        }
        Ok(Ordering::Equal)
    }
}

impl<'a> IntoIterator for &'a OrderingPlan {
    type Item = &'a PlannedField;
    type IntoIter = std::slice::Iter<'a, PlannedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
