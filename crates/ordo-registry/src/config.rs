//! Registry configuration
//!
//! Comparisons can be declared in YAML and registered in one pass:
//!
//! ```yaml
//! version: "1"
//! comparisons:
//!   firstName: { name: length }
//!   lastName: { name: case_insensitive, descending: true }
//! ```

use crate::builtin::builtin;
use crate::comparator::Comparator;
use ordo_core::OrdoError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Reference to a built-in comparator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparatorSpec {
    /// Built-in name (ex: "length", "numeric")
    pub name: String,

    /// Flip the comparator's result
    #[serde(default)]
    pub descending: bool,
}

impl ComparatorSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descending: false,
        }
    }

    pub fn descending(mut self) -> Self {
        self.descending = true;
        self
    }

    /// Resolve against the built-in catalogue
    pub fn build(&self) -> Option<Comparator> {
        let comparator = builtin(&self.name)?;
        Some(if self.descending {
            comparator.reversed()
        } else {
            comparator
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_version")]
    pub version: String,

    /// Field name → comparator
    #[serde(default)]
    pub comparisons: BTreeMap<String, ComparatorSpec>,
}

fn default_version() -> String {
    "1".to_string()
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self {
            version: default_version(),
            comparisons: BTreeMap::new(),
        }
    }

    pub fn with_comparison(mut self, field: impl Into<String>, spec: ComparatorSpec) -> Self {
        self.comparisons.insert(field.into(), spec);
        self
    }

    /// Parse configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, OrdoError> {
        serde_yaml::from_str(yaml).map_err(|e| OrdoError::Config(e.to_string()))
    }

    /// Read and parse a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OrdoError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| OrdoError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            comparisons = config.comparisons.len(),
            "loaded comparison config"
        );
        Ok(config)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml() {
        let config = RegistryConfig::from_yaml(
            r#"
version: "1"
comparisons:
  firstName: { name: length }
  lastName:
    name: case_insensitive
    descending: true
"#,
        )
        .unwrap();

        assert_eq!(config.comparisons.len(), 2);
        assert_eq!(config.comparisons["firstName"], ComparatorSpec::new("length"));
        assert_eq!(
            config.comparisons["lastName"],
            ComparatorSpec::new("case_insensitive").descending()
        );
    }

    #[test]
    fn test_defaults() {
        let config = RegistryConfig::from_yaml("comparisons: {}").unwrap();
        assert_eq!(config.version, "1");
        assert!(config.comparisons.is_empty());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = RegistryConfig::from_yaml("comparisons: [1, 2").unwrap_err();
        assert!(matches!(err, OrdoError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = RegistryConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, OrdoError::Io { .. }));
    }

    #[test]
    fn test_spec_build() {
        assert_eq!(ComparatorSpec::new("length").build().unwrap().name(), "length");
        assert_eq!(
            ComparatorSpec::new("numeric").descending().build().unwrap().name(),
            "numeric desc"
        );
        assert!(ComparatorSpec::new("soundex").build().is_none());
    }
}
