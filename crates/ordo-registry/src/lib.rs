//! Ordo Registry: named field comparisons
//!
//! A [`ComparisonRegistry`] lets callers override how a specific field is
//! ordered. Any field without an override is ordered by the default total
//! order from `ordo_core`, so sorting code can always call
//! [`ComparisonRegistry::compare`] without checking for a registration.
//!
//! # Example
//!
//! ```
//! use ordo_core::Record;
//! use ordo_registry::ComparisonRegistry;
//! use std::cmp::Ordering;
//!
//! let registry = ComparisonRegistry::new();
//! registry
//!     .register_fn("firstName", |a, b| {
//!         let len = |v: Option<&serde_json::Value>| v.and_then(|v| v.as_str()).map_or(0, str::len);
//!         len(a).cmp(&len(b))
//!     })
//!     .unwrap();
//!
//! let jane = Record::new(2).with("firstName", "Jane").with("lastName", "Doe");
//! let emily = Record::new(3).with("firstName", "Emily").with("lastName", "Parker");
//!
//! // Registered: shorter names first
//! assert_eq!(registry.compare("firstName", &jane, &emily), Ok(Ordering::Less));
//! // Unregistered: default lexicographic order
//! assert_eq!(registry.compare("lastName", &jane, &emily), Ok(Ordering::Less));
//!
//! registry.unregister("firstName");
//! ```
//!
//! # Configuration
//!
//! ```
//! use ordo_registry::{ComparisonRegistry, RegistryConfig};
//!
//! let config = RegistryConfig::from_yaml("comparisons:\n  year: { name: numeric }\n").unwrap();
//! let registry = ComparisonRegistry::from_config(&config).unwrap();
//! assert!(registry.is_registered("year"));
//! ```

pub mod builtin;
pub mod comparator;
pub mod config;
pub mod error;
pub mod registry;

pub use builtin::{builtin, builtin_names};
pub use comparator::Comparator;
pub use config::{ComparatorSpec, RegistryConfig};
pub use error::{ComparatorError, RegistryError};
pub use registry::{ComparisonRegistry, OrderingPlan, PlannedField, SharedRegistry};
