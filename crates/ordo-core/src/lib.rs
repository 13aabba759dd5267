//! Ordo Core: value ordering and field access
//!
//! Everything the comparison registry needs to know about the entities it
//! orders lives here: the [`FieldAccess`] capability, a concrete
//! [`Record`] type, and [`compare_values`], the total order used for any
//! field without a registered comparator.
//!
//! # Example
//!
//! ```
//! use ordo_core::{compare_values, FieldAccess, Record};
//! use std::cmp::Ordering;
//!
//! let jane = Record::new(2).with("lastName", "Doe");
//! let emily = Record::new(3).with("lastName", "Parker");
//!
//! let order = compare_values(jane.value_of("lastName"), emily.value_of("lastName"));
//! assert_eq!(order, Ordering::Less);
//! ```

pub mod access;
pub mod error;
pub mod order;
pub mod record;

pub use access::FieldAccess;
pub use error::OrdoError;
pub use order::{compare_numbers, compare_values, type_rank};
pub use record::Record;

/// Ordo engine version
pub const ORDO_VERSION: &str = "1.0.0";
