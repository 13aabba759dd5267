//! Ordo Query: ordering records through the comparison registry
//!
//! [`Query`] orders entities by an orderBy clause, consulting the shared
//! [`ComparisonRegistry`](ordo_registry::ComparisonRegistry) for each key.
//! [`ListSort`] orders candidate lists by a sort key or a name key.
//!
//! # Example
//!
//! ```
//! use ordo_core::Record;
//! use ordo_query::Query;
//! use ordo_registry::ComparisonRegistry;
//!
//! let registry = ComparisonRegistry::new().shared();
//! let query = Query::new(registry).order_by("lastName, firstName DESC").unwrap();
//!
//! let sorted = query
//!     .sorted(vec![
//!         Record::new(1).with("firstName", "Jane").with("lastName", "Doe"),
//!         Record::new(2).with("firstName", "Emily").with("lastName", "Parker"),
//!         Record::new(3).with("firstName", "John").with("lastName", "Doe"),
//!     ])
//!     .unwrap();
//!
//! let guids: Vec<i64> = sorted.iter().filter_map(|r| r.guid.as_i64()).collect();
//! assert_eq!(guids, vec![3, 1, 2]);
//! ```

pub mod error;
pub mod list_sort;
pub mod order_by;
pub mod query;
pub mod sort;

pub use error::QueryError;
pub use list_sort::ListSort;
pub use order_by::{OrderBy, SortKey, SortOrder};
pub use query::Query;
pub use sort::{stable_order, try_sort_by};
