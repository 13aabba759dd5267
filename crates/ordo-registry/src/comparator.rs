//! Comparator handle
use crate::error::ComparatorError;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFn =
    dyn Fn(Option<&Value>, Option<&Value>) -> Result<Ordering, ComparatorError> + Send + Sync;

/// A named, shareable comparison function over field values.
///
/// Cloning is cheap: clones share the same function, so a comparator
/// resolved once can be applied to every pair of a sort.
#[derive(Clone)]
pub struct Comparator {
    name: Arc<str>,
    func: Arc<CompareFn>,
}

impl Comparator {
    /// Wrap an infallible comparison
    pub fn new<F>(name: impl Into<String>, compare: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Ordering + Send + Sync + 'static,
    {
        Self::fallible(name, move |a, b| Ok(compare(a, b)))
    }

    /// Wrap a comparison that may fail
    pub fn fallible<F>(name: impl Into<String>, compare: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> Result<Ordering, ComparatorError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: Arc::from(name.into()),
            func: Arc::new(compare),
        }
    }

    /// The comparator used for fields with no registration
    pub fn default_order() -> Self {
        crate::builtin::DEFAULT.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compare(
        &self,
        a: Option<&Value>,
        b: Option<&Value>,
    ) -> Result<Ordering, ComparatorError> {
        (self.func)(a, b)
    }

    /// Same comparator with its result flipped
    pub fn reversed(self) -> Self {
        let inner = self.func;
        Self::fallible(format!("{} desc", self.name), move |a, b| {
            inner(a, b).map(Ordering::reverse)
        })
    }

    /// Whether both handles share one function
    pub fn same_as(&self, other: &Comparator) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }

    pub fn is_default(&self) -> bool {
        self.same_as(&crate::builtin::DEFAULT)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").field("name", &self.name).finish()
    }
}
