//! Query: orders entities by an orderBy clause through the registry
use crate::error::QueryError;
use crate::order_by::{OrderBy, SortKey};
use crate::sort::try_sort_by;
use ordo_core::FieldAccess;
use ordo_registry::{ComparatorError, OrderingPlan, SharedRegistry};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct Query {
    registry: SharedRegistry,
    order_by: OrderBy,
}

impl Query {
    /// A query with no ordering; every pair compares equal
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            registry,
            order_by: OrderBy::default(),
        }
    }

    /// Parse and set the orderBy clause
    pub fn order_by(mut self, clause: &str) -> Result<Self, QueryError> {
        self.order_by = OrderBy::parse(clause)?;
        Ok(self)
    }

    pub fn with_order(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    pub fn ordering(&self) -> &OrderBy {
        &self.order_by
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Comparators for every key, resolved now
    pub fn plan(&self) -> OrderingPlan {
        self.registry.snapshot(self.order_by.fields())
    }

    /// Compare two entities key by key
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Result<Ordering, ComparatorError>
    where
        A: FieldAccess + ?Sized,
        B: FieldAccess + ?Sized,
    {
        compare_planned(&self.plan(), self.order_by.keys(), a, b)
    }

    /// Stable sort. Comparators are resolved once for the whole sort.
    pub fn sort<T: FieldAccess>(&self, items: &mut [T]) -> Result<(), ComparatorError> {
        if self.order_by.is_empty() || items.len() < 2 {
            return Ok(());
        }

        let plan = self.plan();
        let keys = self.order_by.keys();
        tracing::debug!(order_by = %self.order_by, items = items.len(), "sorting");
        try_sort_by(items, |a, b| compare_planned(&plan, keys, a, b))
    }

    pub fn sorted<T: FieldAccess>(&self, mut items: Vec<T>) -> Result<Vec<T>, ComparatorError> {
        self.sort(&mut items)?;
        Ok(items)
    }
}

fn compare_planned<A, B>(
    plan: &OrderingPlan,
    keys: &[SortKey],
    a: &A,
    b: &B,
) -> Result<Ordering, ComparatorError>
where
    A: FieldAccess + ?Sized,
    B: FieldAccess + ?Sized,
{
    for (planned, key) in plan.iter().zip(keys) {
        let order = planned
            .comparator
            .compare(a.value_of(&planned.field), b.value_of(&planned.field))?;
        let order = key.order.apply(order);
        if order != Ordering::Equal {
            return Ok(order);
        }
    }
    Ok(Ordering::Equal)
}
