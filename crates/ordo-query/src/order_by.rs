//! orderBy clauses
//!
//! A clause is a comma separated list of keys, each a field name with an
//! optional direction:
//!
//! ```text
//! lastName DESC, firstName, year asc
//! ```

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn apply(self, order: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => order,
            SortOrder::Descending => order.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Descending)
        } else {
            Err(QueryError::InvalidOrderBy(format!(
                "unknown direction '{}', expected ASC or DESC",
                s
            )))
        }
    }
}

/// One field of an orderBy clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortKey {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.order {
            SortOrder::Ascending => write!(f, "{}", self.field),
            SortOrder::Descending => write!(f, "{} DESC", self.field),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    keys: Vec<SortKey>,
}

impl OrderBy {
    pub fn new(keys: Vec<SortKey>) -> Self {
        Self { keys }
    }

    /// Parse a clause such as `"lastName DESC, firstName"`
    pub fn parse(clause: &str) -> Result<Self, QueryError> {
        if clause.trim().is_empty() {
            return Err(QueryError::InvalidOrderBy("empty clause".to_string()));
        }

        let mut keys = Vec::new();
        for (position, part) in clause.split(',').enumerate() {
            let tokens: Vec<&str> = part.split_whitespace().collect();
            let key = match tokens.as_slice() {
                [] => {
                    return Err(QueryError::InvalidOrderBy(format!(
                        "empty key at position {}",
                        position
                    )))
                }
                [field] => SortKey::ascending(*field),
                [field, direction] => SortKey {
                    field: field.to_string(),
                    order: direction.parse()?,
                },
                _ => {
                    return Err(QueryError::InvalidOrderBy(format!(
                        "unexpected tokens in '{}'",
                        part.trim()
                    )))
                }
            };
            keys.push(key);
        }

        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromStr for OrderBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let keys: Vec<String> = self.keys.iter().map(|k| k.to_string()).collect();
        write!(f, "{}", keys.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        let order = OrderBy::parse("firstName").unwrap();
        assert_eq!(order.keys(), &[SortKey::ascending("firstName")]);
    }

    #[test]
    fn test_parse_multiple_with_directions() {
        let order = OrderBy::parse("lastName DESC,  firstName asc ,year").unwrap();
        assert_eq!(
            order.keys(),
            &[
                SortKey::descending("lastName"),
                SortKey::ascending("firstName"),
                SortKey::ascending("year"),
            ]
        );
        assert_eq!(order.fields().collect::<Vec<_>>(), vec!["lastName", "firstName", "year"]);
        assert_eq!(order.to_string(), "lastName DESC, firstName, year");
    }

    #[test]
    fn test_parse_errors() {
        for clause in ["", "   ", "firstName,", "a, ,b", "year DOWN", "a DESC extra"] {
            assert!(
                matches!(OrderBy::parse(clause), Err(QueryError::InvalidOrderBy(_))),
                "clause {:?} should be rejected",
                clause
            );
        }
    }

    #[test]
    fn test_from_str_round_trip() {
        let order: OrderBy = "lastName DESC, firstName".parse().unwrap();
        assert_eq!(order.to_string().parse::<OrderBy>().unwrap(), order);
    }

    #[test]
    fn test_sort_order_apply() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortOrder::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Descending.apply(Ordering::Equal), Ordering::Equal);
    }
}
