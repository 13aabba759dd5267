//! Built-in comparators, addressable by name from configuration
use crate::comparator::Comparator;
use once_cell::sync::Lazy;
use ordo_core::{compare_values, type_rank};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

pub const DEFAULT_NAME: &str = "default";

pub(crate) static DEFAULT: Lazy<Comparator> =
    Lazy::new(|| Comparator::new(DEFAULT_NAME, compare_values));

static BUILTINS: Lazy<HashMap<&'static str, Comparator>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(DEFAULT_NAME, DEFAULT.clone());
    map.insert("length", Comparator::new("length", by_length));
    map.insert(
        "case_insensitive",
        Comparator::new("case_insensitive", case_insensitive),
    );
    map.insert("numeric", Comparator::new("numeric", numeric));
    map.insert(
        "reverse",
        Comparator::new("reverse", |a, b| compare_values(a, b).reverse()),
    );
    map
});

/// Look up a built-in comparator
pub fn builtin(name: &str) -> Option<Comparator> {
    BUILTINS.get(name).cloned()
}

/// Names of every built-in comparator, sorted
pub fn builtin_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTINS.keys().copied().collect();
    names.sort_unstable();
    names
}

fn length_of(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        Value::Object(map) => Some(map.len()),
        _ => None,
    }
}

/// Strings by char count, arrays and objects by size
fn by_length(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (length_of(a), length_of(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => compare_values(a, b),
    }
}

fn case_insensitive(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => {
            x.to_lowercase().cmp(&y.to_lowercase())
        }
        _ => compare_values(a, b),
    }
}

fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| !n.is_nan()),
        _ => None,
    }
}

/// Numbers and numeric strings share the number rank, so every pair goes
/// through the same rank-then-value rule:
///
/// ```text
/// absent < null < boolean < numeric < other strings < array < object
/// ```
fn numeric_rank(value: Option<&Value>) -> u8 {
    match as_number(value) {
        Some(_) => type_rank(Some(&Value::Number(0.into()))),
        None => type_rank(value),
    }
}

fn numeric(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    numeric_rank(a)
        .cmp(&numeric_rank(b))
        .then_with(|| match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => compare_values(a, b),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(name: &str, a: Value, b: Value) -> Ordering {
        builtin(name)
            .unwrap()
            .compare(Some(&a), Some(&b))
            .unwrap()
    }

    #[test]
    fn test_catalogue() {
        assert_eq!(
            builtin_names(),
            vec!["case_insensitive", "default", "length", "numeric", "reverse"]
        );
        assert!(builtin("default").unwrap().is_default());
        assert!(builtin("lexical").is_none());
    }

    #[test]
    fn test_length() {
        assert_eq!(apply("length", json!("Jane"), json!("Emily")), Ordering::Less);
        assert_eq!(apply("length", json!("John"), json!("Jane")), Ordering::Equal);
        assert_eq!(apply("length", json!([1, 2, 3]), json!([9])), Ordering::Greater);
        // Non-sized values fall back to the default order
        assert_eq!(apply("length", json!(10), json!("a")), Ordering::Less);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            apply("case_insensitive", json!("berthold"), json!("Cash")),
            Ordering::Less
        );
        assert_eq!(apply("default", json!("berthold"), json!("Cash")), Ordering::Greater);
        assert_eq!(apply("case_insensitive", json!("DOE"), json!("doe")), Ordering::Equal);
    }

    #[test]
    fn test_numeric() {
        assert_eq!(apply("numeric", json!("10"), json!("9")), Ordering::Greater);
        assert_eq!(apply("default", json!("10"), json!("9")), Ordering::Less);
        assert_eq!(apply("numeric", json!(1975), json!("1974")), Ordering::Greater);
        assert_eq!(apply("numeric", json!("abc"), json!(1)), Ordering::Greater);
        assert_eq!(apply("numeric", json!("1a"), json!("2")), Ordering::Greater);
        assert_eq!(apply("numeric", json!("-0"), json!(0)), Ordering::Equal);
        assert_eq!(apply("numeric", json!(true), json!("2")), Ordering::Less);
    }

    #[test]
    fn test_numeric_sort_independent_of_input_order() {
        let numeric = builtin("numeric").unwrap();
        let permutations = [
            [json!(5), json!("1a"), json!("2")],
            [json!(5), json!("2"), json!("1a")],
            [json!("1a"), json!(5), json!("2")],
            [json!("1a"), json!("2"), json!(5)],
            [json!("2"), json!(5), json!("1a")],
            [json!("2"), json!("1a"), json!(5)],
        ];

        for input in permutations {
            let mut items = input.to_vec();
            items.sort_by(|a, b| numeric.compare(Some(a), Some(b)).unwrap());
            assert_eq!(items, vec![json!("2"), json!(5), json!("1a")], "from {:?}", input);
        }
    }

    #[test]
    fn test_every_builtin_is_transitive() {
        let values: Vec<Option<Value>> = vec![
            None,
            Some(Value::Null),
            Some(json!(false)),
            Some(json!(true)),
            Some(json!(-1.5)),
            Some(json!(-1)),
            Some(json!(0)),
            Some(json!(-0.0)),
            Some(json!(5)),
            Some(json!(9_007_199_254_740_993_u64)),
            Some(json!(9_007_199_254_740_992.0_f64)),
            Some(json!(u64::MAX)),
            Some(json!(18_446_744_073_709_551_616.0_f64)),
            Some(json!("")),
            Some(json!("-0")),
            Some(json!("1a")),
            Some(json!("2")),
            Some(json!("10")),
            Some(json!(" 7 ")),
            Some(json!("NaN")),
            Some(json!("abc")),
            Some(json!("ABC")),
            Some(json!("Emily")),
            Some(json!([1])),
            Some(json!([1, 2])),
            Some(json!({ "a": 1 })),
        ];

        for name in builtin_names() {
            let comparator = builtin(name).unwrap();
            let cmp = |a: &Option<Value>, b: &Option<Value>| {
                comparator.compare(a.as_ref(), b.as_ref()).unwrap()
            };
            for a in &values {
                for b in &values {
                    assert_eq!(cmp(a, b), cmp(b, a).reverse(), "{}: {:?} vs {:?}", name, a, b);
                    for c in &values {
                        let (ab, bc, ac) = (cmp(a, b), cmp(b, c), cmp(a, c));
                        if ab != Ordering::Greater && bc != Ordering::Greater {
                            assert_ne!(
                                ac,
                                Ordering::Greater,
                                "{}: {:?} <= {:?} <= {:?}",
                                name,
                                a,
                                b,
                                c
                            );
                        }
                        if ab == Ordering::Equal && bc == Ordering::Equal {
                            assert_eq!(ac, Ordering::Equal, "{}: {:?} == {:?} == {:?}", name, a, b, c);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_reverse() {
        assert_eq!(apply("reverse", json!("Doe"), json!("Parker")), Ordering::Greater);
        assert_eq!(
            builtin("reverse").unwrap().compare(None, Some(&Value::Null)),
            Ok(Ordering::Greater)
        );
    }
}
