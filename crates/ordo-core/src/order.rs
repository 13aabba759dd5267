//! Default Order: a total order over JSON values
//!
//! Values of different types are ordered by type rank:
//!
//! ```text
//! absent < null < boolean < number < string < array < object
//! ```
//!
//! Within a type:
//! - booleans: `false < true`
//! - numbers: numeric and exact, integers against floats included; `-0.0`
//!   equals `0`
//! - strings: lexicographic by code point
//! - arrays: element by element, then the shorter array first
//! - objects: entries in ascending key order (key, then value), then the
//!   object with fewer entries first

use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

/// Rank of a value's type in the cross-type order.
pub fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None => 0,
        Some(Value::Null) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::Number(_)) => 3,
        Some(Value::String(_)) => 4,
        Some(Value::Array(_)) => 5,
        Some(Value::Object(_)) => 6,
    }
}

/// The default comparator.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => compare_numbers(x, y),
        // `str` ordering is byte-wise UTF-8, which matches code point order
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Array(x)), Some(Value::Array(y))) => compare_arrays(x, y),
        (Some(Value::Object(x)), Some(Value::Object(y))) => compare_objects(x, y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Numeric comparison of two JSON numbers.
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (integer_of(a), integer_of(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(x), None) => compare_integer_float(x, b.as_f64().unwrap_or_default()),
        (None, Some(y)) => compare_integer_float(y, a.as_f64().unwrap_or_default()).reverse(),
        (None, None) => {
            let x = a.as_f64().unwrap_or_default();
            let y = b.as_f64().unwrap_or_default();
            // -0.0 and 0.0 are equal, as they are to the integer 0
            x.partial_cmp(&y).unwrap_or_else(|| x.total_cmp(&y))
        }
    }
}

fn integer_of(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// 2^127, the first float above every i128
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Exact comparison of an integer against a float
fn compare_integer_float(i: i128, f: f64) -> Ordering {
    if f.is_nan() {
        return Ordering::Less;
    }
    let floor = f.floor();
    if floor >= I128_BOUND {
        return Ordering::Less;
    }
    if floor < -I128_BOUND {
        return Ordering::Greater;
    }
    // Integral and within range, so the cast is exact
    match i.cmp(&(floor as i128)) {
        Ordering::Equal if f > floor => Ordering::Less,
        other => other,
    }
}

fn compare_arrays(a: &[Value], b: &[Value]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match compare_values(Some(x), Some(y)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    a.len().cmp(&b.len())
}

fn compare_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    let mut left: Vec<(&String, &Value)> = a.iter().collect();
    let mut right: Vec<(&String, &Value)> = b.iter().collect();
    left.sort_by(|x, y| x.0.cmp(y.0));
    right.sort_by(|x, y| x.0.cmp(y.0));

    for ((ka, va), (kb, vb)) in left.iter().zip(right.iter()) {
        let order = ka.cmp(kb).then_with(|| compare_values(Some(*va), Some(*vb)));
        if order != Ordering::Equal {
            return order;
        }
    }
    left.len().cmp(&right.len())
}
