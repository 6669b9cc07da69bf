//! Ready-made comparators for [`CheckVariable`] and [`WaitForVariable`].
//!
//! A comparator receives the blackboard value first and the expected value second.
//!
//! [`CheckVariable`]: super::CheckVariable
//! [`WaitForVariable`]: super::WaitForVariable

use std::cmp::Ordering;
use std::sync::Arc;

use crate::Value;

pub type Comparator = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

/// Numbers compare by value across int and float; anything else structurally.
pub fn equal(
    value: &Value,
    expected: &Value,
) -> bool {
    match (value, expected) {
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            value.compare(expected) == Some(Ordering::Equal)
        }
        _ => value == expected,
    }
}

pub fn not_equal(
    value: &Value,
    expected: &Value,
) -> bool {
    !equal(value, expected)
}

pub fn less_than(
    value: &Value,
    expected: &Value,
) -> bool {
    value.compare(expected) == Some(Ordering::Less)
}

pub fn less_or_equal(
    value: &Value,
    expected: &Value,
) -> bool {
    matches!(value.compare(expected), Some(Ordering::Less | Ordering::Equal))
}

pub fn greater_than(
    value: &Value,
    expected: &Value,
) -> bool {
    value.compare(expected) == Some(Ordering::Greater)
}

pub fn greater_or_equal(
    value: &Value,
    expected: &Value,
) -> bool {
    matches!(value.compare(expected), Some(Ordering::Greater | Ordering::Equal))
}
