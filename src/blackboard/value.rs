//! Dynamically typed blackboard values
//!
//! Scalars, lists and maps are plain data. Arbitrary domain objects enter the
//! blackboard through [`Record`], which exposes their fields as named [`Child`]
//! entries so that nested paths can be resolved and listed without reflection.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::snapshot::canonical_bytes;
use crate::snapshot::float_bits;

/// Capability of a domain object to describe its fields.
///
/// Types that do not implement it are stored as scalars or containers and are
/// never expanded.
pub trait Record: fmt::Debug + Send + Sync {
    /// Name shown when the object is rendered
    fn type_name(&self) -> &str;

    /// Current members of the object, data fields and behavioural members alike
    fn children(&self) -> Vec<Child>;

    /// Text form used by blackboard renderings.
    ///
    /// The default shows data fields one level deep; nested objects appear by type name.
    fn render(&self) -> String {
        let fields: Vec<String> = self
            .children()
            .into_iter()
            .filter_map(|child| match child {
                Child::Field(name, value) => Some(format!("{}: {}", name, ShallowText(&value))),
                Child::Method(_) => None,
            })
            .collect();

        if fields.is_empty() {
            self.type_name().to_string()
        } else {
            format!("{} {{ {} }}", self.type_name(), fields.join(", "))
        }
    }
}

/// A named member of a [`Record`]
#[derive(Debug, Clone)]
pub enum Child {
    /// Data member
    Field(String, Value),
    /// Behavioural member (callable, not data)
    Method(String),
}

impl Child {
    pub fn field(
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Child::Field(name.into(), value.into())
    }

    pub fn method(name: impl Into<String>) -> Self {
        Child::Method(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Child::Field(name, _) | Child::Method(name) => name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(Arc<dyn Record>),
}

impl Value {
    pub fn object<R: Record + 'static>(record: R) -> Self {
        Value::Object(Arc::new(record))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Leaf values are terminal: they have no addressable children.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Value::Map(_) | Value::Object(_))
    }

    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Object(record) => record.type_name(),
        }
    }

    /// Addressable members: map entries or object members. Empty for leaves.
    pub fn children(&self) -> Vec<Child> {
        match self {
            Value::Map(entries) => entries
                .iter()
                .map(|(name, value)| Child::Field(name.clone(), value.clone()))
                .collect(),
            Value::Object(record) => record.children(),
            _ => Vec::new(),
        }
    }

    /// Resolves a single path segment. Behavioural members never resolve.
    pub fn child(
        &self,
        name: &str,
    ) -> Option<Value> {
        match self {
            Value::Map(entries) => entries.get(name).cloned(),
            Value::Object(record) => record.children().into_iter().find_map(|child| match child {
                Child::Field(field, value) if field == name => Some(value),
                _ => None,
            }),
            _ => None,
        }
    }

    /// Walks a sequence of segments starting from this value.
    pub fn lookup<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Option<Value> {
        let mut current = self.clone();
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Address of the shared object, used to detect cycles in object graphs
    pub(crate) fn identity(&self) -> Option<usize> {
        match self {
            Value::Object(record) => Some(Arc::as_ptr(record) as *const () as usize),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Ordering between comparable values.
    ///
    /// Numbers compare across int and float, text lexicographically, booleans
    /// with `false < true`. Anything else is unordered.
    pub fn compare(
        &self,
        other: &Value,
    ) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            _ => None,
        }
    }
}

/// Structural equality, in agreement with [`Digest`](crate::Digest).
///
/// Floats compare by bit pattern with `-0.0` equal to `0.0`, so a NaN equals
/// itself. Objects are equal when their canonical encodings are.
impl PartialEq for Value {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_bits(*a) == float_bits(*b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
                    || canonical_bytes(self) == canonical_bytes(other)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write_text(self, f, false)
    }
}

/// Display adapter that shows nested objects by type name only
struct ShallowText<'a>(&'a Value);

impl fmt::Display for ShallowText<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write_text(self.0, f, true)
    }
}

fn write_text(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    shallow: bool,
) -> fmt::Result {
    match value {
        Value::Null => f.write_str(crate::constants::NULL_PLACEHOLDER),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Int(i) => write!(f, "{i}"),
        Value::Float(x) => write!(f, "{x:?}"),
        Value::Text(s) => f.write_str(s),
        Value::List(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_text(item, f, shallow)?;
            }
            f.write_str("]")
        }
        Value::Map(entries) => {
            f.write_str("{")?;
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}: ")?;
                write_text(item, f, shallow)?;
            }
            f.write_str("}")
        }
        Value::Object(record) if shallow => f.write_str(record.type_name()),
        Value::Object(record) => f.write_str(&record.render()),
    }
}

//---
// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<Arc<dyn Record>> for Value {
    fn from(record: Arc<dyn Record>) -> Self {
        Value::Object(record)
    }
}
