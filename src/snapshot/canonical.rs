//! Canonical byte encoding used only for equality comparison.
//!
//! The encoding is never persisted or transported. It is tagged and length
//! prefixed, emits map entries and object fields in sorted key order, and writes
//! a back-reference marker instead of re-entering an object that is already on
//! the current path.

use std::collections::BTreeMap;

use crate::Child;
use crate::Value;

const TAG_NULL: u8 = 0;
const TAG_BOOL: u8 = 1;
const TAG_INT: u8 = 2;
const TAG_FLOAT: u8 = 3;
const TAG_TEXT: u8 = 4;
const TAG_LIST: u8 = 5;
const TAG_MAP: u8 = 6;
const TAG_OBJECT: u8 = 7;
const TAG_BACK_REFERENCE: u8 = 8;

/// Canonical encoding of a single value
pub(crate) fn canonical_bytes(value: &Value) -> Vec<u8> {
    let mut encoder = CanonicalEncoder::default();
    encoder.value(value);
    encoder.buf
}

/// Canonical encoding of a named value subset
pub(crate) fn canonical_subset_bytes(subset: &BTreeMap<String, Value>) -> Vec<u8> {
    let mut encoder = CanonicalEncoder::default();
    encoder.map(subset);
    encoder.buf
}

#[derive(Default)]
struct CanonicalEncoder {
    buf: Vec<u8>,
    /// Identities of the objects currently being encoded, outermost first
    ancestors: Vec<usize>,
}

impl CanonicalEncoder {
    fn value(
        &mut self,
        value: &Value,
    ) {
        match value {
            Value::Null => self.buf.push(TAG_NULL),
            Value::Bool(b) => {
                self.buf.push(TAG_BOOL);
                self.buf.push(*b as u8);
            }
            Value::Int(i) => {
                self.buf.push(TAG_INT);
                self.buf.extend_from_slice(&i.to_le_bytes());
            }
            Value::Float(x) => {
                self.buf.push(TAG_FLOAT);
                self.buf.extend_from_slice(&float_bits(*x).to_le_bytes());
            }
            Value::Text(s) => {
                self.buf.push(TAG_TEXT);
                self.str(s);
            }
            Value::List(items) => {
                self.buf.push(TAG_LIST);
                self.len(items.len());
                for item in items {
                    self.value(item);
                }
            }
            Value::Map(entries) => self.map(entries),
            Value::Object(record) => {
                let identity = value.identity().unwrap_or_default();
                if let Some(depth) = self.ancestors.iter().rposition(|a| *a == identity) {
                    self.buf.push(TAG_BACK_REFERENCE);
                    self.len(self.ancestors.len() - depth);
                    return;
                }

                self.ancestors.push(identity);
                self.buf.push(TAG_OBJECT);
                self.str(record.type_name());

                let mut fields: Vec<(String, Value)> = record
                    .children()
                    .into_iter()
                    .filter_map(|child| match child {
                        Child::Field(name, value) => Some((name, value)),
                        Child::Method(_) => None,
                    })
                    .collect();
                fields.sort_by(|a, b| a.0.cmp(&b.0));

                self.len(fields.len());
                for (name, value) in &fields {
                    self.str(name);
                    self.value(value);
                }
                self.ancestors.pop();
            }
        }
    }

    fn map(
        &mut self,
        entries: &BTreeMap<String, Value>,
    ) {
        self.buf.push(TAG_MAP);
        self.len(entries.len());
        for (key, value) in entries {
            self.str(key);
            self.value(value);
        }
    }

    fn str(
        &mut self,
        s: &str,
    ) {
        self.len(s.len());
        self.buf.extend_from_slice(s.as_bytes());
    }

    fn len(
        &mut self,
        len: usize,
    ) {
        self.buf.extend_from_slice(&(len as u64).to_le_bytes());
    }
}

/// Bit pattern of a float with `-0.0` folded into `0.0`
pub(crate) fn float_bits(x: f64) -> u64 {
    if x == 0.0 {
        0.0f64.to_bits()
    } else {
        x.to_bits()
    }
}
