//! Shared variable store for behaviours ticked by a control loop.
//!
//! A [`Blackboard`] is a handle: clones share one underlying mapping, so every
//! behaviour and every watch constructed from the same instance observes the same
//! variables. There is no process-global store; the host constructs one and hands
//! clones to its consumers.
//!
//! ```
//! use blackboard_watch::{Blackboard, Value};
//!
//! let blackboard = Blackboard::new();
//! let shared = blackboard.clone();
//!
//! assert!(blackboard.set("speed", 5, true));
//! assert!(!shared.set("speed", 7, false));
//! assert_eq!(shared.get("speed"), Some(Value::Int(5)));
//! ```

mod render;
mod value;

pub(crate) use render::render_text;
pub use value::*;

#[cfg(test)]
mod blackboard_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::constants::BLACKBOARD_TITLE;
use crate::constants::PATH_SEPARATORS;

#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    variables: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a variable.
    ///
    /// `name` is first looked up as a top-level variable. Failing that it is split
    /// on `/` or `.` and resolved segment by segment through map entries and object
    /// fields. Returns `None` when any segment is missing.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<Value> {
        let root = {
            let variables = self.variables.read();
            if let Some(value) = variables.get(name) {
                return Some(value.clone());
            }

            let head = name.split(PATH_SEPARATORS).next()?;
            variables.get(head)?.clone()
        };

        // Object fields are resolved outside the lock
        root.lookup(name.split(PATH_SEPARATORS).skip(1))
    }

    /// Writes a top-level variable.
    ///
    /// Returns `false` and leaves the store untouched when `overwrite` is unset
    /// and the variable already exists.
    pub fn set(
        &self,
        name: &str,
        value: impl Into<Value>,
        overwrite: bool,
    ) -> bool {
        let mut variables = self.variables.write();
        if !overwrite && variables.contains_key(name) {
            trace!(variable = name, "Variable exists, not overwritten");
            return false;
        }

        let value = value.into();
        trace!(variable = name, value = %value, "Variable set");
        variables.insert(name.to_string(), value);
        true
    }

    /// Removes a top-level variable. Absent names are ignored.
    pub fn delete(
        &self,
        name: &str,
    ) {
        if self.variables.write().remove(name).is_some() {
            trace!(variable = name, "Variable deleted");
        }
    }

    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.get(name).is_some()
    }

    /// Top-level variable names in sorted order
    pub fn keys(&self) -> Vec<String> {
        self.variables.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.variables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.read().is_empty()
    }

    pub fn clear(&self) {
        self.variables.write().clear();
    }

    /// Owned copy of every top-level variable
    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.variables.read().clone()
    }

    /// Human readable listing of every variable, titled `Blackboard`
    pub fn render_text(&self) -> String {
        render_text(BLACKBOARD_TITLE, &self.snapshot())
    }
}

impl fmt::Display for Blackboard {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.render_text())
    }
}
