use std::fmt;
use std::sync::Arc;

use super::comparison;
use super::Comparator;
use crate::Blackboard;
use crate::Value;

/// What a single look at the blackboard found
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Evaluation {
    Missing,
    /// Present, and only existence was asked for
    Exists,
    Matched,
    Mismatched,
}

/// Variable lookup and comparison shared by check and wait behaviours
pub(crate) struct VariableMatcher {
    blackboard: Blackboard,
    variable_name: String,
    expected_value: Option<Value>,
    comparator: Comparator,
}

impl VariableMatcher {
    pub(crate) fn new(
        blackboard: Blackboard,
        variable_name: String,
    ) -> Self {
        Self {
            blackboard,
            variable_name,
            expected_value: None,
            comparator: Arc::new(comparison::equal),
        }
    }

    pub(crate) fn variable_name(&self) -> &str {
        &self.variable_name
    }

    pub(crate) fn expected_value(&self) -> Option<&Value> {
        self.expected_value.as_ref()
    }

    pub(crate) fn set_expected_value(
        &mut self,
        expected: Value,
    ) {
        self.expected_value = Some(expected);
    }

    pub(crate) fn set_comparator(
        &mut self,
        comparator: Comparator,
    ) {
        self.comparator = comparator;
    }

    /// Looks the variable up, compares it, and describes the finding.
    pub(crate) fn evaluate(&self) -> (Evaluation, String) {
        let name = &self.variable_name;
        let Some(value) = self.blackboard.get(name) else {
            return (Evaluation::Missing, format!("blackboard variable {name} did not exist"));
        };

        let Some(expected) = &self.expected_value else {
            return (Evaluation::Exists, format!("'{name}' exists on the blackboard (as required)"));
        };

        if (self.comparator)(&value, expected) {
            (
                Evaluation::Matched,
                format!("'{name}' comparison succeeded [v: {value}][e: {expected}]"),
            )
        } else {
            (
                Evaluation::Mismatched,
                format!("'{name}' comparison failed [v: {value}][e: {expected}]"),
            )
        }
    }
}

impl fmt::Debug for VariableMatcher {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("VariableMatcher")
            .field("variable_name", &self.variable_name)
            .field("expected_value", &self.expected_value)
            .finish_non_exhaustive()
    }
}
