use std::sync::Arc;

use tracing::debug;

use super::matcher::Evaluation;
use super::matcher::VariableMatcher;
use super::Behaviour;
use super::ClearingPolicy;
use super::Status;
use crate::Blackboard;
use crate::Value;

/// Checks that a variable exists and, optionally, that it compares to an expected value.
///
/// The decision is memoized until the clearing policy or an invalidation discards it.
/// Memoizing matters when the logic that consumes the variable also deletes it: the
/// check keeps reporting what it saw instead of flipping on the next tick.
///
/// ```
/// use blackboard_watch::{Behaviour, Blackboard, CheckVariable, ClearingPolicy, Status};
///
/// let blackboard = Blackboard::new();
/// let mut check = CheckVariable::new("Fast Enough?", blackboard.clone(), "speed", ClearingPolicy::OnInitialise)
///     .expecting(5)
///     .with_comparator(blackboard_watch::comparison::greater_or_equal);
///
/// blackboard.set("speed", 7, true);
/// check.initialise();
/// assert_eq!(check.update(), Status::Success);
/// ```
#[derive(Debug)]
pub struct CheckVariable {
    name: String,
    matcher: VariableMatcher,
    clearing_policy: ClearingPolicy,
    matching_result: Option<Status>,
    feedback_message: String,
}

impl CheckVariable {
    pub fn new(
        name: impl Into<String>,
        blackboard: Blackboard,
        variable_name: impl Into<String>,
        clearing_policy: ClearingPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            matcher: VariableMatcher::new(blackboard, variable_name.into()),
            clearing_policy,
            matching_result: None,
            feedback_message: String::new(),
        }
    }

    /// Compare against `expected` instead of only checking existence.
    pub fn expecting(
        mut self,
        expected: impl Into<Value>,
    ) -> Self {
        self.matcher.set_expected_value(expected.into());
        self
    }

    /// Replaces the default equality comparison.
    pub fn with_comparator<F>(
        mut self,
        comparator: F,
    ) -> Self
    where
        F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    {
        self.matcher.set_comparator(Arc::new(comparator));
        self
    }

    pub fn variable_name(&self) -> &str {
        self.matcher.variable_name()
    }

    pub fn expected_value(&self) -> Option<&Value> {
        self.matcher.expected_value()
    }

    pub fn clearing_policy(&self) -> ClearingPolicy {
        self.clearing_policy
    }

    /// Memoized decision, if any
    pub fn matching_result(&self) -> Option<Status> {
        self.matching_result
    }
}

impl Behaviour for CheckVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        debug!(behaviour = %self.name, "CheckVariable::initialise()");
        if self.clearing_policy == ClearingPolicy::OnInitialise {
            self.matching_result = None;
        }
    }

    fn update(&mut self) -> Status {
        debug!(behaviour = %self.name, "CheckVariable::update()");
        if let Some(result) = self.matching_result {
            return result;
        }

        let (evaluation, feedback) = self.matcher.evaluate();
        self.feedback_message = feedback;
        let result = match evaluation {
            Evaluation::Exists | Evaluation::Matched => Status::Success,
            Evaluation::Missing | Evaluation::Mismatched => Status::Failure,
        };

        self.matching_result = if result == Status::Success && self.clearing_policy == ClearingPolicy::OnSuccess {
            None
        } else {
            Some(result)
        };
        result
    }

    fn terminate(
        &mut self,
        new_status: Status,
    ) {
        debug!(behaviour = %self.name, to = %new_status, "CheckVariable::terminate()");
        if new_status == Status::Invalid {
            self.matching_result = None;
        }
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}
