use std::sync::Arc;

use tracing::debug;

use super::matcher::Evaluation;
use super::matcher::VariableMatcher;
use super::Behaviour;
use super::ClearingPolicy;
use super::Status;
use crate::Blackboard;
use crate::Value;

/// Like [`CheckVariable`], but keeps running until the variable appears and matches.
///
/// Never fails. Only a success is memoized; running is re-evaluated every tick.
///
/// [`CheckVariable`]: super::CheckVariable
#[derive(Debug)]
pub struct WaitForVariable {
    name: String,
    matcher: VariableMatcher,
    clearing_policy: ClearingPolicy,
    matching_result: Option<Status>,
    feedback_message: String,
}

impl WaitForVariable {
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

    pub fn expecting(
        mut self,
        expected: impl Into<Value>,
    ) -> Self {
        self.matcher.set_expected_value(expected.into());
        self
    }

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

    pub fn matching_result(&self) -> Option<Status> {
        self.matching_result
    }
}

impl Behaviour for WaitForVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        debug!(behaviour = %self.name, "WaitForVariable::initialise()");
        if self.clearing_policy == ClearingPolicy::OnInitialise {
            self.matching_result = None;
        }
    }

    fn update(&mut self) -> Status {
        debug!(behaviour = %self.name, "WaitForVariable::update()");
        if let Some(result) = self.matching_result {
            return result;
        }

        let (evaluation, feedback) = self.matcher.evaluate();
        self.feedback_message = feedback;
        let result = match evaluation {
            Evaluation::Exists | Evaluation::Matched => Status::Success,
            Evaluation::Missing | Evaluation::Mismatched => Status::Running,
        };

        if result == Status::Success && self.clearing_policy == ClearingPolicy::OnInitialise {
            self.matching_result = Some(result);
        }
        result
    }

    fn terminate(
        &mut self,
        new_status: Status,
    ) {
        debug!(behaviour = %self.name, to = %new_status, "WaitForVariable::terminate()");
        if new_status == Status::Invalid {
            self.matching_result = None;
        }
    }

    fn feedback_message(&self) -> &str {
        &self.feedback_message
    }
}
