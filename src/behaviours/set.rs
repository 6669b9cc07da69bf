use tracing::debug;

use super::Behaviour;
use super::Status;
use crate::Blackboard;
use crate::Value;

/// Writes a fixed value when initialised, overwriting any previous one. Always succeeds.
#[derive(Debug)]
pub struct SetVariable {
    name: String,
    blackboard: Blackboard,
    variable_name: String,
    variable_value: Value,
}

impl SetVariable {
    pub fn new(
        name: impl Into<String>,
        blackboard: Blackboard,
        variable_name: impl Into<String>,
        variable_value: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            blackboard,
            variable_name: variable_name.into(),
            variable_value: variable_value.into(),
        }
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }

    pub fn variable_value(&self) -> &Value {
        &self.variable_value
    }
}

impl Behaviour for SetVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        debug!(behaviour = %self.name, variable = %self.variable_name, "SetVariable::initialise()");
        self.blackboard
            .set(&self.variable_name, self.variable_value.clone(), true);
    }

    fn update(&mut self) -> Status {
        Status::Success
    }
}
