use tracing::debug;

use super::Behaviour;
use super::Status;
use crate::Blackboard;

/// Removes a variable when initialised. Always succeeds.
#[derive(Debug)]
pub struct ClearVariable {
    name: String,
    blackboard: Blackboard,
    variable_name: String,
}

impl ClearVariable {
    pub fn new(
        name: impl Into<String>,
        blackboard: Blackboard,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            blackboard,
            variable_name: variable_name.into(),
        }
    }

    pub fn variable_name(&self) -> &str {
        &self.variable_name
    }
}

impl Behaviour for ClearVariable {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialise(&mut self) {
        debug!(behaviour = %self.name, variable = %self.variable_name, "ClearVariable::initialise()");
        self.blackboard.delete(&self.variable_name);
    }

    fn update(&mut self) -> Status {
        Status::Success
    }
}
