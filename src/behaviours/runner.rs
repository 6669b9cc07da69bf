use tracing::debug;

use super::Behaviour;
use super::Status;

/// Drives one behaviour through the host lifecycle.
///
/// Hosts with their own tree engine call the [`Behaviour`] methods directly; this
/// runner covers single behaviours ticked from a plain loop.
#[derive(Debug)]
pub struct BehaviourRunner<B> {
    behaviour: B,
    status: Status,
}

impl<B: Behaviour> BehaviourRunner<B> {
    pub fn new(behaviour: B) -> Self {
        Self {
            behaviour,
            status: Status::Invalid,
        }
    }

    /// Initialises if not already running, updates, and terminates on a final status.
    pub fn tick(&mut self) -> Status {
        if self.status != Status::Running {
            self.behaviour.initialise();
        }

        let status = self.behaviour.update();
        if status != Status::Running {
            self.behaviour.terminate(status);
        }

        debug!(
            behaviour = self.behaviour.name(),
            from = %self.status,
            to = %status,
            "Ticked"
        );
        self.status = status;
        status
    }

    /// Forces the behaviour out of its current state, typically to `Invalid`.
    pub fn stop(
        &mut self,
        new_status: Status,
    ) {
        if self.status != new_status {
            self.behaviour.terminate(new_status);
            self.status = new_status;
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn behaviour(&self) -> &B {
        &self.behaviour
    }

    pub fn behaviour_mut(&mut self) -> &mut B {
        &mut self.behaviour
    }
}
