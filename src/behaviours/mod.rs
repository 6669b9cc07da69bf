//! Blackboard behaviours ticked by a host control loop.
//!
//! Each behaviour follows the host lifecycle: `initialise` when it becomes active,
//! `update` every tick while active, `terminate` when it leaves the running state
//! or is invalidated. Waiting never blocks: a behaviour that is not done yet
//! returns [`Status::Running`] and is ticked again.

mod check;
mod clear;
pub mod comparison;
mod matcher;
mod runner;
mod set;
mod wait;

pub use check::*;
pub use clear::*;
pub use comparison::Comparator;
pub use runner::*;
pub use set::*;
pub use wait::*;


use std::fmt;

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
    Running,
    /// Forced reset; never returned by `update`
    Invalid,
}

impl fmt::Display for Status {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
            Status::Running => "RUNNING",
            Status::Invalid => "INVALID",
        };
        f.write_str(s)
    }
}

/// When a memoized decision is discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClearingPolicy {
    /// Every time the behaviour is initialised
    OnInitialise,
    /// As soon as the decision is a success: successes are never memoized
    OnSuccess,
}

pub trait Behaviour: Send {
    fn name(&self) -> &str;

    /// Called on the first tick after not being active
    fn initialise(&mut self) {}

    /// Called every tick while active
    fn update(&mut self) -> Status;

    /// Called when leaving the running state, or when invalidated
    fn terminate(
        &mut self,
        _new_status: Status,
    ) {
    }

    /// Human readable account of the last update
    fn feedback_message(&self) -> &str {
        ""
    }
}
