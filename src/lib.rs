//! Shared blackboard variables for tick-driven behaviour trees.
//!
//! - [`Blackboard`]: the one shared variable store, handed by handle to every consumer
//! - [`Digest`]: structural fingerprint used to detect that a subset changed
//! - [`nested_keys`]: listing of every addressable variable path
//! - [`WatchRegistry`]: named subset watches, republished only when they change
//! - [`CheckVariable`], [`WaitForVariable`], [`SetVariable`], [`ClearVariable`]:
//!   behaviours built on the blackboard

mod behaviours;
mod blackboard;
mod config;
mod constants;
mod discovery;
mod errors;
mod snapshot;
mod watch;

pub use behaviours::*;
pub use blackboard::*;
pub use config::*;
pub use discovery::*;
pub use errors::*;
pub use snapshot::*;
pub use watch::*;

//-----------------------------------------------------------
// Test utils

#[cfg(test)]
pub mod test_utils;
