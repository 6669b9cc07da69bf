//! Entry points for an external watcher RPC layer.
//!
//! The transport is not defined here. A transport decodes a [`WatcherRequest`],
//! passes it to [`handle_request`] and encodes the [`WatcherResponse`].

use std::sync::Arc;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;
use tracing::warn;

use super::WatchRegistry;

#[cfg_attr(test, automock)]
pub trait WatcherService: Send + Sync {
    /// Every addressable blackboard path
    fn list_variables(&self) -> Vec<String>;

    /// Starts watching `variables`. Returns the absolute topic name, or `None`
    /// when the watch was not created.
    fn spawn_watcher(
        &self,
        variables: Vec<String>,
    ) -> Option<String>;

    /// Stops a watch by absolute or relative topic name
    fn destroy_watcher(
        &self,
        topic_name: &str,
    ) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatcherRequest {
    ListVariables,
    SpawnWatcher { variables: Vec<String> },
    DestroyWatcher { topic_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatcherResponse {
    Variables(Vec<String>),
    Spawned(Option<String>),
    Destroyed(bool),
}

pub fn handle_request(
    service: &dyn WatcherService,
    request: WatcherRequest,
) -> WatcherResponse {
    match request {
        WatcherRequest::ListVariables => WatcherResponse::Variables(service.list_variables()),
        WatcherRequest::SpawnWatcher { variables } => {
            WatcherResponse::Spawned(service.spawn_watcher(variables))
        }
        WatcherRequest::DestroyWatcher { topic_name } => {
            WatcherResponse::Destroyed(service.destroy_watcher(&topic_name))
        }
    }
}

/// [`WatcherService`] backed by a [`WatchRegistry`]
#[derive(Debug, Clone)]
pub struct BlackboardWatcherService {
    registry: Arc<WatchRegistry>,
}

impl BlackboardWatcherService {
    pub fn new(registry: Arc<WatchRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<WatchRegistry> {
        &self.registry
    }
}

impl WatcherService for BlackboardWatcherService {
    fn list_variables(&self) -> Vec<String> {
        self.registry.nested_keys()
    }

    fn spawn_watcher(
        &self,
        variables: Vec<String>,
    ) -> Option<String> {
        match self.registry.register(variables, None) {
            Ok(topic) => {
                let absolute = self.registry.config().absolute_topic(&topic);
                debug!(topic = %absolute, "Watcher spawned");
                Some(absolute)
            }
            Err(e) => {
                warn!("Watcher not spawned: {}", e);
                None
            }
        }
    }

    fn destroy_watcher(
        &self,
        topic_name: &str,
    ) -> bool {
        let topic = self.registry.config().relative_topic(topic_name);
        self.registry.unregister(topic)
    }
}
