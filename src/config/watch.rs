use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

use crate::constants::DEFAULT_CHANNEL_CAPACITY;
use crate::constants::DEFAULT_NAMESPACE;
use crate::constants::DEFAULT_ROOT_TOPIC;
use crate::constants::DEFAULT_TOPIC_PREFIX;
use crate::Error;
use crate::Result;

/// Watch registry configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WatchConfig {
    /// Prefix of the absolute topic names handed back to watcher clients
    ///
    /// **Default**: `/blackboard_watcher`
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Topic on which the full blackboard is published
    ///
    /// **Default**: `blackboard`
    #[serde(default = "default_root_topic")]
    pub root_topic: String,

    /// Prefix of generated watch topic names, followed by a sequence number
    ///
    /// **Default**: `sub_blackboard_`
    #[serde(default = "default_topic_prefix")]
    pub topic_prefix: String,

    /// Buffered messages per publish channel before slow subscribers lag
    ///
    /// Renderings are latched, so a lagging subscriber can still pick up the
    /// latest one by re-subscribing.
    ///
    /// **Default**: 2
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            root_topic: default_root_topic(),
            topic_prefix: default_topic_prefix(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl WatchConfig {
    /// Validates watch configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.root_topic.is_empty() {
            return Err(Error::InvalidConfig("watch.root_topic must not be empty".into()));
        }

        if self.topic_prefix.is_empty() {
            return Err(Error::InvalidConfig("watch.topic_prefix must not be empty".into()));
        }

        if self.channel_capacity == 0 {
            return Err(Error::InvalidConfig(
                "watch.channel_capacity must be greater than 0".into(),
            ));
        }

        if self.channel_capacity > 1000 {
            warn!(
                "watch.channel_capacity ({}) is very large; every watch buffers that many renderings",
                self.channel_capacity
            );
        }

        if self.namespace.ends_with('/') {
            return Err(Error::InvalidConfig(format!(
                "watch.namespace {:?} must not end with '/'",
                self.namespace
            )));
        }

        Ok(())
    }

    /// Topic name as seen by watcher clients
    pub fn absolute_topic(
        &self,
        topic: &str,
    ) -> String {
        format!("{}/{}", self.namespace, topic)
    }

    /// Strips the namespace from an absolute topic name, if present
    pub fn relative_topic<'a>(
        &self,
        topic: &'a str,
    ) -> &'a str {
        topic
            .strip_prefix(self.namespace.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(topic)
    }
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_root_topic() -> String {
    DEFAULT_ROOT_TOPIC.to_string()
}

fn default_topic_prefix() -> String {
    DEFAULT_TOPIC_PREFIX.to_string()
}

const fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}
