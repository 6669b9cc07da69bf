//! Blackboard Error Hierarchy
//!
//! Only configuration loading and watch registration can fail. Store access and the
//! variable behaviours express every outcome through return values and [`Status`].
//!
//! [`Status`]: crate::Status

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration source could not be read or deserialized
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration loaded but failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Watch registration was rejected
    #[error(transparent)]
    Watch(#[from] WatchError),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WatchError {
    /// A watch must track at least one path
    #[error("Watch on topic {topic:?} has no attributes to track")]
    EmptyAttributes { topic: Option<String> },

    /// Topic names are unique among active watches
    #[error("Topic {0} is already watched")]
    DuplicateTopic(String),

    /// Supplied topic name is empty or shadows the root blackboard topic
    #[error("Topic name {0:?} is not usable")]
    InvalidTopic(String),
}
