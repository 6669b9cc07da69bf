//! Watch mechanism for monitoring blackboard subsets
//!
//! Monitoring cost stays off the behaviours' hot path: writes to the blackboard
//! notify nobody. Instead the host polls once per tick and each watch decides for
//! itself whether its subset moved.
//!
//! ```text
//! tick loop                         registration service
//!   behaviours read/write             spawn_watcher / destroy_watcher
//!   │                                 │
//!   ▼                                 ▼
//! poll_all() ──► root topic     ┌──────────────────────┐
//!   │                           │ WatchRegistry        │
//!   └──────────────────────────►│ DashMap<topic,Watch> │
//!                               └──────────┬───────────┘
//!                                          │ resolve paths, digest, compare
//!                                          ▼
//!                               PublishChannel::send(rendering)
//!                               only if changed and subscribed
//! ```
//!
//! # Usage Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use blackboard_watch::{Blackboard, BroadcastHub, WatchConfig, WatchRegistry};
//!
//! let blackboard = Blackboard::new();
//! let hub = BroadcastHub::new(4);
//! let registry = WatchRegistry::new(blackboard.clone(), Arc::new(hub.clone()), WatchConfig::default());
//!
//! let topic = registry.register(vec!["speed".into()], None).unwrap();
//! let mut subscription = hub.subscribe(&topic).unwrap();
//!
//! blackboard.set("speed", 1, true);
//! assert_eq!(registry.poll_all(), 1);
//! assert_eq!(registry.poll_all(), 0);
//! assert!(subscription.receiver.try_recv().unwrap().contains("speed : 1"));
//! ```

mod channel;
mod registry;
mod service;

pub use channel::*;
pub use registry::*;
pub use service::*;
