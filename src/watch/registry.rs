use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::debug;
use tracing::trace;

use super::ChannelFactory;
use super::PublishChannel;
use crate::blackboard::render_text;
use crate::constants::BLACKBOARD_TITLE;
use crate::constants::SUB_BLACKBOARD_TITLE;
use crate::discovery::nested_keys;
use crate::snapshot::ChangeDetector;
use crate::snapshot::Digest;
use crate::snapshot::ValueSubset;
use crate::Blackboard;
use crate::Result;
use crate::WatchConfig;
use crate::WatchError;

/// A named subset of blackboard paths with its own change cache and channel.
///
/// Watches only read the blackboard; polling can never perturb behaviour state.
pub(crate) struct Watch {
    topic: String,
    attrs: Vec<String>,
    cached_values: ValueSubset,
    detector: ChangeDetector,
    audience: Audience,
    channel: Arc<dyn PublishChannel>,
}

impl Watch {
    fn new(
        topic: String,
        attrs: Vec<String>,
        channel: Arc<dyn PublishChannel>,
    ) -> Self {
        Self {
            topic,
            attrs,
            cached_values: ValueSubset::new(),
            detector: ChangeDetector::default(),
            audience: Audience::default(),
            channel,
        }
    }

    pub(crate) fn attrs(&self) -> &[String] {
        &self.attrs
    }

    /// Values resolved at the last poll. Paths that did not resolve are absent.
    pub(crate) fn cached_values(&self) -> &ValueSubset {
        &self.cached_values
    }

    fn render_text(&self) -> String {
        render_text(SUB_BLACKBOARD_TITLE, &self.cached_values)
    }

    /// Re-resolves every path and publishes when the subset changed and someone listens.
    ///
    /// The first poll that finds subscribers after a poll that found none also
    /// publishes, so a change observed while nobody listened is not lost.
    /// Returns whether a rendering was published.
    fn poll(
        &mut self,
        blackboard: &Blackboard,
    ) -> bool {
        self.cached_values = self
            .attrs
            .iter()
            .filter_map(|attr| blackboard.get(attr).map(|value| (attr.clone(), value)))
            .collect();

        let is_changed = self.detector.observe(&self.cached_values);
        if self.audience.should_publish(is_changed, self.channel.subscriber_count()) {
            self.channel.send(self.render_text());
            trace!(topic = %self.topic, "Watch published");
            return true;
        }
        false
    }
}

impl fmt::Debug for Watch {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Watch")
            .field("topic", &self.topic)
            .field("attrs", &self.attrs)
            .field("digest", &self.detector.last())
            .finish_non_exhaustive()
    }
}

/// Whether anyone listened at the previous poll
#[derive(Debug, Default)]
struct Audience {
    listened: bool,
}

impl Audience {
    /// Publishes on a change, or on the first poll with subscribers after one without.
    fn should_publish(
        &mut self,
        is_changed: bool,
        subscriber_count: usize,
    ) -> bool {
        let listening = subscriber_count > 0;
        let joined = listening && !self.listened;
        self.listened = listening;
        listening && (is_changed || joined)
    }
}

/// The whole blackboard, published on the root topic
struct RootWatch {
    detector: ChangeDetector,
    audience: Audience,
    channel: Arc<dyn PublishChannel>,
}

/// Dynamic collection of watches over one blackboard.
///
/// Registration may come from any thread. Watches live in a `DashMap`, so a poll
/// holds a shard's lock while polling the watches in it and a concurrent
/// `unregister` waits for that shard: a watch is never observed half destroyed.
pub struct WatchRegistry {
    blackboard: Blackboard,
    factory: Arc<dyn ChannelFactory>,
    root: Mutex<RootWatch>,
    watches: DashMap<String, Watch>,
    /// Sequence number of the next generated topic name
    next_id: AtomicU64,
    config: WatchConfig,
}

impl WatchRegistry {
    pub fn new(
        blackboard: Blackboard,
        factory: Arc<dyn ChannelFactory>,
        config: WatchConfig,
    ) -> Self {
        let root = RootWatch {
            detector: ChangeDetector::default(),
            audience: Audience::default(),
            channel: factory.advertise(&config.root_topic),
        };

        Self {
            blackboard,
            factory,
            root: Mutex::new(root),
            watches: DashMap::new(),
            next_id: AtomicU64::new(0),
            config,
        }
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Every addressable path on the blackboard
    pub fn nested_keys(&self) -> Vec<String> {
        nested_keys(&self.blackboard)
    }

    /// Creates a watch over `attrs`.
    ///
    /// Without a topic name one is generated from the configured prefix and a
    /// sequence number, skipping names already in use. Nothing is registered when
    /// the request is rejected.
    pub fn register(
        &self,
        attrs: Vec<String>,
        topic: Option<String>,
    ) -> Result<String> {
        if attrs.is_empty() {
            return Err(WatchError::EmptyAttributes { topic }.into());
        }

        let topic = match topic {
            Some(topic) => {
                if topic.is_empty() || topic == self.config.root_topic {
                    return Err(WatchError::InvalidTopic(topic).into());
                }
                match self.watches.entry(topic.clone()) {
                    Entry::Occupied(_) => return Err(WatchError::DuplicateTopic(topic).into()),
                    Entry::Vacant(slot) => {
                        let channel = self.factory.advertise(&topic);
                        slot.insert(Watch::new(topic.clone(), attrs, channel));
                    }
                }
                topic
            }
            None => loop {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let candidate = format!("{}{}", self.config.topic_prefix, id);
                if candidate == self.config.root_topic {
                    continue;
                }
                if let Entry::Vacant(slot) = self.watches.entry(candidate.clone()) {
                    let channel = self.factory.advertise(&candidate);
                    slot.insert(Watch::new(candidate.clone(), attrs, channel));
                    break candidate;
                }
            },
        };

        debug!(topic = %topic, "Watch registered");
        Ok(topic)
    }

    /// Destroys a watch and withdraws its channel. Returns whether it existed.
    pub fn unregister(
        &self,
        topic: &str,
    ) -> bool {
        match self.watches.remove(topic) {
            Some((_, watch)) => {
                watch.channel.unregister();
                debug!(topic, "Watch unregistered");
                true
            }
            None => false,
        }
    }

    /// Polls one watch. Returns whether it published.
    pub fn poll_one(
        &self,
        topic: &str,
    ) -> bool {
        self.watches
            .get_mut(topic)
            .map(|mut watch| watch.poll(&self.blackboard))
            .unwrap_or(false)
    }

    /// Polls the whole blackboard on the root topic, then every watch.
    ///
    /// Typically called once at the end of every tick. Returns the number of
    /// renderings published.
    pub fn poll_all(&self) -> usize {
        let mut published = 0;

        {
            let mut root = self.root.lock();
            let snapshot = self.blackboard.snapshot();
            let is_changed = root.detector.observe(&snapshot);
            let subscriber_count = root.channel.subscriber_count();
            if root.audience.should_publish(is_changed, subscriber_count) {
                root.channel.send(render_text(BLACKBOARD_TITLE, &snapshot));
                trace!(topic = %self.config.root_topic, "Blackboard published");
                published += 1;
            }
        }

        for mut watch in self.watches.iter_mut() {
            if watch.poll(&self.blackboard) {
                published += 1;
            }
        }

        published
    }

    /// Active watch topics, sorted
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.watches.iter().map(|w| w.key().clone()).collect();
        topics.sort();
        topics
    }

    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    pub fn watched_attrs(
        &self,
        topic: &str,
    ) -> Option<Vec<String>> {
        self.watches.get(topic).map(|w| w.attrs().to_vec())
    }

    pub fn cached_values(
        &self,
        topic: &str,
    ) -> Option<ValueSubset> {
        self.watches.get(topic).map(|w| w.cached_values().clone())
    }

    /// Digest from the watch's last poll; `None` before its first poll
    pub fn digest(
        &self,
        topic: &str,
    ) -> Option<Digest> {
        self.watches.get(topic).and_then(|w| w.detector.last().copied())
    }
}

impl fmt::Debug for WatchRegistry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("WatchRegistry")
            .field("watches", &self.watches)
            .field("next_id", &self.next_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
