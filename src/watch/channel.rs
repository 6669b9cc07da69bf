//! Publish channels carrying rendered snapshots to subscribers.

use std::sync::Arc;
use std::sync::Weak;

use dashmap::DashMap;
#[cfg(test)]
use mockall::automock;
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::trace;

/// Outbound channel of one topic
#[cfg_attr(test, automock)]
pub trait PublishChannel: Send + Sync {
    /// Delivers a rendering to the current subscribers
    fn send(
        &self,
        text: String,
    );

    fn subscriber_count(&self) -> usize;

    /// Withdraws the topic. Called once when its watch is destroyed.
    fn unregister(&self);
}

/// Creates the channel behind each topic
#[cfg_attr(test, automock)]
pub trait ChannelFactory: Send + Sync {
    fn advertise(
        &self,
        topic: &str,
    ) -> Arc<dyn PublishChannel>;
}

/// A receiver on a latched topic
#[derive(Debug)]
pub struct Subscription {
    /// Last rendering published before subscribing, if any
    pub latched: Option<String>,
    /// Renderings published from now on
    pub receiver: broadcast::Receiver<String>,
}

/// In-process [`ChannelFactory`] backed by `tokio::sync::broadcast`.
///
/// Topics are latched: the last rendering is kept and handed to late subscribers,
/// so a monitor attaching to a quiet blackboard still sees its current state.
#[derive(Debug, Clone)]
pub struct BroadcastHub {
    inner: Arc<HubInner>,
}

#[derive(Debug)]
struct HubInner {
    channels: DashMap<String, Arc<BroadcastChannel>>,
    capacity: usize,
}

impl BroadcastHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(HubInner {
                channels: DashMap::new(),
                capacity: capacity.max(1),
            }),
        }
    }

    /// Subscribes to an advertised topic. `None` if nothing publishes on it.
    pub fn subscribe(
        &self,
        topic: &str,
    ) -> Option<Subscription> {
        self.inner.channels.get(topic).map(|channel| channel.subscribe())
    }

    /// Currently advertised topics, sorted
    pub fn topics(&self) -> Vec<String> {
        let mut topics: Vec<String> = self.inner.channels.iter().map(|c| c.key().clone()).collect();
        topics.sort();
        topics
    }
}

impl ChannelFactory for BroadcastHub {
    fn advertise(
        &self,
        topic: &str,
    ) -> Arc<dyn PublishChannel> {
        let (sender, _) = broadcast::channel(self.inner.capacity);
        let channel = Arc::new(BroadcastChannel {
            topic: topic.to_string(),
            sender,
            latched: Mutex::new(None),
            hub: Arc::downgrade(&self.inner),
        });

        self.inner.channels.insert(topic.to_string(), Arc::clone(&channel));
        trace!(topic, "Topic advertised");
        channel
    }
}

#[derive(Debug)]
struct BroadcastChannel {
    topic: String,
    sender: broadcast::Sender<String>,
    latched: Mutex<Option<String>>,
    hub: Weak<HubInner>,
}

impl BroadcastChannel {
    fn subscribe(&self) -> Subscription {
        // Latch and receiver are taken together so no rendering is seen twice or missed
        let latched = self.latched.lock();
        Subscription {
            latched: latched.clone(),
            receiver: self.sender.subscribe(),
        }
    }
}

impl PublishChannel for BroadcastChannel {
    fn send(
        &self,
        text: String,
    ) {
        let mut latched = self.latched.lock();
        // No receivers is not an error: the rendering stays latched
        let _ = self.sender.send(text.clone());
        *latched = Some(text);
    }

    fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn unregister(&self) {
        if let Some(hub) = self.hub.upgrade() {
            hub.channels
                .remove_if(&self.topic, |_, channel| std::ptr::eq(Arc::as_ptr(channel), self));
            trace!(topic = %self.topic, "Topic withdrawn");
        }
    }
}
