// -
// Path addressing

/// Separators accepted between nested path segments
pub(crate) const PATH_SEPARATORS: &[char] = &['/', '.'];

/// Separator used when listing nested paths
pub(crate) const LISTING_SEPARATOR: &str = "/";

/// Fields whose names start with this marker are internal and never listed
pub(crate) const PRIVATE_FIELD_MARKER: char = '_';

// -
// Rendering

/// Title line of the full blackboard rendering
pub(crate) const BLACKBOARD_TITLE: &str = "Blackboard";

/// Title line of a watch rendering
pub(crate) const SUB_BLACKBOARD_TITLE: &str = "SubBlackboard";

/// Rendering of an absent value
pub(crate) const NULL_PLACEHOLDER: &str = "-";

pub(crate) const KEY_INDENT: &str = "  ";
pub(crate) const CONTINUATION_INDENT: &str = "    ";

// -
// Watch topics

pub(crate) const DEFAULT_ROOT_TOPIC: &str = "blackboard";
pub(crate) const DEFAULT_TOPIC_PREFIX: &str = "sub_blackboard_";
pub(crate) const DEFAULT_NAMESPACE: &str = "/blackboard_watcher";
pub(crate) const DEFAULT_CHANNEL_CAPACITY: usize = 2;
