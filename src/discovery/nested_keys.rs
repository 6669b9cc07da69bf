use tracing::trace;

use crate::constants::LISTING_SEPARATOR;
use crate::constants::PRIVATE_FIELD_MARKER;
use crate::Blackboard;
use crate::Child;
use crate::Value;

/// Lists every addressable path on the blackboard.
///
/// Top-level names come in sorted order, each followed by its expansion. Leaf
/// values are terminal. Private fields, behavioural members and constant-style
/// (all-uppercase) names are skipped. The listing is rebuilt on every call since
/// objects may have changed in between.
pub fn nested_keys(blackboard: &Blackboard) -> Vec<String> {
    let mut keys = Vec::new();
    let mut ancestors = Vec::new();

    for (name, value) in blackboard.snapshot() {
        keys.push(name.clone());
        expand(&value, &name, &mut ancestors, &mut keys);
    }

    trace!(count = keys.len(), "Listed nested keys");
    keys
}

fn expand(
    value: &Value,
    prefix: &str,
    ancestors: &mut Vec<usize>,
    keys: &mut Vec<String>,
) {
    if value.is_leaf() {
        return;
    }

    // An object already on the current path closes a cycle
    let identity = value.identity();
    if let Some(identity) = identity {
        if ancestors.contains(&identity) {
            return;
        }
        ancestors.push(identity);
    }

    let mut children = value.children();
    children.sort_by(|a, b| a.name().cmp(b.name()));

    for child in children {
        let Child::Field(name, child_value) = child else {
            continue;
        };
        if is_hidden(&name) {
            continue;
        }

        let path = format!("{prefix}{LISTING_SEPARATOR}{name}");
        keys.push(path.clone());
        expand(&child_value, &path, ancestors, keys);
    }

    if identity.is_some() {
        ancestors.pop();
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with(PRIVATE_FIELD_MARKER) || is_constant_style(name)
}

/// All cased characters uppercase, with at least one cased character
pub(super) fn is_constant_style(name: &str) -> bool {
    let mut cased = false;
    for c in name.chars() {
        if c.is_lowercase() {
            return false;
        }
        cased |= c.is_uppercase();
    }
    cased
}
