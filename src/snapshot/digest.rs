use std::collections::BTreeMap;
use std::fmt;

use super::canonical::canonical_bytes;
use super::canonical::canonical_subset_bytes;
use crate::Value;

/// Named values captured from the blackboard at one poll
pub type ValueSubset = BTreeMap<String, Value>;

/// Structural fingerprint of a value subset.
///
/// Equal digests mean the originating values were structurally equal. Digests are
/// recomputed on demand and never persisted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    pub fn of(subset: &ValueSubset) -> Self {
        Self(*blake3::hash(&canonical_subset_bytes(subset)).as_bytes())
    }

    pub fn of_value(value: &Value) -> Self {
        Self(*blake3::hash(&canonical_bytes(value)).as_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

/// Digests `current` and reports whether it differs from `previous`.
///
/// A missing previous digest (never observed) always counts as a change.
pub fn changed(
    previous: Option<&Digest>,
    current: &ValueSubset,
) -> (bool, Digest) {
    let digest = Digest::of(current);
    (previous != Some(&digest), digest)
}
